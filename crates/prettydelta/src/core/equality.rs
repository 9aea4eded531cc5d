use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that a floating point number is within the given
/// tolerance of its expected value.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance or
/// either number is not-a-number.
#[cfg(test)]
macro_rules! assert_within {
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {
        let (actual, expected, tolerance) = ($actual, $expected, $tolerance);
        assert!(
            (actual - expected).abs() <= tolerance,
            "quantities differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            actual,
            expected
        );
    };
}

#[cfg(test)]
pub(crate) use assert_within;

/// Test macro for asserting that two coordinate arrays agree coordinate by
/// coordinate within the given tolerance.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance. Its message places the coordinates below each other at the
/// beginning of subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($cs1:expr, $cs2:expr, $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance) = ($cs1, $cs2, $tolerance);
        for index in 0..3 {
            assert!(
                (cs1[index] - cs2[index]).abs() <= tolerance,
                "color coordinates differ by more than {}:\n{:?}\n{:?}",
                tolerance,
                cs1,
                cs2
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}

/// Normalize coordinates for equality testing and hashing.
#[inline]
#[must_use = "function returns new bit strings and does not mutate original value"]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, c3] = *coordinates;
    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Determine the index of the first coordinate that is not finite.
#[inline]
pub(crate) fn find_non_finite(coordinates: &[Float; 3]) -> Option<usize> {
    coordinates.iter().position(|c| !c.is_finite())
}

#[cfg(test)]
mod test {
    use super::{find_non_finite, to_eq_bits, to_eq_coordinates};
    use crate::Float;

    #[test]
    fn test_to_eq_bits() {
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(1.0), to_eq_bits(1.0 + 1e-14));
        assert_ne!(to_eq_bits(1.0), to_eq_bits(1.001));
        assert_eq!(
            to_eq_coordinates(&[Float::NAN, -0.0, 42.0]),
            to_eq_coordinates(&[0.0, 0.0, 42.0])
        );
    }

    #[test]
    fn test_find_non_finite() {
        assert_eq!(find_non_finite(&[1.0, 2.0, 3.0]), None);
        assert_eq!(find_non_finite(&[1.0, Float::NAN, 3.0]), Some(1));
        assert_eq!(find_non_finite(&[1.0, 2.0, Float::NEG_INFINITY]), Some(2));
    }
}
