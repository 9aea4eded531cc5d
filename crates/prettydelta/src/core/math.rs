use crate::Float;

/// An extension trait for floating point numbers.
///
/// The trait pre-computes the rounding factor for equality comparisons, which
/// depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e2;
}

// ----------------------------------------------------------------------------------------------------------

/// 25 to the seventh power, the pivot of CIEDE2000's chroma weighting.
const TWENTY_FIVE_POW_7: Float = 6_103_515_625.0;

/// Compute `√(c⁷ / (c⁷ + 25⁷))`.
///
/// CIEDE2000 uses this weight twice, once for the G factor correcting a* near
/// the gray axis and once for the rotation term RC. For non-negative chroma,
/// the result is in `0..1`.
#[inline]
pub(crate) fn chroma_weight(chroma: Float) -> Float {
    let c7 = chroma.powi(7);
    if c7.is_infinite() {
        // Overflow, the limit is one.
        return 1.0;
    }
    (c7 / (c7 + TWENTY_FIVE_POW_7)).sqrt()
}

/// Compute the arithmetic mean of two numbers.
///
/// The numbers are halved before adding, so that the mean of two large
/// numbers does not overflow.
#[inline]
pub(crate) fn mean(n1: Float, n2: Float) -> Float {
    n1.mul_add(0.5, 0.5 * n2)
}

/// Compute the square root, clamping negative radicands to zero.
///
/// Sums of squares plus cross terms may dip ever so slightly below zero due to
/// rounding. Without the clamp, the result would be not-a-number. Actual
/// not-a-number radicands still propagate.
#[inline]
pub(crate) fn clamped_sqrt(radicand: Float) -> Float {
    if radicand < 0.0 {
        0.0
    } else {
        radicand.sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::{chroma_weight, clamped_sqrt, mean};

    #[test]
    fn test_chroma_weight() {
        assert_eq!(chroma_weight(0.0), 0.0);
        assert_eq!(chroma_weight(25.0), (0.5 as crate::Float).sqrt());
        assert!(chroma_weight(1e6) > 0.999, "weight of huge chroma should approach one");
        assert_eq!(chroma_weight(crate::Float::MAX), 1.0);
        assert!(chroma_weight(crate::Float::NAN).is_nan(), "not-a-number should propagate");
    }

    #[test]
    fn test_helpers() {
        assert_eq!(mean(2.0, 4.0), 3.0);
        assert_eq!(mean(4.0, 2.0), mean(2.0, 4.0));
        assert_eq!(clamped_sqrt(-1e-18), 0.0);
        assert_eq!(clamped_sqrt(16.0), 4.0);
        assert!(clamped_sqrt(crate::Float::NAN).is_nan(), "not-a-number should propagate");

        let max = crate::Float::MAX;
        assert_eq!(mean(max, max), max);
        assert_eq!(mean(max, -max), 0.0);
    }
}
