//! Utility module with prettydelta's errors.

use crate::Float;

/// An erroneous color format.
///
/// The enumeration only has unit variants without associated state. The
/// attendant loss of information is rather limited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#` or
    /// `lab`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `lab 50 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `rgb(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is using an unknown color space. For example,
    /// `color(srgb 1 1 1)` uses a color space other than XYZ.
    UnknownColorSpace,

    /// A color format that is missing a coordinate. For example, `rgb(0)` is
    /// missing the second and third coordinate.
    MissingCoordinate,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format that has a malformed or non-finite floating point number
    /// as coordinate. For example, `lab(50 0..1 0)` has a malformed second
    /// coordinate and `lab(50 0 inf)` has a non-finite third coordinate.
    MalformedFloat,

    /// A color format with more than three coordinates. For example,
    /// `rgb(1 2 3 4)` has one coordinate too many.
    TooManyCoordinates,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `rgb()`, `lab()`, or `color()`",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => {
                f.write_str("color format should have known color space but does not")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedFloat => f.write_str(
                "color format coordinates should be finite floating point numbers but are not",
            ),
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl core::error::Error for ColorFormatError {}

// ====================================================================================================================

/// The operand of a binary operation on colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    First,
    Second,
}

impl Operand {
    /// Get this operand's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

/// A non-finite coordinate.
///
/// This error indicates that a color coordinate is either not-a-number or
/// infinite. It identifies the offending color by [`Operand`] and the
/// offending coordinate by index `0..=2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonFiniteError {
    operand: Operand,
    index: usize,
    value: Float,
}

impl NonFiniteError {
    /// Create a new non-finite error.
    pub const fn new(operand: Operand, index: usize, value: Float) -> Self {
        Self {
            operand,
            index,
            value,
        }
    }

    /// Get the operand with the non-finite coordinate.
    pub const fn operand(&self) -> Operand {
        self.operand
    }

    /// Get the index of the non-finite coordinate.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Get the non-finite value.
    pub const fn value(&self) -> Float {
        self.value
    }
}

impl core::fmt::Display for NonFiniteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "coordinate {} of {} color should be finite but is {}",
            self.index,
            self.operand.name(),
            self.value
        ))
    }
}

impl core::error::Error for NonFiniteError {}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, NonFiniteError, Operand};
    use crate::Float;

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorFormatError::TooManyCoordinates.to_string(),
            "color format should have 3 coordinates but has more"
        );
        assert_eq!(
            NonFiniteError::new(Operand::Second, 2, Float::INFINITY).to_string(),
            "coordinate 2 of second color should be finite but is inf"
        );
    }
}
