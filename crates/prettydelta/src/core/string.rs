use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

const COLOR_SPACES: [(&str, ColorSpace); 2] = [
    // Longer prefix first, since `xyz` also is a prefix of `xyz-d65`.
    ("xyz-d65", ColorSpace::Xyz),
    ("xyz", ColorSpace::Xyz),
];

/// Parse a functional color format. This function recognizes the `rgb()`,
/// `lab()`, and `color()` functions. The color space for the latter must be
/// `xyz` or `xyz-d65`. Coordinates must be space-separated, finite, and
/// unitless, i.e., without `%` or `deg`.
fn parse_functional(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    use ColorSpace::*;

    // Munge function name
    let (space, rest) = s
        .strip_prefix("rgb")
        .map(|r| (Some(Rgb), r))
        .or_else(|| s.strip_prefix("lab").map(|r| (Some(Lab), r)))
        .or_else(|| s.strip_prefix("color").map(|r| (None, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let rest = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    let (space, body) = if let Some(s) = space {
        (s, rest) // Pass through
    } else {
        // Munge color space, which must be followed by white space
        let rest = rest.trim_start();
        COLOR_SPACES
            .iter()
            .filter_map(|&(p, s)| rest.strip_prefix(p).map(|r| (s, r)))
            .find(|&(_, r)| r.is_empty() || r.starts_with(char::is_whitespace))
            .ok_or(ColorFormatError::UnknownColorSpace)?
    };

    #[inline]
    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        let n: Float = s
            .ok_or(ColorFormatError::MissingCoordinate)?
            .parse()
            .map_err(|_| ColorFormatError::MalformedFloat)?;

        if n.is_finite() {
            Ok(n)
        } else {
            Err(ColorFormatError::MalformedFloat)
        }
    }

    // Munge coordinates. Iterator eats all leading or trailing white space.
    let mut iter = body.split_whitespace();
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok((space, [c1, c2, c3]))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes the hashed hexadecimal format with three or six
/// digits as well as the `rgb()`, `lab()`, and `color()` functions with
/// space-separated arguments. Before trying to parse either format, this
/// function trims leading and trailing white space and converts ASCII letters
/// to lowercase.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [c1, c2, c3] = parse_hashed(s)?;
        Ok((
            ColorSpace::Rgb,
            [Float::from(c1), Float::from(c2), Float::from(c3)],
        ))
    } else {
        parse_functional(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

const fn prefix(space: ColorSpace) -> &'static str {
    match space {
        ColorSpace::Rgb => "rgb(",
        ColorSpace::Xyz => "color(xyz ",
        ColorSpace::Lab => "lab(",
    }
}

/// Format the color as a string.
///
/// This function formats the given coordinates for the given color space with
/// the `rgb()`, `color()`, or `lab()` function and space-separated arguments.
/// It respects the formatter's precision, defaulting to 5 digits past the
/// decimal, but omits trailing zeros. Not-a-number coordinates are written as
/// `none`.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    f.write_str(prefix(space))?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            // Rounding avoids trailing zeros, for the most part. If the
            // fractional part is zero, we need an explicit precision of zero.
            let c = (coordinate * factor).round() / factor;
            if c == c.trunc() {
                f.write_fmt(format_args!("{:.0}", c))?;
            } else {
                f.write_fmt(format_args!("{}", c))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_functional, parse_hashed, ColorFormatError};
    use crate::ColorSpace::*;
    use crate::Float;

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩"),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        let result = parse_hashed("#0g0");
        assert!(
            matches!(result, Err(ColorFormatError::MalformedHex)),
            "{:?} should be malformed",
            result
        );

        assert_eq!(
            parse("  #FF8000 ")?,
            (Rgb, [255.0 as Float, 128.0, 0.0])
        );

        Ok(())
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(
            parse_functional("rgb(255 0 127.5)"),
            Ok((Rgb, [255.0, 0.0, 127.5]))
        );
        assert_eq!(
            parse_functional("lab(53.2 80.1 -67.2)"),
            Ok((Lab, [53.2, 80.1, -67.2]))
        );
        assert_eq!(
            parse_functional("color(xyz   1  1  1)"),
            Ok((Xyz, [1.0, 1.0, 1.0]))
        );
        assert_eq!(
            parse_functional("color  (  xyz-d65   95.047  100  108.883   )"),
            Ok((Xyz, [95.047, 100.0, 108.883]))
        );
        assert_eq!(
            parse_functional("hsl(1 1 1)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse_functional("lab 1 1 1)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            parse_functional("rgb(1 1 1"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_functional("color(srgb 1 1 1)"),
            Err(ColorFormatError::UnknownColorSpace)
        );
        assert_eq!(
            parse_functional("color(xyz-d50 1 1 1)"),
            Err(ColorFormatError::UnknownColorSpace)
        );
        assert_eq!(
            parse_functional("rgb(abc 1 1)"),
            Err(ColorFormatError::MalformedFloat)
        );
        assert_eq!(
            parse_functional("lab(50 inf 0)"),
            Err(ColorFormatError::MalformedFloat)
        );
        assert_eq!(
            parse_functional("lab(nan 0 0)"),
            Err(ColorFormatError::MalformedFloat)
        );
        assert_eq!(
            parse_functional("rgb(1)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_functional("lab(1 1 1 1)"),
            Err(ColorFormatError::TooManyCoordinates)
        );

        assert_eq!(
            parse("   LAB(  50   -1  2   )    "),
            Ok((Lab, [50.0, -1.0, 2.0]))
        );
    }

    #[test]
    fn test_format() {
        // Color as Display directly invokes format().
        use crate::Color;

        let clr = Color::rgb(177.25, 31.0, 36.123456);
        assert_eq!(clr.to_string(), "rgb(177.25 31 36.12346)");
        assert_eq!(format!("{:.2}", clr), "rgb(177.25 31 36.12)");
        assert_eq!(Color::lab(100, 0, 0).to_string(), "lab(100 0 0)");
        assert_eq!(
            Color::xyz(95.047, 100, 108.883).to_string(),
            "color(xyz 95.047 100 108.883)"
        );
        assert_eq!(
            Color::lab(50, Float::NAN, 0).to_string(),
            "lab(50 none 0)"
        );
    }
}
