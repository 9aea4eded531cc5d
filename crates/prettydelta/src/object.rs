use core::str::FromStr;

use crate::core::{
    ciede2000, ciede2000_with, convert, format, from_24bit, hue_angle, parse, to_24bit,
    to_eq_coordinates, ColorSpace, ParametricFactors,
};
use crate::Float;

/// A color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
/// Color objects are immutable; conversion returns a new color.
///
/// # Color Coordinates
///
/// For RGB, the coordinates of in-gamut colors range `0..=255`. XYZ scales
/// the reference white to luminance Y = 100, and CIELAB has lightness L* in
/// `0..=100` with unbounded a* and b*. No coordinates are clamped upon
/// creation or conversion, except when explicitly converting to 24-bit
/// representation.
///
/// # Equality Testing and Hashing
///
/// Equal colors must have equal hashes. Hence this class prepares coordinates
/// for either operation by replacing not-a-numbers with positive zero,
/// rounding to drop the least significant digits, replacing negative zero
/// with positive zero, and converting the result to bits. Colors in different
/// color spaces are never equal, even if they represent the same color.
///
/// # Coordinate Access
///
/// Individual coordinates can be accessed by indexing a color object with
/// integers `0..=2`.
#[derive(Copy, Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// let red = Color::new(ColorSpace::Lab, [53.2, 80.1, 67.2]);
    /// assert_eq!(red.as_ref(), &[53.2_f64, 80.1_f64, 67.2_f64]);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::rgb(255, 147, 0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Rgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// RGB and CIELAB convert through XYZ. Converting to the same color space
    /// returns an equal color.
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// let white = Color::from_24bit(255, 255, 255).to(ColorSpace::Lab);
    /// assert!((white[0] - 100.0).abs() < 1e-3);
    /// assert!(white[1].abs() < 0.01 && white[2].abs() < 0.02);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    /// Determine the chroma and hue of this color in CIELAB.
    ///
    /// This method converts the color to CIELAB if necessary and returns the
    /// chroma `√(a*² + b*²)` as well as the hue angle in degrees `0..360`.
    /// Since achromatic colors have no meaningful hue, this method reports
    /// their hue as 0.
    ///
    /// ```
    /// # use prettydelta::Color;
    /// let (chroma, hue) = Color::lab(50, 0, -10).chroma_hue();
    /// assert_eq!(chroma, 10.0);
    /// assert!((hue - 270.0).abs() < 1e-9);
    /// ```
    pub fn chroma_hue(&self) -> (Float, Float) {
        let [_, a, b] = convert(self.space, ColorSpace::Lab, &self.coordinates);
        (a.hypot(b), hue_angle(a, b))
    }

    /// Determine the CIEDE2000 color difference between this and the other
    /// color.
    ///
    /// This method converts both colors to CIELAB if necessary. A difference
    /// of about 1 is just noticeable.
    ///
    /// ```
    /// # use prettydelta::Color;
    /// let red = Color::from_24bit(255, 0, 0);
    /// let dark_red = Color::from_24bit(250, 0, 0);
    /// let blue = Color::from_24bit(0, 0, 255);
    /// assert!(red.delta_e(&dark_red) < red.delta_e(&blue));
    /// ```
    pub fn delta_e(&self, other: &Self) -> Float {
        ciede2000(
            &convert(self.space, ColorSpace::Lab, &self.coordinates),
            &convert(other.space, ColorSpace::Lab, &other.coordinates),
        )
    }

    /// Determine the CIEDE2000 color difference between this and the other
    /// color for the given parametric factors.
    pub fn delta_e_with(&self, other: &Self, factors: &ParametricFactors) -> Float {
        ciede2000_with(
            &convert(self.space, ColorSpace::Lab, &self.coordinates),
            &convert(other.space, ColorSpace::Lab, &other.coordinates),
            factors,
        )
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to RGB before clamping each coordinate
    /// to `0..=255` and rounding it to the nearest `u8`.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&convert(self.space, ColorSpace::Rgb, &self.coordinates))
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal
    /// representation.
    ///
    /// ```
    /// # use prettydelta::Color;
    /// assert_eq!(Color::rgb(255, 147.2, -3).to_hex_format(), "#ff9300");
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Constructors accepting integer as well as floating point coordinates.
#[allow(clippy::impl_trait_in_params)]
impl Color {
    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates on the `0..=255` scale.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// let fire_brick = Color::rgb(177, 31, 36);
    /// assert_eq!(fire_brick.space(), ColorSpace::Rgb);
    /// ```
    pub fn rgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Rgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new XYZ color with the given coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// let white = Color::xyz(95.047, 100, 108.883);
    /// assert_eq!(white.space(), ColorSpace::Xyz);
    /// ```
    pub fn xyz(x: impl Into<Float>, y: impl Into<Float>, z: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Xyz, [x.into(), y.into(), z.into()])
    }

    /// Instantiate a new CIELAB color with the given coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// let gray = Color::lab(50, 0, 0);
    /// assert_eq!(gray.space(), ColorSpace::Lab);
    /// ```
    pub fn lab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lab, [l.into(), a.into(), b.into()])
    }
}

impl Default for Color {
    /// Create an instance of the default color.
    ///
    /// The chosen default is the origin in XYZ, i.e., pitch black.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// let default = Color::default();
    /// assert_eq!(default.space(), ColorSpace::Xyz);
    /// assert_eq!(default.as_ref(), &[0.0_f64, 0.0, 0.0]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes the *hashed notation* for 24-bit RGB colors with
    /// three or six hexadecimal digits, e.g., `#123` or `#cafe00`. The three
    /// digit version is a short form of the six digit version with every digit
    /// repeated. It also recognizes the `rgb()`, `lab()`, and `color()`
    /// functions with three space-separated, unitless, and finite coordinates.
    /// `rgb()` uses the `0..=255` scale. For `color()`, the color space right
    /// after the opening parenthesis must be `xyz` or `xyz-d65`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace};
    /// # use prettydelta::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::rgb(1, 20, 128));
    ///
    /// let gray: Color = str::parse("lab(50 0 0)")?;
    /// assert_eq!(gray, Color::lab(50, 0, 0));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates)| Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl core::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl core::hash::Hash for Color {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(&self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// ```
    /// # use prettydelta::{Color, Float};
    /// assert_eq!(Color::lab(Float::NAN, 0, 1e-12), Color::lab(0, -0.0, 0));
    /// assert_ne!(Color::lab(50, 0, 0), Color::xyz(50, 0, 0));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        to_eq_coordinates(&self.coordinates) == to_eq_coordinates(&other.coordinates)
    }
}

impl Eq for Color {}

impl core::fmt::Debug for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl core::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color with the `rgb()`, `color(xyz …)`, or
    /// `lab()` function and three space-separated coordinates. It respects the
    /// formatter's precision, defaulting to 5 digits past the decimal, and
    /// omits trailing zeros.
    ///
    /// ```
    /// # use prettydelta::{Color, ColorSpace::*};
    /// # use prettydelta::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let lime = Color::from_str("#a1d2ae")?;
    /// assert_eq!(format!("{}", lime), "rgb(161 210 174)");
    ///
    /// let red = Color::new(Lab, [53.24079, 80.09246, 67.2032]);
    /// assert_eq!(format!("{:.1}", red), "lab(53.2 80.1 67.2)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::core::assert_within;
    use crate::error::ColorFormatError;
    use crate::{ciede2000, rgb_to_lab, ColorSpace, Float, ParametricFactors};
    use std::collections::HashSet;

    #[test]
    fn test_conversion() {
        let red = Color::from_24bit(255, 0, 0);
        let lab = red.to(ColorSpace::Lab);
        assert_eq!(lab.space(), ColorSpace::Lab);
        assert_eq!(lab, Color::new(ColorSpace::Lab, rgb_to_lab(&[255_u8, 0, 0])));
        assert_eq!(red.to(ColorSpace::Rgb), red);
    }

    #[test]
    fn test_delta_e() {
        let c1 = Color::from_24bit(0x12, 0x34, 0x56);
        let c2 = Color::from_24bit(0x65, 0x43, 0x21);
        let expected = ciede2000(
            &rgb_to_lab(&[0x12_u8, 0x34, 0x56]),
            &rgb_to_lab(&[0x65_u8, 0x43, 0x21]),
        );
        assert_eq!(c1.delta_e(&c2), expected);
        assert_eq!(c1.delta_e(&c1), 0.0);

        // Colors in different spaces still compare in CIELAB.
        assert_within!(c1.to(ColorSpace::Xyz).delta_e(&c2), expected, 1e-9);
        assert_eq!(
            c1.delta_e_with(&c2, &ParametricFactors::default()),
            expected
        );
    }

    #[test]
    fn test_chroma_hue() {
        assert_eq!(Color::lab(50, 0, 0).chroma_hue(), (0.0, 0.0));
        assert_eq!(Color::lab(50, 3, 4).chroma_hue().0, 5.0);

        let (chroma, hue) = Color::lab(50, -1, -1).chroma_hue();
        assert_within!(chroma, (2.0 as Float).sqrt(), 1e-12);
        assert_within!(hue, 225.0, 1e-12);

        // Barely below the positive a* axis, the hue wraps around to 0.
        let (_, hue) = Color::new(ColorSpace::Lab, [50.0, 1.0, -1e-20]).chroma_hue();
        assert_eq!(hue, 0.0);
    }

    #[test]
    fn test_24bit() {
        assert_eq!(Color::rgb(255.4, 127.5, -10).to_24bit(), [255, 128, 0]);
        assert_eq!(Color::rgb(300, 0.49, 0).to_hex_format(), "#ff0000");
        assert_eq!(
            Color::from_24bit(0x12, 0xab, 0xef)
                .to(ColorSpace::Lab)
                .to_24bit(),
            [0x12, 0xab, 0xef]
        );
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!("#abc".parse::<Color>()?, Color::from_24bit(0xaa, 0xbb, 0xcc));
        assert_eq!(
            Color::try_from("color(xyz-d65 95.047 100 108.883)")?,
            Color::xyz(95.047, 100, 108.883)
        );
        assert_eq!(
            Color::try_from(String::from("lab(50 -1 2)"))?,
            Color::lab(50, -1, 2)
        );
        assert_eq!(
            Color::try_from("lab(50 -1)"),
            Err(ColorFormatError::MissingCoordinate)
        );

        let lab = Color::lab(53.24079, 80.09246, 67.20320);
        assert_eq!(lab.to_string().parse::<Color>()?, lab);
        Ok(())
    }

    #[test]
    fn test_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Color::lab(50, 0, -0.0));
        set.insert(Color::lab(50, 0, 0));
        set.insert(Color::lab(50.0 + 1e-12, Float::NAN, 0));
        set.insert(Color::xyz(50, 0, 0));
        assert_eq!(set.len(), 2);

        assert_eq!(Color::default(), Color::xyz(0, 0, 0));
        assert_eq!(Color::lab(1, 2, 3)[2], 3.0);
        assert_eq!(format!("{:?}", Color::lab(1, 2, 3)), "Color(Lab, [1, 2, 3])");
    }
}
