/// The enumeration of supported color spaces.
///
/// # RGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) with the conventional 8-bit
/// scale, i.e., in-gamut coordinates range from 0 to 255, inclusive. Unlike
/// 24-bit colors, coordinates are floating point numbers and hence may have
/// fractional parts. They also may be out of gamut, which this crate never
/// corrects.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// device-independent hub between RGB and CIELAB. This crate uses XYZ with the
/// [D65 standard illuminant](https://en.wikipedia.org/wiki/Standard_illuminant),
/// which is also used by sRGB, and scales coordinates so that the reference
/// white has luminance Y = 100.
///
/// # Lab
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) with lightness
/// L* in `0..=100` and two unbounded coordinates a* (green/red) and b*
/// (blue/yellow), which in practice stay within ±150. This crate computes
/// CIELAB relative to D65, not the print-oriented D50. CIEDE2000 color
/// differences are always computed on Lab coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Xyz,
    Lab,
}

impl ColorSpace {
    /// Determine whether this color space is RGB.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Rgb)
    }

    /// Determine whether this color space is XYZ.
    pub const fn is_xyz(&self) -> bool {
        matches!(*self, Self::Xyz)
    }

    /// Determine whether this color space is CIELAB.
    pub const fn is_lab(&self) -> bool {
        matches!(*self, Self::Lab)
    }

    /// Determine whether this color space is bounded.
    ///
    /// Only RGB has a gamut, with coordinates of in-gamut colors ranging
    /// `0..=255`. XYZ and CIELAB are unbounded.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb()
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match *self {
            Self::Rgb => "sRGB",
            Self::Xyz => "XYZ D65",
            Self::Lab => "CIELAB D65",
        };

        f.write_str(s)
    }
}
