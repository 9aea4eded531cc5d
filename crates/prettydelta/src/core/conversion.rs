use super::ColorSpace;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
///
/// Since RGB coordinates use the 8-bit scale, this function only widens each
/// byte.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [Float::from(r), Float::from(g), Float::from(b)]
}

/// Convert the RGB coordinates to 24-bit representation.
///
/// This function clamps each coordinate to `0..=255` before rounding it to
/// the nearest integer. Not-a-number becomes zero.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn convert(value: Float) -> u8 {
        value.clamp(0.0, 255.0).round() as u8
    }

    [
        convert(coordinates[0]),
        convert(coordinates[1]),
        convert(coordinates[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = *matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// http://www.easyrgb.com/en/math.php

/// The threshold below which sRGB's gamma is linear.
const SRGB_LINEAR_THRESHOLD: Float = 0.04045;

/// The same threshold on the linear side.
const LINEAR_SRGB_THRESHOLD: Float = 0.0031308;

/// Convert one 8-bit gamma-corrected sRGB coordinate into a linear coordinate
/// on the 0–100 scale.
#[inline]
fn linearize(value: Float) -> Float {
    let value = value / 255.0;
    let linear = if value > SRGB_LINEAR_THRESHOLD {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    };

    100.0 * linear
}

/// Convert one linear coordinate on the 0–100 scale into an 8-bit
/// gamma-corrected sRGB coordinate.
#[inline]
fn delinearize(value: Float) -> Float {
    let value = value / 100.0;
    let encoded = if value > LINEAR_SRGB_THRESHOLD {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    } else {
        12.92 * value
    };

    255.0 * encoded
}

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2406, -1.5372, -0.4986 ],
    [ -0.9689,  1.8758,  0.0415 ],
    [  0.0557, -0.2040,  1.0570 ],
];

/// Convert RGB coordinates to XYZ.
///
/// This function linearizes each coordinate with sRGB's gamma and then
/// applies the linear sRGB to XYZ transform. It accepts any numeric channel
/// type that losslessly converts to [`Float`], notably `u8` and `Float`
/// itself. Coordinates nominally range `0..=255`, but this function does not
/// enforce that range and passes out-of-range values through the formulae.
///
/// # Examples
///
/// ```
/// # use prettydelta::rgb_to_xyz;
/// let [x, y, z] = rgb_to_xyz(&[255_u8, 255, 255]);
/// assert!((y - 100.0).abs() < 1e-9);
/// assert!((x - 95.05).abs() < 1e-9 && (z - 108.9).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz<C>(rgb: &[C; 3]) -> [Float; 3]
where
    C: Copy + Into<Float>,
{
    let [r, g, b] = *rgb;
    multiply(
        &LINEAR_SRGB_TO_XYZ,
        &[linearize(r.into()), linearize(g.into()), linearize(b.into())],
    )
}

/// Convert XYZ coordinates to RGB.
///
/// This function approximately inverts [`rgb_to_xyz`]. It applies the XYZ to
/// linear sRGB transform and then sRGB's gamma. It does not clamp, so
/// out-of-gamut colors produce coordinates outside `0..=255`. Since both
/// matrices use four significant digits, a round trip may be off by a small
/// fraction of an 8-bit step.
pub fn xyz_to_rgb(xyz: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, xyz);
    [delinearize(r), delinearize(g), delinearize(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65 reference white on the 0–100 scale.
const D65_WHITE: [Float; 3] = [95.047, 100.0, 108.883];

/// The threshold below which CIELAB's compression is linear.
const EPSILON: Float = 0.008856;

/// The slope of the linear segment.
const KAPPA: Float = 7.787;

/// The offset of the linear segment.
const OFFSET: Float = 16.0 / 116.0;

/// Convert XYZ coordinates to CIELAB.
///
/// This function normalizes each coordinate by D65's reference white,
/// compresses the result with a cube root (or a linear segment close to zero,
/// which avoids the cube root's infinite slope), and then linearly combines
/// the compressed values into L*, a*, and b*.
///
/// # Examples
///
/// ```
/// # use prettydelta::xyz_to_lab;
/// let [l, a, b] = xyz_to_lab(&[95.047, 100.0, 108.883]);
/// assert!((l - 100.0).abs() < 1e-9);
/// assert!(a.abs() < 1e-9 && b.abs() < 1e-9);
/// ```
pub fn xyz_to_lab(xyz: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn compress(value: Float) -> Float {
        if value > EPSILON {
            value.cbrt()
        } else {
            KAPPA.mul_add(value, OFFSET)
        }
    }

    let [x, y, z] = *xyz;
    let [xn, yn, zn] = D65_WHITE;
    let fx = compress(x / xn);
    let fy = compress(y / yn);
    let fz = compress(z / zn);

    [fy.mul_add(116.0, -16.0), 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIELAB coordinates to XYZ.
///
/// This function inverts [`xyz_to_lab`], up to floating point error.
pub fn lab_to_xyz(lab: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn expand(value: Float) -> Float {
        let cube = value.powi(3);
        if cube > EPSILON {
            cube
        } else {
            (value - OFFSET) / KAPPA
        }
    }

    let [l, a, b] = *lab;
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let [xn, yn, zn] = D65_WHITE;
    [xn * expand(fx), yn * expand(fy), zn * expand(fz)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to CIELAB.
///
/// This function is a shortcut for [`rgb_to_xyz`] followed by
/// [`xyz_to_lab`] and produces exactly the same result.
///
/// # Examples
///
/// ```
/// # use prettydelta::{rgb_to_lab, rgb_to_xyz, xyz_to_lab};
/// let orange = [255.0, 165.0, 0.0];
/// assert_eq!(rgb_to_lab(&orange), xyz_to_lab(&rgb_to_xyz(&orange)));
///
/// let [l, a, b] = rgb_to_lab(&[0_u8, 0, 0]);
/// assert!(l.abs() < 1e-9 && a.abs() < 1e-9 && b.abs() < 1e-9);
/// ```
#[inline]
pub fn rgb_to_lab<C>(rgb: &[C; 3]) -> [Float; 3]
where
    C: Copy + Into<Float>,
{
    xyz_to_lab(&rgb_to_xyz(rgb))
}

/// Convert CIELAB coordinates to RGB.
///
/// This function is a shortcut for [`lab_to_xyz`] followed by
/// [`xyz_to_rgb`].
#[inline]
pub fn lab_to_rgb(lab: &[Float; 3]) -> [Float; 3] {
    xyz_to_rgb(&lab_to_xyz(lab))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// The target color space may be the same as the source color space, in which
/// case this function returns the coordinates unchanged. It neither checks
/// nor corrects whether the result is in gamut.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    match (from_space, to_space) {
        (Rgb, Rgb) | (Xyz, Xyz) | (Lab, Lab) => *coordinates,
        (Rgb, Xyz) => rgb_to_xyz(coordinates),
        (Rgb, Lab) => rgb_to_lab(coordinates),
        (Xyz, Rgb) => xyz_to_rgb(coordinates),
        (Xyz, Lab) => xyz_to_lab(coordinates),
        (Lab, Rgb) => lab_to_rgb(coordinates),
        (Lab, Xyz) => lab_to_xyz(coordinates),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, assert_within};
    use crate::Float;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct Representations {
        rgb: [Float; 3],
        xyz: [Float; 3],
        lab: [Float; 3],
    }

    const BLACK: Representations = Representations {
        rgb: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
    };

    const WHITE: Representations = Representations {
        rgb: [255.0, 255.0, 255.0],
        xyz: [95.05, 100.0, 108.9],
        lab: [100.0, 0.00526, -0.01040],
    };

    const RED: Representations = Representations {
        rgb: [255.0, 0.0, 0.0],
        xyz: [41.24, 21.26, 1.93],
        lab: [53.2329, 80.1093, 67.2201],
    };

    const DARK_GRAY: Representations = Representations {
        // Every coordinate takes the linear segments.
        rgb: [10.0, 10.0, 10.0],
        xyz: [0.28850, 0.30353, 0.33054],
        lab: [2.74174, 0.0, 0.0],
    };

    #[test]
    fn test_conversions() {
        for color in [&BLACK, &WHITE, &RED, &DARK_GRAY] {
            let xyz = rgb_to_xyz(&color.rgb);
            assert_same_coordinates!(&xyz, &color.xyz, 1e-4);

            let lab = xyz_to_lab(&xyz);
            assert_same_coordinates!(&lab, &color.lab, 1e-2);

            assert_eq!(rgb_to_lab(&color.rgb), lab);
            assert_eq!(convert(ColorSpace::Rgb, ColorSpace::Lab, &color.rgb), lab);
        }
    }

    #[test]
    fn test_white_and_black() {
        let [l, a, b] = rgb_to_lab(&[255_u8, 255, 255]);
        assert_within!(l, 100.0, 1e-3);
        assert_within!(a, 0.0, 0.02);
        assert_within!(b, 0.0, 0.02);

        let [l, a, b] = rgb_to_lab(&[0_u8, 0, 0]);
        assert_within!(l, 0.0, 1e-9);
        assert_eq!(a, 0.0);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_channel_types() {
        assert_eq!(rgb_to_xyz(&[12_u8, 34, 56]), rgb_to_xyz(&[12.0, 34.0, 56.0]));
        assert_eq!(from_24bit(12, 34, 56), [12.0, 34.0, 56.0]);
        assert_eq!(to_24bit(&[-3.0, 127.5, 300.0]), [0, 128, 255]);
        assert_eq!(to_24bit(&[Float::NAN, 0.4, 254.6]), [0, 0, 255]);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        // Negative channels take the linear segment, channels above 255 the
        // power segment, and neither is clamped.
        let [x, y, z] = rgb_to_xyz(&[-10.0, 0.0, 0.0]);
        assert!(x < 0.0 && y < 0.0 && z < 0.0, "negative red should stay negative");

        let [_, y, _] = rgb_to_xyz(&[300.0, 300.0, 300.0]);
        assert!(y > 100.0, "super-white should exceed reference white");
    }

    #[test]
    fn test_composition() {
        let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
        for _ in 0..1_000 {
            let rgb: [Float; 3] = [
                rng.random_range(0.0..=255.0),
                rng.random_range(0.0..=255.0),
                rng.random_range(0.0..=255.0),
            ];

            assert_eq!(rgb_to_lab(&rgb), xyz_to_lab(&rgb_to_xyz(&rgb)));
        }
    }

    #[test]
    fn test_round_trips() {
        let mut rng = StdRng::seed_from_u64(665);
        for _ in 0..1_000 {
            let rgb: [u8; 3] = [rng.random(), rng.random(), rng.random()];
            let rgb = from_24bit(rgb[0], rgb[1], rgb[2]);

            let xyz = rgb_to_xyz(&rgb);
            assert_same_coordinates!(&lab_to_xyz(&xyz_to_lab(&xyz)), &xyz, 1e-4);
            assert_same_coordinates!(&xyz_to_rgb(&xyz), &rgb, 0.5);
            assert_same_coordinates!(&lab_to_rgb(&rgb_to_lab(&rgb)), &rgb, 0.5);
        }
    }

    #[test]
    fn test_convert_identity() {
        let coordinates = [1.0, -2.0, 3.0];
        for space in [ColorSpace::Rgb, ColorSpace::Xyz, ColorSpace::Lab] {
            assert_eq!(convert(space, space, &coordinates), coordinates);
        }
    }
}
