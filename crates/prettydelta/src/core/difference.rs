use crate::core::{chroma_weight, clamped_sqrt, find_non_finite, mean};
use crate::error::{NonFiniteError, Operand};
use crate::Float;

/// The parametric factors of CIEDE2000.
///
/// CIEDE2000 divides the lightness, chroma, and hue differences by the
/// weighting functions SL, SC, and SH as well as the parametric factors kL,
/// kC, and kH. The latter account for viewing conditions that deviate from
/// the reference conditions. For the graphic arts, all three factors are 1,
/// which is also the default. For textiles, kL is 2, which halves the
/// contribution of lightness differences.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParametricFactors {
    /// The lightness factor kL.
    pub lightness: Float,
    /// The chroma factor kC.
    pub chroma: Float,
    /// The hue factor kH.
    pub hue: Float,
}

impl ParametricFactors {
    /// The reference conditions, used by [`ciede2000`].
    pub const GRAPHIC_ARTS: Self = Self::new(1.0, 1.0, 1.0);

    /// The conditions for textiles.
    pub const TEXTILES: Self = Self::new(2.0, 1.0, 1.0);

    /// Create new parametric factors.
    pub const fn new(lightness: Float, chroma: Float, hue: Float) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }
}

impl Default for ParametricFactors {
    /// Get the factors for the graphic arts.
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue angle in degrees for the given a* and b*.
///
/// The result is in `0..360`. Achromatic colors, i.e., colors with a* and
/// b* both zero, have an undefined hue, which this function reports as 0.
#[inline]
pub(crate) fn hue_angle(a: Float, b: Float) -> Float {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }

    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        // Tiny negative angles round up to 360, which is 0.
        (h + 360.0) % 360.0
    } else {
        h
    }
}

/// Compute the signed difference from the first to the second hue, taking the
/// shorter arc around the hue circle.
#[inline]
fn hue_difference(h1: Float, h2: Float) -> Float {
    let delta = h2 - h1;
    if 180.0 < delta {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Compute the mean of the two hues.
///
/// If either color is achromatic, i.e., the (root of the) product of chromas
/// is zero, the mean is the sum of the hues. Since the achromatic hue is 0,
/// that preserves the other color's hue. Otherwise, the mean is taken along the shorter arc,
/// which requires a half rotation when the hues are more than 180º apart.
#[inline]
fn mean_hue(h1: Float, h2: Float, chroma_product: Float) -> Float {
    if chroma_product == 0.0 {
        h1 + h2
    } else if (h2 - h1).abs() <= 180.0 {
        mean(h1, h2)
    } else if h1 + h2 < 360.0 {
        mean(h1, h2) + 180.0
    } else {
        mean(h1, h2) - 180.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the CIEDE2000 color difference with the given parametric factors.
///
/// See [`ciede2000`] for a description of the algorithm. This function
/// additionally divides the lightness, chroma, and hue differences by the
/// respective [`ParametricFactors`]. For the default factors, it produces the
/// same result as [`ciede2000`].
///
/// # Examples
///
/// ```
/// # use prettydelta::{ciede2000, ciede2000_with, ParametricFactors};
/// let gray = [40.0, 0.0, 0.0];
/// let lighter_gray = [45.0, 0.0, 0.0];
/// let reference = ciede2000(&gray, &lighter_gray);
/// let textiles = ciede2000_with(&gray, &lighter_gray, &ParametricFactors::TEXTILES);
/// assert!((2.0 * textiles - reference).abs() < 1e-12);
/// ```
#[allow(non_snake_case, clippy::suboptimal_flops)]
pub fn ciede2000_with(
    lab1: &[Float; 3],
    lab2: &[Float; 3],
    factors: &ParametricFactors,
) -> Float {
    let [L1, a1, b1] = *lab1;
    let [L2, a2, b2] = *lab2;

    // Correct a* near the gray axis, then recompute chroma and hue.
    let G = 0.5 * (1.0 - chroma_weight(mean(a1.hypot(b1), a2.hypot(b2))));
    let a1p = (1.0 + G) * a1;
    let a2p = (1.0 + G) * a2;
    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);
    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);

    // Differences
    let ΔLp = L2 - L1;
    let ΔCp = C2p - C1p;
    let Δhp = hue_difference(h1p, h2p);
    // √(C1'·C2') without overflowing the product
    let root_Cp = C1p.sqrt() * C2p.sqrt();
    let ΔHp = 2.0 * root_Cp * (Δhp / 2.0).to_radians().sin();

    // Means
    let mean_L = mean(L1, L2);
    let mean_Cp = mean(C1p, C2p);
    let mean_hp = mean_hue(h1p, h2p, root_Cp);

    // Weighting functions. With d = |L̄ - 50|, SL is 1 + 0.015·d²/√(20 + d²),
    // which is rearranged so that d² is never computed.
    let L50 = (mean_L - 50.0).abs();
    let SL = 1.0 + 0.015 * L50 * (L50 / L50.hypot((20.0 as Float).sqrt()));
    let SC = 1.0 + 0.045 * mean_Cp;
    let T = 1.0 - 0.17 * (mean_hp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * mean_hp).to_radians().cos()
        + 0.32 * (3.0 * mean_hp + 6.0).to_radians().cos()
        - 0.20 * (4.0 * mean_hp - 63.0).to_radians().cos();
    let SH = 1.0 + 0.015 * mean_Cp * T;

    // Rotation of blues
    let Δθ = 30.0 * (-((mean_hp - 275.0) / 25.0).powi(2)).exp();
    let RC = 2.0 * chroma_weight(mean_Cp);
    let RT = -(2.0 * Δθ).to_radians().sin() * RC;

    let L = ΔLp / (factors.lightness * SL);
    let C = ΔCp / (factors.chroma * SC);
    let H = ΔHp / (factors.hue * SH);

    let radicand = L.mul_add(L, C.mul_add(C, H.mul_add(H, RT * C * H)));
    if !radicand.is_infinite() {
        return clamped_sqrt(radicand);
    }

    // The squares overflowed. Scale by the largest term and try again.
    let scale = L.abs().max(C.abs()).max(H.abs());
    let (L, C, H) = (L / scale, C / scale, H / scale);
    scale * clamped_sqrt(L.mul_add(L, C.mul_add(C, H.mul_add(H, RT * C * H))))
}

/// Compute the CIEDE2000 color difference between two CIELAB colors.
///
/// CIEDE2000 is the most accurate of the CIE's color difference formulae. It
/// refines the Euclidean distance in CIELAB, i.e., ΔE*ab, with corrections
/// for the non-uniformity of CIELAB near the gray axis (the G factor),
/// weighting functions for lightness, chroma, and hue, as well as a rotation
/// term for the blues. A difference of about 1 is just noticeable.
///
/// The formula is piecewise because hues are angles: The hue difference takes
/// the shorter arc around the hue circle and so does the mean hue, unless one
/// of the colors is achromatic. In that case, the mean hue is the other
/// color's hue.
///
/// This function computes the difference for the reference conditions, i.e.,
/// with [`ParametricFactors::GRAPHIC_ARTS`]. It is symmetric, returns zero for
/// identical colors, and is non-negative for all finite inputs, no matter how
/// large. Intermediate results are arranged to avoid overflow. It does not
/// validate its inputs; not-a-number or infinite coordinates propagate into
/// a not-a-number result. Use [`try_ciede2000`] to reject such inputs
/// instead.
///
/// # Examples
///
/// The first pair of the [reference test
/// data](https://hajim.rochester.edu/ece/sites/gsharma/ciede2000/) by Sharma,
/// Wu, and Dalal:
///
/// ```
/// # use prettydelta::ciede2000;
/// let d = ciede2000(&[50.0, 2.6772, -79.7751], &[50.0, 0.0, -82.7485]);
/// assert!((d - 2.0425).abs() < 1e-4);
/// ```
#[inline]
pub fn ciede2000(lab1: &[Float; 3], lab2: &[Float; 3]) -> Float {
    ciede2000_with(lab1, lab2, &ParametricFactors::GRAPHIC_ARTS)
}

/// Compute the CIEDE2000 color difference after validating the coordinates.
///
/// This function returns the same result as [`ciede2000`] but first checks
/// that all coordinates are finite. If not, it returns an error identifying
/// the first offending coordinate.
///
/// # Examples
///
/// ```
/// # use prettydelta::{try_ciede2000, error::Operand};
/// assert!(try_ciede2000(&[50.0, 0.0, 0.0], &[50.0, 0.0, 0.0]).is_ok());
///
/// let error = try_ciede2000(&[50.0, 0.0, 0.0], &[50.0, f64::NAN, 0.0]).unwrap_err();
/// assert_eq!(error.operand(), Operand::Second);
/// assert_eq!(error.index(), 1);
/// ```
pub fn try_ciede2000(lab1: &[Float; 3], lab2: &[Float; 3]) -> Result<Float, NonFiniteError> {
    for (operand, coordinates) in [(Operand::First, lab1), (Operand::Second, lab2)] {
        if let Some(index) = find_non_finite(coordinates) {
            return Err(NonFiniteError::new(operand, index, coordinates[index]));
        }
    }

    Ok(ciede2000(lab1, lab2))
}
