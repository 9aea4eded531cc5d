//! # Pretty Δ
//!
//! Prettydelta computes how different two colors look. It implements the
//! **CIEDE2000** color difference formula, the CIE's most perceptually
//! accurate metric, together with the conversions needed to feed it 24-bit
//! sRGB colors: sRGB to CIE XYZ (D65) and CIE XYZ to CIELAB (D65).
//!
//!
//! ## 1. Overview
//!
//! The crate offers two levels of abstraction:
//!
//!   * **Free functions on coordinate arrays.** [`rgb_to_xyz`],
//!     [`xyz_to_lab`], and [`rgb_to_lab`] convert colors towards CIELAB,
//!     [`xyz_to_rgb`], [`lab_to_xyz`], and [`lab_to_rgb`] convert them back,
//!     and [`ciede2000`] computes the color difference. All of them operate
//!     on `[Float; 3]` arrays, with the RGB conversions also accepting integer
//!     channels such as `[u8; 3]`.
//!   * **[`Color`] objects**, which combine a [`ColorSpace`] with three
//!     coordinates. They convert between color spaces with [`Color::to`],
//!     compute differences with [`Color::delta_e`], and parse as well as
//!     format familiar notations such as `#ff8000` or `lab(50 20 -10)`.
//!
//! [`ciede2000_with`] takes [`ParametricFactors`] for viewing conditions other
//! than the graphic arts reference, and [`try_ciede2000`] rejects not-a-number
//! and infinite coordinates with an [`error::NonFiniteError`] instead of
//! propagating them.
//!
//!
//! ## 2. Scales
//!
//! RGB channels use the conventional `0..=255` scale, but as floating point
//! numbers. XYZ is scaled so that the D65 reference white has luminance
//! Y = 100. CIELAB has lightness L* in `0..=100`. Nothing is clamped, so
//! out-of-range inputs produce out-of-range results.
//!
//! The conversion matrix and thresholds follow the widely used four-digit
//! formulation, which means that conversions round-trip only approximately.
//!
//!
//! ## 3. Example
//!
//! ```
//! # use prettydelta::{ciede2000, rgb_to_lab, Color};
//! let orange = rgb_to_lab(&[255_u8, 128, 0]);
//! let darker_orange = rgb_to_lab(&[245_u8, 120, 0]);
//! let difference = ciede2000(&orange, &darker_orange);
//! assert!(1.0 < difference && difference < 5.0);
//!
//! let orange: Color = "#ff8000".parse()?;
//! let darker_orange = Color::from_24bit(245, 120, 0);
//! assert_eq!(orange.delta_e(&darker_orange), difference);
//! # Ok::<(), prettydelta::error::ColorFormatError>(())
//! ```
//!
//!
//! ## 4. Optional Features
//!
//! The `f64` feature selects the eponymous type as [`Float`] and `u64` as
//! [`Bits`]. Without it, the crate uses `f32` and `u32`. The feature is
//! enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    ciede2000, ciede2000_with, lab_to_rgb, lab_to_xyz, rgb_to_lab, rgb_to_xyz, try_ciede2000,
    xyz_to_lab, xyz_to_rgb, ColorSpace, ParametricFactors,
};
pub use object::Color;
