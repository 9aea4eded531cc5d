mod conversion;
mod difference;
mod equality;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};
pub use conversion::{lab_to_rgb, lab_to_xyz, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};

// difference
pub(crate) use difference::hue_angle;
pub use difference::{ciede2000, ciede2000_with, try_ciede2000, ParametricFactors};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, assert_within};
pub use equality::to_eq_bits;
pub(crate) use equality::{find_non_finite, to_eq_coordinates};

// math
pub(crate) use math::{chroma_weight, clamped_sqrt, mean, FloatExt};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
