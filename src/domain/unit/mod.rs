//! Unit repository and conversion factor tables

mod category;
mod factors;

pub use category::{UnitCategory, LENGTH_UNITS, TEMPERATURE_UNITS, WEIGHT_UNITS};
pub use factors::{linear_factor, temperature_transform, AffineTransform};
