//! Conversion factor tables
//!
//! Linear categories store how many pivot units (meters, kilograms) one unit
//! equals. Temperature stores an affine transform to kelvin.

use super::UnitCategory;

const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("mg", 0.000_001),
    ("g", 0.001),
    ("kg", 1.0),
    // metric tonne
    ("t", 1000.0),
    ("oz", 0.028_349_523_125),
    ("lb", 0.453_592_37),
    ("st", 6.350_293_18),
    // US short ton
    ("ton", 907.184_74),
];

/// `kelvin = (value + offset) * scale`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub offset: f64,
    pub scale: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        offset: 0.0,
        scale: 1.0,
    };

    pub fn to_pivot(&self, value: f64) -> f64 {
        (value + self.offset) * self.scale
    }

    pub fn from_pivot(&self, pivot: f64) -> f64 {
        pivot / self.scale - self.offset
    }
}

const TEMPERATURE_TRANSFORMS: &[(&str, AffineTransform)] = &[
    (
        "c",
        AffineTransform {
            offset: 273.15,
            scale: 1.0,
        },
    ),
    (
        "f",
        AffineTransform {
            offset: 459.67,
            scale: 5.0 / 9.0,
        },
    ),
    ("k", AffineTransform::IDENTITY),
];

/// Scale factor to the category pivot. Temperature has no linear factor.
pub fn linear_factor(category: UnitCategory, symbol: &str) -> Option<f64> {
    let table = match category {
        UnitCategory::Length => LENGTH_FACTORS,
        UnitCategory::Weight => WEIGHT_FACTORS,
        UnitCategory::Temperature => return None,
    };

    table
        .iter()
        .find(|(unit, _)| *unit == symbol)
        .map(|(_, factor)| *factor)
}

pub fn temperature_transform(symbol: &str) -> Option<AffineTransform> {
    TEMPERATURE_TRANSFORMS
        .iter()
        .find(|(unit, _)| *unit == symbol)
        .map(|(_, transform)| *transform)
}
