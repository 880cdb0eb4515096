//! Scale-factor converters for length and weight

use crate::domain::error::ConversionError;
use crate::domain::unit::{linear_factor, UnitCategory};

fn factor(category: UnitCategory, unit: &str) -> Result<f64, ConversionError> {
    linear_factor(category, unit).ok_or_else(|| {
        ConversionError::new(format!(
            "No {} conversion factor for unit '{}'",
            category,
            unit
        ))
    })
}

/// `value * factor(from) / factor(to)`, routed through the category pivot
fn convert_linear(
    category: UnitCategory,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from_factor = factor(category, from_unit)?;
    let to_factor = factor(category, to_unit)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    super::finite_result(value * from_factor / to_factor)
}

/// Length conversions through meters
pub struct LengthConverter;

impl LengthConverter {
    pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        convert_linear(UnitCategory::Length, value, from_unit, to_unit)
    }
}

/// Weight conversions through kilograms
pub struct WeightConverter;

impl WeightConverter {
    pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        convert_linear(UnitCategory::Weight, value, from_unit, to_unit)
    }
}
