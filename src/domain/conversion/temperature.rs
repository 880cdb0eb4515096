//! Affine temperature conversion through kelvin

use crate::domain::error::ConversionError;
use crate::domain::unit::{temperature_transform, AffineTransform};

fn transform(unit: &str) -> Result<AffineTransform, ConversionError> {
    temperature_transform(unit).ok_or_else(|| {
        ConversionError::new(format!(
            "No temperature transform for unit '{}'",
            unit
        ))
    })
}

pub struct TemperatureConverter;

impl TemperatureConverter {
    pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        let from = transform(from_unit)?;
        let to = transform(to_unit)?;

        if from_unit == to_unit {
            return Ok(value);
        }

        super::finite_result(to.from_pivot(from.to_pivot(value)))
    }
}
