//! Per-category unit and value validators

use serde::Serialize;

use crate::domain::error::ValidationError;
use crate::domain::sanitize::RawValue;
use crate::domain::unit::{temperature_transform, UnitCategory};

use super::input::validate_numeric_input;

/// A finite value paired with a normalized unit symbol.
///
/// Only validators construct these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedQuantity {
    value: f64,
    unit: &'static str,
}

impl ValidatedQuantity {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }
}

/// Validation shared by every category; implementors only pick the category
pub trait QuantityValidator {
    const CATEGORY: UnitCategory;

    /// Trim, lowercase and match against the category's supported symbols
    fn validate_unit(raw: &str) -> Result<&'static str, ValidationError> {
        let normalized = raw.trim().to_lowercase();

        Self::CATEGORY.find_unit(&normalized).ok_or_else(|| {
            ValidationError::new(format!(
                "Invalid {} unit '{}'. Supported units: {}",
                Self::CATEGORY,
                raw.trim(),
                Self::CATEGORY.supported_list()
            ))
        })
    }

    fn validate_numeric_value(raw: &RawValue) -> Result<f64, ValidationError> {
        validate_numeric_input(raw)
    }

    /// Hook for physical limits that depend on the unit
    fn check_quantity(_value: f64, _unit: &'static str) -> Result<(), ValidationError> {
        Ok(())
    }

    fn validate(raw_value: &RawValue, raw_unit: &str) -> Result<ValidatedQuantity, ValidationError> {
        let unit = Self::validate_unit(raw_unit)?;
        let value = Self::validate_numeric_value(raw_value)?;
        Self::check_quantity(value, unit)?;

        Ok(ValidatedQuantity { value, unit })
    }
}

pub struct LengthValidator;

impl QuantityValidator for LengthValidator {
    const CATEGORY: UnitCategory = UnitCategory::Length;
}

pub struct WeightValidator;

impl QuantityValidator for WeightValidator {
    const CATEGORY: UnitCategory = UnitCategory::Weight;
}

/// Tolerance for values that land a rounding error below absolute zero
const ABSOLUTE_ZERO_TOLERANCE: f64 = 1e-9;

pub struct TemperatureValidator;

impl QuantityValidator for TemperatureValidator {
    const CATEGORY: UnitCategory = UnitCategory::Temperature;

    /// Rejects temperatures below absolute zero
    fn check_quantity(value: f64, unit: &'static str) -> Result<(), ValidationError> {
        let Some(transform) = temperature_transform(unit) else {
            return Ok(());
        };

        if transform.to_pivot(value) < -ABSOLUTE_ZERO_TOLERANCE {
            return Err(ValidationError::new(format!(
                "Temperature {} {} is below absolute zero",
                value,
                unit.to_uppercase()
            )));
        }

        Ok(())
    }
}

/// Validate a unit for a category chosen at runtime
pub fn validate_unit_for(category: UnitCategory, raw: &str) -> Result<&'static str, ValidationError> {
    match category {
        UnitCategory::Length => LengthValidator::validate_unit(raw),
        UnitCategory::Weight => WeightValidator::validate_unit(raw),
        UnitCategory::Temperature => TemperatureValidator::validate_unit(raw),
    }
}

/// Validate a value/unit pair for a category chosen at runtime
pub fn validate_for(
    category: UnitCategory,
    raw_value: &RawValue,
    raw_unit: &str,
) -> Result<ValidatedQuantity, ValidationError> {
    match category {
        UnitCategory::Length => LengthValidator::validate(raw_value, raw_unit),
        UnitCategory::Weight => WeightValidator::validate(raw_value, raw_unit),
        UnitCategory::Temperature => TemperatureValidator::validate(raw_value, raw_unit),
    }
}
