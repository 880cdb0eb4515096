//! Unit conversion
//!
//! Converters check units against the factor tables themselves, so calling
//! them without prior validation is safe: an unknown unit surfaces as a
//! [`ConversionError`] instead of a [`ValidationError`](crate::domain::ValidationError).

mod linear;
mod temperature;

pub use linear::{LengthConverter, WeightConverter};
pub use temperature::TemperatureConverter;

use crate::domain::error::{ConversionError, DomainError};
use crate::domain::sanitize::RawValue;
use crate::domain::unit::UnitCategory;
use crate::domain::validation::validate_numeric_input;

fn finite_result(result: f64) -> Result<f64, ConversionError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConversionError::new(
            "Conversion result is not a finite number",
        ))
    }
}

pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DomainError> {
    convert(UnitCategory::Length, value, from_unit, to_unit)
}

pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DomainError> {
    convert(UnitCategory::Weight, value, from_unit, to_unit)
}

pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DomainError> {
    convert(UnitCategory::Temperature, value, from_unit, to_unit)
}

/// Convert within `category`. A non-finite `value` is a validation error,
/// an unknown unit a conversion error.
pub fn convert(
    category: UnitCategory,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, DomainError> {
    let value = validate_numeric_input(&RawValue::Number(value))?;

    let result = match category {
        UnitCategory::Length => LengthConverter::convert(value, from_unit, to_unit)?,
        UnitCategory::Weight => WeightConverter::convert(value, from_unit, to_unit)?,
        UnitCategory::Temperature => TemperatureConverter::convert(value, from_unit, to_unit)?,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[f64] = &[0.0, 1.0, -1.0, 0.001, 2.5, 37.0, 1234.5678, -98.6, 1.0e6];

    fn relative_close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() <= tolerance * expected.abs().max(1.0)
    }

    #[test]
    fn test_concrete_scenarios() {
        assert_eq!(convert_length(1.0, "m", "cm").unwrap(), 100.0);
        assert!((convert_weight(1000.0, "g", "kg").unwrap() - 1.0).abs() < 1e-12);
        assert!((convert_temperature(0.0, "c", "f").unwrap() - 32.0).abs() < 1e-9);
        assert!((convert_length(1.0, "km", "mi").unwrap() - 0.621371).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_every_pair() {
        for category in UnitCategory::ALL {
            let tolerance = match category {
                UnitCategory::Temperature => 1e-6,
                _ => 1e-9,
            };

            for from in category.supported_units() {
                for to in category.supported_units() {
                    for &x in SAMPLES {
                        let there = convert(category, x, from, to).unwrap();
                        let back = convert(category, there, to, from).unwrap();
                        assert!(
                            relative_close(back, x, tolerance),
                            "{} {} -> {} -> {}: got {}",
                            x,
                            from,
                            to,
                            from,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_identity_is_exact() {
        for category in UnitCategory::ALL {
            for unit in category.supported_units() {
                for &x in SAMPLES {
                    assert_eq!(convert(category, x, unit, unit).unwrap(), x);
                }
            }
        }
    }

    #[test]
    fn test_linear_proportionality() {
        for category in [UnitCategory::Length, UnitCategory::Weight] {
            for from in category.supported_units() {
                for to in category.supported_units() {
                    let base = convert(category, 3.0, from, to).unwrap();
                    for k in [-2.0, 0.5, 10.0, 1000.0] {
                        let scaled = convert(category, k * 3.0, from, to).unwrap();
                        assert!(relative_close(scaled, k * base, 1e-9));
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_fixed_points() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(convert_temperature(0.0, "c", "f").unwrap(), 32.0));
        assert!(close(convert_temperature(100.0, "c", "f").unwrap(), 212.0));
        assert!(close(convert_temperature(0.0, "c", "k").unwrap(), 273.15));
        assert!(close(convert_temperature(0.0, "k", "c").unwrap(), -273.15));
        assert!(close(convert_temperature(-459.67, "f", "k").unwrap(), 0.0));
    }

    #[test]
    fn test_unknown_unit_is_conversion_error() {
        let err = convert_length(100.0, "invalid", "m").unwrap_err();
        assert!(matches!(err, DomainError::Conversion(_)));

        let err = convert_weight(1.0, "kg", "m").unwrap_err();
        assert!(matches!(err, DomainError::Conversion(_)));

        let err = convert_temperature(1.0, "c", "x").unwrap_err();
        assert!(matches!(err, DomainError::Conversion(_)));
    }

    #[test]
    fn test_non_finite_value_is_validation_error() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert_length(value, "m", "cm").unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }
}
