//! Supported unit symbols per category

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Supported length units, pivot is the meter
pub const LENGTH_UNITS: &[&str] = &["mm", "cm", "m", "km", "in", "ft", "yd", "mi"];

/// Supported weight units, pivot is the kilogram
pub const WEIGHT_UNITS: &[&str] = &["mg", "g", "kg", "t", "oz", "lb", "st", "ton"];

/// Supported temperature units, pivot is the kelvin
pub const TEMPERATURE_UNITS: &[&str] = &["c", "f", "k"];

/// Measurement category; every unit symbol belongs to exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 3] = [Self::Length, Self::Weight, Self::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
        }
    }

    /// Canonical lowercase symbols accepted for this category, in display order
    pub fn supported_units(&self) -> &'static [&'static str] {
        match self {
            Self::Length => LENGTH_UNITS,
            Self::Weight => WEIGHT_UNITS,
            Self::Temperature => TEMPERATURE_UNITS,
        }
    }

    /// Look up the canonical `'static` symbol matching an already-normalized unit
    pub fn find_unit(&self, symbol: &str) -> Option<&'static str> {
        self.supported_units()
            .iter()
            .copied()
            .find(|unit| *unit == symbol)
    }

    pub fn supports(&self, symbol: &str) -> bool {
        self.find_unit(symbol).is_some()
    }

    /// Comma-separated list used in error messages
    pub fn supported_list(&self) -> String {
        self.supported_units().join(", ")
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Self::Length),
            "weight" => Ok(Self::Weight),
            "temperature" => Ok(Self::Temperature),
            other => Err(DomainError::not_found(format!(
                "Unknown category '{}'. Supported categories: length, weight, temperature",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_units_per_category() {
        assert_eq!(
            UnitCategory::Length.supported_list(),
            "mm, cm, m, km, in, ft, yd, mi"
        );
        assert_eq!(
            UnitCategory::Weight.supported_list(),
            "mg, g, kg, t, oz, lb, st, ton"
        );
        assert_eq!(UnitCategory::Temperature.supported_list(), "c, f, k");
    }

    #[test]
    fn test_symbols_are_scoped_to_one_category() {
        for category in UnitCategory::ALL {
            for unit in category.supported_units() {
                let owners = UnitCategory::ALL
                    .iter()
                    .filter(|c| c.supports(unit))
                    .count();
                assert_eq!(owners, 1, "unit '{}' belongs to {} categories", unit, owners);
            }
        }
    }

    #[test]
    fn test_symbols_are_lowercase() {
        for category in UnitCategory::ALL {
            for unit in category.supported_units() {
                assert_eq!(*unit, unit.to_lowercase());
            }
        }
    }

    #[test]
    fn test_find_unit_is_exact() {
        assert_eq!(UnitCategory::Length.find_unit("cm"), Some("cm"));
        assert_eq!(UnitCategory::Length.find_unit("CM"), None);
        assert_eq!(UnitCategory::Length.find_unit("kg"), None);
        assert_eq!(UnitCategory::Temperature.find_unit(""), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("length".parse::<UnitCategory>().unwrap(), UnitCategory::Length);
        assert_eq!(" Weight ".parse::<UnitCategory>().unwrap(), UnitCategory::Weight);
        assert_eq!(
            "TEMPERATURE".parse::<UnitCategory>().unwrap(),
            UnitCategory::Temperature
        );

        let err = "volume".parse::<UnitCategory>().unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&UnitCategory::Temperature).unwrap(),
            "\"temperature\""
        );
        assert_eq!(UnitCategory::Weight.to_string(), "weight");
    }
}
