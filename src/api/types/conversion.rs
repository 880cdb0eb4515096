//! Conversion request and response bodies

use serde::{Deserialize, Serialize};

use crate::domain::{RawValue, UnitCategory};
use crate::infrastructure::services::{ConversionOutcome, ConversionRequest};

/// `POST /api/convert/{category}` body. Every field accepts any JSON type so
/// type mistakes are reported by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertRequestBody {
    #[serde(default)]
    pub value: RawValue,
    #[serde(default)]
    pub from: RawValue,
    #[serde(default)]
    pub to: RawValue,
}

impl From<ConvertRequestBody> for ConversionRequest {
    fn from(body: ConvertRequestBody) -> Self {
        Self {
            value: body.value,
            from: body.from,
            to: body.to,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub result: f64,
    pub value: f64,
    pub from: String,
    pub to: String,
    pub category: UnitCategory,
}

impl From<ConversionOutcome> for ConvertResponse {
    fn from(outcome: ConversionOutcome) -> Self {
        Self {
            result: outcome.result,
            value: outcome.value,
            from: outcome.from.to_string(),
            to: outcome.to.to_string(),
            category: outcome.category,
        }
    }
}

/// Supported units of one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUnitsResponse {
    pub category: UnitCategory,
    pub units: Vec<String>,
}

impl CategoryUnitsResponse {
    pub fn for_category(category: UnitCategory) -> Self {
        Self {
            category,
            units: category
                .supported_units()
                .iter()
                .map(|u| u.to_string())
                .collect(),
        }
    }
}

/// Supported units of every category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsResponse {
    pub length: Vec<String>,
    pub weight: Vec<String>,
    pub temperature: Vec<String>,
}

impl UnitsResponse {
    pub fn all() -> Self {
        Self {
            length: CategoryUnitsResponse::for_category(UnitCategory::Length).units,
            weight: CategoryUnitsResponse::for_category(UnitCategory::Weight).units,
            temperature: CategoryUnitsResponse::for_category(UnitCategory::Temperature).units,
        }
    }
}
