//! Conversion service - validates raw request input and runs the converter

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::conversion::convert;
use crate::domain::validation::{validate_for, validate_string_input, validate_unit_for, StringRules};
use crate::domain::{DomainError, RawValue, UnitCategory};
use crate::infrastructure::observability::record_conversion;

/// Longest unit string accepted before lookup
pub const MAX_UNIT_LENGTH: usize = 16;

static UNIT_RULES: Lazy<StringRules> = Lazy::new(|| {
    StringRules::required()
        .with_max_length(MAX_UNIT_LENGTH)
        .with_pattern(Regex::new(r"^[A-Za-z]+$").expect("unit pattern"))
});

/// Raw `{value, from, to}` triple as received from a caller
#[derive(Debug, Clone, Default)]
pub struct ConversionRequest {
    pub value: RawValue,
    pub from: RawValue,
    pub to: RawValue,
}

/// A completed conversion with normalized inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionOutcome {
    pub category: UnitCategory,
    pub value: f64,
    pub from: &'static str,
    pub to: &'static str,
    pub result: f64,
}

/// Runs the full validate-then-convert protocol for one request
#[derive(Debug, Clone, Default)]
pub struct ConversionService;

impl ConversionService {
    pub fn new() -> Self {
        Self
    }

    pub fn convert(
        &self,
        category: UnitCategory,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome, DomainError> {
        let result = self.run(category, request);

        match &result {
            Ok(outcome) => {
                debug!(
                    category = %category,
                    value = outcome.value,
                    from = outcome.from,
                    to = outcome.to,
                    result = outcome.result,
                    "Conversion succeeded"
                );
                record_conversion(category.as_str(), "success");
            }
            Err(e @ DomainError::Conversion(_)) => {
                error!(category = %category, error = %e, "Conversion failed after validation");
                record_conversion(category.as_str(), e.kind());
            }
            Err(e) => {
                debug!(category = %category, error = %e, "Conversion request rejected");
                record_conversion(category.as_str(), e.kind());
            }
        }

        result
    }

    fn run(
        &self,
        category: UnitCategory,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome, DomainError> {
        let from = validate_string_input(&request.from, &UNIT_RULES)
            .and_then(|raw| validate_unit_for(category, &raw))
            .map_err(|e| e.with_field("from"))?;

        let to = validate_string_input(&request.to, &UNIT_RULES)
            .and_then(|raw| validate_unit_for(category, &raw))
            .map_err(|e| e.with_field("to"))?;

        let quantity =
            validate_for(category, &request.value, from).map_err(|e| e.with_field("value"))?;

        let result = convert(category, quantity.value(), quantity.unit(), to)?;

        Ok(ConversionOutcome {
            category,
            value: quantity.value(),
            from: quantity.unit(),
            to,
            result,
        })
    }
}
