//! Generic input validators

use regex::Regex;

use crate::domain::error::ValidationError;
use crate::domain::sanitize::{sanitize_numeric, RawValue};

/// Constraints applied by [`validate_string_input`]
#[derive(Debug, Clone, Default)]
pub struct StringRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
}

impl StringRules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Sanitize and require a finite number
pub fn validate_numeric_input(value: &RawValue) -> Result<f64, ValidationError> {
    match sanitize_numeric(value) {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::new(format!(
            "Invalid value '{}': must be a finite number",
            value
        ))),
    }
}

/// Trim and check a string against `rules`.
///
/// Checks run in order: type, required, length, pattern. An empty optional
/// string is accepted without length or pattern checks.
pub fn validate_string_input(
    value: &RawValue,
    rules: &StringRules,
) -> Result<String, ValidationError> {
    let text = match value {
        RawValue::Text(s) => s.trim(),
        RawValue::Missing if !rules.required => return Ok(String::new()),
        other => {
            return Err(ValidationError::new(format!(
                "Expected a string, got {}",
                other.type_name()
            )));
        }
    };

    if text.is_empty() {
        if rules.required {
            return Err(ValidationError::new("Value is required"));
        }
        return Ok(String::new());
    }

    let length = text.chars().count();

    if let Some(min) = rules.min_length {
        if length < min {
            return Err(ValidationError::new(format!(
                "Value too short: {} characters (min {})",
                length, min
            )));
        }
    }

    if let Some(max) = rules.max_length {
        if length > max {
            return Err(ValidationError::new(format!(
                "Value too long: {} characters (max {})",
                length, max
            )));
        }
    }

    if let Some(pattern) = &rules.pattern {
        if !pattern.is_match(text) {
            return Err(ValidationError::new(format!(
                "Invalid format '{}'",
                text
            )));
        }
    }

    Ok(text.to_string())
}

/// Sanitize a number and require it to lie in `[min, max]`
pub fn validate_range(value: &RawValue, min: f64, max: f64) -> Result<f64, ValidationError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ValidationError::new(format!(
            "Invalid range bounds [{}, {}]: must be finite numbers",
            min, max
        )));
    }

    let n = validate_numeric_input(value)?;

    if !(min..=max).contains(&n) {
        return Err(ValidationError::new(format!(
            "Value {} out of range: must be between {} and {}",
            n, min, max
        )));
    }

    Ok(n)
}
