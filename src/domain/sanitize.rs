//! Input sanitization
//!
//! Best-effort cleanup of raw request values before validation. Nothing here
//! fails: unusable input comes back as `None` (numbers) or unchanged (non-text)
//! and the validators decide what to reject.

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// A well-formed decimal literal, optionally in scientific notation
static STRICT_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("strict number pattern")
});

/// An exponent between digits, as in `1e3`
static EXPONENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d[eE][+-]?\d").expect("exponent pattern"));

/// What is left of a number once stray characters have been stripped
static CLEANED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(\d+(\.\d*)?|\.\d+)$").expect("cleaned number pattern"));

/// An untrusted input value as received from a caller
///
/// Models the loose "string, number or anything else" shape of request
/// fields so that type problems are reported by validators instead of the
/// deserializer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum RawValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    Array,
    Object,
    /// `null` or an absent field
    #[default]
    Missing,
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Missing => "null",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            other => f.write_str(other.type_name()),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Missing),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Coerce a raw value to a number.
///
/// Numbers pass through unchanged (including non-finite ones). Text that is a
/// well-formed decimal or scientific literal is parsed as such; otherwise
/// every character except digits, `-` and `.` is stripped and the remainder
/// parsed, so `"2a5"` becomes `25.0`. Text carrying an exponent next to stray
/// characters (`"1e3 kg"`) yields `None` rather than losing the exponent. A
/// remainder with more than one sign or point, or no digits, yields `None`, as
/// does any non-text, non-number input.
pub fn sanitize_numeric(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) => parse_numeric_text(s),
        _ => None,
    }
}

fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if STRICT_NUMBER.is_match(trimmed) {
        return trimmed.parse().ok();
    }

    if EXPONENT.is_match(trimmed) {
        return None;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    if !CLEANED_NUMBER.is_match(&cleaned) {
        return None;
    }

    cleaned.parse().ok()
}

/// HTML-escape text values; anything else is returned unchanged.
/// Trimming is left to the caller.
pub fn sanitize_string(raw: RawValue) -> RawValue {
    match raw {
        RawValue::Text(s) => RawValue::Text(escape_html(&s).into_owned()),
        other => other,
    }
}

/// Replace `< > & " '` with their named entities
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);

    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(sanitize_numeric(&RawValue::from(42.5)), Some(42.5));
        assert_eq!(sanitize_numeric(&RawValue::from(-3)), Some(-3.0));
        assert_eq!(
            sanitize_numeric(&RawValue::from(f64::INFINITY)),
            Some(f64::INFINITY)
        );
        assert!(sanitize_numeric(&RawValue::from(f64::NAN)).unwrap().is_nan());
    }

    #[test]
    fn test_plain_numeric_strings() {
        assert_eq!(sanitize_numeric(&"100".into()), Some(100.0));
        assert_eq!(sanitize_numeric(&"  -12.5 ".into()), Some(-12.5));
        assert_eq!(sanitize_numeric(&".5".into()), Some(0.5));
        assert_eq!(sanitize_numeric(&"+7".into()), Some(7.0));
    }

    #[test]
    fn test_scientific_notation_keeps_magnitude() {
        assert_eq!(sanitize_numeric(&"1e3".into()), Some(1000.0));
        assert_eq!(sanitize_numeric(&"2.5E-2".into()), Some(0.025));
    }

    #[test]
    fn test_stray_characters_are_stripped() {
        assert_eq!(sanitize_numeric(&"2a5".into()), Some(25.0));
        assert_eq!(sanitize_numeric(&"$1,000.50".into()), Some(1000.5));
        assert_eq!(sanitize_numeric(&"12 cm".into()), Some(12.0));
        assert_eq!(sanitize_numeric(&"5 feet".into()), Some(5.0));
    }

    #[test]
    fn test_exponent_with_stray_characters_yields_none() {
        assert_eq!(sanitize_numeric(&"1e3 kg".into()), None);
        assert_eq!(sanitize_numeric(&"1e3m".into()), None);
        assert_eq!(sanitize_numeric(&"$2.5E-2".into()), None);
        assert_eq!(sanitize_numeric(&"1E+3 g".into()), None);
    }

    #[test]
    fn test_malformed_text_yields_none() {
        assert_eq!(sanitize_numeric(&"".into()), None);
        assert_eq!(sanitize_numeric(&"abc".into()), None);
        assert_eq!(sanitize_numeric(&"1.2.3".into()), None);
        assert_eq!(sanitize_numeric(&"--5".into()), None);
        assert_eq!(sanitize_numeric(&"5-".into()), None);
        assert_eq!(sanitize_numeric(&"-".into()), None);
        assert_eq!(sanitize_numeric(&".".into()), None);
        assert_eq!(sanitize_numeric(&"NaN".into()), None);
        assert_eq!(sanitize_numeric(&"Infinity".into()), None);
    }

    #[test]
    fn test_non_numeric_types_yield_none() {
        assert_eq!(sanitize_numeric(&RawValue::Missing), None);
        assert_eq!(sanitize_numeric(&RawValue::Boolean(true)), None);
        assert_eq!(sanitize_numeric(&RawValue::Array), None);
        assert_eq!(sanitize_numeric(&RawValue::Object), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &apos;y&apos;)&lt;/script&gt;"
        );
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(
            sanitize_string("<b> ".into()),
            RawValue::Text("&lt;b&gt; ".to_string())
        );
        assert_eq!(sanitize_string(RawValue::from(5)), RawValue::Number(5.0));
        assert_eq!(sanitize_string(RawValue::Missing), RawValue::Missing);
    }

    #[test]
    fn test_raw_value_from_json() {
        let raw: RawValue = serde_json::from_str(r#""10""#).unwrap();
        assert_eq!(raw, RawValue::Text("10".to_string()));

        let raw: RawValue = serde_json::from_str("10").unwrap();
        assert_eq!(raw, RawValue::Number(10.0));

        let raw: RawValue = serde_json::from_str("null").unwrap();
        assert_eq!(raw, RawValue::Missing);

        let raw: RawValue = serde_json::from_str("[1]").unwrap();
        assert_eq!(raw, RawValue::Array);

        let raw: RawValue = serde_json::from_str(r#"{"a":1}"#).unwrap();
        assert_eq!(raw, RawValue::Object);
    }

    #[test]
    fn test_display_keeps_text_verbatim() {
        assert_eq!(RawValue::from("o'neil").to_string(), "o'neil");
        assert_eq!(RawValue::Object.to_string(), "object");
    }
}
