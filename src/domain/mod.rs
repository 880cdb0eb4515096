//! Domain layer - units, sanitization, validation and conversion

pub mod activity;
pub mod conversion;
pub mod error;
pub mod sanitize;
pub mod unit;
pub mod validation;

pub use activity::{EventSource, GitHubEvent};
pub use conversion::{
    convert, convert_length, convert_temperature, convert_weight, LengthConverter,
    TemperatureConverter, WeightConverter,
};
pub use error::{ConversionError, DomainError, ValidationError};
pub use sanitize::{escape_html, sanitize_numeric, sanitize_string, RawValue};
pub use unit::UnitCategory;
pub use validation::{
    LengthValidator, QuantityValidator, TemperatureValidator, ValidatedQuantity, WeightValidator,
};
