//! Input and quantity validation

mod input;
mod quantity;

pub use input::{validate_numeric_input, validate_range, validate_string_input, StringRules};
pub use quantity::{
    validate_for, validate_unit_for, LengthValidator, QuantityValidator, TemperatureValidator,
    ValidatedQuantity, WeightValidator,
};
