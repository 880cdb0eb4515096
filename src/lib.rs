//! Unit Converter
//!
//! Length, weight and temperature conversion with:
//! - Input sanitization and per-category validation
//! - Pivot-unit converters (meter, kilogram, kelvin)
//! - An HTTP API and static frontend
//! - A GitHub user-activity command

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use crate::domain::{
    convert_length, convert_temperature, convert_weight, ConversionError, DomainError,
    UnitCategory, ValidationError,
};
