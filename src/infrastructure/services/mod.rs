//! Infrastructure services

mod conversion_service;

pub use conversion_service::{
    ConversionOutcome, ConversionRequest, ConversionService, MAX_UNIT_LENGTH,
};
