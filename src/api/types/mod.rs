//! API request/response types

mod conversion;
mod error;
mod json;

pub use conversion::{CategoryUnitsResponse, ConvertRequestBody, ConvertResponse, UnitsResponse};
pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
