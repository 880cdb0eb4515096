use thiserror::Error;

/// Caller-supplied data was rejected.
///
/// The message may echo the rejected input verbatim; escape it before
/// embedding it in markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {message}")]
pub struct ValidationError {
    message: String,
    field: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Name the request field the rejected input came from
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

/// A converter was asked to use a unit it has no factor entry for.
///
/// Reaching this after validation means the unit tables and the converter
/// disagree, so callers treat it as a server-side fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Conversion error: {message}")]
pub struct ConversionError {
    message: String,
}

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Core domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(message))
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion(ConversionError::new(message))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Conversion(_) => "conversion_error",
            Self::NotFound { .. } => "not_found",
            Self::Provider { .. } => "provider_error",
        }
    }
}
