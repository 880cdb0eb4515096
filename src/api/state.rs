//! Application state shared by handlers

use std::sync::Arc;

use crate::infrastructure::services::ConversionService;

/// Shared handler state; cheap to clone
#[derive(Clone, Default)]
pub struct AppState {
    pub conversion_service: Arc<ConversionService>,
}

impl AppState {
    pub fn new(conversion_service: ConversionService) -> Self {
        Self {
            conversion_service: Arc::new(conversion_service),
        }
    }
}
