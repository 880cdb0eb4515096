//! Infrastructure layer - logging, metrics, services and external APIs

pub mod github;
pub mod logging;
pub mod observability;
pub mod services;
