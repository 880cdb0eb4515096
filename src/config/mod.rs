//! Application configuration

mod app_config;

pub use app_config::{AppConfig, GitHubConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig};
