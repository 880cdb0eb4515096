//! GitHub user activity

mod event;

pub use event::{EventRepo, GitHubEvent};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::{DomainError, ValidationError};
use crate::domain::sanitize::RawValue;
use crate::domain::validation::{validate_string_input, StringRules};

#[cfg(test)]
use mockall::automock;

/// GitHub logins are at most 39 characters
pub const MAX_USERNAME_LENGTH: usize = 39;

/// Alphanumeric segments joined by single hyphens
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("username pattern"));

/// Validate and trim a GitHub username
pub fn validate_username(raw: &str) -> Result<String, ValidationError> {
    let rules = StringRules::required()
        .with_max_length(MAX_USERNAME_LENGTH)
        .with_pattern(USERNAME_PATTERN.clone());

    validate_string_input(&RawValue::from(raw), &rules)
}

/// Source of a user's recent public events
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Most recent events first
    async fn user_events(&self, username: &str) -> Result<Vec<GitHubEvent>, DomainError>;
}
