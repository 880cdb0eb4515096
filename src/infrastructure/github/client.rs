//! GitHub events API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use tracing::debug;

use crate::config::GitHubConfig;
use crate::domain::{DomainError, EventSource, GitHubEvent};

const PROVIDER: &str = "github";

/// Client for `GET /users/{username}/events`
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DomainError::provider(PROVIDER, format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    fn events_url(&self, username: &str) -> String {
        format!("{}/users/{}/events", self.api_url, username)
    }
}

#[async_trait]
impl EventSource for GitHubClient {
    async fn user_events(&self, username: &str) -> Result<Vec<GitHubEvent>, DomainError> {
        let url = self.events_url(username);
        debug!(url = %url, "Fetching GitHub events");

        let mut request = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::provider(PROVIDER, format!("Request failed: {}", e)))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::not_found(format!("User '{}' not found", username)));
        }

        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DomainError::provider(
                PROVIDER,
                format!("Rate limit exceeded (HTTP {}). Try again later or configure a token", status.as_u16()),
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                PROVIDER,
                format!("HTTP {}: {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::provider(PROVIDER, format!("Failed to parse response: {}", e)))
    }
}
