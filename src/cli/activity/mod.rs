//! Activity command - prints a GitHub user's recent public events

use clap::Args;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::activity::validate_username;
use crate::domain::{DomainError, EventSource, GitHubEvent};
use crate::infrastructure::github::GitHubClient;
use crate::infrastructure::logging;

/// Arguments for the activity command
#[derive(Args, Clone)]
pub struct ActivityArgs {
    /// GitHub username
    pub username: String,

    /// Maximum number of events to print
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// GitHub API base URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: ActivityArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    if let Some(url) = &args.api_url {
        config.github.api_url = url.clone();
    }

    let client = GitHubClient::new(&config.github)?;
    let output = fetch_activity(&client, &args.username, args.limit).await?;
    print!("{}", output);

    Ok(())
}

/// Validate the username, fetch events and render them
pub async fn fetch_activity(
    source: &dyn EventSource,
    username: &str,
    limit: usize,
) -> Result<String, DomainError> {
    let username = validate_username(username)?;
    let events = source.user_events(&username).await?;
    debug!(username = %username, count = events.len(), "Fetched events");

    Ok(render_activity(&username, &events, limit))
}

/// One `- description` line per event, newest first
pub fn render_activity(username: &str, events: &[GitHubEvent], limit: usize) -> String {
    if events.is_empty() {
        return format!("No recent activity found for {}.\n", username);
    }

    let mut output = format!("Recent activity for {}:\n", username);

    for event in events.iter().take(limit) {
        output.push_str("- ");
        output.push_str(&event.describe());
        output.push('\n');
    }

    output
}
