//! GitHub API integration

mod client;

pub use client::GitHubClient;
