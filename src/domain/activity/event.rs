//! GitHub public event model

use serde::Deserialize;
use serde_json::Value;

/// Repository an event happened in
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// One entry of `GET /users/{username}/events`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GitHubEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: Value,
}

impl GitHubEvent {
    fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }

    fn action(&self) -> String {
        capitalize(self.payload_str("action").unwrap_or("updated"))
    }

    /// One-line, human-readable summary of the event
    pub fn describe(&self) -> String {
        let repo = &self.repo.name;

        match self.event_type.as_str() {
            "PushEvent" => {
                let commits = self
                    .payload
                    .get("size")
                    .and_then(Value::as_u64)
                    .or_else(|| {
                        self.payload
                            .get("commits")
                            .and_then(Value::as_array)
                            .map(|c| c.len() as u64)
                    })
                    .unwrap_or(0);
                let noun = if commits == 1 { "commit" } else { "commits" };
                format!("Pushed {} {} to {}", commits, noun, repo)
            }
            "IssuesEvent" => format!("{} an issue in {}", self.action(), repo),
            "IssueCommentEvent" => format!("Commented on an issue in {}", repo),
            "WatchEvent" => format!("Starred {}", repo),
            "ForkEvent" => format!("Forked {}", repo),
            "CreateEvent" => {
                let ref_type = self.payload_str("ref_type").unwrap_or("repository");
                match self.payload_str("ref") {
                    Some(name) => format!("Created {} {} in {}", ref_type, name, repo),
                    None => format!("Created {} in {}", ref_type, repo),
                }
            }
            "DeleteEvent" => {
                let ref_type = self.payload_str("ref_type").unwrap_or("ref");
                let name = self.payload_str("ref").unwrap_or_default();
                format!("Deleted {} {} in {}", ref_type, name, repo)
            }
            "PullRequestEvent" => format!("{} a pull request in {}", self.action(), repo),
            "PullRequestReviewEvent" => format!("Reviewed a pull request in {}", repo),
            "ReleaseEvent" => format!("{} a release in {}", self.action(), repo),
            "PublicEvent" => format!("Made {} public", repo),
            "MemberEvent" => format!("{} a collaborator to {}", self.action(), repo),
            other => format!("{} in {}", other.strip_suffix("Event").unwrap_or(other), repo),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(event_type: &str, payload: Value) -> GitHubEvent {
        GitHubEvent {
            event_type: event_type.to_string(),
            repo: EventRepo {
                name: "octo/repo".to_string(),
            },
            payload,
        }
    }

    #[test]
    fn test_push_event() {
        assert_eq!(
            event("PushEvent", json!({"size": 3})).describe(),
            "Pushed 3 commits to octo/repo"
        );
        assert_eq!(
            event("PushEvent", json!({"commits": [{"sha": "a"}]})).describe(),
            "Pushed 1 commit to octo/repo"
        );
    }

    #[test]
    fn test_action_events() {
        assert_eq!(
            event("IssuesEvent", json!({"action": "opened"})).describe(),
            "Opened an issue in octo/repo"
        );
        assert_eq!(
            event("PullRequestEvent", json!({"action": "closed"})).describe(),
            "Closed a pull request in octo/repo"
        );
        assert_eq!(
            event("ReleaseEvent", json!({"action": "published"})).describe(),
            "Published a release in octo/repo"
        );
        assert_eq!(
            event("MemberEvent", json!({"action": "added"})).describe(),
            "Added a collaborator to octo/repo"
        );
    }

    #[test]
    fn test_ref_events() {
        assert_eq!(
            event("CreateEvent", json!({"ref_type": "branch", "ref": "main"})).describe(),
            "Created branch main in octo/repo"
        );
        assert_eq!(
            event("CreateEvent", json!({"ref_type": "repository", "ref": null})).describe(),
            "Created repository in octo/repo"
        );
        assert_eq!(
            event("DeleteEvent", json!({"ref_type": "tag", "ref": "v1"})).describe(),
            "Deleted tag v1 in octo/repo"
        );
    }

    #[test]
    fn test_simple_events() {
        assert_eq!(event("WatchEvent", Value::Null).describe(), "Starred octo/repo");
        assert_eq!(event("ForkEvent", Value::Null).describe(), "Forked octo/repo");
        assert_eq!(event("PublicEvent", Value::Null).describe(), "Made octo/repo public");
        assert_eq!(
            event("IssueCommentEvent", Value::Null).describe(),
            "Commented on an issue in octo/repo"
        );
    }

    #[test]
    fn test_unknown_event_type() {
        assert_eq!(
            event("GollumEvent", Value::Null).describe(),
            "Gollum in octo/repo"
        );
    }

    #[test]
    fn test_deserialize_api_payload() {
        let raw = r#"{
            "id": "1",
            "type": "WatchEvent",
            "actor": {"login": "octocat"},
            "repo": {"id": 1, "name": "octo/repo", "url": "https://api.github.com/repos/octo/repo"},
            "payload": {"action": "started"},
            "public": true,
            "created_at": "2024-05-01T12:00:00Z"
        }"#;

        let event: GitHubEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.event_type, "WatchEvent");
        assert_eq!(event.repo.name, "octo/repo");
        assert_eq!(event.describe(), "Starred octo/repo");
    }
}
