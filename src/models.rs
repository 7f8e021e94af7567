// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMMIT_LIMIT: usize = 5;
pub const DEFAULT_RELEASE_LIMIT: usize = 3;
pub const MAX_COMMIT_MESSAGE_CHARS: usize = 80;

// Display models
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitSummary {
    pub identifier: String,
    pub message: String,
    pub author_name: String,
    pub authored_at: DateTime<Utc>,
    pub permalink: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseSummary {
    pub id: u64,
    pub tag: String,
    pub display_name: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub permalink: String,
    pub body_excerpt: Option<String>,
    pub is_prerelease: bool,
    pub is_draft: bool,
}

impl ReleaseSummary {
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ActivityFetchState {
    Loading,
    Loaded {
        commits: Vec<CommitSummary>,
        releases: Vec<ReleaseSummary>,
    },
    Failed {
        reason: String,
    },
}

impl ActivityFetchState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ActivityFetchState::Loading)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ActivityLimits {
    pub commits: usize,
    pub releases: usize,
}

impl Default for ActivityLimits {
    fn default() -> Self {
        Self {
            commits: DEFAULT_COMMIT_LIMIT,
            releases: DEFAULT_RELEASE_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodeListing {
    pub source_text: String,
    pub language_tag: String,
    pub filename_label: Option<String>,
    pub collapse_threshold_lines: Option<usize>,
    pub show_line_numbers: bool,
    /// CSS length capping the code body, e.g. `24rem`.
    pub max_height: Option<String>,
}

impl CodeListing {
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            language_tag: "bash".to_string(),
            filename_label: None,
            collapse_threshold_lines: None,
            show_line_numbers: false,
            max_height: None,
        }
    }

    pub fn language(mut self, tag: &str) -> Self {
        self.language_tag = tag.to_string();
        self
    }

    pub fn filename(mut self, label: &str) -> Self {
        self.filename_label = Some(label.to_string());
        self
    }

    pub fn collapse_at(mut self, lines: usize) -> Self {
        self.collapse_threshold_lines = Some(lines);
        self
    }

    pub fn line_numbers(mut self) -> Self {
        self.show_line_numbers = true;
        self
    }

    pub fn max_height(mut self, height: &str) -> Self {
        self.max_height = Some(height.to_string());
        self
    }
}

// GitHub API payloads
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubCommit {
    pub sha: String,
    pub commit: GitHubCommitDetail,
    pub html_url: String,
    pub author: Option<GitHubAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubCommitDetail {
    pub message: String,
    pub author: GitHubSignature,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubSignature {
    pub name: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubAccount {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRelease {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub html_url: String,
    pub body: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub draft: bool,
}

impl From<GitHubCommit> for CommitSummary {
    fn from(raw: GitHubCommit) -> Self {
        let author_name = raw
            .author
            .map(|account| account.login)
            .filter(|login| !login.is_empty())
            .unwrap_or(raw.commit.author.name);

        Self {
            identifier: raw.sha,
            message: raw.commit.message,
            author_name,
            authored_at: raw.commit.author.date,
            permalink: raw.html_url,
        }
    }
}

impl From<GitHubRelease> for ReleaseSummary {
    fn from(raw: GitHubRelease) -> Self {
        let body_excerpt = raw
            .body
            .as_deref()
            .map(crate::utils::text::first_line)
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string);

        Self {
            id: raw.id,
            tag: raw.tag_name,
            display_name: raw.name.filter(|name| !name.is_empty()),
            published_at: raw.published_at,
            permalink: raw.html_url,
            body_excerpt,
            is_prerelease: raw.prerelease,
            is_draft: raw.draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_prefers_linked_login() {
        let raw: GitHubCommit = serde_json::from_value(serde_json::json!({
            "sha": "abc123",
            "commit": {
                "message": "Fix bug\n\nLonger body",
                "author": { "name": "Jane", "date": "2024-01-01T00:00:00Z" }
            },
            "html_url": "https://x/abc123",
            "author": { "login": "janedoe" }
        }))
        .unwrap();

        let summary = CommitSummary::from(raw);
        assert_eq!(summary.identifier, "abc123");
        assert_eq!(summary.author_name, "janedoe");
        assert_eq!(summary.permalink, "https://x/abc123");
    }

    #[test]
    fn test_commit_falls_back_to_raw_name() {
        let raw: GitHubCommit = serde_json::from_value(serde_json::json!({
            "sha": "def456",
            "commit": {
                "message": "Initial commit",
                "author": { "name": "Jane", "date": "2024-01-01T00:00:00Z" }
            },
            "html_url": "https://x/def456",
            "author": null
        }))
        .unwrap();

        assert_eq!(CommitSummary::from(raw).author_name, "Jane");
    }

    #[test]
    fn test_release_title_and_excerpt() {
        let raw: GitHubRelease = serde_json::from_value(serde_json::json!({
            "id": 7,
            "tag_name": "v0.1.0",
            "name": "",
            "published_at": null,
            "html_url": "https://x/releases/v0.1.0",
            "body": "First preview\r\nMore notes",
            "prerelease": true,
            "draft": false
        }))
        .unwrap();

        let release = ReleaseSummary::from(raw);
        assert_eq!(release.title(), "v0.1.0");
        assert_eq!(release.body_excerpt.as_deref(), Some("First preview"));
        assert!(release.is_prerelease);
        assert!(release.published_at.is_none());
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let json = serde_json::to_value(ActivityFetchState::Failed {
            reason: "HTTP error: status 500".to_string(),
        })
        .unwrap();

        assert_eq!(json["state"], "failed");
        assert_eq!(json["reason"], "HTTP error: status 500");
    }
}
