// src/templates/activity.rs
use chrono::{DateTime, Utc};

use super::html_escape;
use crate::models::{ActivityFetchState, CommitSummary, ReleaseSummary, MAX_COMMIT_MESSAGE_CHARS};
use crate::utils::text::truncate_first_line;
use crate::utils::time::relative_time;

pub const FAILURE_MESSAGE: &str = "Unable to load activity. Please check GitHub directly.";

/// Render the activity panel for `state`. `repo_url` is the public
/// repository page used by every outbound link.
pub fn render(state: &ActivityFetchState, now: DateTime<Utc>, repo_url: &str) -> String {
    match state {
        ActivityFetchState::Loading => render_loading(),
        ActivityFetchState::Failed { .. } => render_failed(repo_url),
        ActivityFetchState::Loaded { commits, releases } => {
            render_loaded(commits, releases, now, repo_url)
        }
    }
}

fn render_loading() -> String {
    r#"<div class="activity-card activity-loading" role="status" aria-live="polite">
        <div class="spinner"></div>
        <p>Loading repository activity...</p>
    </div>"#
        .to_string()
}

fn render_failed(repo_url: &str) -> String {
    format!(
        r#"<div class="activity-card activity-failed">
        <p>{}</p>
        <a href="{}" class="btn btn-secondary" target="_blank" rel="noopener noreferrer">View on GitHub</a>
    </div>"#,
        FAILURE_MESSAGE,
        html_escape(repo_url)
    )
}

fn render_loaded(
    commits: &[CommitSummary],
    releases: &[ReleaseSummary],
    now: DateTime<Utc>,
    repo_url: &str,
) -> String {
    let repo_url = html_escape(repo_url);

    let commits_html = if commits.is_empty() {
        "<p class='empty-state'>No recent commits found</p>".to_string()
    } else {
        commits
            .iter()
            .map(|commit| commit_row(commit, now))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let releases_html = if releases.is_empty() {
        r#"<div class="empty-state">
            <p>No releases yet</p>
            <p class="empty-hint">The project is under active development. Check back soon for the first release!</p>
        </div>"#
            .to_string()
    } else {
        releases
            .iter()
            .map(|release| release_row(release, now))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<div class="activity">
        <h2>Latest Activity</h2>
        <p class="activity-lead">Stay up to date with the latest development progress and releases.</p>

        <div class="activity-grid">
            <div class="activity-card">
                <div class="activity-card-header">
                    <h3>Latest Commits</h3>
                    <a href="{repo}/commits" target="_blank" rel="noopener noreferrer" aria-label="View all commits">↗</a>
                </div>
                <div class="commit-list">
                    {}
                </div>
            </div>

            <div class="activity-card">
                <div class="activity-card-header">
                    <h3>Latest Releases</h3>
                    <a href="{repo}/releases" target="_blank" rel="noopener noreferrer" aria-label="View all releases">↗</a>
                </div>
                <div class="release-list">
                    {}
                </div>
            </div>
        </div>

        <div class="activity-footer">
            <a href="{repo}" class="btn btn-primary" target="_blank" rel="noopener noreferrer">View Full Activity on GitHub</a>
        </div>
    </div>"#,
        commits_html,
        releases_html,
        repo = repo_url,
    )
}

fn commit_row(commit: &CommitSummary, now: DateTime<Utc>) -> String {
    format!(
        r#"<a href="{}" class="commit-row" target="_blank" rel="noopener noreferrer">
                        <div class="commit-message">{}</div>
                        <div class="commit-meta">
                            <span class="commit-author">{}</span>
                            <span class="commit-date">{}</span>
                        </div>
                    </a>"#,
        html_escape(&commit.permalink),
        html_escape(&truncate_first_line(&commit.message, MAX_COMMIT_MESSAGE_CHARS)),
        html_escape(&commit.author_name),
        relative_time(commit.authored_at, now)
    )
}

fn release_row(release: &ReleaseSummary, now: DateTime<Utc>) -> String {
    let badge = if release.is_prerelease {
        r#"<span class="badge badge-warning">Pre-release</span>"#
    } else {
        ""
    };

    let published = release
        .published_at
        .map(|at| format!(r#"<p class="release-date">{}</p>"#, relative_time(at, now)))
        .unwrap_or_default();

    let excerpt = release
        .body_excerpt
        .as_deref()
        .map(|line| format!(r#"<p class="release-excerpt">{}</p>"#, html_escape(line)))
        .unwrap_or_default();

    format!(
        r#"<a href="{}" class="release-row" target="_blank" rel="noopener noreferrer">
                        <div class="release-header">
                            <h4>{}</h4>
                            {}
                        </div>
                        {}
                        {}
                    </a>"#,
        html_escape(&release.permalink),
        html_escape(release.title()),
        badge,
        published,
        excerpt
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GitHubCommit;
    use chrono::TimeZone;

    const REPO: &str = "https://github.com/dantte-lp/wolfguard";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap()
    }

    fn release(id: u64, name: Option<&str>, prerelease: bool, body: Option<&str>) -> ReleaseSummary {
        ReleaseSummary {
            id,
            tag: format!("v0.{}.0", id),
            display_name: name.map(str::to_string),
            published_at: Some(Utc.with_ymd_and_hms(2023, 12, 29, 1, 0, 0).unwrap()),
            permalink: format!("{}/releases/tag/v0.{}.0", REPO, id),
            body_excerpt: body.map(str::to_string),
            is_prerelease: prerelease,
            is_draft: false,
        }
    }

    #[test]
    fn test_commit_row_prefers_login_and_shows_relative_time() {
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

        let state = ActivityFetchState::Loaded {
            commits: vec![raw.into()],
            releases: vec![],
        };
        let html = render(&state, now(), REPO);

        assert!(html.contains(r#"<span class="commit-author">janedoe</span>"#));
        assert!(html.contains(r#"<span class="commit-date">1 hours ago</span>"#));
        assert!(html.contains(r#"<div class="commit-message">Fix bug</div>"#));
        assert!(!html.contains("Longer body"));
        assert!(html.contains(r#"href="https://x/abc123""#));
    }

    #[test]
    fn test_long_commit_message_is_truncated() {
        let commit = CommitSummary {
            identifier: "abc".to_string(),
            message: "x".repeat(95),
            author_name: "jane".to_string(),
            authored_at: now(),
            permalink: "https://x/abc".to_string(),
        };

        let html = commit_row(&commit, now());
        assert!(html.contains(&format!("{}...", "x".repeat(80))));
        assert!(!html.contains(&"x".repeat(81)));
    }

    #[test]
    fn test_release_rows() {
        let state = ActivityFetchState::Loaded {
            commits: vec![],
            releases: vec![
                release(2, Some("WolfGuard 0.2 <beta>"), true, Some("Adds DTLS 1.3")),
                release(1, None, false, None),
            ],
        };
        let html = render(&state, now(), REPO);

        assert!(html.contains("WolfGuard 0.2 &lt;beta&gt;"));
        assert_eq!(html.matches("Pre-release").count(), 1);
        assert!(html.contains("<h4>v0.1.0</h4>"));
        assert!(html.contains("3 days ago"));
        assert!(html.contains("Adds DTLS 1.3"));
        assert!(html.contains("No recent commits found"));
    }

    #[test]
    fn test_empty_releases_placeholder() {
        let state = ActivityFetchState::Loaded {
            commits: vec![],
            releases: vec![],
        };
        let html = render(&state, now(), REPO);

        assert!(html.contains("No releases yet"));
        assert!(!html.contains("release-row"));
    }

    #[test]
    fn test_loading_shows_no_data() {
        let html = render(&ActivityFetchState::Loading, now(), REPO);

        assert!(html.contains("Loading repository activity..."));
        assert!(!html.contains("commit-row"));
        assert!(!html.contains("release-row"));
    }

    #[test]
    fn test_failure_is_generic_with_link() {
        let state = ActivityFetchState::Failed {
            reason: "HTTP error: status 403".to_string(),
        };
        let html = render(&state, now(), REPO);

        assert!(html.contains(FAILURE_MESSAGE));
        assert!(html.contains(&format!(r#"href="{}""#, REPO)));
        assert!(!html.contains("403"));
    }
}
