// src/services/activity.rs
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{ActivityFetchState, ActivityLimits, CommitSummary, ReleaseSummary};
use crate::services::github::ActivityClient;

/// One mounted activity panel. Starts in `Loading` and settles exactly once.
pub struct ActivityPanel {
    state: ActivityFetchState,
}

impl ActivityPanel {
    pub fn new() -> Self {
        Self {
            state: ActivityFetchState::Loading,
        }
    }

    pub fn state(&self) -> &ActivityFetchState {
        &self.state
    }

    pub fn into_state(self) -> ActivityFetchState {
        self.state
    }

    /// Fetch commits and releases concurrently and settle on their joint outcome.
    pub async fn load(mut self, client: &ActivityClient, limits: ActivityLimits) -> Self {
        if self.state.is_settled() {
            return self;
        }

        let (commits, releases) = tokio::join!(
            client.fetch_recent_commits(limits.commits),
            client.fetch_recent_releases(limits.releases),
        );

        self.state = settle(commits, releases);
        self
    }
}

impl Default for ActivityPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce the two fetch outcomes to a single state. Either failure fails the
/// whole panel; partial data is never kept.
pub fn settle(
    commits: Result<Vec<CommitSummary>>,
    releases: Result<Vec<ReleaseSummary>>,
) -> ActivityFetchState {
    match (commits, releases) {
        (Ok(commits), Ok(releases)) => {
            let releases = without_drafts(releases);
            info!(
                "Loaded repository activity: {} commits, {} releases",
                commits.len(),
                releases.len()
            );
            ActivityFetchState::Loaded { commits, releases }
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!("Error fetching repository activity: {}", e);
            ActivityFetchState::Failed {
                reason: e.to_string(),
            }
        }
    }
}

pub fn without_drafts(releases: Vec<ReleaseSummary>) -> Vec<ReleaseSummary> {
    releases.into_iter().filter(|r| !r.is_draft).collect()
}
