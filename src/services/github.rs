// src/services/github.rs
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{ActivityError, Result};
use crate::models::{CommitSummary, GitHubCommit, GitHubRelease, ReleaseSummary};

const USER_AGENT: &str = concat!("wolfguard-site/", env!("CARGO_PKG_VERSION"));
const MAX_PER_PAGE: usize = 100;

/// Read-only, unauthenticated client for one repository's public activity.
///
/// Every call is a fresh round trip; nothing is cached.
#[derive(Clone)]
pub struct ActivityClient {
    http_client: reqwest::Client,
    base_url: Url,
    owner: String,
    repo: String,
}

impl ActivityClient {
    pub fn new(base_url: Url, owner: &str, repo: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.github_api_url.clone(),
            &config.github_owner,
            &config.github_repo,
            config.github_timeout(),
        )
    }

    /// Most recent commits, newest first, in the order the API returns them.
    pub async fn fetch_recent_commits(&self, limit: usize) -> Result<Vec<CommitSummary>> {
        let commits: Vec<GitHubCommit> = self.get_list("commits", limit).await?;
        Ok(commits.into_iter().map(CommitSummary::from).collect())
    }

    /// Most recent releases. Drafts are included here; display filters them.
    pub async fn fetch_recent_releases(&self, limit: usize) -> Result<Vec<ReleaseSummary>> {
        let releases: Vec<GitHubRelease> = self.get_list("releases", limit).await?;
        Ok(releases.into_iter().map(ReleaseSummary::from).collect())
    }

    fn endpoint(&self, collection: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.owner,
            self.repo,
            collection
        )
    }

    async fn get_list<T: DeserializeOwned>(&self, collection: &str, limit: usize) -> Result<Vec<T>> {
        let url = self.endpoint(collection);
        let per_page = limit.clamp(1, MAX_PER_PAGE);
        debug!("GET {}?per_page={}", url, per_page);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(&[("per_page", per_page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API returned {} for {}", status, url);
            return Err(ActivityError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let mut items: Vec<T> = serde_json::from_slice(&body)?;
        items.truncate(limit);
        Ok(items)
    }
}
