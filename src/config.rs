// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

use crate::models::ActivityLimits;

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub github_api_url: Url,
    pub github_owner: String,
    pub github_repo: String,
    pub commit_limit: usize,
    pub release_limit: usize,
    pub github_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            github_api_url: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string())
                .parse()?,
            github_owner: std::env::var("GITHUB_OWNER")
                .unwrap_or_else(|_| "dantte-lp".to_string()),
            github_repo: std::env::var("GITHUB_REPO")
                .unwrap_or_else(|_| "wolfguard".to_string()),
            commit_limit: std::env::var("ACTIVITY_COMMIT_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
            release_limit: std::env::var("ACTIVITY_RELEASE_LIMIT")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
            github_timeout_secs: std::env::var("GITHUB_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string()) // seconds
                .parse()?,
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn activity_limits(&self) -> ActivityLimits {
        ActivityLimits {
            commits: self.commit_limit,
            releases: self.release_limit,
        }
    }

    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_secs)
    }

    /// Public page of the tracked repository, used for fallback links.
    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}/{}", self.github_owner, self.github_repo)
    }
}

#[cfg(test)]
impl Config {
    pub fn for_api(api_url: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            github_api_url: api_url.parse().unwrap(),
            github_owner: "dantte-lp".to_string(),
            github_repo: "wolfguard".to_string(),
            commit_limit: 5,
            release_limit: 3,
            github_timeout_secs: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_url_and_addr() {
        let config = Config::for_api("http://127.0.0.1:9999");

        assert_eq!(config.repository_url(), "https://github.com/dantte-lp/wolfguard");
        assert_eq!(config.server_addr().unwrap().to_string(), "127.0.0.1:0");
        assert_eq!(config.activity_limits().commits, 5);
        assert_eq!(config.activity_limits().releases, 3);
    }
}
