//! GitHub API integration

use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::types::Repository;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

/// Default `User-Agent` sent with every API request
pub const USER_AGENT: &str = concat!("repolist/", env!("CARGO_PKG_VERSION"));

/// Anything that can list a user's repositories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch every repository the API returns for `username`, in API order
    async fn list_user_repositories(&self, username: &str) -> Result<Vec<Repository>>;
}

/// GitHub REST API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: Url,
}

impl GitHubClient {
    /// Create a client for the API rooted at `api_url`
    pub fn new(api_url: &str, user_agent: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| Error::Config(format!("Invalid API URL {}: {}", api_url, e)))?;
        if api_url.cannot_be_a_base() {
            return Err(Error::Config(format!("API URL cannot be a base: {}", api_url)));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, api_url })
    }

    /// Create a client from the `[github]` config section
    pub fn from_config(config: &GitHubConfig) -> Result<Self> {
        Self::new(&config.api_url, &config.user_agent)
    }

    /// `{api}/users/{username}/repos`
    pub fn repos_url(&self, username: &str) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["users", username, "repos"]);
        }
        url
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_user_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = self.repos_url(username);
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::GitHub(format!(
                "{} returned {}: {}",
                url,
                status,
                api_message(&body)
            )));
        }

        let repos = parse_repositories(&body)?;
        debug!("Received {} repositories for {}", repos.len(), username);
        Ok(repos)
    }
}

/// JSONP-style wrapper: `{ "meta": {...}, "data": [...] }`
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Vec<Repository>,
}

/// Parse a repositories response, either a bare array or an envelope
pub fn parse_repositories(body: &str) -> Result<Vec<Repository>> {
    if body.trim_start().starts_with('[') {
        Ok(serde_json::from_str(body)?)
    } else {
        let envelope: Envelope = serde_json::from_str(body)?;
        Ok(envelope.data)
    }
}

/// Pull the `message` out of a GitHub error body, or fall back to the raw text
fn api_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }

    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => err.message,
        Err(_) => body.trim().chars().take(200).collect(),
    }
}
