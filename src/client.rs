use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{GitHubUser, Profile};

/// Source of profiles for the lookup controller.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, FetchError>;
}

/// Unauthenticated client for the GitHub users endpoint.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            http: build_client(&config.user_agent)?,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Underlying HTTP client, shared with avatar downloads.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// `{base}/users/{username}`, with the username as a single encoded segment.
    pub fn user_url(&self, username: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }

    /// Fetches a GitHub user by username.
    #[instrument(skip(self))]
    pub async fn fetch_user(&self, username: &str) -> Result<GitHubUser, FetchError> {
        let url = self.user_url(username)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, %body, "GitHub API returned an error status");
            return Err(FetchError::Status { status });
        }

        let bytes = response.bytes().await.map_err(FetchError::Transport)?;
        let user: GitHubUser = serde_json::from_slice(&bytes).map_err(FetchError::Decode)?;
        debug!(%status, login = %user.login, "GitHub user fetched");

        Ok(user)
    }
}

#[async_trait]
impl ProfileFetcher for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, FetchError> {
        self.fetch_user(username).await.map(Profile::from)
    }
}

/// Creates a preconfigured HTTP client with required headers.
fn build_client(user_agent: &str) -> Result<Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).context("Invalid User-Agent value")?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

    Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}
