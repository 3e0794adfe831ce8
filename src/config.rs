//! Runtime configuration, read from the process environment after `.env`
//! has been loaded.

use reqwest::Url;

use crate::error::ConfigError;
use crate::theme::AVATAR_SIZE;

pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const USER_AGENT_VAR: &str = "GITHUB_PROFILE_USER_AGENT";
pub const AVATAR_SIZE_VAR: &str = "GITHUB_PROFILE_AVATAR_SIZE";
pub const LOG_LEVEL_VAR: &str = "GITHUB_PROFILE_LOG";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the GitHub REST API; user lookups go to `{root}/users/{login}`.
    pub api_base_url: Url,
    pub user_agent: String,
    /// Requested avatar edge length in pixels.
    pub avatar_size: u32,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            user_agent: default_user_agent(),
            avatar_size: AVATAR_SIZE,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(API_URL_VAR) {
            config.api_base_url = parse_api_url(&raw)?;
        }

        if let Some(agent) = get(USER_AGENT_VAR) {
            config.user_agent = agent;
        }

        if let Some(raw) = get(AVATAR_SIZE_VAR) {
            config.avatar_size = match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                Ok(_) => return Err(invalid(AVATAR_SIZE_VAR, &raw, "must be positive")),
                Err(e) => return Err(invalid(AVATAR_SIZE_VAR, &raw, &e.to_string())),
            };
        }

        config.log_level = get(LOG_LEVEL_VAR);

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| invalid(API_URL_VAR, raw, &e.to_string()))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(API_URL_VAR, raw, "expected an http(s) base URL"));
    }

    Ok(url)
}

fn invalid(var: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
