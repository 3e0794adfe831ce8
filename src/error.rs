use reqwest::StatusCode;
use thiserror::Error;

use crate::controller::{fetch_failed_message, EMPTY_QUERY_MESSAGE};

/// Why a profile fetch failed. The lookup screen collapses every variant into
/// one message, but the cause is kept for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub API responded with {status}")]
    Status { status: StatusCode },

    #[error("request to the GitHub API failed")]
    Transport(#[source] reqwest::Error),

    #[error("failed to deserialize GitHub user response")]
    Decode(#[source] serde_json::Error),

    #[error("cannot build a user URL from base {0}")]
    InvalidEndpoint(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status } if *status == StatusCode::NOT_FOUND)
    }
}

/// Failures of a single lookup, handled entirely at the controller boundary.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("empty username")]
    EmptyQuery,

    #[error("lookup of {username} failed")]
    FetchFailed {
        username: String,
        #[source]
        source: FetchError,
    },
}

impl LookupError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
            Self::FetchFailed { username, .. } => fetch_failed_message(username),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}
