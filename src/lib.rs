//! GitHub profile lookup: type a username, fetch the public profile from the
//! GitHub REST API, show it, and open it in the browser.
//!
//! The UI lives in the `github-profile` binary; this library holds everything
//! it drives.

pub mod avatar;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod opener;
pub mod theme;

pub use client::{GitHubClient, ProfileFetcher};
pub use config::AppConfig;
pub use controller::{LinkOutcome, LookupController, LookupState, PendingLookup};
pub use error::{ConfigError, FetchError, LookupError};
pub use models::{GitHubUser, Profile};
pub use opener::{LinkOpener, SystemLinkOpener};
