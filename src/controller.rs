//! Lookup state machine behind the profile screen.
//!
//! ```text
//! Idle ──submit("")──────────────────────────▶ Failure(EMPTY_QUERY_MESSAGE)
//!   │
//!   └─submit(user)──▶ Loading ──fetch ok────▶ Success(profile)
//!                        │
//!                        └────fetch err─────▶ Failure("Erro ao buscar o perfil {user}")
//! ```
//!
//! Every submission starts from scratch: the previous profile or error is
//! dropped before the next state is chosen. Overlapping submissions are not
//! cancelled, but only the most recently begun one may publish its result.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::client::ProfileFetcher;
use crate::error::LookupError;
use crate::models::Profile;
use crate::opener::LinkOpener;

/// Shown when a lookup is submitted with no username.
pub const EMPTY_QUERY_MESSAGE: &str =
    "Digite um nome de usuário para buscar o perfil. \n      Exemplo: facebook";

/// Shown for every failed fetch, whatever the cause.
pub fn fetch_failed_message(username: &str) -> String {
    format!("Erro ao buscar o perfil {username}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(Profile),
    Failure(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Success(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// A lookup that has passed validation and is waiting on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    username: String,
    ticket: u64,
}

impl PendingLookup {
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Result of asking to open the current profile in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Opened,
    /// The host cannot handle the URL; nothing happens.
    Unsupported,
    /// There is no fetched profile to open.
    NoProfile,
    /// The host accepted the URL but failed to open it.
    Failed,
}

#[derive(Debug, Default)]
struct Inner {
    query: String,
    state: LookupState,
    /// Number of lookups begun so far.
    issued: u64,
}

pub struct LookupController<F, O> {
    fetcher: F,
    opener: O,
    inner: Mutex<Inner>,
}

impl<F, O> LookupController<F, O>
where
    F: ProfileFetcher,
    O: LinkOpener,
{
    pub fn new(fetcher: F, opener: O) -> Self {
        Self {
            fetcher,
            opener,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    pub fn set_query(&self, text: impl Into<String>) {
        self.lock().query = text.into();
    }

    pub fn state(&self) -> LookupState {
        self.lock().state.clone()
    }

    /// Synchronous half of a submission: clears the query, validates it and
    /// moves to `Loading` or `Failure`. Returns the lookup to resolve, if any.
    pub fn begin_lookup(&self, query: &str) -> Option<PendingLookup> {
        let mut inner = self.lock();
        inner.query.clear();
        inner.issued += 1;

        let username = query.trim();
        if username.is_empty() {
            debug!("Rejected lookup with empty username");
            inner.state = LookupState::Failure(LookupError::EmptyQuery.user_message());
            return None;
        }

        info!(username, "Looking up GitHub profile");
        inner.state = LookupState::Loading;

        Some(PendingLookup {
            username: username.to_string(),
            ticket: inner.issued,
        })
    }

    /// Awaits the fetch for `pending` and publishes the outcome. Returns
    /// `None` when a newer lookup has begun in the meantime; the stale result
    /// is dropped and the state is left alone.
    pub async fn resolve(&self, pending: PendingLookup) -> Option<LookupState> {
        let result = self.fetcher.fetch_profile(&pending.username).await;

        let next = match result {
            Ok(profile) => {
                info!(login = %profile.login, "Profile loaded");
                LookupState::Success(profile)
            }
            Err(source) => {
                let not_found = source.is_not_found();
                let err = LookupError::FetchFailed {
                    username: pending.username.clone(),
                    source,
                };
                warn!(
                    error = %err,
                    cause = %source_of(&err),
                    not_found,
                    "Profile lookup failed"
                );
                LookupState::Failure(err.user_message())
            }
        };

        self.publish(pending.ticket, next)
    }

    /// Full submission: validate, fetch and return the resulting state.
    pub async fn submit_lookup(&self, query: &str) -> LookupState {
        match self.begin_lookup(query) {
            Some(pending) => match self.resolve(pending).await {
                Some(state) => state,
                None => self.state(),
            },
            None => self.state(),
        }
    }

    /// Submits whatever is currently in the query field.
    pub async fn submit_current(&self) -> LookupState {
        let query = self.query();
        self.submit_lookup(&query).await
    }

    /// Opens the fetched profile in the browser if the host can handle it.
    pub fn open_current_profile_link(&self) -> LinkOutcome {
        let url = match &self.lock().state {
            LookupState::Success(profile) => profile.profile_url.clone(),
            _ => return LinkOutcome::NoProfile,
        };

        if !self.opener.can_open(&url) {
            debug!(%url, "Host cannot open profile URL");
            return LinkOutcome::Unsupported;
        }

        info!(%url, "Opening profile");
        match self.opener.open(&url) {
            Ok(()) => LinkOutcome::Opened,
            Err(e) => {
                warn!(%url, error = %e, "Failed to open profile URL");
                LinkOutcome::Failed
            }
        }
    }

    fn publish(&self, ticket: u64, next: LookupState) -> Option<LookupState> {
        let mut inner = self.lock();
        if ticket != inner.issued {
            debug!(ticket, latest = inner.issued, "Discarding stale lookup result");
            return None;
        }
        inner.state = next.clone();
        Some(next)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn source_of(err: &LookupError) -> String {
    std::error::Error::source(err)
        .map(ToString::to_string)
        .unwrap_or_default()
}
