use serde::Deserialize;

/// Represents a GitHub user profile from the `/users/{username}` API.
///
/// Only the fields the lookup screen renders are consumed; everything else
/// in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub name: Option<String>,
    pub login: String,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
}

/// Snapshot of a fetched profile. Replaced wholesale on every successful
/// lookup, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: Option<String>,
    pub login: String,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub profile_url: String,
}

impl From<GitHubUser> for Profile {
    fn from(user: GitHubUser) -> Self {
        Self {
            display_name: user.name,
            login: user.login,
            bio: user.bio,
            avatar_url: user.avatar_url,
            profile_url: user.html_url,
        }
    }
}
