//! Wire and domain models for the GitHub core.
//!
//! The `*Json` types mirror only the fields of the GitHub REST responses the
//! core depends on; everything else in the payloads is ignored. The domain
//! types are what the Discord layer consumes.

use serde::{Deserialize, Serialize};

/// One repository from the org-repositories listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepoJson {
    pub name: String,
}

/// One entry from a repository's contributor listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepoContributorJson {
    pub login: String,
}

/// Result envelope of the issue-search endpoint; only the count matters.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchCountJson {
    pub total_count: u64,
}

/// A user's public profile record.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserJson {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// A contributor's full profile, resolved live on every request.
///
/// Never cached and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ContributorProfile {
    /// GitHub login.
    login: String,
    /// Display name, when the user has set one.
    name: Option<String>,
    /// Avatar image URL.
    avatar_url: String,
    /// Profile bio, when the user has set one.
    bio: Option<String>,
    /// Pull requests authored against the organization.
    total_pulls: Option<u64>,
}

impl ContributorProfile {
    /// Creates a new builder for `ContributorProfile`.
    pub fn builder() -> ContributorProfileBuilder {
        ContributorProfileBuilder::default()
    }
}

/// One scored contributor on the leaderboard.
///
/// Entries only exist for contributors with at least one matching pull
/// request; rank is derived from array position after a descending sort and
/// is deliberately not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LeaderboardEntry {
    login: String,
    score: u64,
}

impl LeaderboardEntry {
    /// Create an entry for a contributor with the given pull-request count.
    pub fn new(login: impl Into<String>, score: u64) -> Self {
        Self {
            login: login.into(),
            score,
        }
    }
}
