//! Facade crate for the octoboard workspace.
//!
//! Re-exports the public surface of the internal crates so downstream code
//! can depend on one crate.

#![warn(missing_docs)]

pub use octoboard_cache::{CacheEntry, TtlCache, DEFAULT_TTL};
pub use octoboard_error::{
    ConfigError, DiscordError, DiscordErrorKind, GithubError, GithubErrorKind, OctoboardError,
    OctoboardResult,
};
pub use octoboard_github::{
    ContributorDirectory, ContributorProfile, GithubClient, GithubConfig, GithubTransport,
    LeaderboardEntry,
};
pub use octoboard_social::OctoboardBot;
