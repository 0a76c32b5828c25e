//! Top-level error aggregation.

use crate::{ConfigError, DiscordError, GithubError};

/// Top-level error type aggregating every error family in the workspace.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum OctoboardError {
    /// A GitHub API call failed.
    #[display("{_0}")]
    Github(GithubError),
    /// Configuration was missing or malformed.
    #[display("{_0}")]
    Config(ConfigError),
    /// A Discord operation failed.
    #[display("{_0}")]
    Discord(DiscordError),
}

/// Result type using the top-level error.
pub type OctoboardResult<T> = Result<T, OctoboardError>;
