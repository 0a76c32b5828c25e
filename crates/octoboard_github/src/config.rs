//! Environment-backed configuration for the GitHub core.

use derive_getters::Getters;
use octoboard_error::ConfigError;

/// Configuration consumed by the GitHub core.
#[derive(Debug, Clone, Getters)]
pub struct GithubConfig {
    /// Organization whose repositories are scanned for contributors.
    organization: String,
    /// Personal access token attached as a bearer token by the client.
    access_token: String,
}

impl GithubConfig {
    /// Create a config from explicit values.
    pub fn new(organization: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            access_token: access_token.into(),
        }
    }

    /// Load configuration from the `ORGANIZATION` and `ACCESS_TOKEN`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the missing variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let organization = std::env::var("ORGANIZATION")
            .map_err(|_| ConfigError::new("ORGANIZATION is not set"))?;
        let access_token = std::env::var("ACCESS_TOKEN")
            .map_err(|_| ConfigError::new("ACCESS_TOKEN is not set"))?;
        Ok(Self {
            organization,
            access_token,
        })
    }
}
