//! Authenticated GitHub REST API client.

use async_trait::async_trait;
use octoboard_error::{GithubError, GithubErrorKind, GithubResult};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::Value as JsonValue;
use tracing::{debug, error, instrument};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_USER_AGENT: &str = "octoboard";

/// Transport seam for GitHub API calls.
///
/// The aggregation layer only needs "GET this URL, give me JSON"; keeping
/// that behind a trait lets tests script upstream responses without a
/// network.
#[async_trait]
pub trait GithubTransport: Send + Sync {
    /// Issue a GET request and return the parsed JSON payload.
    ///
    /// # Errors
    ///
    /// Fails with `GithubErrorKind::Status` for any non-200 response (the
    /// status code is preserved), `Transport` if the request never completes,
    /// and `Json` if the body does not parse.
    async fn get_json(&self, url: &str) -> GithubResult<JsonValue>;
}

/// GitHub API client.
///
/// Sends bearer-authenticated GET requests. No retries and no timeout
/// overrides beyond transport defaults; failures propagate immediately to
/// the caller.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    access_token: String,
}

impl GithubClient {
    /// Creates a new GitHub client.
    ///
    /// # Arguments
    ///
    /// * `access_token` - GitHub personal access token used as a bearer token
    pub fn new(access_token: impl Into<String>) -> Self {
        debug!("Creating new GitHub client");
        Self {
            client: Client::new(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl GithubTransport for GithubClient {
    #[instrument(skip(self))]
    async fn get_json(&self, url: &str) -> GithubResult<JsonValue> {
        debug!("Sending request to GitHub API");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, GITHUB_USER_AGENT)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to GitHub API");
                GithubError::new(GithubErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            error!(status = %status, "GitHub API returned non-200 status");
            return Err(GithubError::new(GithubErrorKind::Status(status.as_u16())));
        }

        let payload: JsonValue = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse GitHub response");
            GithubError::new(GithubErrorKind::Json(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!("Received response from GitHub");
        Ok(payload)
    }
}
