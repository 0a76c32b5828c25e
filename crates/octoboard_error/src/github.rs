//! GitHub API error types.

use derive_getters::Getters;

/// GitHub error variants.
///
/// Represents the failure modes of a single call against the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GithubErrorKind {
    /// The API answered with a non-200 status code.
    ///
    /// The code is preserved so callers can distinguish 404 ("entity not
    /// found") from other upstream failures.
    #[display("GitHub API returned status {_0}")]
    Status(u16),

    /// The request never produced a response (connection refused, DNS, TLS).
    #[display("Transport failure: {_0}")]
    Transport(String),

    /// The response body was not the JSON shape we expected.
    #[display("Malformed JSON response: {_0}")]
    Json(String),

    /// A domain type could not be assembled from the response.
    #[display("Builder error: {_0}")]
    Builder(String),
}

/// GitHub error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("GitHub Error: {} at line {} in {}", kind, line, file)]
pub struct GithubError {
    kind: GithubErrorKind,
    line: u32,
    file: &'static str,
}

impl GithubError {
    /// Create a new GithubError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use octoboard_error::{GithubError, GithubErrorKind};
    ///
    /// let err = GithubError::new(GithubErrorKind::Status(404));
    /// assert!(err.is_not_found());
    /// ```
    #[track_caller]
    pub fn new(kind: GithubErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The upstream HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            GithubErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }

    /// True if the upstream reported 404 for the requested entity.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_is_preserved() {
        let err = GithubError::new(GithubErrorKind::Status(503));
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_distinguishable() {
        let err = GithubError::new(GithubErrorKind::Status(404));
        assert!(err.is_not_found());

        let err = GithubError::new(GithubErrorKind::Transport("refused".into()));
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
