//! Error types for the octoboard bot.
//!
//! This crate provides the foundation error types used throughout the
//! octoboard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use octoboard_error::{GithubError, GithubErrorKind, OctoboardResult};
//!
//! fn fetch_data() -> OctoboardResult<String> {
//!     Err(GithubError::new(GithubErrorKind::Status(500)))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod discord;
mod error;
mod github;

pub use config::ConfigError;
pub use discord::{DiscordError, DiscordErrorKind, DiscordResult};
pub use error::{OctoboardError, OctoboardResult};
pub use github::{GithubError, GithubErrorKind, GithubResult};
