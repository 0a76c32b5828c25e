//! GitHub contributor aggregation core for octoboard.
//!
//! This crate owns everything between the Discord layer and the GitHub REST
//! API: the authenticated upstream client, the contributor roster aggregation
//! across an organization's repositories, the pull-request leaderboard, and
//! on-demand contributor profiles. The expensive aggregates are memoized in a
//! TTL cache so repeated slash commands do not re-trigger a cascade of
//! upstream calls.

#![warn(missing_docs)]

mod client;
mod config;
mod directory;
mod models;

pub use client::{GithubClient, GithubTransport};
pub use config::GithubConfig;
pub use directory::{ContributorDirectory, CONTRIBUTORS_KEY, LEADERBOARD_KEY};
pub use models::{ContributorProfile, ContributorProfileBuilder, LeaderboardEntry};
