//! Discord integration for octoboard.
//!
//! This crate owns everything user-facing: slash-command registration and
//! dispatch, autocomplete, embed rendering, pagination, and the mapping from
//! typed upstream errors to chat messages. The GitHub core hands it an
//! ordered leaderboard and profile records; all text lives here.

#![warn(missing_docs)]

mod client;
mod commands;
mod handler;

pub use client::OctoboardBot;
pub use commands::{github_error_message, hero_embed, leaderboard_embed, PAGE_SIZE};
pub use handler::OctoboardHandler;
