//! Result caching with TTL support.
//!
//! This crate provides the caching infrastructure that keeps repeated bot
//! commands from re-triggering cascades of GitHub API calls.

#![warn(missing_docs)]

mod cache;

pub use cache::{CacheEntry, TtlCache, DEFAULT_TTL};
