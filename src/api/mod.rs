//! # Posts API
//!
//! HTTP access to the remote posts collection. This is the only module that
//! talks to the network. The rest of the app sees it through the
//! [`PostFetcher`] trait, so tests can substitute a stub.

mod client;
mod types;

pub use client::{ApiError, HttpPostClient, PostFetcher};
pub use types::Post;
