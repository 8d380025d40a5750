//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{ApiError, Post, PostFetcher};
use crate::core::pages::DEFAULT_STALE_AFTER;
use crate::core::state::App;

/// Creates a test App with the default staleness window.
pub fn test_app() -> App {
    App::new(DEFAULT_STALE_AFTER)
}

/// Builds `n` posts with ids 1..=n in server order.
pub fn sample_posts(n: usize) -> Vec<Post> {
    (1..=n as u64)
        .map(|id| Post {
            id,
            user_id: (id - 1) / 10 + 1,
            title: format!("post title {id}"),
            body: format!("body of post {id}"),
        })
        .collect()
}

/// A fetcher that serves a canned result without touching the network.
pub struct StubFetcher {
    pub result: Result<Vec<Post>, &'static str>,
}

#[async_trait]
impl PostFetcher for StubFetcher {
    async fn fetch_page(&self, _page: u32) -> Result<Vec<Post>, ApiError> {
        self.result
            .clone()
            .map_err(|msg| ApiError::Network(msg.to_string()))
    }
}
