use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};

use super::types::Post;

/// Errors that can occur while fetching a page of posts.
/// All variants collapse to a display string for the UI; none is retried here.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Http { status: u16 },
    /// The response body was not a well-formed array of posts.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status } => write!(f, "server error (HTTP {status})"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Fetches one page of posts. The seam between the app and the network.
#[async_trait]
pub trait PostFetcher: Send + Sync {
    /// Fetch the given 1-based page. Issues exactly one request per call.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Post>, ApiError>;
}

/// reqwest-backed [`PostFetcher`] against a JSONPlaceholder-style endpoint:
/// `GET {base_url}/posts?_limit={page_size}&_page={page}`.
pub struct HttpPostClient {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl HttpPostClient {
    pub fn new(base_url: String, page_size: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
        }
    }
}

#[async_trait]
impl PostFetcher for HttpPostClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Post>, ApiError> {
        debug_assert!(page >= 1, "pages are 1-based");
        let url = format!("{}/posts", self.base_url);
        debug!("GET {} _limit={} _page={}", url, self.page_size, page);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("_limit", self.page_size.to_string()),
                ("_page", page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("page {} request failed: HTTP {}", page, status);
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let posts: Vec<Post> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        debug!("page {} fetched: {} posts", page, posts.len());
        Ok(posts)
    }
}
