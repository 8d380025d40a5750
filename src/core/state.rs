//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── page: u32                  // 1-based page cursor
//! ├── selection: Option<Post>    // chosen post, never cleared
//! ├── pages: PageStore           // keyed cache + in-flight set
//! └── status_message: String     // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! Selection holds an owned clone of a fetched post. The posts themselves
//! live in the page store; cloning on select keeps the selected post
//! displayable after the user navigates to another page, which matches the
//! upstream behavior of never clearing the selection.

use std::time::Duration;

use crate::api::Post;
use crate::core::config::ResolvedConfig;
use crate::core::pages::PageStore;

pub struct App {
    pub page: u32,
    pub selection: Option<Post>,
    pub pages: PageStore,
    pub status_message: String,
}

impl App {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            page: 1,
            selection: None,
            pages: PageStore::new(stale_after),
            status_message: String::from("Welcome to Folio!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(Duration::from_millis(config.stale_ms))
    }
}
