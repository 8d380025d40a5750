//! # Page Store
//!
//! Keyed cache backing the fetch coordinator: one entry per 1-based page
//! number, plus an in-flight set for de-duplication.
//!
//! The store itself does no I/O. Callers ask [`PageStore::begin_fetch`]
//! whether a request must actually go out for a key; completions come back
//! through [`PageStore::complete`] keyed by the page they were issued for,
//! so a response that lands after the user navigated away populates its own
//! key and nothing else.
//!
//! A successful fetch is fresh for `stale_after` (default 2000 ms). Within
//! that window repeated `begin_fetch` calls are no-ops and the cached posts
//! keep being served. After the window a new request is issued while the
//! stale posts keep rendering until the refetch lands.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::api::Post;

/// Default freshness window for a fetched page.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_millis(2000);

enum PageEntry {
    Ready {
        posts: Vec<Post>,
        fetched_at: Instant,
    },
    Failed {
        message: String,
    },
}

/// What the renderer sees for a page key.
#[derive(Debug, PartialEq)]
pub enum PageView<'a> {
    /// No usable data yet: never requested, request outstanding, or
    /// re-requested after a failure.
    Loading,
    /// The last request for this key failed.
    Error(&'a str),
    /// Posts in server order. May be stale with a refetch outstanding.
    Ready(&'a [Post]),
}

pub struct PageStore {
    stale_after: Duration,
    entries: HashMap<u32, PageEntry>,
    in_flight: HashSet<u32>,
}

impl PageStore {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            entries: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Decide whether a request must be issued for `page`, and if so mark
    /// the key in-flight. Returns `false` while a request is outstanding or
    /// a fresh success is cached — that is the de-duplication rule.
    pub fn begin_fetch(&mut self, page: u32) -> bool {
        debug_assert!(page >= 1, "pages are 1-based");
        if self.in_flight.contains(&page) {
            return false;
        }
        if let Some(PageEntry::Ready { fetched_at, .. }) = self.entries.get(&page)
            && fetched_at.elapsed() < self.stale_after
        {
            return false;
        }
        self.in_flight.insert(page);
        true
    }

    /// Record the outcome of the request issued for `page`.
    pub fn complete(&mut self, page: u32, result: Result<Vec<Post>, String>) {
        self.in_flight.remove(&page);
        let entry = match result {
            Ok(posts) => PageEntry::Ready {
                posts,
                fetched_at: Instant::now(),
            },
            Err(message) => PageEntry::Failed { message },
        };
        self.entries.insert(page, entry);
    }

    /// Tri-state view of a page key.
    ///
    /// A cached success is served even while stale (a refetch may be
    /// outstanding); a cached failure reads as `Loading` once a new request
    /// is in flight for the key.
    pub fn state_for(&self, page: u32) -> PageView<'_> {
        match self.entries.get(&page) {
            Some(PageEntry::Ready { posts, .. }) => PageView::Ready(posts),
            Some(PageEntry::Failed { message }) => {
                if self.in_flight.contains(&page) {
                    PageView::Loading
                } else {
                    PageView::Error(message)
                }
            }
            None => PageView::Loading,
        }
    }

    /// True while a request for `page` is outstanding.
    pub fn is_in_flight(&self, page: u32) -> bool {
        self.in_flight.contains(&page)
    }

    #[cfg(test)]
    fn age_entry(&mut self, page: u32, by: Duration) {
        if let Some(PageEntry::Ready { fetched_at, .. }) = self.entries.get_mut(&page) {
            *fetched_at = fetched_at.checked_sub(by).unwrap();
        }
    }
}
