//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User presses Right? That's `Action::NextPage`.
//! A fetch lands? That's `Action::PageFetched { page, result }`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No side effects here. I/O happens elsewhere:
//! when a page actually needs fetching, `update()` returns
//! `Effect::FetchPage` and the TUI layer spawns the request.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply actions, assert on the state.

use crate::api::Post;
use crate::core::state::App;

/// Everything that can happen in the app.
#[derive(Debug, Clone)]
pub enum Action {
    /// Go back one page, floored at page 1.
    PreviousPage,
    /// Go forward one page. No upper bound is enforced.
    NextPage,
    /// User activated a list entry.
    SelectPost(Post),
    /// A fetch issued for `page` finished, successfully or not.
    PageFetched {
        page: u32,
        result: Result<Vec<Post>, String>,
    },
    /// Ask for the current page again (initial load, manual refresh).
    Refresh,
    Quit,
}

/// Work the caller must perform after `update()` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue one HTTP request for this page and report back with
    /// `Action::PageFetched`.
    FetchPage(u32),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::PreviousPage => {
            if app.page > 1 {
                app.page -= 1;
            }
            ensure_page(app)
        }
        Action::NextPage => {
            app.page += 1;
            ensure_page(app)
        }
        Action::SelectPost(post) => {
            app.status_message = format!("Post {}", post.id);
            app.selection = Some(post);
            Effect::None
        }
        Action::PageFetched { page, result } => {
            // Keyed completion: a response for a page the user already left
            // populates the cache for that key and nothing else.
            app.pages.complete(page, result);
            Effect::None
        }
        Action::Refresh => ensure_page(app),
        Action::Quit => Effect::Quit,
    }
}

/// Ask the store whether the current page needs a request on the wire.
fn ensure_page(app: &mut App) -> Effect {
    app.status_message = format!("Page {}", app.page);
    if app.pages.begin_fetch(app.page) {
        Effect::FetchPage(app.page)
    } else {
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pages::PageView;
    use crate::test_support::{sample_posts, test_app};

    #[test]
    fn test_previous_page_floors_at_one() {
        let mut app = test_app();
        assert_eq!(app.page, 1);
        update(&mut app, Action::PreviousPage);
        assert_eq!(app.page, 1);

        app.page = 5;
        update(&mut app, Action::PreviousPage);
        assert_eq!(app.page, 4);
    }

    #[test]
    fn test_next_page_is_unbounded() {
        let mut app = test_app();
        for expected in 2..=50 {
            update(&mut app, Action::NextPage);
            assert_eq!(app.page, expected);
        }
    }

    #[test]
    fn test_navigation_requests_unseen_pages() {
        let mut app = test_app();
        let effect = update(&mut app, Action::NextPage);
        assert_eq!(effect, Effect::FetchPage(2));

        // Same page again while the request is outstanding: no second fetch.
        update(&mut app, Action::PreviousPage);
        let effect = update(&mut app, Action::NextPage);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_fresh_page_served_from_cache_on_return() {
        let mut app = test_app();
        update(&mut app, Action::Refresh);
        update(
            &mut app,
            Action::PageFetched {
                page: 1,
                result: Ok(sample_posts(10)),
            },
        );
        update(&mut app, Action::NextPage);

        // Coming back within the staleness window is a cache hit.
        let effect = update(&mut app, Action::PreviousPage);
        assert_eq!(effect, Effect::None);
        assert!(matches!(app.pages.state_for(1), PageView::Ready(_)));
    }

    #[test]
    fn test_select_post_sets_selection() {
        let mut app = test_app();
        let posts = sample_posts(10);
        let chosen = posts[4].clone();

        update(&mut app, Action::SelectPost(chosen.clone()));
        assert_eq!(app.selection, Some(chosen));
        assert_eq!(app.status_message, "Post 5");
    }

    #[test]
    fn test_selection_survives_page_change() {
        let mut app = test_app();
        update(&mut app, Action::SelectPost(sample_posts(1).remove(0)));
        update(&mut app, Action::NextPage);
        update(&mut app, Action::PreviousPage);
        assert!(app.selection.is_some());
    }

    #[test]
    fn test_failed_fetch_leaves_cursor_and_selection_alone() {
        let mut app = test_app();
        let chosen = sample_posts(1).remove(0);
        update(&mut app, Action::SelectPost(chosen.clone()));
        update(&mut app, Action::NextPage);

        update(
            &mut app,
            Action::PageFetched {
                page: 2,
                result: Err("network error: timed out".into()),
            },
        );

        assert_eq!(app.page, 2);
        assert_eq!(app.selection, Some(chosen));
        assert_eq!(
            app.pages.state_for(2),
            PageView::Error("network error: timed out")
        );
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_browse_select_scenario() {
        // Start at page 1, no selection.
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Refresh), Effect::FetchPage(1));
        update(
            &mut app,
            Action::PageFetched {
                page: 1,
                result: Ok(sample_posts(10)),
            },
        );

        // Next page → the coordinator requests page 2.
        assert_eq!(update(&mut app, Action::NextPage), Effect::FetchPage(2));

        // Ten posts arrive; the list shows them in server order.
        let mut page_two = sample_posts(10);
        for (i, post) in page_two.iter_mut().enumerate() {
            post.id = 11 + i as u64;
        }
        update(
            &mut app,
            Action::PageFetched {
                page: 2,
                result: Ok(page_two.clone()),
            },
        );
        let PageView::Ready(posts) = app.pages.state_for(2) else {
            panic!("expected page 2 ready");
        };
        assert_eq!(posts.len(), 10);
        assert_eq!(
            posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            (11..=20).collect::<Vec<_>>()
        );

        // Activate the entry for post 15 → it becomes the selection.
        let chosen = page_two.iter().find(|p| p.id == 15).unwrap().clone();
        update(&mut app, Action::SelectPost(chosen));
        assert_eq!(app.selection.as_ref().map(|p| p.id), Some(15));
    }
}
