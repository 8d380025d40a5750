//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Fetching** (a request for the displayed page is outstanding): draws
//!   every ~80ms so the spinner animates and completions show up promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Fetch completions
//!
//! Fetches run in `tokio::spawn` tasks and report back over an mpsc channel
//! as `Action::PageFetched` keyed by the page they were issued for. The loop
//! drains the channel every iteration, so a completion for a page the user
//! has already left lands in the cache for its own key and never touches
//! the display of the current page.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{HttpPostClient, PostFetcher};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::pages::PageView;
use crate::core::state::App;
use crate::tui::components::{ListEvent, PostListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub post_list: PostListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            post_list: PostListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let fetcher: Arc<dyn PostFetcher> = Arc::new(HttpPostClient::new(
        config.base_url.clone(),
        config.page_size,
    ));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for fetch completions from background tasks
    let (tx, rx) = mpsc::channel();

    // Kick off the fetch for page 1 before the first frame.
    let mut should_quit = apply(&mut app, Action::Refresh, &fetcher, &tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        let fetching = app.pages.is_in_flight(app.page);
        if fetching {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while fetching, long when idle
        let timeout = if fetching {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match tui_event {
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    should_quit |= apply(&mut app, Action::Quit, &fetcher, &tx);
                }
                TuiEvent::PrevPage => {
                    // Keep the selection (it is never cleared), but reset the
                    // list cursor for the incoming page.
                    should_quit |= apply(&mut app, Action::PreviousPage, &fetcher, &tx);
                    tui.post_list.reset();
                }
                TuiEvent::NextPage => {
                    should_quit |= apply(&mut app, Action::NextPage, &fetcher, &tx);
                    tui.post_list.reset();
                }
                TuiEvent::Refresh => {
                    should_quit |= apply(&mut app, Action::Refresh, &fetcher, &tx);
                }
                TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Select => {
                    let len = displayed_len(&app);
                    if let Some(ListEvent::Activate(index)) =
                        tui.post_list.handle_event(&tui_event, len)
                        && let Some(post) = displayed_post(&app, index)
                    {
                        should_quit |= apply(&mut app, Action::SelectPost(post), &fetcher, &tx);
                    }
                }
                TuiEvent::MouseClick(column, row) => {
                    let hit = ui::hit_test_list(
                        column,
                        row,
                        terminal.get_frame().area(),
                        tui.post_list.list_state.offset(),
                        displayed_len(&app),
                    );
                    if let Some(index) = hit {
                        tui.post_list.cursor = Some(index);
                        if let Some(post) = displayed_post(&app, index) {
                            should_quit |= apply(&mut app, Action::SelectPost(post), &fetcher, &tx);
                        }
                    }
                }
                TuiEvent::Resize => {}
            }
        }

        // Handle fetch completions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            should_quit |= apply(&mut app, action, &fetcher, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run an action through the reducer and perform the resulting effect.
/// Returns true when the app should quit.
fn apply(
    app: &mut App,
    action: Action,
    fetcher: &Arc<dyn PostFetcher>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::FetchPage(page) => {
            spawn_fetch(fetcher.clone(), page, tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Number of entries on the currently displayed page.
fn displayed_len(app: &App) -> usize {
    match app.pages.state_for(app.page) {
        PageView::Ready(posts) => posts.len(),
        _ => 0,
    }
}

/// Clone the post at `index` on the currently displayed page, if any.
/// Cloning ends the borrow on the page store before the reducer runs.
fn displayed_post(app: &App, index: usize) -> Option<crate::api::Post> {
    match app.pages.state_for(app.page) {
        PageView::Ready(posts) => posts.get(index).cloned(),
        _ => None,
    }
}

/// Issue exactly one request for `page` in a background task and report the
/// outcome back to the event loop.
fn spawn_fetch(fetcher: Arc<dyn PostFetcher>, page: u32, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch for page {}", page);
    tokio::spawn(async move {
        let result = fetcher.fetch_page(page).await.map_err(|e| e.to_string());
        if tx.send(Action::PageFetched { page, result }).is_err() {
            warn!(
                "Failed to send completion for page {}: receiver dropped",
                page
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubFetcher, sample_posts};
    use std::time::Duration;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawn_fetch_reports_success_keyed_by_page() {
        let fetcher: Arc<dyn PostFetcher> = Arc::new(StubFetcher {
            result: Ok(sample_posts(10)),
        });
        let (tx, rx) = mpsc::channel();

        spawn_fetch(fetcher, 3, tx);

        let action = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        match action {
            Action::PageFetched { page, result } => {
                assert_eq!(page, 3);
                assert_eq!(result.unwrap().len(), 10);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawn_fetch_reports_error_as_display_string() {
        let fetcher: Arc<dyn PostFetcher> = Arc::new(StubFetcher {
            result: Err("connection refused"),
        });
        let (tx, rx) = mpsc::channel();

        spawn_fetch(fetcher, 1, tx);

        let action = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        match action {
            Action::PageFetched { page, result } => {
                assert_eq!(page, 1);
                assert_eq!(result.unwrap_err(), "network error: connection refused");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
