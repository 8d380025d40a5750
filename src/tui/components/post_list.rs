//! # Post List Component
//!
//! The navigable list of post titles for the current page, one entry per
//! post in server order. Activating an entry (Enter or mouse click) emits
//! `ListEvent::Activate` with the entry's index; the event loop turns that
//! into `Action::SelectPost`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PostListState` lives in `TuiState`
//! - `PostList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::api::Post;
use crate::tui::event::TuiEvent;

/// Persistent cursor state for the post list.
pub struct PostListState {
    pub cursor: Option<usize>,
    pub list_state: ListState,
}

impl PostListState {
    pub fn new() -> Self {
        Self {
            cursor: None,
            list_state: ListState::default(),
        }
    }

    /// Handle a key event against a list of `len` entries, returning a
    /// ListEvent if the list wants the app to act.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<ListEvent> {
        if len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.cursor = Some(self.cursor.map_or(0, |c| c.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.cursor = Some(self.cursor.map_or(0, |c| (c + 1).min(len - 1)));
                None
            }
            TuiEvent::Select => self.cursor.map(ListEvent::Activate),
            _ => None,
        }
    }

    /// Reset the cursor, used when the displayed page changes.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.list_state.select(None);
        *self.list_state.offset_mut() = 0;
    }
}

impl Default for PostListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the post list.
#[derive(Debug, PartialEq, Eq)]
pub enum ListEvent {
    /// The entry at this index was activated.
    Activate(usize),
}

/// Transient render wrapper for the post list.
pub struct PostList<'a> {
    posts: &'a [Post],
    selected_id: Option<u64>,
    state: &'a mut PostListState,
}

impl<'a> PostList<'a> {
    pub fn new(posts: &'a [Post], selected_id: Option<u64>, state: &'a mut PostListState) -> Self {
        Self {
            posts,
            selected_id,
            state,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Posts ")
            .padding(Padding::horizontal(1));

        // Clamp the cursor to the current page before rendering; the new
        // page may have fewer entries than the one the cursor came from.
        if let Some(cursor) = self.state.cursor {
            self.state.cursor = Some(cursor.min(self.posts.len().saturating_sub(1)));
        }
        self.state.list_state.select(self.state.cursor);

        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .posts
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let marker = if self.selected_id == Some(post.id) {
                    "● "
                } else {
                    "  "
                };
                let title = truncate_str(&post.title, inner_width.saturating_sub(2));

                let style = if self.state.cursor == Some(i) {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(title, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 3 > max_width - 1 {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}
