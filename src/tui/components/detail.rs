//! # Post Detail Component
//!
//! Read-only view of the selected post: a pure function of its input.
//! Renders nothing when no post is selected. The selection is never cleared
//! by the app, so once a post is chosen this pane stays populated even after
//! paging away from the post's page.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::api::Post;
use crate::tui::component::Component;

pub struct PostDetail<'a> {
    post: Option<&'a Post>,
}

impl<'a> PostDetail<'a> {
    pub fn new(post: Option<&'a Post>) -> Self {
        Self { post }
    }
}

impl Component for PostDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(post) = self.post else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Post {} ", post.id))
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(Span::styled(
                post.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("by user {}", post.user_id),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];
        lines.extend(
            post.body
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Gray)))),
        );

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
