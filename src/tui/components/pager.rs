//! # Pager Component
//!
//! Stateless pagination bar: previous affordance, current page number, next
//! affordance. Previous is dimmed on page 1, where it is a no-op; next is
//! always live since no upper bound is enforced.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Pager {
    page: u32,
}

impl Pager {
    pub fn new(page: u32) -> Self {
        Self { page }
    }
}

impl Component for Pager {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prev_style = if self.page <= 1 {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let line = Line::from(vec![
            Span::styled("← Previous page", prev_style),
            Span::raw("   "),
            Span::styled(
                format!("Page {}", self.page),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Next page →", Style::default().fg(Color::Cyan)),
        ]);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(page: u32) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Pager::new(page).render(f, area);
            })
            .unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_pager_shows_page_number() {
        let rendered = render_to_string(7);
        assert!(rendered.contains("Page 7"));
        assert!(rendered.contains("Previous page"));
        assert!(rendered.contains("Next page"));
    }
}
