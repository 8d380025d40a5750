use crate::core::pages::PageView;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Pager, PostDetail, PostList};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, body_area, pager_area] = layout(frame.area());
    let [list_area, detail_area] = body_layout(body_area);

    // Title bar
    let title_text = if app.status_message.is_empty() {
        String::from("Folio")
    } else {
        format!("Folio | {}", app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // List area - tri-state per the current page's cache entry
    match app.pages.state_for(app.page) {
        PageView::Loading => draw_loading_view(frame, list_area, spinner_frame),
        PageView::Error(message) => draw_error_view(frame, list_area, message),
        PageView::Ready(posts) => {
            let selected_id = app.selection.as_ref().map(|p| p.id);
            PostList::new(posts, selected_id, &mut tui.post_list).render(frame, list_area);
        }
    }

    // Detail pane renders the selection regardless of the list's state.
    PostDetail::new(app.selection.as_ref()).render(frame, detail_area);

    Pager::new(app.page).render(frame, pager_area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let paragraph = Paragraph::new(format!("{spinner} Loading..."))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::bordered().title(" Posts "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(Block::bordered().title(" ERROR "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

fn body_layout(area: Rect) -> [Rect; 2] {
    use Constraint::Percentage;
    Layout::horizontal([Percentage(45), Percentage(55)]).areas(area)
}

/// Hit test: given a mouse position, find which list entry (if any) is at
/// that position. `offset` is the list's scroll offset, `len` the number of
/// entries on the displayed page.
pub fn hit_test_list(
    column: u16,
    row: u16,
    frame_area: Rect,
    offset: usize,
    len: usize,
) -> Option<usize> {
    let [_, body_area, _] = layout(frame_area);
    let [list_area, _] = body_layout(body_area);

    // Inside the list block's borders?
    let inner = Rect {
        x: list_area.x + 1,
        y: list_area.y + 1,
        width: list_area.width.saturating_sub(2),
        height: list_area.height.saturating_sub(2),
    };
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }

    let index = (row - inner.y) as usize + offset;
    (index < len).then_some(index)
}
