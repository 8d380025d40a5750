use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    PrevPage,
    NextPage,
    Refresh,
    Select,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Left) | (_, KeyCode::Char('p')) => Some(TuiEvent::PrevPage),
                (_, KeyCode::Right) | (_, KeyCode::Char('n')) => Some(TuiEvent::NextPage),
                (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Enter) => Some(TuiEvent::Select),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
