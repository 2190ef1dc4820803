use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// Scroll by a number of steps (positive = down)
    Scroll(f64),
    /// Scroll by a fraction of the viewport (positive = down)
    ScrollPage(f64),
    GrowHeader,
    ShrinkHeader,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::Scroll(1.0),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::Scroll(-1.0),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollPage(0.5),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollPage(-0.5),
        (KeyCode::PageDown, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ScrollPage(1.0),
        (KeyCode::PageUp, _) => Action::ScrollPage(-1.0),

        // Header height
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::GrowHeader,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::ShrinkHeader,

        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::Scroll(1.0),
        MouseEventKind::ScrollUp => Action::Scroll(-1.0),
        _ => Action::None,
    }
}
