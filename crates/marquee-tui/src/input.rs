use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    ToggleEdgeEffect,
    CycleColor,      // background and edge color together
    SpeedUp,
    SlowDown,
    TogglePause,     // pause duration <-> 0
    ToggleMarquee,
    NextText,
    WidenEdge,
    NarrowEdge,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Focus between marquees
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) | (KeyCode::Tab, _) => {
            Action::FocusNext
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) | (KeyCode::BackTab, _) => {
            Action::FocusPrev
        }

        // Appearance
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::ToggleEdgeEffect,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::CycleColor,
        (KeyCode::Char(']'), _) => Action::WidenEdge,
        (KeyCode::Char('['), _) => Action::NarrowEdge,

        // Animation
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) | (KeyCode::Right, _) => Action::SpeedUp,
        (KeyCode::Char('-'), _) | (KeyCode::Left, _) => Action::SlowDown,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::TogglePause,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMarquee,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextText,

        _ => Action::None,
    }
}
