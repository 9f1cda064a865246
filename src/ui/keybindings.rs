//! Key patterns and the default key map.

use std::collections::HashMap;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    FocusNext,
    FocusPrev,
    CursorPrev,
    CursorNext,
    /// Pick the option under the cursor, or press the focused button.
    Activate,
    Apply,
    Reset,
}

/// Pattern for matching key events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPattern {
    pub fn simple(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

pub struct KeyMap {
    bindings: HashMap<KeyPattern, UiAction>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(KeyPattern::ctrl(KeyCode::Char('c')), UiAction::Quit);
        bindings.insert(KeyPattern::simple(KeyCode::Char('q')), UiAction::Quit);
        bindings.insert(KeyPattern::simple(KeyCode::Esc), UiAction::Quit);

        bindings.insert(KeyPattern::simple(KeyCode::Tab), UiAction::FocusNext);
        bindings.insert(KeyPattern::shift(KeyCode::BackTab), UiAction::FocusPrev);
        bindings.insert(KeyPattern::simple(KeyCode::BackTab), UiAction::FocusPrev);
        bindings.insert(KeyPattern::simple(KeyCode::Down), UiAction::FocusNext);
        bindings.insert(KeyPattern::simple(KeyCode::Up), UiAction::FocusPrev);

        bindings.insert(KeyPattern::simple(KeyCode::Left), UiAction::CursorPrev);
        bindings.insert(KeyPattern::simple(KeyCode::Right), UiAction::CursorNext);
        bindings.insert(KeyPattern::simple(KeyCode::Char('h')), UiAction::CursorPrev);
        bindings.insert(KeyPattern::simple(KeyCode::Char('l')), UiAction::CursorNext);

        bindings.insert(KeyPattern::simple(KeyCode::Enter), UiAction::Activate);
        bindings.insert(KeyPattern::simple(KeyCode::Char(' ')), UiAction::Activate);

        bindings.insert(KeyPattern::simple(KeyCode::Char('a')), UiAction::Apply);
        bindings.insert(KeyPattern::simple(KeyCode::Char('r')), UiAction::Reset);

        Self { bindings }
    }
}

impl KeyMap {
    pub fn action_for(&self, key: &KeyEvent) -> Option<UiAction> {
        let pattern = KeyPattern {
            code: key.code,
            modifiers: key.modifiers,
        };
        self.bindings.get(&pattern).copied()
    }
}
