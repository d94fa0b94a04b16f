//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Character keys are matched without
/// the SHIFT modifier since terminals disagree on reporting it for `G`, `?`
/// or `+`; the character itself already carries the case.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        self.bindings
            .get(&KeyEvent::new(key.code, modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = KeyBindings {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;

        // List scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), none, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), ctrl, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), ctrl, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        // Selection
        keys.bind(KeyCode::Char('n'), none, KeyAction::NextEvent);
        keys.bind(KeyCode::Char('N'), none, KeyAction::PrevEvent);

        // Overview navigator
        keys.bind(KeyCode::Char('+'), none, KeyAction::ZoomIn);
        keys.bind(KeyCode::Char('='), none, KeyAction::ZoomIn);
        keys.bind(KeyCode::Char('-'), none, KeyAction::ZoomOut);
        keys.bind(KeyCode::Char('h'), none, KeyAction::PanLeft);
        keys.bind(KeyCode::Char('l'), none, KeyAction::PanRight);
        keys.bind(KeyCode::Left, none, KeyAction::PanLeft);
        keys.bind(KeyCode::Right, none, KeyAction::PanRight);
        keys.bind(KeyCode::Char('0'), none, KeyAction::ResetView);
        keys.bind(KeyCode::Char('c'), none, KeyAction::CenterOnSelection);
        keys.bind(KeyCode::Char('e'), none, KeyAction::ZoomToEra);

        // Era filter
        for (index, digit) in ['1', '2', '3', '4', '5'].into_iter().enumerate() {
            keys.bind(KeyCode::Char(digit), none, KeyAction::ToggleEra(index));
        }
        keys.bind(KeyCode::Char('a'), none, KeyAction::ShowAllEras);

        // Search
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), ctrl, KeyAction::StartSearch);
        keys.bind(KeyCode::Esc, none, KeyAction::CancelSearch);

        // Application
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), ctrl, KeyAction::Quit);

        keys
    }
}
