//! Registry for dispatching keyboard input to actions.
//!
//! Priority order:
//! 1. Global bindings (Ctrl+C, F-keys, Tab, Ctrl+S, Esc)
//! 2. Editing bindings and printable characters while a field has focus
//! 3. Screen bindings otherwise

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::Action;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    config: KeybindingConfig,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Map a key event to an action, or `None` when the key is unbound.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Action> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(action) = self.config.get_global(&combo) {
            return Some(action.clone());
        }

        if context.is_editing() {
            return self.dispatch_editing(key, &combo);
        }

        self.config.get_screen(context.screen, &combo).cloned()
    }

    fn dispatch_editing(&self, key: KeyEvent, combo: &KeyCombo) -> Option<Action> {
        if let Some(action) = self.config.get_editing(combo) {
            return Some(action.clone());
        }

        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                return Some(Action::InsertChar(c));
            }
        }

        Some(Action::Noop)
    }
}
