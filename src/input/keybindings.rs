//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::action::Action;
use crate::app::Screen;
use crate::route::Route;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Action>,
    /// Active while a text field has focus
    pub editing: HashMap<KeyCombo, Action>,
    /// Active on a screen while no text field has focus
    pub screen: HashMap<Screen, HashMap<KeyCombo, Action>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            editing: HashMap::new(),
            screen: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_editing_bindings();
        config.setup_screen_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Action::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('q')), Action::Quit);
        self.global.insert(
            KeyCombo::plain(KeyCode::F(1)),
            Action::Navigate(Route::Dashboard),
        );
        self.global.insert(
            KeyCombo::plain(KeyCode::F(2)),
            Action::Navigate(Route::Feedback),
        );
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Action::FocusNext);
        self.global
            .insert(KeyCombo::shift(KeyCode::BackTab), Action::FocusNext);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('s')), Action::Submit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Esc), Action::Cancel);
    }

    fn setup_editing_bindings(&mut self) {
        let bindings = [
            (KeyCode::Enter, Action::InsertNewline),
            (KeyCode::Backspace, Action::Backspace),
            (KeyCode::Delete, Action::Delete),
            (KeyCode::Left, Action::CursorLeft),
            (KeyCode::Right, Action::CursorRight),
            (KeyCode::Home, Action::CursorHome),
            (KeyCode::End, Action::CursorEnd),
        ];
        for (code, action) in bindings {
            self.editing.insert(KeyCombo::plain(code), action);
        }
        self.editing
            .insert(KeyCombo::shift(KeyCode::Enter), Action::InsertNewline);
        self.editing
            .insert(KeyCombo::ctrl(KeyCode::Char('a')), Action::CursorHome);
        self.editing
            .insert(KeyCombo::ctrl(KeyCode::Char('e')), Action::CursorEnd);
    }

    fn setup_screen_bindings(&mut self) {
        let mut list = HashMap::new();
        list.insert(KeyCombo::plain(KeyCode::Up), Action::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Char('k')), Action::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Down), Action::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Char('j')), Action::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Enter), Action::Activate);

        let mut dashboard = list.clone();
        dashboard.insert(KeyCombo::plain(KeyCode::Char('s')), Action::Activate);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('r')), Action::Retry);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('n')), Action::OpenRegistration);
        self.screen.insert(Screen::Dashboard, dashboard);

        self.screen.insert(Screen::Feedback, list);

        let mut session = HashMap::new();
        session.insert(KeyCombo::plain(KeyCode::Enter), Action::Cancel);
        self.screen.insert(Screen::Session, session);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Action> {
        self.global.get(combo)
    }

    pub fn get_editing(&self, combo: &KeyCombo) -> Option<&Action> {
        self.editing.get(combo)
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Action> {
        self.screen.get(&screen).and_then(|bindings| bindings.get(combo))
    }
}
