//! Input context for determining which actions are available.

use crate::app::Screen;

/// Snapshot of the app state that key dispatch depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub screen: Screen,
    /// A text field has focus, so printable keys type into it
    pub editing: bool,
}

impl InputContext {
    pub fn new(screen: Screen, editing: bool) -> Self {
        Self { screen, editing }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }
}
