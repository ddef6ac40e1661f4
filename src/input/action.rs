//! User actions produced from keyboard input.
//!
//! Key bindings map to an [`Action`]; the app decides what each action means
//! for the screen that is mounted.

use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Ctrl+C, Ctrl+Q)
    Quit,
    /// Jump to a screen from the header nav (F1, F2)
    Navigate(Route),
    /// Move focus to the next area of the screen (Tab)
    FocusNext,

    // =========================================================================
    // Lists
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Act on the highlighted row (Enter)
    Activate,
    /// Re-run a failed fetch
    Retry,
    /// Open the patient registration draft
    OpenRegistration,

    // =========================================================================
    // Forms
    // =========================================================================
    /// Save or submit the current form (Ctrl+S)
    Submit,
    /// Leave the current form or screen (Esc)
    Cancel,
    InsertChar(char),
    InsertNewline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    /// Key is swallowed with no effect
    Noop,
}

impl Action {
    /// Whether the action edits text in a form field.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Action::InsertChar(_)
                | Action::InsertNewline
                | Action::Backspace
                | Action::Delete
                | Action::CursorLeft
                | Action::CursorRight
                | Action::CursorHome
                | Action::CursorEnd
        )
    }
}
