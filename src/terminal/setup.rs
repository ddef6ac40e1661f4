//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and enable bracketed paste, so pasted
/// multi-line text arrives as a single event.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this is safe
/// to call more than once and from a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Best-effort restore of stdout after a panic.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
