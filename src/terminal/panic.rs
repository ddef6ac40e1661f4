//! Panic hook that gives the terminal back before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook; call before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
