//! Command-line interface: flags handled before the TUI starts.
//!
//! ```ignore
//! use healthdesk::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! let route = command.start_route();
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage_text, version_text, VERSION};

use color_eyre::{eyre::eyre, Result};

/// Run a non-TUI command.
///
/// Returns `None` for [`CliCommand::Run`], meaning the caller should start
/// the TUI.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage_text());
            Some(Ok(()))
        }
        CliCommand::Invalid(arg) => Some(Err(eyre!(
            "unknown argument '{}'; run with --help for usage",
            arg
        ))),
        CliCommand::Run(_) => None,
    }
}
