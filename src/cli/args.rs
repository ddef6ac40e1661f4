//! Command-line argument parsing.

use crate::route::Route;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print version information
    Version,
    /// Print usage
    Help,
    /// Run the TUI starting on a screen (default `/`)
    Run(Route),
    /// An argument that is neither a flag nor a screen address
    Invalid(String),
}

impl CliCommand {
    /// The screen the TUI opens on.
    pub fn start_route(&self) -> Route {
        match self {
            CliCommand::Run(route) => *route,
            _ => Route::Dashboard,
        }
    }
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use healthdesk::cli::args::{parse_args, CliCommand};
/// use healthdesk::route::Route;
///
/// let args = vec!["healthdesk".to_string(), "/session/7".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Run(Route::SessionDetail(7)));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut route = None;
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ if route.is_none() => match Route::parse(&arg) {
                Ok(parsed) => route = Some(parsed),
                Err(_) => return CliCommand::Invalid(arg),
            },
            _ => return CliCommand::Invalid(arg),
        }
    }
    CliCommand::Run(route.unwrap_or_default())
}
