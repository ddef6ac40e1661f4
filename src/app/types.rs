//! Type definitions for the application state.

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Session,
    Feedback,
}

/// Reachability of the records service, as shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ServiceHealth {
    pub fn label(self) -> &'static str {
        match self {
            ServiceHealth::Unknown => "checking",
            ServiceHealth::Online => "online",
            ServiceHealth::Offline => "offline",
        }
    }
}
