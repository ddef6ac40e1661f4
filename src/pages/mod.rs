//! Screen controllers.
//!
//! Each screen is a plain state machine. Mount events and user actions return
//! a [`Command`] naming the API call to make; the caller runs it and feeds
//! the [`Outcome`] back through `apply`, which may ask for a follow-up
//! command or a navigation via [`Effect`]. Nothing in here touches the
//! network or the terminal directly.

mod banner;
mod command;
pub mod dashboard;
pub mod feedback;
pub mod session_detail;

pub use banner::{Banner, BannerKind};
pub use command::{Command, Outcome, SessionBundle};
pub use dashboard::{DashboardPage, RegistrationField, RegistrationForm};
pub use feedback::{FeedbackFocus, FeedbackPage};
pub use session_detail::{SessionField, SessionPage};

use crate::route::Route;

/// What the app should do after a page handled an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    Dispatch(Command),
    Navigate(Route),
}

impl From<Option<Command>> for Effect {
    fn from(command: Option<Command>) -> Self {
        command.map(Effect::Dispatch).unwrap_or_default()
    }
}

/// The mounted screen.
#[derive(Debug, Clone)]
pub enum Page {
    Dashboard(DashboardPage),
    Session(SessionPage),
    Feedback(FeedbackPage),
}

impl Page {
    /// Build a fresh page for a route, together with its mount command.
    pub fn mount(route: Route) -> (Self, Command) {
        match route {
            Route::Dashboard => {
                let mut page = DashboardPage::new();
                let command = page.fetch();
                (Page::Dashboard(page), command)
            }
            Route::SessionDetail(id) => {
                let mut page = SessionPage::new(id);
                let command = page.load();
                (Page::Session(page), command)
            }
            Route::Feedback => {
                let mut page = FeedbackPage::new();
                let command = page.fetch();
                (Page::Feedback(page), command)
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Dashboard(_) => Route::Dashboard,
            Page::Session(page) => Route::SessionDetail(page.session_id),
            Page::Feedback(_) => Route::Feedback,
        }
    }

    /// Route an API outcome to the mounted screen.
    pub fn apply(&mut self, outcome: Outcome) -> Effect {
        match self {
            Page::Dashboard(page) => page.apply(outcome),
            Page::Session(page) => page.apply(outcome),
            Page::Feedback(page) => page.apply(outcome),
        }
    }

    /// Whether the screen is waiting on its fetch.
    pub fn is_loading(&self) -> bool {
        match self {
            Page::Dashboard(page) => page.loading,
            Page::Session(page) => page.loading,
            Page::Feedback(page) => page.loading,
        }
    }
}
