//! Terminal rendering.
//!
//! Every frame is the shell (header with nav and service status, key hints
//! footer) around the mounted screen. Render functions only read state.

mod components;
mod dashboard;
mod feedback;
mod layout;
mod session;
mod shell;
mod theme;

pub use layout::{breakpoints, split_panels, truncate_to_width, LayoutContext};
pub use shell::{key_hints, APP_TITLE};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LINK,
    COLOR_PENDING, COLOR_SELECTED_BG, COLOR_SUCCESS,
};

use ratatui::Frame;

use crate::app::App;
use crate::pages::Page;
use dashboard::render_dashboard;
use feedback::render_feedback;
use session::render_session;
use shell::{render_footer, render_header, shell_areas};

/// Render the shell and the mounted screen
pub fn render(frame: &mut Frame, app: &App) {
    let (header, body, footer) = shell_areas(frame.area());

    render_header(frame, header, app);
    match &app.page {
        Page::Dashboard(page) => render_dashboard(frame, body, page, app.tick_count),
        Page::Session(page) => render_session(frame, body, page, app.tick_count),
        Page::Feedback(page) => render_feedback(frame, body, page, app.tick_count),
    }
    render_footer(frame, footer, app);
}
