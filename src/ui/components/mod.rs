//! Reusable UI Components
//!
//! - `StatusIndicator` - Spinner, banner and service badge lines
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{banner_line, get_spinner_char, service_badge, spinner_line};
