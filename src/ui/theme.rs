//! Color theme constants for the healthdesk UI.

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Border color for panels and fields
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and the focused field border
pub const COLOR_ACCENT: Color = Color::Rgb(37, 99, 235); // blue #2563EB

/// Header title
pub const COLOR_HEADER: Color = Color::White;

/// Secondary text (labels, timestamps, hints)
pub const COLOR_DIM: Color = Color::Gray;

/// Background of the highlighted row in a list
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 41, 59);

// ============================================================================
// Status colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(22, 163, 74); // green #16A34A

pub const COLOR_ERROR: Color = Color::Rgb(220, 38, 38); // red #DC2626

/// Spinner and in-flight labels
pub const COLOR_PENDING: Color = Color::Yellow;

/// Actions the user can trigger (start session, back links)
pub const COLOR_LINK: Color = Color::Cyan;
