//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Used for the running countdown.
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
/// Used for the current-task marker.
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for the paused countdown and expiry flash.
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Used for completed rows.
pub const DIM_GREY: Color = Color::Rgb(110, 110, 110);
