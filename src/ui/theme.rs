//! Color theme constants.

use ratatui::style::Color;

/// Conduit green, for the brand and links to people.
pub const COLOR_BRAND: Color = Color::Rgb(92, 184, 92);

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Selected and focused elements.
pub const COLOR_ACCENT: Color = Color::White;

pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

pub const COLOR_TAG: Color = Color::Gray;

/// Favorited hearts.
pub const COLOR_FAVORITE: Color = Color::LightRed;
