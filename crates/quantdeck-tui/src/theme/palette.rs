//! Color palette for the dashboard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const SURFACE: Color = Color::Rgb(22, 27, 34); // Stat tiles, table header

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const SELECTED_BG: Color = Color::Cyan; // Active sidebar entry
pub const SELECTED_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Replication verdicts ---
pub const PASS_FG: Color = Color::LightGreen;
pub const FAIL_FG: Color = Color::LightRed;
pub const FAIL_ANALYSIS: Color = Color::LightRed;
