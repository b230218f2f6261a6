//! quantdeck-tui - Terminal UI for quantdeck
//!
//! Renders [`quantdeck_app::AppState`] with ratatui and drives the event
//! loop: terminal input and fetch completions become messages for the
//! app crate's update function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
