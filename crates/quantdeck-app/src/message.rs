//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use quantdeck_core::{Content, Section};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Make `section` active and start loading it, even if it already is
    SelectSection(Section),
    /// Select the section after the active one (wraps)
    NextSection,
    /// Select the section before the active one (wraps)
    PreviousSection,
    /// Re-select the active section
    Reload,

    // ─────────────────────────────────────────────────────────
    // Load Cycle Messages
    // ─────────────────────────────────────────────────────────
    /// A fetch settled successfully
    ContentLoaded {
        /// Load generation the fetch was started under
        generation: u64,
        section: Section,
        content: Content,
    },
    /// A fetch failed
    ContentLoadFailed {
        generation: u64,
        section: Section,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,

    /// Show or hide key hints in the header
    ToggleHelp,
}
