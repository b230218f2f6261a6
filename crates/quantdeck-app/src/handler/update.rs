//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, PAGE_SCROLL};
use tracing::{debug, error, info};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(section) => {
            let generation = state.select(section);
            info!("Selected {} (generation {})", section, generation);
            UpdateResult::action(UpdateAction::FetchContent {
                section,
                generation,
            })
        }

        Message::NextSection => {
            UpdateResult::message(Message::SelectSection(state.active_section.next()))
        }

        Message::PreviousSection => {
            UpdateResult::message(Message::SelectSection(state.active_section.previous()))
        }

        Message::Reload => UpdateResult::message(Message::SelectSection(state.active_section)),

        // ─────────────────────────────────────────────────────────
        // Load Cycle Messages
        // ─────────────────────────────────────────────────────────
        Message::ContentLoaded {
            generation,
            section,
            content,
        } => {
            if !state.is_current(generation) {
                debug!(
                    "Dropping stale content for {} (generation {}, current {})",
                    section, generation, state.load_generation
                );
                return UpdateResult::none();
            }
            debug!("Loaded {} ({:?})", section, content.shape());
            state.apply_content(content);
            UpdateResult::none()
        }

        Message::ContentLoadFailed {
            generation,
            section,
            error,
        } => {
            if !state.is_current(generation) {
                debug!(
                    "Dropping stale failure for {} (generation {}): {}",
                    section, generation, error
                );
                return UpdateResult::none();
            }
            error!("Failed to load {}: {}", section, error);
            state.apply_failure();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll_down(1);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.scroll_up(PAGE_SCROLL);
            UpdateResult::none()
        }
        Message::PageDown => {
            state.scroll_down(PAGE_SCROLL);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.scroll_offset = 0;
            UpdateResult::none()
        }

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }
    }
}
