//! quantdeck-app - Application state and orchestration for quantdeck
//!
//! Implements the TEA (The Elm Architecture) pattern: [`Message`]s flow
//! through [`handler::update`], which mutates [`AppState`] and may ask the
//! event loop to spawn a background fetch. Also owns configuration loading
//! and signal handling.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ContentView, LoadingState, FAILURE_MESSAGE};
