//! Configuration file parsing for quantdeck
//!
//! Supports:
//! - `.quantdeck/config.toml` - Application settings
//! - Command-line [`Overrides`] layered on top

pub mod settings;
pub mod types;

pub use settings::{build_provider, load_settings, Overrides};
pub use types::*;
