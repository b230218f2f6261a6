//! # quantdeck-core - Core Domain Types
//!
//! Foundation crate for quantdeck. Provides the section model, content
//! types, explanation markup parsing, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`Section`] - The six navigable dashboard views, in sidebar order
//! - [`ContentShape`] - Text, strategy list, or replication result
//!
//! ### Content (`content`)
//! - [`Content`] - Loaded content for one section
//! - [`Strategy`] - A named strategy card
//! - [`ReplicationResult`], [`PortfolioPnl`], [`AlphaResults`], [`AlphaResult`], [`Verdict`]
//!
//! ### Markup (`markup`)
//! - [`markup::parse()`] - Turn `**bold**` / `<br/>` text into styled lines
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum covering I/O, artifact, and terminal failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod content;
pub mod error;
pub mod logging;
pub mod markup;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use content::{
    AlphaResult, AlphaResults, Content, PortfolioPnl, ReplicationResult, Strategy, Verdict,
};
pub use error::{Error, Result, ResultExt};
pub use markup::{MarkupLine, MarkupSpan};
pub use section::{ContentShape, Section};
