//! # quantdeck-content - Dashboard Content Sources
//!
//! Everything the dashboard displays comes through this crate: the
//! built-in catalog of explanations and strategies, the replication
//! artifact reader, and the [`ContentProvider`] abstraction the app layer
//! fetches through.
//!
//! Depends on [`quantdeck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Providers
//! - [`ContentProvider`] - Async `fetch(section) -> Content` contract
//! - [`CatalogProvider`] - Built-in catalog with per-shape [`Latency`]
//! - [`ResultsBacking`] - Inline mock or artifact-backed replication report
//!
//! ### Artifact
//! - [`ArtifactLocation`] - Local path or HTTP(S) URL
//! - [`ArtifactReader`] - Fetch and parse the replication artifact
//!
//! ### Catalog
//! - [`catalog::explanation()`], [`catalog::strategy_library()`],
//!   [`catalog::mock_replication_result()`]

pub mod artifact;
pub mod catalog;
pub mod latency;
pub mod provider;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use artifact::{ArtifactLocation, ArtifactReader, DEFAULT_ARTIFACT};
pub use latency::Latency;
pub use provider::{CatalogProvider, ContentProvider, ResultsBacking};
