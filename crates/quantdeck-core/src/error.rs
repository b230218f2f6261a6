//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

use crate::section::Section;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Startup Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    // ─────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No explanation registered for section: {section}")]
    SectionNotFound { section: Section },

    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("HTTP {status} while fetching {location}")]
    HttpStatus { status: u16, location: String },

    #[error("Replication artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("Invalid artifact location: {message}")]
    ArtifactLocation { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn section_not_found(section: Section) -> Self {
        Self::SectionNotFound { section }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, location: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            location: location.into(),
        }
    }

    pub fn artifact_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ArtifactNotFound { path: path.into() }
    }

    pub fn artifact_location(message: impl Into<String>) -> Self {
        Self::ArtifactLocation {
            message: message.into(),
        }
    }

    /// Requested content does not exist for a section
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SectionNotFound { .. })
    }

    /// The content source could not be read, fetched, or parsed
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::Json(_)
                | Error::Http { .. }
                | Error::HttpStatus { .. }
                | Error::ArtifactNotFound { .. }
                | Error::ArtifactLocation { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
