//! Headless mode - NDJSON events on stdout instead of the TUI
//!
//! Walks sections through the same provider and update loop as the
//! dashboard and prints one JSON object per line as each load settles.

mod runner;

pub use runner::run_headless;

use std::io::{self, Write};

use chrono::Utc;
use quantdeck_core::{markup, Content, ContentShape, ReplicationResult, Section, Strategy};
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A section became active and its fetch started
    SectionSelected {
        section: Section,
        label: &'static str,
        generation: u64,
        timestamp: i64,
    },

    /// The active section's fetch settled with content
    ContentLoaded {
        section: Section,
        shape: &'static str,
        content: ContentPayload,
        timestamp: i64,
    },

    /// The active section's fetch failed
    LoadFailed {
        section: Section,
        error: String,
        /// Text the dashboard shows in place of the content
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn section_selected(section: Section, generation: u64) -> Self {
        Self::SectionSelected {
            section,
            label: section.label(),
            generation,
            timestamp: Self::now(),
        }
    }

    pub fn content_loaded(section: Section, content: &Content) -> Self {
        Self::ContentLoaded {
            section,
            shape: shape_name(content.shape()),
            content: ContentPayload::from(content),
            timestamp: Self::now(),
        }
    }

    pub fn load_failed(section: Section, error: String, message: &str) -> Self {
        Self::LoadFailed {
            section,
            error,
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }
}

/// Loaded content as it appears in a `content_loaded` event
///
/// Text is emitted with markup stripped.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ContentPayload {
    Text(String),
    Strategies(Vec<Strategy>),
    Replication(ReplicationResult),
}

impl From<&Content> for ContentPayload {
    fn from(content: &Content) -> Self {
        match content {
            Content::Text(text) => Self::Text(markup::to_plain_text(text)),
            Content::Strategies(strategies) => Self::Strategies(strategies.clone()),
            Content::Replication(result) => Self::Replication(result.clone()),
        }
    }
}

fn shape_name(shape: ContentShape) -> &'static str {
    match shape {
        ContentShape::Text => "text",
        ContentShape::StrategyList => "strategy_list",
        ContentShape::ReplicationResult => "replication_result",
    }
}
