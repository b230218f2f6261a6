//! Configuration types for quantdeck
//!
//! Defines:
//! - `Settings` - Application settings (.quantdeck/config.toml)
//! - `ContentSettings`, `LatencySettings`, `UiSettings` - Its sections

use quantdeck_content::latency::{DEFAULT_RESULTS_MS, DEFAULT_STRATEGIES_MS, DEFAULT_TEXT_MS};
use quantdeck_content::{Latency, DEFAULT_ARTIFACT};
use quantdeck_core::Section;
use serde::{Deserialize, Serialize};

/// Application settings (.quantdeck/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub content: ContentSettings,

    #[serde(default)]
    pub latency: LatencySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the replication report comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Built-in mock report
    #[default]
    Mock,
    /// Persisted JSON artifact (file or URL)
    Artifact,
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Mock => write!(f, "mock"),
            ContentSource::Artifact => write!(f, "artifact"),
        }
    }
}

/// Content settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContentSettings {
    #[serde(default)]
    pub source: ContentSource,

    /// Artifact path or http(s) URL, used when `source = "artifact"`
    #[serde(default = "default_artifact")]
    pub artifact: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            source: ContentSource::default(),
            artifact: default_artifact(),
        }
    }
}

fn default_artifact() -> String {
    DEFAULT_ARTIFACT.to_string()
}

/// Artificial latency per content shape, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatencySettings {
    #[serde(default = "default_text_ms")]
    pub text_ms: u64,

    #[serde(default = "default_strategies_ms")]
    pub strategies_ms: u64,

    #[serde(default = "default_results_ms")]
    pub results_ms: u64,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            text_ms: DEFAULT_TEXT_MS,
            strategies_ms: DEFAULT_STRATEGIES_MS,
            results_ms: DEFAULT_RESULTS_MS,
        }
    }
}

impl LatencySettings {
    pub fn none() -> Self {
        Self {
            text_ms: 0,
            strategies_ms: 0,
            results_ms: 0,
        }
    }

    pub fn to_latency(&self) -> Latency {
        Latency::from_millis(self.text_ms, self.strategies_ms, self.results_ms)
    }
}

fn default_text_ms() -> u64 {
    DEFAULT_TEXT_MS
}

fn default_strategies_ms() -> u64 {
    DEFAULT_STRATEGIES_MS
}

fn default_results_ms() -> u64 {
    DEFAULT_RESULTS_MS
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Section shown at startup
    #[serde(default)]
    pub default_section: Section,

    /// Show key hints in the footer
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_section: Section::default(),
            show_help: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.content.source, ContentSource::Mock);
        assert_eq!(settings.content.artifact, "replication_results.json");
        assert_eq!(settings.latency.text_ms, 500);
        assert_eq!(settings.latency.strategies_ms, 800);
        assert_eq!(settings.latency.results_ms, 1000);
        assert_eq!(settings.ui.default_section, Section::Objective);
        assert!(settings.ui.show_help);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[content]
source = "artifact"
artifact = "https://example.com/replication_results.json"

[latency]
text_ms = 10
strategies_ms = 20
results_ms = 30

[ui]
default_section = "alpha_library"
show_help = false
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.content.source, ContentSource::Artifact);
        assert_eq!(
            settings.content.artifact,
            "https://example.com/replication_results.json"
        );
        assert_eq!(
            settings.latency.to_latency(),
            Latency::from_millis(10, 20, 30)
        );
        assert_eq!(settings.ui.default_section, Section::AlphaLibrary);
        assert!(!settings.ui.show_help);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let settings: Settings = toml::from_str("[latency]\ntext_ms = 1\n").unwrap();
        assert_eq!(settings.latency.text_ms, 1);
        assert_eq!(settings.latency.results_ms, 1000);
        assert_eq!(settings.content, ContentSettings::default());
    }

    #[test]
    fn test_unknown_source_rejected() {
        let result: Result<Settings, _> = toml::from_str("[content]\nsource = \"s3\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_latency_none() {
        assert_eq!(LatencySettings::none().to_latency(), Latency::none());
    }
}
