//! Settings parser for .quantdeck/config.toml

use super::types::{ContentSource, LatencySettings, Settings};
use quantdeck_content::{ArtifactLocation, ArtifactReader, CatalogProvider, ResultsBacking};
use quantdeck_core::{Result, ResultExt, Section};
use tracing::{debug, info, warn};
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const QUANTDECK_DIR: &str = ".quantdeck";

/// Load settings from .quantdeck/config.toml
///
/// Missing or unreadable files fall back to defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(QUANTDECK_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Artifact location; implies the artifact source
    pub artifact: Option<String>,
    /// Force the inline mock report
    pub mock: bool,
    pub section: Option<Section>,
    pub no_latency: bool,
}

impl Overrides {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(artifact) = self.artifact {
            settings.content.source = ContentSource::Artifact;
            settings.content.artifact = artifact;
        }
        // --mock wins over --artifact
        if self.mock {
            settings.content.source = ContentSource::Mock;
        }
        if let Some(section) = self.section {
            settings.ui.default_section = section;
        }
        if self.no_latency {
            settings.latency = LatencySettings::none();
        }
    }
}

/// Build the content provider described by `settings`
///
/// Relative artifact paths resolve against `project_path`.
pub fn build_provider(settings: &Settings, project_path: &Path) -> Result<CatalogProvider> {
    let latency = settings.latency.to_latency();

    let results = match settings.content.source {
        ContentSource::Mock => ResultsBacking::Inline,
        ContentSource::Artifact => {
            let location = settings
                .content
                .artifact
                .parse::<ArtifactLocation>()
                .context("Invalid artifact location in settings")?
                .resolve(project_path);
            ResultsBacking::Artifact(ArtifactReader::new(location))
        }
    };

    info!(
        "Content source: {} ({})",
        settings.content.source,
        results.describe()
    );
    Ok(CatalogProvider::new(latency, results))
}
