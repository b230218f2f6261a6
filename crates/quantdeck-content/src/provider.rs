//! Content providers
//!
//! A [`ContentProvider`] turns a [`Section`] into the [`Content`] it displays.
//! Fetches are asynchronous and wait out an artificial [`Latency`] before
//! resolving, whatever the backing store.
//!
//! [`CatalogProvider`] serves the built-in catalog. Where the replication
//! report comes from is decided at construction time through
//! [`ResultsBacking`]: the inline mock or an [`ArtifactReader`].

use quantdeck_core::{Content, ContentShape, Error, Result, Section};
use tracing::debug;

use crate::artifact::ArtifactReader;
use crate::catalog;
use crate::latency::Latency;

/// Produces the content for a dashboard section
#[trait_variant::make(Send)]
pub trait ContentProvider {
    /// Fetch the content for `section`.
    ///
    /// Text sections fail with [`Error::SectionNotFound`] when no explanation
    /// is registered; artifact-backed results fail with an I/O-class error
    /// when the artifact is missing, unreachable, or malformed.
    async fn fetch(&self, section: Section) -> Result<Content>;
}

/// Source of the replication report
#[derive(Debug, Clone, Default)]
pub enum ResultsBacking {
    /// Serve [`catalog::mock_replication_result`]
    #[default]
    Inline,
    /// Read the persisted artifact on every fetch
    Artifact(ArtifactReader),
}

impl ResultsBacking {
    pub fn describe(&self) -> String {
        match self {
            ResultsBacking::Inline => "inline mock".to_string(),
            ResultsBacking::Artifact(reader) => format!("artifact {}", reader.location()),
        }
    }
}

/// Serves the built-in catalog with per-shape latency
#[derive(Debug, Clone, Default)]
pub struct CatalogProvider {
    latency: Latency,
    results: ResultsBacking,
}

impl CatalogProvider {
    pub fn new(latency: Latency, results: ResultsBacking) -> Self {
        Self { latency, results }
    }

    /// Catalog with the inline mock report
    pub fn inline(latency: Latency) -> Self {
        Self::new(latency, ResultsBacking::Inline)
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn results_backing(&self) -> &ResultsBacking {
        &self.results
    }
}

impl ContentProvider for CatalogProvider {
    async fn fetch(&self, section: Section) -> Result<Content> {
        let shape = section.shape();
        debug!("Fetching {} ({:?}) from catalog", section, shape);
        self.latency.wait(shape).await;

        match shape {
            ContentShape::StrategyList => Ok(Content::Strategies(catalog::strategy_library())),
            ContentShape::ReplicationResult => match &self.results {
                ResultsBacking::Inline => {
                    Ok(Content::Replication(catalog::mock_replication_result()))
                }
                ResultsBacking::Artifact(reader) => reader.read().await.map(Content::Replication),
            },
            ContentShape::Text => catalog::explanation(section)
                .map(|text| Content::Text(text.to_string()))
                .ok_or_else(|| Error::section_not_found(section)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactLocation;
    use std::time::Duration;

    #[tokio::test]
    async fn test_every_section_yields_its_shape() {
        let provider = CatalogProvider::inline(Latency::none());
        for section in Section::ALL {
            let content = provider.fetch(section).await.unwrap();
            assert_eq!(content.shape(), section.shape(), "{section}");
        }
    }

    #[tokio::test]
    async fn test_strategy_list_has_five_records() {
        let provider = CatalogProvider::inline(Latency::none());
        match provider.fetch(Section::AlphaLibrary).await.unwrap() {
            Content::Strategies(strategies) => {
                assert_eq!(strategies.len(), 5);
                assert!(strategies
                    .iter()
                    .all(|s| !s.name.is_empty() && !s.description.is_empty()));
            }
            other => panic!("expected strategies, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_inline_results() {
        let provider = CatalogProvider::default();
        assert!(matches!(provider.results_backing(), ResultsBacking::Inline));
        let content = CatalogProvider::inline(Latency::none())
            .fetch(Section::ReplicationTest)
            .await
            .unwrap();
        match content {
            Content::Replication(result) => assert_eq!(result.alphas.len(), 5),
            other => panic!("expected replication result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_artifact_backing_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(
            &path,
            r#"{"portfolio_pnl":{"sandbox_pnl":1.5,"backtest_pnl":1.25,"pnl_match":"FAIL"},"alphas":{}}"#,
        )
        .unwrap();

        let provider = CatalogProvider::new(
            Latency::none(),
            ResultsBacking::Artifact(ArtifactReader::new(ArtifactLocation::Path(path))),
        );
        match provider.fetch(Section::ReplicationTest).await.unwrap() {
            Content::Replication(result) => {
                assert_eq!(result.portfolio_pnl.backtest_pnl, 1.25);
                assert!(result.alphas.is_empty());
            }
            other => panic!("expected replication result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_artifact_rejects_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = CatalogProvider::new(
            Latency::none(),
            ResultsBacking::Artifact(ArtifactReader::new(ArtifactLocation::Path(
                dir.path().join("missing.json"),
            ))),
        );
        let err = provider.fetch(Section::ReplicationTest).await.unwrap_err();
        assert!(err.is_io());
    }

    #[tokio::test]
    async fn test_artifact_backing_does_not_affect_text_sections() {
        let provider = CatalogProvider::new(
            Latency::none(),
            ResultsBacking::Artifact(ArtifactReader::new(ArtifactLocation::Path(
                "/definitely/missing.json".into(),
            ))),
        );
        assert!(provider.fetch(Section::Objective).await.is_ok());
        assert!(provider.fetch(Section::AlphaLibrary).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_suspends_until_latency_elapses() {
        let provider = CatalogProvider::inline(Latency::from_millis(50, 50, 50));

        let early =
            tokio::time::timeout(Duration::from_millis(10), provider.fetch(Section::Objective))
                .await;
        assert!(early.is_err(), "fetch resolved before its latency");

        assert!(provider.fetch(Section::Objective).await.is_ok());
    }

    #[test]
    fn test_results_backing_describe() {
        assert_eq!(ResultsBacking::Inline.describe(), "inline mock");
        let reader = ArtifactReader::new(ArtifactLocation::Path("r.json".into()));
        assert_eq!(ResultsBacking::Artifact(reader).describe(), "artifact r.json");
    }
}
