//! Replication artifact retrieval
//!
//! The replication report can be read from a JSON artifact instead of the
//! built-in mock. The artifact lives either on disk or behind an HTTP(S)
//! URL; both are parsed into a [`ReplicationResult`] with the same layout.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use quantdeck_core::{Error, ReplicationResult, Result, ResultExt};
use tracing::{debug, warn};
use url::Url;

/// Default file name looked up when no artifact location is configured
pub const DEFAULT_ARTIFACT: &str = "replication_results.json";

/// Upper bound for a single HTTP artifact request
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the replication artifact is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLocation {
    /// Local file; relative paths resolve against the working directory
    Path(PathBuf),
    /// HTTP or HTTPS URL fetched with GET
    Url(Url),
}

impl ArtifactLocation {
    /// Resolve a relative path against `base`; URLs and absolute paths are unchanged
    pub fn resolve(self, base: &Path) -> Self {
        match self {
            ArtifactLocation::Path(path) if path.is_relative() => {
                ArtifactLocation::Path(base.join(path))
            }
            other => other,
        }
    }
}

impl FromStr for ArtifactLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::artifact_location("empty artifact location"));
        }

        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(ArtifactLocation::Url(url)),
                "file" => url
                    .to_file_path()
                    .map(ArtifactLocation::Path)
                    .map_err(|_| Error::artifact_location(format!("invalid file URL: {trimmed}"))),
                // Windows drive letters parse as a one-letter scheme
                scheme if scheme.len() == 1 => Ok(ArtifactLocation::Path(PathBuf::from(trimmed))),
                scheme => Err(Error::artifact_location(format!(
                    "unsupported scheme '{scheme}' in {trimmed}"
                ))),
            },
            Err(_) => Ok(ArtifactLocation::Path(PathBuf::from(trimmed))),
        }
    }
}

impl fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactLocation::Path(path) => write!(f, "{}", path.display()),
            ArtifactLocation::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Reads and parses the replication artifact
#[derive(Debug, Clone)]
pub struct ArtifactReader {
    location: ArtifactLocation,
    client: reqwest::Client,
}

impl ArtifactReader {
    pub fn new(location: ArtifactLocation) -> Self {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self { location, client }
    }

    pub fn location(&self) -> &ArtifactLocation {
        &self.location
    }

    /// Fetch and parse the artifact
    pub async fn read(&self) -> Result<ReplicationResult> {
        let body = match &self.location {
            ArtifactLocation::Path(path) => read_file(path).await?,
            ArtifactLocation::Url(url) => self.get(url).await?,
        };

        let result = ReplicationResult::from_json(&body)
            .with_context(|| format!("Malformed replication artifact at {}", self.location))?;
        debug!(
            "Loaded replication artifact from {} ({} alphas)",
            self.location,
            result.alphas.len()
        );
        Ok(result)
    }

    async fn get(&self, url: &Url) -> Result<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), url.as_str()));
        }

        response.text().await.map_err(|e| Error::http(e.to_string()))
    }
}

async fn read_file(path: &Path) -> Result<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::artifact_not_found(path))
        }
        Err(e) => Err(e.into()),
    }
}
