//! Test utilities for content providers
//!
//! [`ScriptedProvider`] serves catalog content but lets a test make chosen
//! sections fail or resolve late, and records every fetch it receives.
//! [`serve_once`] stands in for a remote replication artifact.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quantdeck_core::{Content, Error, Result, Section};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use crate::latency::Latency;
use crate::provider::{CatalogProvider, ContentProvider};

/// Serve one canned HTTP response on a random local port
///
/// Returns the artifact URL to fetch; the listener closes after the
/// first request.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    Url::parse(&format!("http://{addr}/replication_results.json")).expect("local artifact url")
}

/// Provider with per-section failures and delays
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    failures: HashMap<Section, String>,
    delays: HashMap<Section, Duration>,
    calls: Arc<Mutex<Vec<Section>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make fetches for `section` fail with an HTTP error carrying `message`
    pub fn failing(mut self, section: Section, message: impl Into<String>) -> Self {
        self.failures.insert(section, message.into());
        self
    }

    /// Delay fetches for `section` by `delay`
    pub fn with_delay(mut self, section: Section, delay: Duration) -> Self {
        self.delays.insert(section, delay);
        self
    }

    /// Sections fetched so far, in call order
    pub fn calls(&self) -> Vec<Section> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ContentProvider for ScriptedProvider {
    async fn fetch(&self, section: Section) -> Result<Content> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(section);
        }

        if let Some(delay) = self.delays.get(&section) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(message) = self.failures.get(&section) {
            return Err(Error::http(message.clone()));
        }

        CatalogProvider::inline(Latency::none()).fetch(section).await
    }
}
