//! Resource loader — one GET per collection per screen mount.
//!
//! No retry, no pagination, no timeout beyond the HTTP client's default.
//! Results go back to the UI over an mpsc channel tagged with the mount they
//! belong to, so the receiver can drop answers for screens that are gone.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::{ApiConfig, NetworkConfig};
use crate::reachability::{self, Reachability};
use crate::record::{CollectionPage, Record, ResourceKind};
use crate::screen::Mount;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Messages the background loader tasks send to the UI.
#[derive(Debug)]
pub enum LoaderEvent {
    Fetched {
        mount: Mount,
        result: Result<Vec<Record>, FetchError>,
    },
    Probed {
        mount: Mount,
        reachability: Reachability,
    },
}

/// Thin client over the SWAPI collection endpoints.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), kind.path())
    }

    /// Fetch the first page of `kind`'s collection.
    pub async fn fetch_collection(&self, kind: ResourceKind) -> Result<CollectionPage, FetchError> {
        let url = self.collection_url(kind);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let page: CollectionPage = serde_json::from_str(&body)?;
        debug!(
            "{}: {} records (count={:?}, next={:?})",
            kind,
            page.results.len(),
            page.count,
            page.next
        );
        Ok(page)
    }
}

/// Fetch `mount`'s collection in the background and report on `tx`.
///
/// A closed channel means the UI is gone; the result is dropped.
pub fn spawn_fetch(
    client: SwapiClient,
    mount: Mount,
    tx: mpsc::Sender<LoaderEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let result = client
            .fetch_collection(mount.kind)
            .await
            .map(|page| page.results);
        if let Err(e) = &result {
            warn!("[{}#{}] fetch failed: {}", mount.kind, mount.generation, e);
        }
        if tx.send(LoaderEvent::Fetched { mount, result }).await.is_err() {
            debug!("[{}#{}] receiver closed, dropping fetch result", mount.kind, mount.generation);
        }
    })
}

/// Probe connectivity to the API host in the background and report on `tx`.
pub fn spawn_probe(
    base_url: String,
    network: &NetworkConfig,
    mount: Mount,
    tx: mpsc::Sender<LoaderEvent>,
) -> tokio::task::JoinHandle<()> {
    let timeout = Duration::from_millis(network.probe_timeout_ms);
    tokio::spawn(async move {
        let reachability = reachability::probe(&base_url, timeout).await;
        debug!("[{}#{}] reachability: {:?}", mount.kind, mount.generation, reachability);
        if tx.send(LoaderEvent::Probed { mount, reachability }).await.is_err() {
            debug!("[{}#{}] receiver closed, dropping probe result", mount.kind, mount.generation);
        }
    })
}
