//! One-time catalog loading.
//!
//! Sources are tried in order and the first success wins:
//! 1. Remote JSON dump (skipped when offline or no URL is configured)
//! 2. Archive: the configured file, or the archive bundled into the binary
//! 3. Empty catalog
//!
//! There is no retry and no backoff. Loading never fails outward.

use crate::catalog::bundled_catalog;
use crate::config::SourceConfig;
use crate::{Catalog, Error, Result};
use std::path::Path;
use std::time::Duration;

/// Load the catalog from the configured sources
pub async fn load_catalog(source: &SourceConfig) -> Catalog {
    if source.offline {
        tracing::info!("Offline mode, skipping remote recipe fetch");
    } else if let Some(url) = source.remote_url.as_deref() {
        match fetch_remote(url, Duration::from_secs(source.timeout_secs)).await {
            Ok(catalog) => {
                log_loaded("remote", &catalog);
                return catalog;
            }
            Err(e) => {
                tracing::warn!("Loading remote recipes from {} failed: {}", url, e);
            }
        }
    }

    match load_archive(source.archive_path.as_deref()) {
        Ok(catalog) => {
            log_loaded("archive", &catalog);
            catalog
        }
        Err(e) => {
            tracing::warn!("Reading recipe archive failed: {}. Using an empty catalog.", e);
            Catalog::empty()
        }
    }
}

/// Fetch and parse the remote recipe dump
pub async fn fetch_remote(url: &str, timeout: Duration) -> Result<Catalog> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("mychef/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Other(format!(
            "HTTP {} fetching '{}'",
            status.as_u16(),
            url
        )));
    }

    let body = response.text().await?;
    Catalog::from_archive_json(&body)
}

/// Read the archive at `path`, or the bundled archive when `path` is `None`
pub fn load_archive(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            tracing::debug!("Read recipe archive {:?}", path);
            Catalog::from_archive_json(&contents)
        }
        None => Ok(bundled_catalog().clone()),
    }
}

fn log_loaded(source: &str, catalog: &Catalog) {
    tracing::info!(
        "Loaded {} recipes in {} categories from {}",
        catalog.len(),
        catalog.categories.len(),
        source
    );
}
