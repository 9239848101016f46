//! Inventory feed loading.

use reqwest::Url;
use showroom_inventory::CarListing;

use crate::error::FetchError;

/// Fetches the static inventory feed.
#[derive(Debug, Clone)]
pub struct InventoryLoader {
    http: reqwest::Client,
    url: Url,
}

impl InventoryLoader {
    pub fn new(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// Build a loader for `reference`, resolved against `base` when given
    /// (the hosting page's location in the browser).
    pub fn resolve(http: reqwest::Client, base: Option<&str>, reference: &str) -> Result<Self, FetchError> {
        Ok(Self::new(http, resolve_url(base, reference)?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode the feed, reporting why it failed.
    pub async fn try_load(&self) -> Result<Vec<CarListing>, FetchError> {
        let resp = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Api(resp.status().as_u16(), resp.text().await.unwrap_or_default()));
        }

        resp.json().await.map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Fetch the feed; any failure yields an empty inventory.
    pub async fn load(&self) -> Vec<CarListing> {
        match self.try_load().await {
            Ok(listings) => {
                tracing::info!(url = %self.url, count = listings.len(), "inventory loaded");
                listings
            }
            Err(err) => {
                tracing::error!(url = %self.url, "failed to load inventory: {err}");
                Vec::new()
            }
        }
    }
}

/// Resolve a possibly relative `reference` against `base`.
pub fn resolve_url(base: Option<&str>, reference: &str) -> Result<Url, FetchError> {
    let resolved = match base {
        Some(base) => Url::parse(base).and_then(|base| base.join(reference)),
        None => Url::parse(reference),
    };
    resolved.map_err(|e| FetchError::InvalidUrl(format!("{reference}: {e}")))
}
