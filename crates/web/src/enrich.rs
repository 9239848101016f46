//! Best-effort photo lookup for listings.
//!
//! Every listing gets exactly one independent lookup. The lookups run
//! concurrently and are joined before anything is rendered; a failure only
//! ever affects the listing it was made for.

use futures::future::join_all;
use reqwest::Url;
use serde::Deserialize;

use showroom_inventory::{CarListing, PLACEHOLDER_IMAGE};

use crate::config::ImageSearchConfig;
use crate::error::FetchError;

/// A photo search service.
#[allow(async_fn_in_trait)]
pub trait ImageSearch {
    /// URL of the first photo matching `query`, if the service found any.
    async fn first_photo(&self, query: &str) -> Result<Option<String>, FetchError>;
}

/// Unsplash `search/photos` client.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    endpoint: Url,
    access_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Default, Deserialize)]
struct Photo {
    #[serde(default)]
    urls: PhotoUrls,
}

#[derive(Debug, Default, Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
}

impl UnsplashClient {
    pub fn new(http: reqwest::Client, config: &ImageSearchConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.endpoint)))?;
        Ok(Self {
            http,
            endpoint,
            access_key: config.access_key.clone(),
        })
    }
}

impl ImageSearch for UnsplashClient {
    async fn first_photo(&self, query: &str) -> Result<Option<String>, FetchError> {
        let resp = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("client_id", self.access_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Api(resp.status().as_u16(), resp.text().await.unwrap_or_default()));
        }

        let body: SearchResponse = resp.json().await.map_err(|e| FetchError::Parse(e.to_string()))?;
        Ok(body
            .results
            .into_iter()
            .next()
            .and_then(|photo| photo.urls.regular)
            .filter(|url| !url.trim().is_empty()))
    }
}

/// Search text for a listing: `"{make} {model} {year} car"`.
pub fn photo_query(listing: &CarListing) -> String {
    let year = listing.year.map(|y| y.to_string()).unwrap_or_default();
    [listing.make.as_str(), listing.model.as_str(), year.as_str(), "car"]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up a photo for every listing. Output order matches input order.
pub async fn enrich<S: ImageSearch>(listings: Vec<CarListing>, search: &S) -> Vec<CarListing> {
    join_all(listings.into_iter().map(|listing| enrich_one(listing, search))).await
}

async fn enrich_one<S: ImageSearch>(mut listing: CarListing, search: &S) -> CarListing {
    match search.first_photo(&photo_query(&listing)).await {
        Ok(Some(url)) => {
            listing.image = Some(url);
            return listing;
        }
        Ok(None) => tracing::debug!(id = %listing.id, "no photo found"),
        Err(err) => tracing::warn!(id = %listing.id, "photo lookup failed: {err}"),
    }

    if listing.image.as_deref().is_none_or(|url| url.trim().is_empty()) {
        listing.image = Some(PLACEHOLDER_IMAGE.to_string());
    }
    listing
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Answers from a fixed table keyed by query; unknown queries fail.
    struct TableSearch(HashMap<String, Option<String>>);

    impl ImageSearch for TableSearch {
        async fn first_photo(&self, query: &str) -> Result<Option<String>, FetchError> {
            self.0
                .get(query)
                .cloned()
                .ok_or_else(|| FetchError::Network("connection refused".into()))
        }
    }

    fn listing(id: &str, make: &str, model: &str, year: u32) -> CarListing {
        let mut listing = CarListing::new(id.parse().unwrap(), make, model);
        listing.year = Some(year);
        listing
    }

    #[test]
    fn query_combines_make_model_year_and_keyword() {
        assert_eq!(photo_query(&listing("1", "Audi", "A4", 2019)), "Audi A4 2019 car");
        let undated = CarListing::new("2".parse().unwrap(), "Tesla", "Model 3");
        assert_eq!(photo_query(&undated), "Tesla Model 3 car");
    }

    #[tokio::test]
    async fn one_failure_does_not_affect_other_listings() {
        let search = TableSearch(HashMap::from([(
            "Volvo XC60 2021 car".to_string(),
            Some("https://img.example/xc60.jpg".to_string()),
        )]));
        let listings = vec![listing("c", "Saab", "9-3", 2009), listing("d", "Volvo", "XC60", 2021)];

        let out = enrich(listings, &search).await;

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id.as_str(), "c");
        assert_eq!(out[0].image.as_deref(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(out[1].image.as_deref(), Some("https://img.example/xc60.jpg"));
    }

    #[tokio::test]
    async fn miss_keeps_existing_image() {
        let search = TableSearch(HashMap::from([("Audi A4 2019 car".to_string(), None)]));
        let mut original = listing("a", "Audi", "A4", 2019);
        original.image = Some("https://dealer.example/a4.jpg".to_string());

        let out = enrich(vec![original], &search).await;
        assert_eq!(out[0].image.as_deref(), Some("https://dealer.example/a4.jpg"));
    }

    #[tokio::test]
    async fn hit_replaces_existing_image() {
        let search = TableSearch(HashMap::from([(
            "Audi A4 2019 car".to_string(),
            Some("https://img.example/a4.jpg".to_string()),
        )]));
        let mut original = listing("a", "Audi", "A4", 2019);
        original.image = Some("https://dealer.example/a4.jpg".to_string());

        let out = enrich(vec![original], &search).await;
        assert_eq!(out[0].image.as_deref(), Some("https://img.example/a4.jpg"));
    }
}
