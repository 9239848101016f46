//! Startup data pipeline: load the feed, then enrich it with photos.

use showroom_inventory::CarListing;

use crate::config::ShowroomConfig;
use crate::enrich::{UnsplashClient, enrich};
use crate::loader::InventoryLoader;

/// Everything the first render needs. Never fails: a broken feed gives an
/// empty inventory and a broken photo service gives placeholder images.
///
/// `base` is the URL the (usually relative) inventory reference resolves
/// against.
pub async fn fetch_inventory(config: &ShowroomConfig, http: &reqwest::Client, base: Option<&str>) -> Vec<CarListing> {
    let loader = match InventoryLoader::resolve(http.clone(), base, &config.inventory_url) {
        Ok(loader) => loader,
        Err(err) => {
            tracing::error!("failed to load inventory: {err}");
            return Vec::new();
        }
    };

    let listings = loader.load().await;

    let Some(search_config) = &config.image_search else {
        return listings;
    };
    match UnsplashClient::new(http.clone(), search_config) {
        Ok(client) => enrich(listings, &client).await,
        Err(err) => {
            tracing::warn!("photo lookup disabled: {err}");
            listings
        }
    }
}
