//! Runtime configuration for the listing page.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_INVENTORY_URL: &str = "cars.json";
pub const DEFAULT_IMAGE_SEARCH_ENDPOINT: &str = "https://api.unsplash.com/search/photos";

/// Everything the page needs that isn't part of the inventory feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    /// Inventory feed, usually relative to the hosting page.
    pub inventory_url: String,
    /// Photo lookup; `None` skips enrichment entirely.
    pub image_search: Option<ImageSearchConfig>,
    pub contact: ContactConfig,
    /// Delay added per card index before the card is revealed.
    pub reveal_step_ms: u64,
    /// How long the overlay keeps its image after closing (closing transition).
    pub overlay_clear_delay_ms: u64,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            inventory_url: DEFAULT_INVENTORY_URL.to_string(),
            image_search: None,
            contact: ContactConfig::default(),
            reveal_step_ms: 90,
            overlay_clear_delay_ms: 300,
        }
    }
}

impl ShowroomConfig {
    /// Enable photo lookup with `access_key`, or disable it when the key is
    /// missing or blank.
    pub fn with_image_search_key(mut self, access_key: Option<String>) -> Self {
        self.image_search = access_key
            .filter(|key| !key.trim().is_empty())
            .map(|access_key| ImageSearchConfig {
                access_key,
                ..ImageSearchConfig::default()
            });
        self
    }

    pub fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }

    pub fn overlay_clear_delay(&self) -> Duration {
        Duration::from_millis(self.overlay_clear_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearchConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMAGE_SEARCH_ENDPOINT.to_string(),
            access_key: String::new(),
        }
    }
}

/// Dealer contact used by the overlay's call and chat links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub phone: String,
    pub chat_base_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "+4798827640".to_string(),
            chat_base_url: "https://wa.me/4798827640".to_string(),
        }
    }
}
