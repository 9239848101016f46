use serde::{Deserialize, Serialize};

use showroom_core::{Entity, Kilometres, ListingId, Nok};

use crate::placeholder::PLACEHOLDER_IMAGE;

/// One vehicle for sale, as published in the inventory feed.
///
/// Everything except `id` may be missing from the feed. Missing text fields
/// become empty strings or `None`, and the presentation layer substitutes a
/// placeholder. Numeric fields are unsigned, so a negative year, price or
/// mileage makes the whole payload malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarListing {
    pub id: ListingId,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    pub trim: Option<String>,
    pub year: Option<u32>,
    #[serde(rename = "priceNOK")]
    pub price: Option<Nok>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    #[serde(rename = "km")]
    pub mileage: Option<Kilometres>,
    pub vin: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub badge: Option<String>,
}

impl CarListing {
    /// Listing with only the identifying fields set. Mostly useful in tests.
    pub fn new(id: ListingId, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id,
            make: make.into(),
            model: model.into(),
            trim: None,
            year: None,
            price: None,
            fuel: None,
            transmission: None,
            mileage: None,
            vin: None,
            location: None,
            image: None,
            badge: None,
        }
    }

    /// `"{year} {make} {model}"`, skipping whichever parts are missing.
    pub fn title(&self) -> String {
        let year = self.year.map(|y| y.to_string());
        [year.as_deref(), Some(self.make.as_str()), Some(self.model.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn trim_or_empty(&self) -> &str {
        self.trim.as_deref().unwrap_or("")
    }

    /// Lower-cased haystack the free-text filter searches in.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.make, self.model, self.trim_or_empty()).to_lowercase()
    }

    /// The image to display: the listing's own, else the placeholder graphic.
    pub fn image_or_placeholder(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

impl Entity for CarListing {
    type Id = ListingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
