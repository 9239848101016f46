//! Detail overlay: open/closed state and the content shown for a listing.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;

use showroom_core::{ListingId, PLACEHOLDER_DASH};
use showroom_inventory::CarListing;

use crate::config::ContactConfig;
use crate::render::{escape_html, format_price};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open {
        listing: ListingId,
    },
}

/// The overlay state machine.
///
/// `generation` increases on every open, so a deferred cleanup scheduled by
/// a close can tell whether the overlay has been reopened since.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    state: OverlayState,
    generation: u64,
}

impl Overlay {
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    /// The listing on display, if open.
    pub fn showing(&self) -> Option<&ListingId> {
        match &self.state {
            OverlayState::Open { listing } => Some(listing),
            OverlayState::Closed => None,
        }
    }

    /// Open for `listing`, replacing whatever was shown. Opening while
    /// already open is allowed.
    pub fn open(&mut self, listing: ListingId) {
        self.generation += 1;
        self.state = OverlayState::Open { listing };
    }

    /// Close the overlay. Returns the generation to hand to
    /// [`Overlay::should_release_image`] later, or `None` if it was already
    /// closed.
    pub fn close(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.state) {
            OverlayState::Open { .. } => Some(self.generation),
            OverlayState::Closed => None,
        }
    }

    /// Whether the image may be released for a close made at `generation`.
    pub fn should_release_image(&self, generation: u64) -> bool {
        !self.is_open() && self.generation == generation
    }
}

/// Field values written into the overlay for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    /// Markup for the specs block. Values are escaped.
    pub specs_html: String,
    pub price: String,
    pub call_href: String,
    pub chat_href: String,
}

impl OverlayView {
    pub fn for_listing(listing: &CarListing, contact: &ContactConfig) -> Self {
        let mileage = listing.mileage.map(|km| km.to_string());
        let specs = [
            ("Mileage", mileage.as_deref()),
            ("Fuel", listing.fuel.as_deref()),
            ("Transmission", listing.transmission.as_deref()),
            ("VIN", listing.vin.as_deref()),
            ("Location", listing.location.as_deref()),
        ];
        let specs_html = specs
            .into_iter()
            .map(|(label, value)| {
                let value = value.filter(|v| !v.trim().is_empty()).unwrap_or(PLACEHOLDER_DASH);
                format!(r#"<div class="spec"><strong>{label}</strong><div>{}</div></div>"#, escape_html(value))
            })
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            image: listing.image_or_placeholder().to_string(),
            title: listing.title(),
            subtitle: listing.trim_or_empty().to_string(),
            specs_html,
            price: format_price(listing.price),
            call_href: format!("tel:{}", contact.phone),
            chat_href: chat_link(&contact.chat_base_url, listing),
        }
    }
}

/// Characters left as-is in a URI component; everything else is
/// percent-encoded (spaces become `%20`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Chat deep link with a prefilled, URL-encoded enquiry about `listing`.
pub fn chat_link(base: &str, listing: &CarListing) -> String {
    let message = format!("Hi, I am interested in {}", listing.title());
    match Url::parse(base) {
        Ok(mut url) => {
            url.set_fragment(None);
            let separator = if url.query().is_some() { '&' } else { '?' };
            format!("{url}{separator}text={}", utf8_percent_encode(&message, URI_COMPONENT))
        }
        Err(err) => {
            tracing::warn!(base, "invalid chat link base: {err}");
            base.to_string()
        }
    }
}
