//! The loaded dataset plus the subset currently on screen.

use std::collections::{BTreeSet, HashMap};

use showroom_core::{DomainError, DomainResult, Entity, ListingId};

use crate::filter::FilterCriteria;
use crate::listing::CarListing;

/// Full inventory and the visible (filtered) subset.
///
/// The listings are fixed once the catalog is built. The visible subset is
/// only ever replaced wholesale, by [`Catalog::refilter`] or
/// [`Catalog::show_all`], and always keeps dataset order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<CarListing>,
    index: HashMap<ListingId, usize>,
    visible: Vec<usize>,
}

impl Catalog {
    pub fn new(listings: Vec<CarListing>) -> Self {
        let mut index = HashMap::with_capacity(listings.len());
        for (pos, listing) in listings.iter().enumerate() {
            if index.contains_key(listing.id()) {
                tracing::warn!(id = %listing.id(), "duplicate listing id; keeping first occurrence");
                continue;
            }
            index.insert(listing.id().clone(), pos);
        }

        let visible = (0..listings.len()).collect();
        Self {
            listings,
            index,
            visible,
        }
    }

    pub fn listings(&self) -> &[CarListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Listings currently on screen, in dataset order.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &CarListing> + '_ {
        self.visible.iter().map(|&pos| &self.listings[pos])
    }

    /// Look a listing up in the full dataset, regardless of the active filter.
    pub fn get(&self, id: &ListingId) -> DomainResult<&CarListing> {
        self.index
            .get(id)
            .map(|&pos| &self.listings[pos])
            .ok_or_else(|| DomainError::not_found(id.as_str()))
    }

    /// Distinct makes, sorted, for the make selector.
    pub fn makes(&self) -> Vec<String> {
        self.listings
            .iter()
            .map(|listing| listing.make.as_str())
            .filter(|make| !make.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Replace the visible subset with the listings matching `criteria`.
    pub fn refilter(&mut self, criteria: &FilterCriteria) {
        self.visible = self
            .listings
            .iter()
            .enumerate()
            .filter(|(_, listing)| criteria.matches(listing))
            .map(|(pos, _)| pos)
            .collect();
    }

    /// Make every listing visible again.
    pub fn show_all(&mut self) {
        self.visible = (0..self.listings.len()).collect();
    }
}
