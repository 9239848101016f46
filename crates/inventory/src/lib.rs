//! Car inventory domain module.
//!
//! This crate contains the listing model and the filtering rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no DOM).

pub mod catalog;
pub mod filter;
pub mod listing;
pub mod placeholder;

pub use catalog::Catalog;
pub use filter::{FilterCriteria, FilterInput, filter};
pub use listing::CarListing;
pub use placeholder::PLACEHOLDER_IMAGE;
