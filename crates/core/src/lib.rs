//! `showroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, listing identifiers, and the Norwegian number formatting
//! used wherever a price or a mileage is shown.

pub mod entity;
pub mod error;
pub mod format;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use format::{Kilometres, Nok, PLACEHOLDER_DASH};
pub use id::ListingId;
pub use value_object::ValueObject;
