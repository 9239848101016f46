//! `showroom-web`
//!
//! **Responsibility:** the car listing page.
//!
//! This crate provides:
//! - Inventory loading and best-effort photo enrichment
//! - Card rendering, filtering reactions and the detail overlay
//! - Click/key routing independent of the DOM
//! - The wasm frontend that binds all of the above to the hosting page
//!
//! Everything except `frontend` is target-independent and tested natively
//! against an in-memory page.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod enrich;
pub mod error;
pub mod events;
pub mod loader;
pub mod overlay;
pub mod page;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use app::Showroom;
pub use config::{ContactConfig, ImageSearchConfig, ShowroomConfig};
pub use error::FetchError;
pub use events::Action;
pub use page::{Deferred, Field, Page, Region};
