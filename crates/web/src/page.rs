//! The page surface the showroom reads from and writes to.
//!
//! The hosting page owns its structure. The showroom only touches a fixed set
//! of named regions and filter fields, through this trait. The wasm frontend
//! implements it on top of the real DOM.

use std::time::Duration;

use crate::render::Card;

/// Named elements the showroom writes to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Grid,
    Loading,
    EmptyState,
    Nav,
    CurrentYear,
    Overlay,
    OverlayImage,
    OverlayTitle,
    OverlaySubtitle,
    OverlaySpecs,
    OverlayPrice,
    OverlayCall,
    OverlayChat,
}

/// Filter controls the showroom reads from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Search,
    Make,
    YearMin,
    YearMax,
    Fuel,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Search, Field::Make, Field::YearMin, Field::YearMax, Field::Fuel];
}

/// Work the page runs later, handed back through
/// [`Showroom::run_deferred`](crate::app::Showroom::run_deferred).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Reveal card `index` of render number `render`.
    RevealCard { render: u64, index: usize },
    /// Release the overlay image for a close made at `generation`.
    ReleaseOverlayImage { generation: u64 },
}

pub trait Page {
    /// Whether the page has an element for `region`. Writes to a missing
    /// region are no-ops.
    fn has_region(&self, region: Region) -> bool;

    fn field_value(&self, field: Field) -> String;
    fn set_field_value(&mut self, field: Field, value: &str);
    /// Append one option per make to the make selector.
    fn add_make_options(&mut self, makes: &[String]);

    /// Show or hide a region (the `hidden` class).
    fn set_visible(&mut self, region: Region, visible: bool);
    fn set_class(&mut self, region: Region, class: &str, on: bool);
    fn toggle_class(&mut self, region: Region, class: &str);
    fn set_text(&mut self, region: Region, text: &str);
    fn set_html(&mut self, region: Region, html: &str);
    fn set_attribute(&mut self, region: Region, name: &str, value: &str);

    /// Replace every card in the grid.
    fn replace_cards(&mut self, cards: &[Card]);
    /// Mark card `index` of the current grid as revealed.
    fn reveal_card(&mut self, index: usize);

    /// Run `task` after `delay`.
    fn schedule(&mut self, delay: Duration, task: Deferred);
}
