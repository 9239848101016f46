//! Application state and the reactions to user actions.

use showroom_core::ListingId;
use showroom_inventory::{CarListing, Catalog, FilterCriteria, FilterInput};

use crate::config::ShowroomConfig;
use crate::events::Action;
use crate::overlay::{Overlay, OverlayView};
use crate::page::{Deferred, Field, Page, Region};
use crate::render::render_cards;

/// The listing page: dataset, visible subset, overlay, and the page they are
/// drawn on.
///
/// All state changes go through the methods below. Whenever the visible
/// subset is replaced, the grid is re-rendered as part of the same call.
pub struct Showroom<P: Page> {
    page: P,
    config: ShowroomConfig,
    catalog: Catalog,
    overlay: Overlay,
    render_count: u64,
}

impl<P: Page> Showroom<P> {
    pub fn new(page: P, config: ShowroomConfig) -> Self {
        Self {
            page,
            config,
            catalog: Catalog::default(),
            overlay: Overlay::default(),
            render_count: 0,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Fill in the footer year.
    pub fn stamp_year(&mut self, year: i32) {
        self.page.set_text(Region::CurrentYear, &year.to_string());
    }

    /// Show the loading indicator while the inventory is being fetched.
    pub fn begin_loading(&mut self) {
        self.page.set_visible(Region::Loading, true);
    }

    /// Take ownership of the loaded inventory and draw it unfiltered.
    pub fn install(&mut self, listings: Vec<CarListing>) {
        self.catalog = Catalog::new(listings);
        self.page.add_make_options(&self.catalog.makes());
        tracing::info!(count = self.catalog.len(), "inventory installed");
        self.render();
        self.page.set_visible(Region::Loading, false);
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::View(id) => self.open_listing(&id),
            Action::CloseOverlay => self.close_overlay(),
            Action::ApplyFilters => self.apply_filters(),
            Action::ClearFilters => self.clear_filters(),
            Action::ToggleMenu => self.page.toggle_class(Region::Nav, "open"),
        }
    }

    /// Read the filter controls and show the matching listings.
    pub fn apply_filters(&mut self) {
        let input = FilterInput {
            search: self.page.field_value(Field::Search),
            make: self.page.field_value(Field::Make),
            year_min: self.page.field_value(Field::YearMin),
            year_max: self.page.field_value(Field::YearMax),
            fuel: self.page.field_value(Field::Fuel),
        };
        let criteria = FilterCriteria::from_input(&input);
        self.catalog.refilter(&criteria);
        tracing::debug!(?criteria, visible = self.catalog.visible().len(), "filters applied");
        self.render();
    }

    /// Blank every filter control and show the whole inventory again.
    pub fn clear_filters(&mut self) {
        for field in Field::ALL {
            self.page.set_field_value(field, "");
        }
        self.catalog.show_all();
        self.render();
    }

    /// Open the overlay for `id`, looked up in the full inventory.
    pub fn open_listing(&mut self, id: &ListingId) {
        let listing = match self.catalog.get(id) {
            Ok(listing) => listing,
            Err(err) => {
                tracing::debug!("ignoring view request: {err}");
                return;
            }
        };

        if !self.page.has_region(Region::Overlay) {
            tracing::warn!(id = %id, "page has no detail overlay; ignoring view request");
            return;
        }

        let view = OverlayView::for_listing(listing, &self.config.contact);
        self.overlay.open(id.clone());

        let page = &mut self.page;
        page.set_attribute(Region::OverlayImage, "src", &view.image);
        page.set_text(Region::OverlayTitle, &view.title);
        page.set_text(Region::OverlaySubtitle, &view.subtitle);
        page.set_html(Region::OverlaySpecs, &view.specs_html);
        page.set_text(Region::OverlayPrice, &view.price);
        page.set_attribute(Region::OverlayCall, "href", &view.call_href);
        page.set_attribute(Region::OverlayChat, "href", &view.chat_href);
        page.set_class(Region::Overlay, "show", true);
        page.set_attribute(Region::Overlay, "aria-hidden", "false");
    }

    pub fn close_overlay(&mut self) {
        let Some(generation) = self.overlay.close() else {
            return;
        };
        self.page.set_class(Region::Overlay, "show", false);
        self.page.set_attribute(Region::Overlay, "aria-hidden", "true");
        self.page.schedule(
            self.config.overlay_clear_delay(),
            Deferred::ReleaseOverlayImage { generation },
        );
    }

    /// Run work the page scheduled earlier. Stale work is dropped.
    pub fn run_deferred(&mut self, task: Deferred) {
        match task {
            Deferred::RevealCard { render, index } => {
                if render == self.render_count {
                    self.page.reveal_card(index);
                }
            }
            Deferred::ReleaseOverlayImage { generation } => {
                if self.overlay.should_release_image(generation) {
                    self.page.set_attribute(Region::OverlayImage, "src", "");
                }
            }
        }
    }

    fn render(&mut self) {
        self.render_count += 1;

        if self.catalog.visible().len() == 0 {
            self.page.replace_cards(&[]);
            self.page.set_visible(Region::EmptyState, true);
            return;
        }

        self.page.set_visible(Region::EmptyState, false);
        let cards = render_cards(self.catalog.visible(), self.config.reveal_step());
        self.page.replace_cards(&cards);
        for (index, card) in cards.iter().enumerate() {
            self.page.schedule(
                card.reveal_after,
                Deferred::RevealCard {
                    render: self.render_count,
                    index,
                },
            );
        }
    }
}
