//! `Page` implementation over the browser DOM.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Window};

use crate::page::{Deferred, Field, Page, Region};
use crate::render::Card;

/// `id` of the overlay container; clicks landing on it are backdrop clicks.
pub const OVERLAY_ELEMENT_ID: &str = "carModal";

/// `(region, selector, required)`. The overlay and its parts are optional:
/// without them "View" is ignored with a warning.
const REGIONS: &[(Region, &str, bool)] = &[
    (Region::Grid, "#inventoryGrid", true),
    (Region::Loading, "#loading", true),
    (Region::EmptyState, "#emptyState", true),
    (Region::Nav, ".nav", false),
    (Region::CurrentYear, "#year", false),
    (Region::Overlay, "#carModal", false),
    (Region::OverlayImage, "#modalImage", false),
    (Region::OverlayTitle, "#modalTitle", false),
    (Region::OverlaySubtitle, "#modalSubtitle", false),
    (Region::OverlaySpecs, "#modalSpecs", false),
    (Region::OverlayPrice, "#modalPrice", false),
    (Region::OverlayCall, "#modalCall", false),
    (Region::OverlayChat, "#modalWhatsApp", false),
];

/// Filter controls; all required.
const FIELDS: &[(Field, &str)] = &[
    (Field::Search, "#searchInput"),
    (Field::Make, "#makeSelect"),
    (Field::YearMin, "#yearMin"),
    (Field::YearMax, "#yearMax"),
    (Field::Fuel, "#fuelSelect"),
];

pub struct DomPage {
    window: Window,
    document: Document,
    regions: HashMap<Region, Element>,
    fields: HashMap<Field, Element>,
    cards: Vec<Element>,
}

impl DomPage {
    /// Resolve every known element. Fails if a required one is missing.
    pub fn bind(window: Window, document: Document) -> anyhow::Result<Self> {
        let mut regions = HashMap::new();
        for &(region, selector, required) in REGIONS {
            match query(&document, selector)? {
                Some(element) => {
                    regions.insert(region, element);
                }
                None if required => return Err(anyhow!("required element {selector} is missing")),
                None => tracing::debug!(selector, "optional element not on page"),
            }
        }

        let mut fields = HashMap::new();
        for &(field, selector) in FIELDS {
            let element =
                query(&document, selector)?.ok_or_else(|| anyhow!("required filter control {selector} is missing"))?;
            fields.insert(field, element);
        }

        Ok(Self {
            window,
            document,
            regions,
            fields,
            cards: Vec::new(),
        })
    }

    fn region(&self, region: Region) -> Option<&Element> {
        self.regions.get(&region)
    }
}

fn query(document: &Document, selector: &str) -> anyhow::Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("{e:?}"))
        .with_context(|| format!("invalid selector {selector}"))
}

fn log_js_error(what: &str, result: Result<impl Sized, JsValue>) {
    if let Err(err) = result {
        tracing::warn!("{what} failed: {err:?}");
    }
}

impl Page for DomPage {
    fn has_region(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    fn field_value(&self, field: Field) -> String {
        let Some(element) = self.fields.get(&field) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_field_value(&mut self, field: Field, value: &str) {
        let Some(element) = self.fields.get(&field) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn add_make_options(&mut self, makes: &[String]) {
        let Some(select) = self.fields.get(&Field::Make) else {
            return;
        };
        for make in makes {
            let option = match self.document.create_element("option") {
                Ok(option) => option,
                Err(err) => {
                    tracing::warn!("creating make option failed: {err:?}");
                    return;
                }
            };
            log_js_error("setting option value", option.set_attribute("value", make));
            option.set_text_content(Some(make.as_str()));
            log_js_error("appending make option", select.append_child(&option));
        }
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        self.set_class(region, "hidden", !visible);
    }

    fn set_class(&mut self, region: Region, class: &str, on: bool) {
        if let Some(element) = self.region(region) {
            log_js_error("toggling class", element.class_list().toggle_with_force(class, on));
        }
    }

    fn toggle_class(&mut self, region: Region, class: &str) {
        if let Some(element) = self.region(region) {
            log_js_error("toggling class", element.class_list().toggle(class));
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(element) = self.region(region) {
            element.set_text_content(Some(text));
        }
    }

    fn set_html(&mut self, region: Region, html: &str) {
        if let Some(element) = self.region(region) {
            element.set_inner_html(html);
        }
    }

    fn set_attribute(&mut self, region: Region, name: &str, value: &str) {
        if let Some(element) = self.region(region) {
            log_js_error("setting attribute", element.set_attribute(name, value));
        }
    }

    fn replace_cards(&mut self, cards: &[Card]) {
        self.cards.clear();
        let Some(grid) = self.regions.get(&Region::Grid) else {
            return;
        };
        grid.set_inner_html("");

        for card in cards {
            let element = match self.document.create_element("div") {
                Ok(element) => element,
                Err(err) => {
                    tracing::warn!("creating card failed: {err:?}");
                    return;
                }
            };
            element.set_class_name("car-card");
            log_js_error("setting card role", element.set_attribute("role", "listitem"));
            element.set_inner_html(&card.html);
            log_js_error("appending card", grid.append_child(&element));
            self.cards.push(element);
        }
    }

    fn reveal_card(&mut self, index: usize) {
        if let Some(card) = self.cards.get(index) {
            log_js_error("revealing card", card.class_list().add_1("reveal"));
        }
    }

    fn schedule(&mut self, delay: Duration, task: Deferred) {
        let callback = Closure::once_into_js(move || super::with_app(|app| app.run_deferred(task)));
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        log_js_error(
            "scheduling timer",
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis),
        );
    }
}
