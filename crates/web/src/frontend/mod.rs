//! Browser entry point: binds the showroom to the hosting page.

pub mod dom;

use std::cell::RefCell;

use anyhow::Context;
use chrono::Datelike;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::app::Showroom;
use crate::bootstrap::fetch_inventory;
use crate::config::ShowroomConfig;
use crate::events::{Hit, route_click, route_key};

use self::dom::{DomPage, OVERLAY_ELEMENT_ID};

thread_local! {
    static APP: RefCell<Option<Showroom<DomPage>>> = const { RefCell::new(None) };
}

/// Run `f` against the live showroom, if it has been started.
pub(crate) fn with_app(f: impl FnOnce(&mut Showroom<DomPage>)) {
    APP.with(|slot| match slot.try_borrow_mut() {
        Ok(mut guard) => {
            if let Some(app) = guard.as_mut() {
                f(app);
            }
        }
        Err(_) => tracing::warn!("showroom busy; dropping event"),
    });
}

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    showroom_observability::init_browser();

    start().map_err(|err| {
        tracing::error!("showroom failed to start: {err:#}");
        JsValue::from_str(&format!("{err:#}"))
    })
}

fn start() -> anyhow::Result<()> {
    let window = web_sys::window().context("no window object")?;
    let document = window.document().context("no document on window")?;
    let base = window.location().href().ok();

    let config = ShowroomConfig::default()
        .with_image_search_key(option_env!("SHOWROOM_UNSPLASH_KEY").map(str::to_string));

    let page = DomPage::bind(window, document.clone())?;
    let mut app = Showroom::new(page, config.clone());
    app.stamp_year(chrono::Local::now().year());
    app.begin_loading();
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    install_listeners(&document)?;

    wasm_bindgen_futures::spawn_local(async move {
        let http = reqwest::Client::new();
        let listings = fetch_inventory(&config, &http, base.as_deref()).await;
        with_app(|app| app.install(listings));
    });

    Ok(())
}

fn install_listeners(document: &Document) -> anyhow::Result<()> {
    listen(document, "click", |event| {
        let chain = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(hit_chain)
            .unwrap_or_default();
        if let Some(action) = route_click(&chain) {
            with_app(|app| app.dispatch(action));
        }
    })?;

    listen(document, "keydown", |event| {
        let action = event.dyn_ref::<KeyboardEvent>().and_then(|key| route_key(&key.key()));
        if let Some(action) = action {
            with_app(|app| app.dispatch(action));
        }
    })?;

    Ok(())
}

/// Attach `handler` for `kind` events on `target` for the page's lifetime.
fn listen(target: &web_sys::EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> anyhow::Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{e:?}"))
        .with_context(|| format!("failed to listen for {kind}"))?;
    closure.forget();
    Ok(())
}

/// Describe `origin` and each of its ancestors, nearest first.
fn hit_chain(origin: Element) -> Vec<Hit> {
    let mut chain = Vec::new();
    let mut current = Some(origin);
    while let Some(element) = current {
        let element_id = element.id();
        chain.push(Hit {
            action: element.get_attribute("data-action"),
            id: element.get_attribute("data-id"),
            closes: element.has_attribute("data-close"),
            is_overlay: element_id == OVERLAY_ELEMENT_ID,
            element_id: (!element_id.is_empty()).then_some(element_id),
        });
        current = element.parent_element();
    }
    chain
}
