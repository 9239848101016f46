//! Page interaction routing.
//!
//! The page installs a single delegated click listener. For each click it
//! reports the chain of elements from the event origin up to the document
//! root, and this module decides which [`Action`] (if any) the click means.
//! Cards are matched by `data-action`, the page's fixed controls by their
//! element id. Nothing here depends on the DOM, so cards can be replaced
//! freely without rebinding anything, and every click yields at most one
//! action.

use showroom_core::ListingId;

/// Something the user asked the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    View(ListingId),
    CloseOverlay,
    ApplyFilters,
    ClearFilters,
    ToggleMenu,
}

/// One element on the path from a click's origin to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hit {
    /// `data-action` attribute.
    pub action: Option<String>,
    /// `data-id` attribute.
    pub id: Option<String>,
    /// Element `id`, if it has a non-empty one.
    pub element_id: Option<String>,
    /// Carries a `data-close` attribute.
    pub closes: bool,
    /// Is the overlay container itself (its backdrop).
    pub is_overlay: bool,
}

impl Hit {
    pub fn action(name: &str) -> Self {
        Self {
            action: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn element(id: &str) -> Self {
        Self {
            element_id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

pub const VIEW: &str = "view";
pub const CLOSE: &str = "close";

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const APPLY_FILTERS_ID: &str = "applyFilters";
pub const CLEAR_FILTERS_ID: &str = "clearFilters";

type Route = fn(&Hit) -> Option<Action>;

/// Routing table keyed by `data-action`, in precedence order.
const ROUTES: &[(&str, Route)] = &[
    (VIEW, route_view),
    (CLOSE, |_| Some(Action::CloseOverlay)),
];

/// Fixed page controls, keyed by element id.
const CONTROLS: &[(&str, Action)] = &[
    (MENU_TOGGLE_ID, Action::ToggleMenu),
    (APPLY_FILTERS_ID, Action::ApplyFilters),
    (CLEAR_FILTERS_ID, Action::ClearFilters),
];

fn route_control(hit: &Hit) -> Option<Action> {
    let id = hit.element_id.as_deref()?;
    CONTROLS
        .iter()
        .find(|(control, _)| *control == id)
        .map(|(_, action)| action.clone())
}

fn route_view(hit: &Hit) -> Option<Action> {
    let id = hit.id.as_deref()?.parse().ok()?;
    Some(Action::View(id))
}

/// Map a click to an action. `chain[0]` is the origin element.
///
/// A routed `data-action` wins, nearest element first within each route.
/// Next comes the nearest fixed control. After that, any `data-close`
/// element closes the overlay, and so does a click landing directly on the
/// overlay backdrop.
pub fn route_click(chain: &[Hit]) -> Option<Action> {
    for (name, route) in ROUTES {
        if let Some(hit) = chain.iter().find(|hit| hit.action.as_deref() == Some(*name)) {
            let action = route(hit);
            tracing::debug!(action = *name, routed = ?action, "click routed");
            return action;
        }
    }

    if let Some(action) = chain.iter().find_map(route_control) {
        tracing::debug!(routed = ?action, "control clicked");
        return Some(action);
    }

    if chain.iter().any(|hit| hit.closes) {
        return Some(Action::CloseOverlay);
    }
    if chain.first().is_some_and(|hit| hit.is_overlay) {
        return Some(Action::CloseOverlay);
    }
    None
}

/// Map a document-level key press to an action.
pub fn route_key(key: &str) -> Option<Action> {
    match key {
        "Escape" => Some(Action::CloseOverlay),
        _ => None,
    }
}
