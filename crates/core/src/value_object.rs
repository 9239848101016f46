//! Value objects: shown by value, compared by value.

use crate::format::PLACEHOLDER_DASH;

/// An immutable attribute with no identity of its own (two prices of
/// 349 900 kr are the same price) and a canonical on-screen form.
///
/// ```
/// use showroom_core::{Kilometres, Nok, ValueObject};
///
/// assert_eq!(Nok::display_or_dash(None), "—");
/// assert_eq!(Kilometres::display_or_dash(Some(&Kilometres(900))), "900 km");
/// assert_eq!(Nok(349_900), Nok(349_900));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + core::fmt::Display {
    /// Display form of an optional attribute, or the placeholder dash.
    fn display_or_dash(value: Option<&Self>) -> String {
        value.map_or_else(|| PLACEHOLDER_DASH.to_string(), ToString::to_string)
    }
}
