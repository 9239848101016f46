//! Entity trait: identity that survives filtering and re-rendering.

/// Something looked up by identity rather than by position.
///
/// The overlay resolves a `data-id` against the full dataset, never against
/// whatever subset is on screen.
pub trait Entity {
    /// Strongly-typed identifier; displayable so it can be logged and written
    /// into markup.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
