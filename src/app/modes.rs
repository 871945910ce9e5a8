//! Authority over the visible set.
//!
//! The category filter and the search box both decide which items are shown,
//! but never at the same time. [`Authority`] records which of the two produced
//! the current visible set.

/// The engine whose result is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Authority {
    /// The category filter. Initial state: filter `all`, everything visible.
    #[default]
    Filter,

    /// The search box. While searching the category filter is reset to `all`
    /// and no specific category control is active.
    Search,
}
