//! Actions representing side effects of menu events.
//!
//! The event handler never touches the page or the clock. It returns a
//! `Vec<Action>` that the [`MenuController`](super::MenuController) executes in
//! order, after all visibility has been recomputed.

use crate::domain::{CategoryFilter, VisibleSet};
use crate::ui::{InputFocus, ResultsViewModel, Stagger};

/// Side effects to be executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs show/hide transitions so the page matches `visible`.
    Transition {
        /// Final visibility of every item.
        visible: VisibleSet,
        /// Stagger interval family to use for items being shown.
        stagger: Stagger,
    },

    /// Highlights the control for this selection and deselects the others.
    SetActiveControl(CategoryFilter),

    /// Updates the count line and the "no results" placeholder.
    RenderResults(ResultsViewModel),

    /// Mirrors the selection into the `category` query parameter.
    SyncUrl(CategoryFilter),

    /// Restarts the search quiet period with this raw input.
    DebounceSearch(String),

    /// Drops any pending debounced search.
    CancelPendingSearch,

    /// Empties the search box.
    ResetSearchInput(InputFocus),
}
