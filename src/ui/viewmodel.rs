//! View model types for the results area.
//!
//! Computed from [`MenuState`](crate::app::MenuState) after every evaluation and
//! consumed by a [`MenuView`](crate::ui::MenuView). They carry display-ready text
//! only.

/// Everything the results area shows besides the items themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsViewModel {
    /// Status line, e.g. "Showing 2 items in Lunch".
    pub count_line: String,

    /// Placeholder shown in place of the grid when nothing is visible.
    pub no_results: Option<NoResults>,
}

/// Content of the "no results" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResults {
    /// Heading text.
    pub title: String,

    /// Explanation naming the query or category that matched nothing.
    pub message: String,
}
