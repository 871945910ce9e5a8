//! Result presenter: count line and "no results" placeholder text.

use crate::app::SearchQuery;
use crate::domain::{CategoryFilter, VisibleSet};
use crate::ui::viewmodel::{NoResults, ResultsViewModel};

/// Heading of the "no results" placeholder.
pub const NO_RESULTS_TITLE: &str = "No items found";

/// Formats the status line shown above the grid.
///
/// # Examples
///
/// ```
/// use bliss_catering::ui::presenter::count_line;
///
/// assert_eq!(count_line(2, "Lunch"), "Showing 2 items in Lunch");
/// ```
#[must_use]
pub fn count_line(visible_count: usize, label: &str) -> String {
    format!("Showing {visible_count} items in {label}")
}

/// Builds the placeholder for an empty result, or `None` when something is
/// visible.
///
/// A non-empty query names the query; otherwise the placeholder names the
/// category that matched nothing.
#[must_use]
pub fn no_results(visible: &VisibleSet, query: &SearchQuery, filter: &CategoryFilter) -> Option<NoResults> {
    if !visible.is_empty() {
        return None;
    }

    let message = if query.is_empty() {
        format!("There are no menu items in {}", filter.label())
    } else {
        format!("We couldn't find any menu items matching \"{query}\"")
    };

    Some(NoResults {
        title: NO_RESULTS_TITLE.to_string(),
        message,
    })
}

/// Computes the results view model for a visible set.
#[must_use]
pub fn present(visible: &VisibleSet, query: &SearchQuery, filter: &CategoryFilter) -> ResultsViewModel {
    ResultsViewModel {
        count_line: count_line(visible.count(), &filter.label()),
        no_results: no_results(visible, query, filter),
    }
}
