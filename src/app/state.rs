//! Menu page state.
//!
//! [`MenuState`] is the single source of truth for the menu feature: the item
//! store read from the page, the known filter controls, the filter and search
//! states, and the visible set they last produced.
//!
//! # State Components
//!
//! - **Items**: Menu entries in page order, read-only after load
//! - **Controls**: `data-category` values of the filter controls on the page
//! - **Filter**: Active category selection, default `all`
//! - **Query**: Last evaluated search query, normalized
//! - **Authority**: Which of filter/search produced `visible`
//! - **Visible**: Per-item visibility

use super::filter::apply_filter;
use super::modes::Authority;
use super::search::{apply_search, SearchQuery};
use crate::domain::{CategoryFilter, MenuItem, VisibleSet};
use crate::ui::presenter;
use crate::ui::viewmodel::ResultsViewModel;
use std::collections::BTreeSet;

/// Central state container for the menu page.
#[derive(Debug, Clone)]
pub struct MenuState {
    /// Menu entries in page order.
    pub items: Vec<MenuItem>,

    /// Categories for which a filter control exists, including `all`.
    pub controls: BTreeSet<String>,

    /// Active category selection.
    pub filter: CategoryFilter,

    /// Query of the last search evaluation.
    pub query: SearchQuery,

    /// Engine that produced `visible`.
    pub authority: Authority,

    /// Current visibility of every item.
    pub visible: VisibleSet,
}

impl MenuState {
    /// Creates the page-load state: filter `all`, empty query, every item
    /// visible.
    ///
    /// # Examples
    ///
    /// ```
    /// use bliss_catering::app::MenuState;
    /// use bliss_catering::MenuItem;
    ///
    /// let state = MenuState::new(
    ///     vec![MenuItem::new("Fruit Salad", "", "dessert")],
    ///     ["all", "dessert"],
    /// );
    /// assert_eq!(state.visible.count(), 1);
    /// assert!(state.has_control("dessert"));
    /// ```
    #[must_use]
    pub fn new<I, S>(items: Vec<MenuItem>, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let visible = VisibleSet::all(items.len());
        Self {
            items,
            controls: controls.into_iter().map(Into::into).collect(),
            filter: CategoryFilter::All,
            query: SearchQuery::default(),
            authority: Authority::Filter,
            visible,
        }
    }

    /// Whether a filter control carries `category`.
    #[must_use]
    pub fn has_control(&self, category: &str) -> bool {
        self.controls.contains(category)
    }

    /// Makes the category filter authoritative and recomputes visibility.
    pub fn select_category(&mut self, filter: CategoryFilter) -> &VisibleSet {
        tracing::debug!(category = %filter.as_str(), "category selected");
        self.visible = apply_filter(&filter, &self.items);
        self.filter = filter;
        self.authority = Authority::Filter;
        &self.visible
    }

    /// Resets the filter to `all` ahead of a search.
    ///
    /// Returns `true` when a specific category was active before.
    pub fn reset_filter_for_search(&mut self) -> bool {
        let changed = self.filter != CategoryFilter::All;
        self.filter = CategoryFilter::All;
        changed
    }

    /// Makes the search authoritative and recomputes visibility.
    pub fn run_search(&mut self, query: SearchQuery) -> &VisibleSet {
        tracing::debug!(query = %query, "search evaluated");
        self.reset_filter_for_search();
        self.visible = apply_search(&query, &self.items);
        self.query = query;
        self.authority = Authority::Search;
        &self.visible
    }

    /// Computes the results view model for the current visible set.
    ///
    /// The placeholder names the query only while the search is authoritative.
    #[must_use]
    pub fn results_viewmodel(&self) -> ResultsViewModel {
        let query = match self.authority {
            Authority::Search => self.query.clone(),
            Authority::Filter => SearchQuery::default(),
        };
        presenter::present(&self.visible, &query, &self.filter)
    }
}
