//! Free-text search engine.
//!
//! Matching is a case-insensitive substring test against an item's name and
//! description. Queries are normalized once, when they are built, so the
//! predicate itself never allocates for the query side.

use crate::domain::{MenuItem, VisibleSet};
use std::fmt;

/// A normalized search query: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalizes raw input from the search box.
    ///
    /// # Examples
    ///
    /// ```
    /// use bliss_catering::app::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::new("  Burger ").as_str(), "burger");
    /// assert!(SearchQuery::new("   ").is_empty());
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `item` matches this query. The empty query matches everything.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.is_empty()
            || item.name.to_lowercase().contains(&self.0)
            || item.description.to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes which items a search query shows.
///
/// # Examples
///
/// ```
/// use bliss_catering::app::{apply_search, SearchQuery};
/// use bliss_catering::MenuItem;
///
/// let items = vec![
///     MenuItem::new("Chicken Wrap", "", "lunch"),
///     MenuItem::new("Beef Burger", "", "lunch"),
/// ];
/// let visible = apply_search(&SearchQuery::new("burger"), &items);
/// assert!(!visible.contains(0));
/// assert!(visible.contains(1));
/// ```
#[must_use]
pub fn apply_search(query: &SearchQuery, items: &[MenuItem]) -> VisibleSet {
    let _span = tracing::debug_span!(
        "apply_search",
        query_len = query.as_str().len(),
        total_items = items.len()
    )
    .entered();

    let visible = VisibleSet::from_predicate(items, |item| query.matches(item));

    tracing::debug!(visible_count = visible.count(), "search applied");
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catering_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Chicken Wrap", "Grilled chicken in a soft tortilla", "lunch"),
            MenuItem::new("Beef Burger", "Angus patty with cheddar", "lunch"),
            MenuItem::new("Fruit Salad", "Seasonal fruit with mint", "dessert"),
        ]
    }

    fn names(query: &str, items: &[MenuItem]) -> Vec<String> {
        apply_search(&SearchQuery::new(query), items)
            .visible_items(items)
            .map(|item| item.name.clone())
            .collect()
    }

    #[test]
    fn burger_shows_only_beef_burger() {
        assert_eq!(names("burger", &catering_menu()), vec!["Beef Burger"]);
    }

    #[test]
    fn empty_query_shows_everything() {
        assert_eq!(names("", &catering_menu()).len(), 3);
    }

    #[test]
    fn matches_description_case_insensitively() {
        assert_eq!(names("CHEDDAR", &catering_menu()), vec!["Beef Burger"]);
        assert_eq!(names("tortilla", &catering_menu()), vec!["Chicken Wrap"]);
    }

    #[test]
    fn category_text_is_not_searched() {
        assert!(names("dessert", &catering_menu()).is_empty());
    }

    #[test]
    fn membership_matches_predicate_for_sample_queries() {
        let items = catering_menu();
        for raw in ["", "a", "chicken", "fruit", "mint", "zzz", " salad "] {
            let query = SearchQuery::new(raw);
            let visible = apply_search(&query, &items);
            for (index, item) in items.iter().enumerate() {
                let q = query.as_str();
                let expected = q.is_empty()
                    || item.name.to_lowercase().contains(q)
                    || item.description.to_lowercase().contains(q);
                assert_eq!(visible.contains(index), expected, "{raw:?} / {}", item.name);
            }
        }
    }
}
