//! Category filter engine.

use crate::domain::{CategoryFilter, MenuItem, VisibleSet};

/// Computes which items a category selection shows.
///
/// `All` shows every item; any other selection shows exactly the items whose
/// category equals it. A category no item carries yields an empty set.
///
/// # Examples
///
/// ```
/// use bliss_catering::app::apply_filter;
/// use bliss_catering::{CategoryFilter, MenuItem};
///
/// let items = vec![
///     MenuItem::new("Chicken Wrap", "", "lunch"),
///     MenuItem::new("Fruit Salad", "", "dessert"),
/// ];
/// let visible = apply_filter(&CategoryFilter::parse("dessert"), &items);
/// assert_eq!(visible.count(), 1);
/// assert!(visible.contains(1));
/// ```
#[must_use]
pub fn apply_filter(filter: &CategoryFilter, items: &[MenuItem]) -> VisibleSet {
    let _span = tracing::debug_span!(
        "apply_filter",
        category = %filter.as_str(),
        total_items = items.len()
    )
    .entered();

    let visible = VisibleSet::from_predicate(items, |item| filter.admits(item));

    tracing::debug!(visible_count = visible.count(), "category filter applied");
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

    fn names(visible: &VisibleSet, items: &[MenuItem]) -> Vec<String> {
        visible.visible_items(items).map(|item| item.name.clone()).collect()
    }

    #[test]
    fn dessert_shows_only_fruit_salad() {
        let items = catering_menu();
        let visible = apply_filter(&CategoryFilter::parse("dessert"), &items);
        assert_eq!(names(&visible, &items), vec!["Fruit Salad"]);
    }

    #[test]
    fn all_shows_every_item() {
        let items = catering_menu();
        assert_eq!(apply_filter(&CategoryFilter::All, &items).count(), 3);
    }

    #[test]
    fn unknown_category_shows_nothing() {
        let items = catering_menu();
        let visible = apply_filter(&CategoryFilter::parse("drinks"), &items);
        assert!(visible.is_empty());
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn membership_matches_predicate_for_every_category() {
        let items = catering_menu();
        for category in ["all", "lunch", "dessert", "drinks", "Lunch", ""] {
            let filter = CategoryFilter::parse(category);
            let visible = apply_filter(&filter, &items);
            for (index, item) in items.iter().enumerate() {
                let expected = category == "all" || item.category == category;
                assert_eq!(visible.contains(index), expected, "{category} / {}", item.name);
            }
        }
    }

    #[test]
    fn repeated_application_is_stable() {
        let items = catering_menu();
        let filter = CategoryFilter::parse("lunch");
        assert_eq!(apply_filter(&filter, &items), apply_filter(&filter, &items));
    }
}
