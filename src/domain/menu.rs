//! Menu domain model.
//!
//! Defines [`MenuItem`], the read-only entries rendered by the server, the
//! [`CategoryFilter`] selected through the filter controls, and [`VisibleSet`],
//! the per-item visibility decision produced by the filter and search engines.

/// Category value carried by the control that shows every item.
pub const ALL_CATEGORIES: &str = "all";

/// A single entry of the rendered menu.
///
/// Items are read from the DOM once at page load and never change during a
/// page view. The engines refer to them by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub category: String,
}

impl MenuItem {
    /// Creates a menu item.
    ///
    /// # Examples
    ///
    /// ```
    /// use bliss_catering::MenuItem;
    ///
    /// let item = MenuItem::new("Fruit Salad", "Seasonal fruit", "dessert");
    /// assert_eq!(item.category, "dessert");
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// The active category selection.
///
/// `All` corresponds to the `"all"` control; every other control value selects
/// exactly the items whose category is equal to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a `data-category` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bliss_catering::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::parse("lunch"),
    ///     CategoryFilter::Only("lunch".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Returns the `data-category` value of the control for this selection.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Returns whether the item belongs to this selection.
    #[must_use]
    pub fn admits(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }

    /// Human-readable label used by the results count line.
    ///
    /// `All` reads "All Items"; a category is shown with its first letter
    /// upper-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// use bliss_catering::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::All.label(), "All Items");
    /// assert_eq!(CategoryFilter::parse("dessert").label(), "Dessert");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All Items".to_string(),
            Self::Only(category) => {
                let mut chars = category.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            }
        }
    }
}

/// Visibility decision for every item, in menu order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleSet {
    flags: Vec<bool>,
}

impl VisibleSet {
    /// Builds a visible set by evaluating `predicate` against every item.
    pub fn from_predicate<F>(items: &[MenuItem], predicate: F) -> Self
    where
        F: Fn(&MenuItem) -> bool,
    {
        Self {
            flags: items.iter().map(predicate).collect(),
        }
    }

    /// Returns a set where every one of `len` items is visible.
    #[must_use]
    pub fn all(len: usize) -> Self {
        Self {
            flags: vec![true; len],
        }
    }

    /// Whether the item at `index` is visible. Out-of-range indices are hidden.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Number of visible items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|visible| **visible).count()
    }

    /// Total number of items the set describes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Iterates `(index, visible)` pairs in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.flags.iter().copied().enumerate()
    }

    /// Resolves the visible items against the store they were computed from.
    pub fn visible_items<'a>(&'a self, items: &'a [MenuItem]) -> impl Iterator<Item = &'a MenuItem> {
        items
            .iter()
            .zip(&self.flags)
            .filter_map(|(item, visible)| visible.then_some(item))
    }
}
