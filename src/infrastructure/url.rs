//! Query-string handling for the `category` parameter.
//!
//! Pure functions over [`Url`]: the browser layer reads `location.href`, passes
//! it through here, and hands the result to `history.replaceState`.

use crate::domain::CategoryFilter;
use url::Url;

/// Name of the query parameter mirroring the active category.
pub const CATEGORY_PARAM: &str = "category";

/// Returns the `category` parameter of `url`, if present and non-empty.
#[must_use]
pub fn category_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == CATEGORY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Returns `url` with the `category` parameter reflecting `filter`.
///
/// `All` removes the parameter; any other selection sets it. Other parameters
/// and the fragment are preserved. When no parameters remain the query string
/// is dropped entirely.
///
/// # Examples
///
/// ```
/// use bliss_catering::infrastructure::url::with_category;
/// use bliss_catering::CategoryFilter;
/// use url::Url;
///
/// let url = Url::parse("https://bliss.example/menu?category=lunch").unwrap();
/// let cleared = with_category(&url, &CategoryFilter::All);
/// assert_eq!(cleared.as_str(), "https://bliss.example/menu");
/// ```
#[must_use]
pub fn with_category(url: &Url, filter: &CategoryFilter) -> Url {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != CATEGORY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if let CategoryFilter::Only(category) = filter {
        pairs.push((CATEGORY_PARAM.to_string(), category.clone()));
    }

    let mut synced = url.clone();
    if pairs.is_empty() {
        synced.set_query(None);
    } else {
        synced.query_pairs_mut().clear().extend_pairs(pairs);
    }
    synced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn sets_category_preserving_other_parameters() {
        let url = parse("https://bliss.example/menu?ref=home#top");
        let synced = with_category(&url, &CategoryFilter::parse("lunch"));

        assert_eq!(
            synced.as_str(),
            "https://bliss.example/menu?ref=home&category=lunch#top"
        );
        assert_eq!(category_param(&synced).as_deref(), Some("lunch"));
    }

    #[test]
    fn replaces_existing_category() {
        let url = parse("https://bliss.example/menu?category=lunch");
        let synced = with_category(&url, &CategoryFilter::parse("dessert"));

        assert_eq!(synced.as_str(), "https://bliss.example/menu?category=dessert");
    }

    #[test]
    fn all_removes_only_the_category() {
        let url = parse("https://bliss.example/menu?category=lunch&ref=home");
        let synced = with_category(&url, &CategoryFilter::All);

        assert_eq!(synced.as_str(), "https://bliss.example/menu?ref=home");
        assert_eq!(category_param(&synced), None);
    }

    #[test]
    fn empty_parameter_is_ignored() {
        let url = parse("https://bliss.example/menu?category=");
        assert_eq!(category_param(&url), None);
    }

    #[test]
    fn encodes_values_with_spaces() {
        let url = parse("https://bliss.example/menu");
        let synced = with_category(&url, &CategoryFilter::parse("hot drinks"));

        assert_eq!(category_param(&synced).as_deref(), Some("hot drinks"));
    }
}
