//! Page detection from the request path.
//!
//! The same script is included on every page of the site; which behaviors are
//! mounted depends on the path the visitor is on.

/// A page with page-specific behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Menu page: filter controls, search box, result count, URL sync.
    Menu,
    /// Contact page: contact form validation.
    Contact,
    /// Login page: login form validation and submit feedback.
    Login,
    /// Any other page. Only site-wide behavior applies.
    Other,
}

impl Page {
    /// Classifies a `location.pathname`.
    ///
    /// Matching is by substring so that `/menu`, `/menu.html` and
    /// `/catering/menu/` all resolve to [`Page::Menu`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bliss_catering::Page;
    ///
    /// assert_eq!(Page::from_path("/menu.html"), Page::Menu);
    /// assert_eq!(Page::from_path("/about"), Page::Other);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path.contains("login") {
            Self::Login
        } else if path.contains("menu") {
            Self::Menu
        } else if path.contains("contact") {
            Self::Contact
        } else {
            Self::Other
        }
    }
}
