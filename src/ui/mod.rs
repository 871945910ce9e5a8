//! Presentation layer: view models, transition plans and the view seam.
//!
//! # Architecture
//!
//! ```text
//! MenuState → presenter::present → ResultsViewModel ─┐
//! VisibleSet → TransitionPlan ───────────────────────┼─► MenuView (DOM)
//! CategoryFilter → url::with_category ───────────────┘
//! ```
//!
//! [`MenuView`] is the only place where presentation touches the page. The
//! browser implementation lives in `web`; tests use an in-memory one.
//!
//! # Modules
//!
//! - [`viewmodel`]: Results view model types
//! - [`presenter`]: Count line and placeholder text
//! - [`transition`]: Per-item show/hide plans

pub mod presenter;
pub mod transition;
pub mod viewmodel;

pub use transition::{Stagger, TransitionPlan, TransitionStep};
pub use viewmodel::{NoResults, ResultsViewModel};

use crate::domain::error::Result;
use url::Url;

/// What happens to the search box when it is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// Give focus to the input (clear via the placeholder button).
    Focus,
    /// Drop focus from the input (clear via Escape).
    Blur,
}

/// Page-side effects of the menu feature.
///
/// Every method must be idempotent with respect to the page structure: calling
/// it twice with the same arguments leaves the same nodes in place.
pub trait MenuView {
    /// Runs the show/hide transitions for every item.
    ///
    /// # Errors
    ///
    /// Returns an error if a page mutation fails.
    fn apply_transitions(&mut self, plan: &TransitionPlan) -> Result<()>;

    /// Marks the control carrying `category` as the only active control.
    ///
    /// # Errors
    ///
    /// Returns an error if a page mutation fails.
    fn set_active_control(&mut self, category: &str) -> Result<()>;

    /// Creates or updates the single count line.
    ///
    /// # Errors
    ///
    /// Returns an error if a page mutation fails.
    fn set_count_line(&mut self, line: &str) -> Result<()>;

    /// Shows (creating or reusing) or removes the single placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error if a page mutation fails.
    fn set_no_results(&mut self, placeholder: Option<&NoResults>) -> Result<()>;

    /// Empties the search input and moves focus as requested.
    ///
    /// # Errors
    ///
    /// Returns an error if a page mutation fails.
    fn reset_search_input(&mut self, focus: InputFocus) -> Result<()>;

    /// Current page location.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be read or parsed.
    fn location(&self) -> Result<Url>;

    /// Replaces the current history entry's URL without navigating.
    ///
    /// # Errors
    ///
    /// Returns an error if the history API rejects the URL.
    fn replace_location(&mut self, url: &Url) -> Result<()>;
}
