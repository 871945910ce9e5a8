//! Event handling and state transition logic.
//!
//! [`handle_event`] translates user input into state changes on [`MenuState`]
//! and a list of [`Action`]s. It is pure with respect to the page: all
//! recomputation happens here, synchronously, and effects are left to the
//! controller.
//!
//! # Event Types
//!
//! - **Load**: `PageLoaded`
//! - **Filter**: `CategorySelected`
//! - **Search**: `SearchInput`, `SearchSettled`, `SearchEscape`, `ClearSearch`

use super::actions::Action;
use super::search::SearchQuery;
use super::state::MenuState;
use crate::domain::CategoryFilter;
use crate::ui::{InputFocus, Stagger};

/// Menu events raised by the page or by the debounce timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The page finished loading; carries the `category` query parameter.
    PageLoaded {
        /// Value of the `category` parameter, if any.
        url_category: Option<String>,
    },

    /// A filter control was activated; carries its `data-category`.
    CategorySelected(String),

    /// The search box content changed; carries the raw value.
    SearchInput(String),

    /// The search quiet period elapsed; carries the last raw value.
    SearchSettled(String),

    /// Escape was pressed in the search box.
    SearchEscape,

    /// The placeholder's "Clear Search" button was pressed.
    ClearSearch,
}

/// Processes an event, mutates state, and returns the actions to execute.
///
/// # Example
///
/// ```
/// use bliss_catering::app::{handle_event, Action, Event, MenuState};
/// use bliss_catering::MenuItem;
///
/// let mut state = MenuState::new(
///     vec![MenuItem::new("Fruit Salad", "", "dessert")],
///     ["all", "dessert"],
/// );
/// let actions = handle_event(&mut state, &Event::SearchInput("fr".into()));
/// assert!(actions.contains(&Action::DebounceSearch("fr".into())));
/// ```
#[must_use]
pub fn handle_event(state: &mut MenuState, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PageLoaded { url_category } => match url_category {
            Some(category) if state.has_control(category) => {
                tracing::debug!(category = %category, "restoring category from URL");
                select_category(state, category)
            }
            Some(category) => {
                tracing::debug!(category = %category, "ignoring URL category without a control");
                vec![]
            }
            None => vec![],
        },
        Event::CategorySelected(category) => select_category(state, category),
        Event::SearchInput(raw) => {
            let mut actions = vec![];
            if !SearchQuery::new(raw).is_empty() {
                reset_filter(state, &mut actions);
            }
            actions.push(Action::DebounceSearch(raw.clone()));
            actions
        }
        Event::SearchSettled(raw) => {
            let mut actions = vec![];
            evaluate_search(state, SearchQuery::new(raw), &mut actions);
            actions
        }
        Event::SearchEscape => clear_search(state, InputFocus::Blur),
        Event::ClearSearch => clear_search(state, InputFocus::Focus),
    }
}

fn select_category(state: &mut MenuState, category: &str) -> Vec<Action> {
    let filter = CategoryFilter::parse(category);
    let visible = state.select_category(filter.clone()).clone();

    vec![
        Action::CancelPendingSearch,
        Action::SetActiveControl(filter.clone()),
        Action::Transition {
            visible,
            stagger: Stagger::Filter,
        },
        Action::RenderResults(state.results_viewmodel()),
        Action::SyncUrl(filter),
    ]
}

fn reset_filter(state: &mut MenuState, actions: &mut Vec<Action>) {
    let changed = state.reset_filter_for_search();
    actions.push(Action::SetActiveControl(CategoryFilter::All));
    if changed {
        actions.push(Action::SyncUrl(CategoryFilter::All));
    }
}

fn evaluate_search(state: &mut MenuState, query: SearchQuery, actions: &mut Vec<Action>) {
    if state.filter != CategoryFilter::All {
        reset_filter(state, actions);
    }
    let visible = state.run_search(query).clone();
    actions.push(Action::Transition {
        visible,
        stagger: Stagger::Search,
    });
    actions.push(Action::RenderResults(state.results_viewmodel()));
}

fn clear_search(state: &mut MenuState, focus: InputFocus) -> Vec<Action> {
    let mut actions = vec![Action::CancelPendingSearch, Action::ResetSearchInput(focus)];
    evaluate_search(state, SearchQuery::default(), &mut actions);
    actions
}
