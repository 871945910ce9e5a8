//! Action execution against a scheduler and a view.
//!
//! [`MenuController`] owns the menu state together with the two effectful
//! collaborators: a [`Scheduler`] for the search debounce and a [`MenuView`] for
//! the page. Events go in through [`MenuController::dispatch`]; elapsed timers go
//! in through [`MenuController::timer_elapsed`].

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::state::MenuState;
use crate::domain::error::Result;
use crate::infrastructure::timer::{Debouncer, Scheduler, TimerId};
use crate::infrastructure::url::with_category;
use crate::ui::{MenuView, Stagger, TransitionPlan};
use std::time::Duration;

/// Durations driving the menu's timing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Input quiet period before a search runs.
    pub search_debounce: Duration,
    /// Per-index delay when a filter shows items.
    pub filter_stagger: Duration,
    /// Per-index delay when a search shows items.
    pub search_stagger: Duration,
    /// Delay before hidden items leave the layout.
    pub hide_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(300),
            filter_stagger: Duration::from_millis(50),
            search_stagger: Duration::from_millis(30),
            hide_delay: Duration::from_millis(300),
        }
    }
}

/// Drives the menu feature: state, debounce and page effects.
#[derive(Debug)]
pub struct MenuController<S, V> {
    state: MenuState,
    debouncer: Debouncer<String>,
    scheduler: S,
    view: V,
    timing: Timing,
}

impl<S: Scheduler, V: MenuView> MenuController<S, V> {
    #[must_use]
    pub fn new(state: MenuState, scheduler: S, view: V, timing: Timing) -> Self {
        Self {
            state,
            debouncer: Debouncer::new(timing.search_debounce),
            scheduler,
            view,
            timing,
        }
    }

    /// Handles an event and executes the resulting actions in order.
    ///
    /// # Errors
    ///
    /// Returns the first failing action's error; later actions are skipped.
    pub fn dispatch(&mut self, event: &Event) -> Result<()> {
        let actions = handle_event(&mut self.state, event);
        tracing::debug!(action_count = actions.len(), "menu event handled");

        for action in actions {
            self.execute(action)?;
        }
        Ok(())
    }

    /// Handles an elapsed timer. Superseded debounce timers are ignored.
    ///
    /// # Errors
    ///
    /// Propagates errors from the resulting search evaluation.
    pub fn timer_elapsed(&mut self, id: TimerId) -> Result<()> {
        match self.debouncer.fire(id) {
            Some(raw) => self.dispatch(&Event::SearchSettled(raw)),
            None => {
                tracing::debug!(timer = id.0, "stale timer ignored");
                Ok(())
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> &MenuState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn execute(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Transition { visible, stagger } => {
                let stagger = match stagger {
                    Stagger::Filter => self.timing.filter_stagger,
                    Stagger::Search => self.timing.search_stagger,
                };
                let plan = TransitionPlan::new(&visible, stagger, self.timing.hide_delay);
                self.view.apply_transitions(&plan)
            }
            Action::SetActiveControl(filter) => self.view.set_active_control(filter.as_str()),
            Action::RenderResults(results) => {
                self.view.set_count_line(&results.count_line)?;
                self.view.set_no_results(results.no_results.as_ref())
            }
            Action::SyncUrl(filter) => {
                let current = self.view.location()?;
                let synced = with_category(&current, &filter);
                if synced != current {
                    self.view.replace_location(&synced)?;
                }
                Ok(())
            }
            Action::DebounceSearch(raw) => self.debouncer.call(&mut self.scheduler, raw),
            Action::CancelPendingSearch => {
                self.debouncer.cancel(&mut self.scheduler);
                Ok(())
            }
            Action::ResetSearchInput(focus) => self.view.reset_search_input(focus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItem;
    use crate::infrastructure::timer::ManualScheduler;
    use crate::infrastructure::url::category_param;
    use crate::ui::{InputFocus, NoResults};
    use url::Url;

    const COUNT_ID: &str = "results-count";
    const PLACEHOLDER_ID: &str = "no-results-message";

    /// In-memory stand-in for the menu page.
    #[derive(Debug)]
    struct PageView {
        shown: Vec<bool>,
        active_control: Option<String>,
        nodes: Vec<(String, String)>,
        input_value: String,
        input_focused: bool,
        href: Url,
        replace_calls: usize,
        transitions: usize,
    }

    impl PageView {
        fn new(items: usize, href: &str) -> Self {
            Self {
                shown: vec![true; items],
                active_control: None,
                nodes: vec![],
                input_value: String::new(),
                input_focused: true,
                href: Url::parse(href).unwrap(),
                replace_calls: 0,
                transitions: 0,
            }
        }

        fn nodes_with_id(&self, id: &str) -> usize {
            self.nodes.iter().filter(|(node_id, _)| node_id == id).count()
        }

        fn text_of(&self, id: &str) -> Option<&str> {
            self.nodes
                .iter()
                .find(|(node_id, _)| node_id == id)
                .map(|(_, text)| text.as_str())
        }

        fn upsert(&mut self, id: &str, text: &str) {
            match self.nodes.iter_mut().find(|(node_id, _)| node_id == id) {
                Some(node) => node.1 = text.to_string(),
                None => self.nodes.push((id.to_string(), text.to_string())),
            }
        }
    }

    impl MenuView for PageView {
        fn apply_transitions(&mut self, plan: &TransitionPlan) -> Result<()> {
            self.transitions += 1;
            for step in &plan.steps {
                self.shown[step.index] = step.visible;
            }
            Ok(())
        }

        fn set_active_control(&mut self, category: &str) -> Result<()> {
            self.active_control = Some(category.to_string());
            Ok(())
        }

        fn set_count_line(&mut self, line: &str) -> Result<()> {
            self.upsert(COUNT_ID, line);
            Ok(())
        }

        fn set_no_results(&mut self, placeholder: Option<&NoResults>) -> Result<()> {
            match placeholder {
                Some(placeholder) => self.upsert(PLACEHOLDER_ID, &placeholder.message),
                None => self.nodes.retain(|(id, _)| id != PLACEHOLDER_ID),
            }
            Ok(())
        }

        fn reset_search_input(&mut self, focus: InputFocus) -> Result<()> {
            self.input_value.clear();
            self.input_focused = focus == InputFocus::Focus;
            Ok(())
        }

        fn location(&self) -> Result<Url> {
            Ok(self.href.clone())
        }

        fn replace_location(&mut self, url: &Url) -> Result<()> {
            self.href = url.clone();
            self.replace_calls += 1;
            Ok(())
        }
    }

    fn catering_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Chicken Wrap", "Grilled chicken in a soft tortilla", "lunch"),
            MenuItem::new("Beef Burger", "Angus patty with cheddar", "lunch"),
            MenuItem::new("Fruit Salad", "Seasonal fruit with mint", "dessert"),
        ]
    }

    fn controller(href: &str) -> MenuController<ManualScheduler, PageView> {
        let items = catering_menu();
        let view = PageView::new(items.len(), href);
        let state = MenuState::new(items, ["all", "lunch", "dessert"]);
        MenuController::new(state, ManualScheduler::default(), view, Timing::default())
    }

    fn shown_names(controller: &MenuController<ManualScheduler, PageView>) -> Vec<String> {
        controller
            .state()
            .items
            .iter()
            .zip(&controller.view().shown)
            .filter(|(_, shown)| **shown)
            .map(|(item, _)| item.name.clone())
            .collect()
    }

    /// Advances the virtual clock and feeds elapsed timers back in.
    fn advance(controller: &mut MenuController<ManualScheduler, PageView>, ms: u64) {
        let fired = controller.scheduler_mut().advance(Duration::from_millis(ms));
        for id in fired {
            controller.timer_elapsed(id).unwrap();
        }
    }

    fn type_into_search(controller: &mut MenuController<ManualScheduler, PageView>, value: &str) {
        controller.view.input_value = value.to_string();
        controller.dispatch(&Event::SearchInput(value.to_string())).unwrap();
    }

    #[test]
    fn rapid_typing_runs_one_search_with_last_query() {
        let mut controller = controller("https://bliss.example/menu");

        type_into_search(&mut controller, "p");
        advance(&mut controller, 100);
        type_into_search(&mut controller, "pa");
        advance(&mut controller, 100);
        type_into_search(&mut controller, "pas");
        advance(&mut controller, 299);
        assert_eq!(controller.view().transitions, 0);

        advance(&mut controller, 1);
        assert_eq!(controller.view().transitions, 1);
        assert_eq!(controller.state().query.as_str(), "pas");
        assert_eq!(controller.scheduler_mut().armed(), 0);
    }

    #[test]
    fn escape_clears_immediately_and_drops_pending_search() {
        let mut controller = controller("https://bliss.example/menu");
        type_into_search(&mut controller, "burger");
        advance(&mut controller, 300);
        assert_eq!(shown_names(&controller), vec!["Beef Burger"]);

        type_into_search(&mut controller, "burger s");
        controller.dispatch(&Event::SearchEscape).unwrap();

        assert_eq!(shown_names(&controller).len(), 3);
        assert!(controller.view().input_value.is_empty());
        assert!(!controller.view().input_focused);

        let transitions = controller.view().transitions;
        advance(&mut controller, 1_000);
        assert_eq!(controller.view().transitions, transitions);
        assert_eq!(controller.state().query.as_str(), "");
    }

    #[test]
    fn catering_scenario() {
        let mut controller = controller("https://bliss.example/menu");

        controller.dispatch(&Event::CategorySelected("dessert".into())).unwrap();
        assert_eq!(shown_names(&controller), vec!["Fruit Salad"]);
        assert_eq!(
            controller.view().text_of(COUNT_ID),
            Some("Showing 1 items in Dessert")
        );

        type_into_search(&mut controller, "burger");
        advance(&mut controller, 300);
        assert_eq!(shown_names(&controller), vec!["Beef Burger"]);
        assert_eq!(controller.view().active_control.as_deref(), Some("all"));

        type_into_search(&mut controller, "");
        advance(&mut controller, 300);
        assert_eq!(shown_names(&controller).len(), 3);

        controller.dispatch(&Event::CategorySelected("drinks".into())).unwrap();
        assert!(shown_names(&controller).is_empty());
        assert_eq!(controller.view().nodes_with_id(PLACEHOLDER_ID), 1);
    }

    #[test]
    fn repeated_empty_results_keep_a_single_placeholder() {
        let mut controller = controller("https://bliss.example/menu");

        for _ in 0..2 {
            type_into_search(&mut controller, "pasta");
            advance(&mut controller, 300);
        }
        let first = shown_names(&controller);
        assert_eq!(controller.view().nodes_with_id(PLACEHOLDER_ID), 1);
        assert_eq!(controller.view().nodes_with_id(COUNT_ID), 1);

        type_into_search(&mut controller, "pasta");
        advance(&mut controller, 300);
        assert_eq!(shown_names(&controller), first);
        assert_eq!(controller.view().nodes_with_id(PLACEHOLDER_ID), 1);

        controller.dispatch(&Event::ClearSearch).unwrap();
        assert_eq!(controller.view().nodes_with_id(PLACEHOLDER_ID), 0);
        assert!(controller.view().input_focused);
    }

    #[test]
    fn filter_syncs_url_with_replace() {
        let mut controller = controller("https://bliss.example/menu?ref=home");

        controller.dispatch(&Event::CategorySelected("lunch".into())).unwrap();
        assert_eq!(
            controller.view().href.as_str(),
            "https://bliss.example/menu?ref=home&category=lunch"
        );

        controller.dispatch(&Event::CategorySelected("all".into())).unwrap();
        assert_eq!(controller.view().href.as_str(), "https://bliss.example/menu?ref=home");
        assert_eq!(controller.view().replace_calls, 2);

        // unchanged URL is not rewritten
        controller.dispatch(&Event::CategorySelected("all".into())).unwrap();
        assert_eq!(controller.view().replace_calls, 2);
    }

    #[test]
    fn url_round_trip_matches_direct_click() {
        let mut clicked = controller("https://bliss.example/menu");
        clicked.dispatch(&Event::CategorySelected("lunch".into())).unwrap();
        let synced = clicked.view().href.clone();

        let mut reloaded = controller(synced.as_str());
        let url_category = category_param(&synced);
        reloaded.dispatch(&Event::PageLoaded { url_category }).unwrap();

        assert_eq!(shown_names(&reloaded), shown_names(&clicked));
        assert_eq!(reloaded.view().active_control.as_deref(), Some("lunch"));
        assert_eq!(reloaded.view().text_of(COUNT_ID), clicked.view().text_of(COUNT_ID));
    }

    #[test]
    fn search_after_filter_clears_url_category() {
        let mut controller = controller("https://bliss.example/menu");
        controller.dispatch(&Event::CategorySelected("lunch".into())).unwrap();
        assert!(category_param(&controller.view().href).is_some());

        type_into_search(&mut controller, "fruit");
        assert_eq!(category_param(&controller.view().href), None);
    }

    #[test]
    fn category_click_cancels_pending_search() {
        let mut controller = controller("https://bliss.example/menu");
        type_into_search(&mut controller, "burger");
        controller.dispatch(&Event::CategorySelected("dessert".into())).unwrap();

        advance(&mut controller, 300);
        assert_eq!(shown_names(&controller), vec!["Fruit Salad"]);
    }
}
