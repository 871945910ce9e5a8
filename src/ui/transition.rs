//! Show/hide transition plans for menu items.
//!
//! A plan lists, for every item, whether it ends up visible and when its
//! transition step runs. Shown items fade in with a stagger proportional to
//! their position in the menu; hidden items fade out and leave the layout after
//! a fixed delay. Only the final visibility is behaviorally relevant.

use crate::domain::VisibleSet;
use std::time::Duration;

/// Which engine produced the visible set; selects the stagger interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    Filter,
    Search,
}

/// One item's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionStep {
    /// Position of the item in the menu.
    pub index: usize,
    /// Final visibility.
    pub visible: bool,
    /// Delay before the step completes: fade-in start for shown items, removal
    /// from layout for hidden ones.
    pub delay: Duration,
}

/// Transition steps for every item of the menu, in menu order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionPlan {
    pub steps: Vec<TransitionStep>,
}

impl TransitionPlan {
    /// Plans transitions for `visible`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bliss_catering::ui::TransitionPlan;
    /// use bliss_catering::VisibleSet;
    /// use std::time::Duration;
    ///
    /// let plan = TransitionPlan::new(
    ///     &VisibleSet::all(3),
    ///     Duration::from_millis(50),
    ///     Duration::from_millis(300),
    /// );
    /// assert_eq!(plan.steps[2].delay, Duration::from_millis(100));
    /// ```
    #[must_use]
    pub fn new(visible: &VisibleSet, stagger: Duration, hide_delay: Duration) -> Self {
        let steps = visible
            .iter()
            .map(|(index, is_visible)| {
                let delay = if is_visible {
                    stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
                } else {
                    hide_delay
                };
                TransitionStep {
                    index,
                    visible: is_visible,
                    delay,
                }
            })
            .collect();

        Self { steps }
    }

    /// Time after which every step has completed.
    #[must_use]
    pub fn settle_time(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| step.delay)
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryFilter, MenuItem};

    #[test]
    fn hidden_items_use_fixed_delay() {
        let items = vec![
            MenuItem::new("Chicken Wrap", "", "lunch"),
            MenuItem::new("Fruit Salad", "", "dessert"),
            MenuItem::new("Beef Burger", "", "lunch"),
        ];
        let filter = CategoryFilter::parse("lunch");
        let visible = VisibleSet::from_predicate(&items, |item| filter.admits(item));
        let plan = TransitionPlan::new(&visible, Duration::from_millis(30), Duration::from_millis(300));

        assert_eq!(
            plan.steps,
            vec![
                TransitionStep { index: 0, visible: true, delay: Duration::ZERO },
                TransitionStep { index: 1, visible: false, delay: Duration::from_millis(300) },
                TransitionStep { index: 2, visible: true, delay: Duration::from_millis(60) },
            ]
        );
        assert_eq!(plan.settle_time(), Duration::from_millis(300));
    }

    #[test]
    fn empty_menu_settles_immediately() {
        let plan = TransitionPlan::new(&VisibleSet::default(), Duration::from_millis(50), Duration::from_millis(300));
        assert!(plan.steps.is_empty());
        assert_eq!(plan.settle_time(), Duration::ZERO);
    }
}
