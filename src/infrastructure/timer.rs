//! Cancellable timers and debouncing.
//!
//! Timers are identified by [`TimerId`] tokens rather than callbacks: a
//! [`Scheduler`] only reports *which* timer elapsed, and the owner of the timer
//! decides what that means. This keeps the debounce logic free of any browser
//! type and lets tests drive time by hand.
//!
//! ```text
//! input ──► Debouncer::call ──► Scheduler::cancel(previous)
//!                           └─► Scheduler::schedule(delay) ──► TimerId
//!
//! elapsed TimerId ──► Debouncer::fire ──► Some(last value) | None (stale)
//! ```

use crate::domain::error::Result;
use std::time::Duration;

/// Opaque identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// A source of one-shot, cancellable timers.
///
/// Implementations must report every elapsed, non-cancelled timer back to the
/// owner exactly once, in deadline order.
pub trait Scheduler {
    /// Arms a one-shot timer that elapses after `delay`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying timer primitive rejects the request.
    fn schedule(&mut self, delay: Duration) -> Result<TimerId>;

    /// Disarms a timer. Cancelling an unknown or elapsed timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}

/// Coalesces rapid calls so that only the last value is delivered once the
/// input has been quiet for `delay`.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(TimerId, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records `value` as the pending value and restarts the quiet period.
    ///
    /// Any previously pending value is discarded and its timer cancelled.
    ///
    /// # Errors
    ///
    /// Propagates scheduling failures. The previous timer is already cancelled
    /// at that point, so nothing stays pending.
    pub fn call<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, value: T) -> Result<()> {
        self.cancel(scheduler);
        let id = scheduler.schedule(self.delay)?;
        self.pending = Some((id, value));
        Ok(())
    }

    /// Handles an elapsed timer.
    ///
    /// Returns the pending value when `id` is the current timer; `None` for
    /// timers that were superseded.
    pub fn fire(&mut self, id: TimerId) -> Option<T> {
        match self.pending.take() {
            Some((pending_id, value)) if pending_id == id => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drops the pending value, if any, and disarms its timer.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some((id, _)) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;


#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[test]
    fn rapid_calls_deliver_only_the_last_value() {
        let mut scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.call(&mut scheduler, "p").unwrap();
        scheduler.advance(Duration::from_millis(100));
        debouncer.call(&mut scheduler, "pa").unwrap();
        scheduler.advance(Duration::from_millis(100));
        debouncer.call(&mut scheduler, "pas").unwrap();
        assert_eq!(scheduler.armed(), 1);

        let fired = scheduler.advance(QUIET);
        assert_eq!(fired.len(), 1);
        assert_eq!(debouncer.fire(fired[0]), Some("pas"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn stale_timer_does_not_consume_pending_value() {
        let mut scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.call(&mut scheduler, 1).unwrap();
        debouncer.call(&mut scheduler, 2).unwrap();

        assert_eq!(debouncer.fire(TimerId(1)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(TimerId(2)), Some(2));
    }

    #[test]
    fn cancel_disarms_the_timer() {
        let mut scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.call(&mut scheduler, "burger").unwrap();
        debouncer.cancel(&mut scheduler);

        assert!(scheduler.advance(QUIET).is_empty());
        assert!(!debouncer.is_pending());
    }
}
