//! Trailing-edge debounce over a [`Scheduler`]

use super::{Scheduler, TimerEvent, TimerHandle};

/// Keeps only the latest value of a burst and releases it once the burst has
/// been quiet for `delay_ms`
#[derive(Debug)]
pub struct Debounce<T> {
    delay_ms: u32,
    event: TimerEvent,
    pending: Option<(TimerHandle, T)>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: u32, event: TimerEvent) -> Self {
        Self {
            delay_ms,
            event,
            pending: None,
        }
    }

    /// Record a new value and restart the quiet period
    pub fn trigger<S: Scheduler + ?Sized>(&mut self, value: T, scheduler: &mut S) {
        if let Some((handle, _)) = self.pending.take() {
            scheduler.clear_timer(handle);
        }
        let handle = scheduler.set_timer(self.delay_ms, self.event);
        self.pending = Some((handle, value));
    }

    /// Take the value if `handle` is the timer currently armed
    pub fn settle(&mut self, handle: TimerHandle) -> Option<T> {
        match self.pending.take() {
            Some((armed, value)) if armed == handle => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some((handle, _)) = self.pending.take() {
            scheduler.clear_timer(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    #[test]
    fn burst_collapses_to_last_value() {
        let mut sched = ManualScheduler::new();
        let mut debounce = Debounce::new(250, TimerEvent::ResizeSettled);

        debounce.trigger(1, &mut sched);
        sched.advance(100);
        debounce.trigger(2, &mut sched);
        sched.advance(100);
        debounce.trigger(3, &mut sched);

        assert_eq!(sched.pending_timers(), 1);
        assert!(sched.advance(249).is_empty());

        let fired = sched.advance(1);
        assert_eq!(fired.len(), 1);
        assert_eq!(debounce.settle(fired[0].0), Some(3));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn stale_handle_keeps_value_armed() {
        let mut sched = ManualScheduler::new();
        let mut debounce = Debounce::new(250, TimerEvent::ResizeSettled);
        debounce.trigger("a", &mut sched);
        assert_eq!(debounce.settle(TimerHandle(999)), None);
        assert!(debounce.is_pending());
    }

    #[test]
    fn cancel_clears_timer() {
        let mut sched = ManualScheduler::new();
        let mut debounce = Debounce::new(250, TimerEvent::ResizeSettled);
        debounce.trigger((), &mut sched);
        debounce.cancel(&mut sched);
        assert_eq!(sched.pending_timers(), 0);
        assert!(!debounce.is_pending());
    }
}
