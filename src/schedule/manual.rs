//! Deterministic scheduler with a virtual clock
//!
//! Frames run only when [`ManualScheduler::take_frame`] is called and timers
//! fire only when the clock is advanced, so tests (and the native demo) decide
//! exactly when each callback happens.

use std::collections::VecDeque;

use super::{FrameHandle, Scheduler, TimerEvent, TimerHandle};

#[derive(Debug, Clone)]
struct PendingTimer {
    due_ms: u64,
    handle: TimerHandle,
    event: TimerEvent,
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    frames: VecDeque<FrameHandle>,
    timers: Vec<PendingTimer>,
    /// Every timer ever set, with its due time
    history: Vec<(u64, TimerEvent)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Pop the oldest requested frame, as the host would at a refresh
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frames.pop_front()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of pending timers carrying `event`
    pub fn pending(&self, event: TimerEvent) -> usize {
        self.timers.iter().filter(|t| t.event == event).count()
    }

    /// `(due_ms, event)` of every timer ever set, in the order they were set
    pub fn history(&self) -> &[(u64, TimerEvent)] {
        &self.history
    }

    /// Move the clock forward and return the timers that came due, earliest first
    pub fn advance(&mut self, ms: u64) -> Vec<(TimerHandle, TimerEvent)> {
        self.now_ms += ms;
        let now = self.now_ms;

        let mut due: Vec<PendingTimer> = Vec::new();
        self.timers.retain(|t| {
            if t.due_ms <= now {
                due.push(t.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.due_ms, t.handle));
        due.into_iter().map(|t| (t.handle, t.event)).collect()
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.allocate());
        self.frames.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|&f| f != handle);
    }

    fn set_timer(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.allocate());
        let due_ms = self.now_ms + u64::from(delay_ms);
        self.timers.push(PendingTimer {
            due_ms,
            handle,
            event,
        });
        self.history.push((due_ms, event));
        handle
    }

    fn clear_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
