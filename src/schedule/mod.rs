//! Host scheduling seam
//!
//! The browser hands out animation frames and timeouts; the binding asks for
//! them through [`Scheduler`] and is called back with the handle it was given.
//! A handle the binding no longer expects is stale and gets ignored, which is
//! how cancellation survives callbacks that were already queued.

pub mod debounce;
pub mod manual;

pub use debounce::Debounce;
pub use manual::ManualScheduler;

/// Ticket for a requested animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Ticket for a pending timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// What a timeout means when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Resize burst has been quiet for the debounce period
    ResizeSettled,
    /// Reveal: unlock scrolling (and drop the orb)
    RevealUnlock,
    /// Reveal: scroll to the target section
    RevealScroll,
}

/// Frame and timer source
pub trait Scheduler {
    /// Ask for one callback at the next display refresh
    fn request_frame(&mut self) -> FrameHandle;

    /// Forget a requested frame; a no-op if it already ran
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Ask for `event` to be delivered after `delay_ms`
    fn set_timer(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle;

    /// Forget a pending timer; a no-op if it already fired
    fn clear_timer(&mut self, handle: TimerHandle);
}
