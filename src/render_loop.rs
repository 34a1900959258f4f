//! Free-running animation loop
//!
//! Each tick clears the surface, advances the scene, draws it, and requests the
//! next frame. The loop is an explicit state machine instead of a callback that
//! reschedules itself, so a resize can stop and restart it without ever leaving
//! two chains of frames alive.

use crate::renderer::Surface;
use crate::schedule::{FrameHandle, Scheduler};

/// Whatever the loop animates
pub trait Scene {
    /// Step the simulation by one frame
    fn advance(&mut self);

    /// Draw the current state; must not clear
    fn render<S: Surface + ?Sized>(&self, surface: &mut S);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Stopped,
    /// Waiting on `pending` to run the next tick
    Running { pending: FrameHandle },
}

/// Result of delivering a frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame drawn, next one requested
    Rendered,
    /// Handle was not the pending frame (cancelled or superseded); nothing done
    Stale,
    /// Surface is gone; the loop stopped itself
    Halted,
}

#[derive(Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
    ticks: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Frames drawn since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Begin ticking. Starting a running loop keeps the frame already pending.
    pub fn start<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) -> FrameHandle {
        match self.state {
            LoopState::Running { pending } => pending,
            LoopState::Stopped => {
                let pending = scheduler.request_frame();
                self.state = LoopState::Running { pending };
                log::debug!("Render loop started");
                pending
            }
        }
    }

    /// Cancel the pending frame. A tick already in progress is unaffected.
    pub fn stop<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if let LoopState::Running { pending } = self.state {
            scheduler.cancel_frame(pending);
            self.state = LoopState::Stopped;
            log::debug!("Render loop stopped after {} ticks", self.ticks);
        }
    }

    /// Host callback for a display refresh
    pub fn on_frame<S, F, C>(
        &mut self,
        handle: FrameHandle,
        surface: &mut S,
        scene: &mut F,
        scheduler: &mut C,
    ) -> TickOutcome
    where
        S: Surface + ?Sized,
        F: Scene,
        C: Scheduler + ?Sized,
    {
        match self.state {
            LoopState::Running { pending } if pending == handle => {}
            _ => return TickOutcome::Stale,
        }

        if let Err(e) = surface.clear() {
            log::warn!("Stopping render loop: {}", e);
            self.state = LoopState::Stopped;
            return TickOutcome::Halted;
        }
        scene.advance();
        scene.render(surface);
        self.ticks += 1;

        let pending = scheduler.request_frame();
        self.state = LoopState::Running { pending };
        log::trace!("tick {}", self.ticks);
        TickOutcome::Rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::error::StarfieldError;
    use crate::renderer::{Dot, RecordingSurface, Rgba, SurfaceSize};
    use crate::schedule::ManualScheduler;
    use crate::viewport::Viewport;
    use glam::Vec2;

    type CallLog = Rc<RefCell<Vec<&'static str>>>;

    struct LoggingSurface {
        log: CallLog,
    }

    impl Surface for LoggingSurface {
        fn size(&self) -> SurfaceSize {
            SurfaceSize::new(10.0, 10.0)
        }

        fn resize(&mut self, viewport: &Viewport) -> Result<SurfaceSize, StarfieldError> {
            Ok(viewport.surface_size())
        }

        fn clear(&mut self) -> Result<(), StarfieldError> {
            self.log.borrow_mut().push("clear");
            Ok(())
        }

        fn fill_dot(&mut self, _dot: &Dot) {
            self.log.borrow_mut().push("draw");
        }
    }

    struct LoggingScene {
        log: CallLog,
        dots: usize,
    }

    impl Scene for LoggingScene {
        fn advance(&mut self) {
            self.log.borrow_mut().push("advance");
        }

        fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
            let dot = Dot {
                center: Vec2::ZERO,
                radius: 1.0,
                color: Rgba::from_rgb([255, 255, 255], 1.0),
                blur: 0.0,
            };
            for _ in 0..self.dots {
                surface.fill_dot(&dot);
            }
        }
    }

    #[test]
    fn tick_clears_then_advances_then_draws() {
        let log: CallLog = Rc::default();
        let mut surface = LoggingSurface { log: log.clone() };
        let mut scene = LoggingScene {
            log: log.clone(),
            dots: 2,
        };
        let mut sched = ManualScheduler::new();
        let mut render_loop = RenderLoop::new();

        render_loop.start(&mut sched);
        for _ in 0..2 {
            let frame = sched.take_frame().unwrap();
            let outcome = render_loop.on_frame(frame, &mut surface, &mut scene, &mut sched);
            assert_eq!(outcome, TickOutcome::Rendered);
        }

        assert_eq!(
            *log.borrow(),
            vec!["clear", "advance", "draw", "draw", "clear", "advance", "draw", "draw"]
        );
        assert_eq!(render_loop.ticks(), 2);
    }

    #[test]
    fn each_tick_requests_exactly_one_frame() {
        let mut surface = RecordingSurface::new();
        let mut scene = LoggingScene {
            log: Rc::default(),
            dots: 0,
        };
        let mut sched = ManualScheduler::new();
        let mut render_loop = RenderLoop::new();

        render_loop.start(&mut sched);
        for _ in 0..10 {
            assert_eq!(sched.pending_frames(), 1);
            let frame = sched.take_frame().unwrap();
            render_loop.on_frame(frame, &mut surface, &mut scene, &mut sched);
        }
        assert_eq!(sched.pending_frames(), 1);
    }

    #[test]
    fn start_twice_keeps_single_chain() {
        let mut sched = ManualScheduler::new();
        let mut render_loop = RenderLoop::new();
        let first = render_loop.start(&mut sched);
        let second = render_loop.start(&mut sched);
        assert_eq!(first, second);
        assert_eq!(sched.pending_frames(), 1);
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let mut sched = ManualScheduler::new();
        let mut render_loop = RenderLoop::new();
        render_loop.start(&mut sched);
        render_loop.stop(&mut sched);
        assert_eq!(render_loop.state(), LoopState::Stopped);
        assert_eq!(sched.pending_frames(), 0);
    }

    #[test]
    fn stale_frame_is_ignored() {
        let log: CallLog = Rc::default();
        let mut surface = LoggingSurface { log: log.clone() };
        let mut scene = LoggingScene {
            log: log.clone(),
            dots: 1,
        };
        let mut sched = ManualScheduler::new();
        let mut render_loop = RenderLoop::new();

        let old = render_loop.start(&mut sched);
        render_loop.stop(&mut sched);
        render_loop.start(&mut sched);

        let outcome = render_loop.on_frame(old, &mut surface, &mut scene, &mut sched);
        assert_eq!(outcome, TickOutcome::Stale);
        assert!(log.borrow().is_empty());
        assert_eq!(sched.pending_frames(), 1);
    }

    #[test]
    fn detached_surface_halts_loop() {
        let mut surface = RecordingSurface::new();
        surface.detached = true;
        let mut scene = LoggingScene {
            log: Rc::default(),
            dots: 1,
        };
        let mut sched = ManualScheduler::new();
        let mut render_loop = RenderLoop::new();

        render_loop.start(&mut sched);
        let frame = sched.take_frame().unwrap();
        let outcome = render_loop.on_frame(frame, &mut surface, &mut scene, &mut sched);

        assert_eq!(outcome, TickOutcome::Halted);
        assert!(!render_loop.is_running());
        assert_eq!(sched.pending_frames(), 0);
        assert!(scene.log.borrow().is_empty());
    }
}
