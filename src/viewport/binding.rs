//! Viewport binding
//!
//! Owns the particle field, the render loop, the drawing surface and the reveal
//! sequence, and turns host callbacks into operations on them. The host (the
//! browser glue in `platform`, or a test) only ever calls the `on_*` methods.

use super::Viewport;
use super::page::Page;
use super::reveal::{RevealPhase, RevealSequence};
use crate::render_loop::{RenderLoop, TickOutcome};
use crate::renderer::Surface;
use crate::schedule::{Debounce, FrameHandle, Scheduler, TimerEvent, TimerHandle};
use crate::settings::Settings;
use crate::sim::ParticleField;

pub struct ViewportBinding<S, C, P> {
    field: ParticleField,
    render_loop: RenderLoop,
    surface: S,
    scheduler: C,
    page: P,
    resize: Debounce<Viewport>,
    reveal: RevealSequence,
    /// Set by the first `on_ready`, even if the surface could not be sized
    ready: bool,
    /// Last viewport applied to the surface; `None` until one succeeds
    viewport: Option<Viewport>,
}

impl<S: Surface, C: Scheduler, P: Page> ViewportBinding<S, C, P> {
    pub fn new(settings: &Settings, surface: S, scheduler: C, page: P, seed: u64) -> Self {
        Self {
            field: ParticleField::new(settings.field.clone(), seed),
            render_loop: RenderLoop::new(),
            surface,
            scheduler,
            page,
            resize: Debounce::new(
                settings.viewport.resize_debounce_ms,
                TimerEvent::ResizeSettled,
            ),
            reveal: RevealSequence::new(&settings.viewport),
            ready: false,
            viewport: None,
        }
    }

    /// Page is ready: lock scroll for the orb, size the surface, seed the field,
    /// start animating
    ///
    /// Without a usable surface the starfield stays off but the reveal still works.
    pub fn on_ready(&mut self, viewport: Viewport) {
        if self.ready {
            log::debug!("Already ready; ignoring");
            return;
        }
        self.ready = true;

        if self.page.has_orb() && self.reveal.phase() == RevealPhase::Idle {
            self.page.lock_scroll();
        }

        if let Err(e) = self.surface.resize(&viewport) {
            log::warn!("Starfield disabled: {}", e);
            return;
        }
        self.field.seed(&viewport);
        self.viewport = Some(viewport);
        self.render_loop.start(&mut self.scheduler);

        log::info!(
            "Starfield running: {} particles on {}x{} @{}x",
            self.field.len(),
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
    }

    /// Window resized; applied once resizing has been quiet for the debounce period
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !self.ready {
            return;
        }
        self.resize.trigger(viewport, &mut self.scheduler);
    }

    pub fn on_timer(&mut self, handle: TimerHandle, event: TimerEvent) {
        match event {
            TimerEvent::ResizeSettled => {
                if let Some(viewport) = self.resize.settle(handle) {
                    self.apply_resize(viewport);
                }
            }
            TimerEvent::RevealUnlock | TimerEvent::RevealScroll => {
                self.reveal.fire(handle, event, &mut self.page);
            }
        }
    }

    pub fn on_frame(&mut self, handle: FrameHandle) -> TickOutcome {
        self.render_loop.on_frame(
            handle,
            &mut self.surface,
            &mut self.field,
            &mut self.scheduler,
        )
    }

    /// Orb clicked. Returns true if this click started the reveal.
    pub fn on_reveal_gesture(&mut self) -> bool {
        if !self.page.has_orb() {
            return false;
        }
        self.reveal.begin(&mut self.scheduler, &mut self.page)
    }

    /// Stop animating and drop every pending callback
    pub fn shutdown(&mut self) {
        self.render_loop.stop(&mut self.scheduler);
        self.resize.cancel(&mut self.scheduler);
        self.reveal.cancel(&mut self.scheduler);
        log::info!("Starfield shut down after {} frames", self.render_loop.ticks());
    }

    fn apply_resize(&mut self, viewport: Viewport) {
        // Stop first so the frame requested before the resize can never run alongside the new one
        self.render_loop.stop(&mut self.scheduler);

        if let Err(e) = self.surface.resize(&viewport) {
            log::warn!("Resize failed, starfield stopped: {}", e);
            return;
        }
        self.field.seed(&viewport);
        self.viewport = Some(viewport);
        self.render_loop.start(&mut self.scheduler);

        log::info!(
            "Resized to {}x{}: {} particles",
            viewport.width,
            viewport.height,
            self.field.len()
        );
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut C {
        &mut self.scheduler
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }
}
