//! Orb reveal sequence
//!
//! Clicking the orb marks it clicked and the page revealed right away, unlocks
//! scrolling after `reveal_unlock_ms` and scrolls to the target section after
//! `reveal_scroll_ms`. The sequence runs at most once; later clicks are ignored.

use super::page::Page;
use crate::schedule::{Scheduler, TimerEvent, TimerHandle};
use crate::settings::ViewportSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    /// Timers still outstanding; `None` once that step has run
    Pending {
        unlock: Option<TimerHandle>,
        scroll: Option<TimerHandle>,
    },
    Complete,
    /// Torn down before finishing
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct RevealSequence {
    phase: RevealPhase,
    unlock_ms: u32,
    scroll_ms: u32,
    hide_orb: bool,
}

impl RevealSequence {
    pub fn new(settings: &ViewportSettings) -> Self {
        Self {
            phase: RevealPhase::Idle,
            unlock_ms: settings.reveal_unlock_ms,
            scroll_ms: settings.reveal_scroll_ms,
            hide_orb: settings.hide_orb,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Start the sequence. Returns false if it already started.
    pub fn begin<C, P>(&mut self, scheduler: &mut C, page: &mut P) -> bool
    where
        C: Scheduler + ?Sized,
        P: Page + ?Sized,
    {
        if self.phase != RevealPhase::Idle {
            log::debug!("Reveal already {:?}; ignoring gesture", self.phase);
            return false;
        }

        page.mark_orb_clicked();
        page.mark_revealed();

        let unlock = scheduler.set_timer(self.unlock_ms, TimerEvent::RevealUnlock);
        let scroll = scheduler.set_timer(self.scroll_ms, TimerEvent::RevealScroll);
        self.phase = RevealPhase::Pending {
            unlock: Some(unlock),
            scroll: Some(scroll),
        };
        log::info!("Reveal started");
        true
    }

    /// Run the step belonging to `handle`. Returns false for stale handles.
    pub fn fire<P: Page + ?Sized>(
        &mut self,
        handle: TimerHandle,
        event: TimerEvent,
        page: &mut P,
    ) -> bool {
        let RevealPhase::Pending {
            mut unlock,
            mut scroll,
        } = self.phase
        else {
            return false;
        };

        match event {
            TimerEvent::RevealUnlock if unlock == Some(handle) => {
                unlock = None;
                page.unlock_scroll();
                if self.hide_orb {
                    page.hide_orb();
                }
            }
            TimerEvent::RevealScroll if scroll == Some(handle) => {
                scroll = None;
                page.scroll_to_target();
            }
            _ => return false,
        }

        self.phase = if unlock.is_none() && scroll.is_none() {
            log::info!("Reveal complete");
            RevealPhase::Complete
        } else {
            RevealPhase::Pending { unlock, scroll }
        };
        true
    }

    /// Clear outstanding timers; the sequence cannot be restarted afterwards
    pub fn cancel<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if let RevealPhase::Pending { unlock, scroll } = self.phase {
            for handle in [unlock, scroll].into_iter().flatten() {
                scheduler.clear_timer(handle);
            }
            self.phase = RevealPhase::Cancelled;
        }
    }
}
