//! DOM side effects of the reveal gesture

/// The page-level effects the binding performs
pub trait Page {
    /// Whether the page has an orb to click; without one scroll is never locked
    fn has_orb(&self) -> bool;

    fn lock_scroll(&mut self);
    fn unlock_scroll(&mut self);
    fn mark_orb_clicked(&mut self);
    fn mark_revealed(&mut self);
    fn hide_orb(&mut self);
    /// Smooth-scroll to the section the reveal leads into
    fn scroll_to_target(&mut self);
}

/// A recorded page effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    LockScroll,
    UnlockScroll,
    OrbClicked,
    Revealed,
    HideOrb,
    ScrollToTarget,
}

/// Page that only remembers what was asked of it
#[derive(Debug, Clone)]
pub struct RecordingPage {
    pub orb: bool,
    pub effects: Vec<PageEffect>,
}

impl RecordingPage {
    pub fn new(orb: bool) -> Self {
        Self {
            orb,
            effects: Vec::new(),
        }
    }

    pub fn count(&self, effect: PageEffect) -> usize {
        self.effects.iter().filter(|&&e| e == effect).count()
    }
}

impl Default for RecordingPage {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Page for RecordingPage {
    fn has_orb(&self) -> bool {
        self.orb
    }

    fn lock_scroll(&mut self) {
        self.effects.push(PageEffect::LockScroll);
    }

    fn unlock_scroll(&mut self) {
        self.effects.push(PageEffect::UnlockScroll);
    }

    fn mark_orb_clicked(&mut self) {
        self.effects.push(PageEffect::OrbClicked);
    }

    fn mark_revealed(&mut self) {
        self.effects.push(PageEffect::Revealed);
    }

    fn hide_orb(&mut self) {
        self.effects.push(PageEffect::HideOrb);
    }

    fn scroll_to_target(&mut self) {
        self.effects.push(PageEffect::ScrollToTarget);
    }
}
