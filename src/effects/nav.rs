//! Navigation state: navbar shading, section dots, mobile menu

/// True once the page has scrolled far enough to shade the navbar
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Tracks which section's nav dot is active
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    active: Option<String>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one batch of `(section id, is intersecting)` observations.
    /// Returns the newly active section if it changed.
    pub fn observe<'a, I>(&mut self, entries: I) -> Option<&str>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut changed = false;
        for (id, intersecting) in entries {
            if intersecting && self.active.as_deref() != Some(id) {
                self.active = Some(id.to_string());
                changed = true;
            }
        }
        if changed { self.active.as_deref() } else { None }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active.as_deref() == Some(section)
    }
}

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button pressed; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A menu link was followed. Returns true if the menu had to close.
    pub fn link_followed(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }
}
