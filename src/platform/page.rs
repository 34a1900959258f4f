//! DOM implementation of the reveal page effects

use web_sys::{Document, Element, HtmlElement};

use super::dom;
use crate::settings::ViewportSettings;
use crate::viewport::Page;

pub struct DomPage {
    body: Option<HtmlElement>,
    orb: Option<Element>,
    target: Option<Element>,
    scroll_lock_class: String,
    revealed_class: String,
    orb_clicked_class: String,
}

impl DomPage {
    /// Missing elements are tolerated; the matching effects become no-ops
    pub fn new(document: &Document, settings: &ViewportSettings) -> Self {
        let orb = document.get_element_by_id(&settings.orb_id);
        let target = document.get_element_by_id(&settings.reveal_target_id);
        if orb.is_none() {
            log::info!("No #{} on this page; scroll stays unlocked", settings.orb_id);
        } else if target.is_none() {
            log::warn!("Reveal target #{} not found", settings.reveal_target_id);
        }

        Self {
            body: document.body(),
            orb,
            target,
            scroll_lock_class: settings.scroll_lock_class.clone(),
            revealed_class: settings.revealed_class.clone(),
            orb_clicked_class: settings.orb_clicked_class.clone(),
        }
    }
}

impl Page for DomPage {
    fn has_orb(&self) -> bool {
        self.orb.is_some()
    }

    fn lock_scroll(&mut self) {
        if let Some(body) = &self.body {
            dom::add_class(body, &self.scroll_lock_class);
        }
    }

    fn unlock_scroll(&mut self) {
        if let Some(body) = &self.body {
            dom::remove_class(body, &self.scroll_lock_class);
        }
    }

    fn mark_orb_clicked(&mut self) {
        if let Some(orb) = &self.orb {
            dom::add_class(orb, &self.orb_clicked_class);
        }
    }

    fn mark_revealed(&mut self) {
        if let Some(body) = &self.body {
            dom::add_class(body, &self.revealed_class);
        }
    }

    fn hide_orb(&mut self) {
        if let Some(orb) = self.orb.take() {
            orb.remove();
        }
    }

    fn scroll_to_target(&mut self) {
        if let Some(target) = &self.target {
            dom::smooth_scroll_to(target);
        }
    }
}
