//! Page effects that share the page with the starfield but none of its state
//!
//! Only the logic lives here; `platform` hooks it up to DOM events.

pub mod cursor;
pub mod magnetic;
pub mod nav;
pub mod typing;

pub use cursor::CursorFollower;
pub use magnetic::{ElementRect, magnetic_offset, translate_css};
pub use nav::{MobileMenu, SectionTracker, navbar_scrolled};
pub use typing::{TypeStep, Typewriter};
