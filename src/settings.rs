//! Page settings
//!
//! Every tunable of the starfield, the reveal orb and the page effects. The page
//! may override any subset through an inline JSON script element; everything it
//! leaves out keeps its default.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::StarfieldError;

/// Id of the inline `<script type="application/json">` element holding overrides
pub const SETTINGS_ELEMENT_ID: &str = "starfield-settings";

/// Closed range `[min, max]`, sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.random::<f32>() * (self.max - self.min)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// How many particles a viewport gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// Fewer particles below the compact breakpoint
    Tiered { compact: usize, wide: usize },
    /// Same count at every width
    Fixed { count: usize },
}

impl Default for Density {
    fn default() -> Self {
        Density::Tiered {
            compact: 480,
            wide: 1200,
        }
    }
}

impl Density {
    pub fn count(&self, compact: bool) -> usize {
        match *self {
            Density::Tiered { compact: c, wide } => {
                if compact {
                    c
                } else {
                    wide
                }
            }
            Density::Fixed { count } => count,
        }
    }
}

/// Particle field tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// CSS width below which the viewport counts as compact (mobile)
    pub compact_breakpoint: f32,
    pub density: Density,
    /// Band around the surface a particle may drift into before wrapping
    pub wrap_margin: f32,
    /// Full width of the per-axis velocity range (components are ±speed/2)
    pub speed: f32,
    /// Radius range on compact viewports (CSS pixels)
    pub compact_size: Span,
    /// Radius range on wide viewports (CSS pixels)
    pub wide_size: Span,
    /// Radius range of glowing particles
    pub glow_size: Span,
    /// Probability a particle glows
    pub glow_chance: f32,
    /// Probability a particle twinkles
    pub twinkle_chance: f32,
    /// Full width of the twinkle delta range (delta is ±twinkle_speed/2)
    pub twinkle_speed: f32,
    pub initial_opacity: Span,
    /// Opacity band a twinkling particle ping-pongs within
    pub twinkle_band: Span,
    /// Fill color, RGB
    pub color: [u8; 3],
    /// Blur radius for ordinary particles
    pub blur: f32,
    /// Blur radius for glowing particles
    pub glow_blur: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            compact_breakpoint: 768.0,
            density: Density::default(),
            wrap_margin: 10.0,
            speed: 0.5,
            compact_size: Span::new(0.2, 1.2),
            wide_size: Span::new(0.5, 2.0),
            glow_size: Span::new(1.5, 3.0),
            glow_chance: 0.03,
            twinkle_chance: 0.35,
            twinkle_speed: 0.02,
            initial_opacity: Span::new(0.2, 1.0),
            twinkle_band: Span::new(0.1, 1.0),
            color: [255, 255, 255],
            blur: 0.0,
            glow_blur: 8.0,
        }
    }
}

impl FieldSettings {
    pub fn is_compact(&self, css_width: f32) -> bool {
        css_width < self.compact_breakpoint
    }

    /// Particle count for a viewport of the given CSS width
    pub fn particle_count(&self, css_width: f32) -> usize {
        self.density.count(self.is_compact(css_width))
    }
}

/// Resize and reveal timing plus the DOM hooks the binding touches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Quiet period before a resize burst is applied
    pub resize_debounce_ms: u32,
    /// Delay from orb click to scroll unlock
    pub reveal_unlock_ms: u32,
    /// Delay from orb click to smooth scroll
    pub reveal_scroll_ms: u32,
    /// Remove the orb once scroll unlocks
    pub hide_orb: bool,
    pub canvas_id: String,
    pub orb_id: String,
    pub reveal_target_id: String,
    pub scroll_lock_class: String,
    pub revealed_class: String,
    pub orb_clicked_class: String,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
            reveal_unlock_ms: 500,
            reveal_scroll_ms: 700,
            hide_orb: true,
            canvas_id: "particles-canvas".into(),
            orb_id: "orb".into(),
            reveal_target_id: "about".into(),
            scroll_lock_class: "no-scroll".into(),
            revealed_class: "revealed".into(),
            orb_clicked_class: "clicked".into(),
        }
    }
}

/// Tuning for the page effects around the starfield
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Scroll offset past which the navbar is marked scrolled
    pub navbar_scroll_threshold: f64,
    /// Fraction of the gap the cursor follower closes each frame
    pub cursor_easing: f32,
    /// Fraction of the pointer offset a magnetic button moves by
    pub magnetic_strength: f32,
    /// Fraction of a section that must be visible to activate its nav dot
    pub section_visibility: f64,
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Hold time once a phrase is fully typed
    pub hold_ms: u32,
    /// Pause after a phrase is fully deleted
    pub next_phrase_ms: u32,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 50.0,
            cursor_easing: 0.1,
            magnetic_strength: 0.15,
            section_visibility: 0.5,
            phrases: vec![
                "Software Engineer".into(),
                "Problem Solver".into(),
                "Creative Thinker".into(),
                "Tech Enthusiast".into(),
            ],
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            next_phrase_ms: 500,
        }
    }
}

/// All page settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub field: FieldSettings,
    pub viewport: ViewportSettings,
    pub effects: EffectSettings,
}

impl Settings {
    /// Parse and validate settings overrides
    pub fn from_json(json: &str) -> Result<Self, StarfieldError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<(), StarfieldError> {
        let field = &self.field;
        let invalid = |msg: &str| Err(StarfieldError::InvalidSettings(msg.to_string()));

        if field.compact_breakpoint.is_nan() || field.compact_breakpoint <= 0.0 {
            return invalid("compact_breakpoint must be positive");
        }
        if field.wrap_margin.is_nan() || field.wrap_margin < 0.0 {
            return invalid("wrap_margin must not be negative");
        }
        let negative = |v: f32| v.is_nan() || v < 0.0;
        if negative(field.speed) || negative(field.twinkle_speed) {
            return invalid("speeds must not be negative");
        }
        for (name, span) in [
            ("compact_size", field.compact_size),
            ("wide_size", field.wide_size),
            ("glow_size", field.glow_size),
            ("initial_opacity", field.initial_opacity),
            ("twinkle_band", field.twinkle_band),
        ] {
            if !span.is_ordered() {
                return invalid(&format!("{name} must have min <= max"));
            }
        }
        if !(0.0..=1.0).contains(&field.glow_chance) || !(0.0..=1.0).contains(&field.twinkle_chance)
        {
            return invalid("chances must be within [0, 1]");
        }
        if self.viewport.reveal_scroll_ms < self.viewport.reveal_unlock_ms {
            return invalid("reveal_scroll_ms must not precede reveal_unlock_ms");
        }
        if !(0.0..=1.0).contains(&self.effects.cursor_easing) {
            return invalid("cursor_easing must be within [0, 1]");
        }
        Ok(())
    }

    /// Load overrides from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", SETTINGS_ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring page settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
