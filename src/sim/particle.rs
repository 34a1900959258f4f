//! A single star in the background field

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::renderer::{Dot, Rgba, Surface, SurfaceSize};
use crate::settings::{FieldSettings, Span};

/// One drifting, possibly twinkling, point of light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position in surface (device) pixels
    pub pos: Vec2,
    /// Drift per tick
    pub vel: Vec2,
    /// Radius in CSS pixels
    pub size: f32,
    pub opacity: f32,
    /// Opacity change per tick; only applied when `twinkles`
    pub d_opacity: f32,
    pub twinkles: bool,
    pub glowing: bool,
}

impl Particle {
    /// Random particle somewhere inside `bounds`
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: SurfaceSize,
        compact: bool,
        style: &FieldSettings,
    ) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * bounds.width,
            rng.random::<f32>() * bounds.height,
        );

        let glowing = rng.random::<f32>() < style.glow_chance;
        let size = if glowing {
            style.glow_size.sample(rng)
        } else if compact {
            style.compact_size.sample(rng)
        } else {
            style.wide_size.sample(rng)
        };

        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * style.speed,
            (rng.random::<f32>() - 0.5) * style.speed,
        );

        let opacity = style.initial_opacity.sample(rng);
        let twinkles = rng.random::<f32>() < style.twinkle_chance;
        let d_opacity = if twinkles {
            (rng.random::<f32>() - 0.5) * style.twinkle_speed
        } else {
            0.0
        };

        Self {
            pos,
            vel,
            size,
            opacity,
            d_opacity,
            twinkles,
            glowing,
        }
    }

    /// Drift one tick, wrapping around the margin band, and twinkle
    pub fn advance(&mut self, bounds: SurfaceSize, margin: f32, band: Span) {
        self.pos += self.vel;
        self.pos.x = wrap_coord(self.pos.x, bounds.width, margin);
        self.pos.y = wrap_coord(self.pos.y, bounds.height, margin);

        if self.twinkles {
            self.opacity += self.d_opacity;
            // Reverse only when heading further out; no clamp, so one tick of overshoot is visible
            if (self.opacity > band.max && self.d_opacity > 0.0)
                || (self.opacity < band.min && self.d_opacity < 0.0)
            {
                self.d_opacity = -self.d_opacity;
            }
        }
    }

    /// The circle this particle draws as
    pub fn dot(&self, device_pixel_ratio: f32, style: &FieldSettings) -> Dot {
        let blur = if self.glowing { style.glow_blur } else { style.blur };
        Dot {
            center: self.pos,
            radius: self.size * device_pixel_ratio,
            color: Rgba::from_rgb(style.color, self.opacity),
            blur: blur * device_pixel_ratio,
        }
    }

    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        device_pixel_ratio: f32,
        style: &FieldSettings,
    ) {
        surface.fill_dot(&self.dot(device_pixel_ratio, style));
    }
}

/// Toroidal wrap of one coordinate into `[-margin, extent + margin)`
///
/// In-band values are returned untouched; anything past an edge reappears the
/// same distance in from the opposite edge.
pub fn wrap_coord(v: f32, extent: f32, margin: f32) -> f32 {
    let lo = -margin;
    let hi = extent + margin;
    if v >= lo && v < hi {
        return v;
    }
    let span = hi - lo;
    if span.is_nan() || span <= 0.0 || !v.is_finite() {
        return lo;
    }
    let wrapped = (v - lo).rem_euclid(span) + lo;
    // rem_euclid may round up to `span` for values just below an edge
    if wrapped >= hi || wrapped < lo { lo } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn still(pos: Vec2, vel: Vec2) -> Particle {
        Particle {
            pos,
            vel,
            size: 1.0,
            opacity: 0.5,
            d_opacity: 0.0,
            twinkles: false,
            glowing: false,
        }
    }

    const BAND: Span = Span::new(0.1, 1.0);

    #[test]
    fn wraps_right_edge_to_left() {
        let bounds = SurfaceSize::new(100.0, 100.0);
        let mut p = still(Vec2::new(109.9, 50.0), Vec2::new(0.25, 0.0));
        p.advance(bounds, 10.0, BAND);
        assert!(p.pos.x < -9.0 && p.pos.x >= -10.0, "x = {}", p.pos.x);
        assert_eq!(p.pos.y, 50.0);
    }

    #[test]
    fn wraps_top_edge_to_bottom() {
        let bounds = SurfaceSize::new(100.0, 80.0);
        let mut p = still(Vec2::new(50.0, -10.0), Vec2::new(0.0, -0.2));
        p.advance(bounds, 10.0, BAND);
        assert!(p.pos.y > 89.0 && p.pos.y < 90.0, "y = {}", p.pos.y);
    }

    #[test]
    fn wrap_is_not_a_bounce() {
        let bounds = SurfaceSize::new(100.0, 100.0);
        let mut p = still(Vec2::new(109.9, 50.0), Vec2::new(0.25, 0.0));
        p.advance(bounds, 10.0, BAND);
        assert_eq!(p.vel, Vec2::new(0.25, 0.0));
    }

    #[test]
    fn wrap_coord_leaves_in_band_values() {
        assert_eq!(wrap_coord(42.5, 100.0, 10.0), 42.5);
        assert_eq!(wrap_coord(-10.0, 100.0, 10.0), -10.0);
        assert_eq!(wrap_coord(110.0, 100.0, 10.0), -10.0);
    }

    #[test]
    fn wrap_coord_handles_degenerate_surface() {
        assert_eq!(wrap_coord(3.0, 0.0, 0.0), 0.0);
        assert_eq!(wrap_coord(f32::NAN, 100.0, 10.0), -10.0);
        assert_eq!(wrap_coord(5.0, f32::NAN, 10.0), -10.0);
    }

    #[test]
    fn twinkle_reverses_at_ceiling() {
        let bounds = SurfaceSize::new(100.0, 100.0);
        let mut p = still(Vec2::new(50.0, 50.0), Vec2::ZERO);
        p.twinkles = true;
        p.opacity = 0.995;
        p.d_opacity = 0.01;

        p.advance(bounds, 10.0, BAND);
        assert!(p.opacity > 1.0, "overshoots by one step");
        assert!(p.d_opacity < 0.0);

        p.advance(bounds, 10.0, BAND);
        assert!(p.opacity <= 1.0);
        assert!(p.d_opacity < 0.0);
    }

    #[test]
    fn twinkle_reverses_at_floor() {
        let bounds = SurfaceSize::new(100.0, 100.0);
        let mut p = still(Vec2::new(50.0, 50.0), Vec2::ZERO);
        p.twinkles = true;
        p.opacity = 0.105;
        p.d_opacity = -0.01;

        p.advance(bounds, 10.0, BAND);
        assert!(p.d_opacity > 0.0);
    }

    #[test]
    fn steady_particles_keep_opacity() {
        let bounds = SurfaceSize::new(100.0, 100.0);
        let mut p = still(Vec2::new(50.0, 50.0), Vec2::ZERO);
        p.d_opacity = 0.3;
        p.advance(bounds, 10.0, BAND);
        assert_eq!(p.opacity, 0.5);
    }

    #[test]
    fn glowing_particles_blur_more() {
        let style = FieldSettings::default();
        let mut p = still(Vec2::ZERO, Vec2::ZERO);
        let plain = p.dot(2.0, &style);
        p.glowing = true;
        let glow = p.dot(2.0, &style);
        assert!(glow.blur > plain.blur);
        assert_eq!(plain.radius, 2.0);
    }

    #[test]
    fn spawn_respects_tiers() {
        let style = FieldSettings {
            glow_chance: 0.0,
            ..Default::default()
        };
        let bounds = SurfaceSize::new(1440.0, 900.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, bounds, true, &style);
            assert!(style.compact_size.contains(p.size));
            assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
            assert!(style.initial_opacity.contains(p.opacity));
            assert!(p.pos.x >= 0.0 && p.pos.x <= 1440.0);

            let p = Particle::spawn(&mut rng, bounds, false, &style);
            assert!(style.wide_size.contains(p.size));
        }
    }

    #[test]
    fn roughly_three_percent_glow() {
        let style = FieldSettings::default();
        let bounds = SurfaceSize::new(1440.0, 900.0);
        let mut rng = Pcg32::seed_from_u64(11);
        let glowing = (0..10_000)
            .filter(|_| Particle::spawn(&mut rng, bounds, false, &style).glowing)
            .count();
        assert!((150..=450).contains(&glowing), "glowing = {glowing}");
    }

    proptest! {
        #[test]
        fn position_stays_in_margin_band(
            seed in any::<u64>(),
            width in 1.0f32..2000.0,
            height in 1.0f32..2000.0,
            steps in 1usize..400,
        ) {
            let style = FieldSettings { speed: 60.0, ..Default::default() };
            let bounds = SurfaceSize::new(width, height);
            let margin = style.wrap_margin;
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut p = Particle::spawn(&mut rng, bounds, false, &style);
            for _ in 0..steps {
                p.advance(bounds, margin, style.twinkle_band);
                prop_assert!(p.pos.x >= -margin && p.pos.x < width + margin, "x = {}", p.pos.x);
                prop_assert!(p.pos.y >= -margin && p.pos.y < height + margin, "y = {}", p.pos.y);
            }
        }

        #[test]
        fn twinkle_stays_within_one_step_of_band(seed in any::<u64>(), steps in 1usize..3000) {
            let style = FieldSettings { twinkle_chance: 1.0, twinkle_speed: 0.2, ..Default::default() };
            let bounds = SurfaceSize::new(800.0, 600.0);
            let band = style.twinkle_band;
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut p = Particle::spawn(&mut rng, bounds, false, &style);
            let step = p.d_opacity.abs() + 1e-5;
            for _ in 0..steps {
                p.advance(bounds, style.wrap_margin, band);
                prop_assert!(p.opacity >= band.min - step && p.opacity <= band.max + step,
                    "opacity = {}", p.opacity);
            }
        }
    }
}
