//! The particle field: every star on the page

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use crate::render_loop::Scene;
use crate::renderer::{Surface, SurfaceSize};
use crate::settings::FieldSettings;
use crate::viewport::Viewport;

/// Owns the particles and advances them in lock-step
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: SurfaceSize,
    device_pixel_ratio: f32,
    style: FieldSettings,
    rng: Pcg32,
    /// Bumped on every reseed
    generation: u64,
}

impl ParticleField {
    /// Empty field; nothing is drawn until [`ParticleField::seed`]
    pub fn new(style: FieldSettings, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            bounds: SurfaceSize::default(),
            device_pixel_ratio: 1.0,
            style,
            rng: Pcg32::seed_from_u64(seed),
            generation: 0,
        }
    }

    /// Replace the whole population to fit `viewport`
    pub fn seed(&mut self, viewport: &Viewport) {
        let count = self.particle_count_for(viewport.width);
        let compact = self.style.is_compact(viewport.width);

        self.bounds = viewport.surface_size();
        self.device_pixel_ratio = viewport.device_pixel_ratio;

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::spawn(&mut self.rng, self.bounds, compact, &self.style);
            self.particles.push(particle);
        }
        self.generation += 1;

        log::debug!(
            "Seeded {} particles for {}x{} (dpr {})",
            count,
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
    }

    pub fn particle_count_for(&self, css_width: f32) -> usize {
        self.style.particle_count(css_width)
    }

    pub fn advance_all(&mut self) {
        let bounds = self.bounds;
        let margin = self.style.wrap_margin;
        let band = self.style.twinkle_band;
        for particle in &mut self.particles {
            particle.advance(bounds, margin, band);
        }
    }

    /// Draw every particle; clearing is the caller's job
    pub fn render_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.particles {
            particle.render(surface, self.device_pixel_ratio, &self.style);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> SurfaceSize {
        self.bounds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Scene for ParticleField {
    fn advance(&mut self) {
        self.advance_all();
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.render_all(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::settings::Density;
    use proptest::prelude::*;

    fn mobile() -> Viewport {
        Viewport::new(375.0, 812.0, 1.0)
    }

    fn desktop() -> Viewport {
        Viewport::new(1440.0, 900.0, 1.0)
    }

    #[test]
    fn count_follows_width_tier() {
        let mut field = ParticleField::new(FieldSettings::default(), 1);
        field.seed(&mobile());
        assert_eq!(field.len(), 480);
        field.seed(&desktop());
        assert_eq!(field.len(), 1200);
    }

    #[test]
    fn fixed_density_ignores_width() {
        let style = FieldSettings {
            density: Density::Fixed { count: 600 },
            ..Default::default()
        };
        let mut field = ParticleField::new(style, 1);
        field.seed(&mobile());
        assert_eq!(field.len(), 600);
        field.seed(&desktop());
        assert_eq!(field.len(), 600);
    }

    #[test]
    fn reseed_replaces_every_particle() {
        let mut field = ParticleField::new(FieldSettings::default(), 42);
        field.seed(&desktop());
        let before = field.particles().to_vec();

        field.seed(&desktop());
        assert_eq!(field.len(), before.len());
        assert_eq!(field.generation(), 2);
        for old in &before {
            assert!(field.particles().iter().all(|p| p.pos != old.pos));
        }
    }

    #[test]
    fn bounds_track_device_pixels() {
        let mut field = ParticleField::new(FieldSettings::default(), 5);
        field.seed(&Viewport::new(1440.0, 900.0, 2.0));
        assert_eq!(field.bounds(), SurfaceSize::new(2880.0, 1800.0));
        assert!(field.particles().iter().any(|p| p.pos.x > 1440.0));
    }

    #[test]
    fn render_all_draws_without_clearing() {
        let mut field = ParticleField::new(FieldSettings::default(), 9);
        field.seed(&mobile());
        let mut surface = RecordingSurface::new();
        field.render_all(&mut surface);
        assert_eq!(surface.dot_count(), 480);
        assert_eq!(surface.frames, 0);
    }

    #[test]
    fn unseeded_field_is_empty() {
        let mut field = ParticleField::new(FieldSettings::default(), 9);
        assert!(field.is_empty());
        field.advance_all();
        assert!(field.is_empty());
    }

    proptest! {
        #[test]
        fn mobile_gets_fewer_particles(width in 1.0f32..767.0, wide in 768.0f32..4000.0) {
            let field = ParticleField::new(FieldSettings::default(), 0);
            prop_assert_eq!(field.particle_count_for(width), 480);
            prop_assert_eq!(field.particle_count_for(wide), 1200);
        }
    }
}
