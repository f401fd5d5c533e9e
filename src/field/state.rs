//! The particle field: a fixed population drifting inside the viewport

use glam::Vec2;
use rand::Rng;

use super::links::{Link, links};
use super::particle::Particle;
use crate::settings::ParticleSettings;

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Viewport size; particles reflect off [0, bounds]
    bounds: Vec2,
    settings: ParticleSettings,
    /// Frames advanced since creation
    frame: u64,
}

impl ParticleField {
    /// Populate `settings.count` particles uniformly over a `width` x `height` viewport
    pub fn new<R: Rng>(
        settings: &ParticleSettings,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Self {
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let particles = (0..settings.count)
            .map(|_| Particle::random(&mut *rng, bounds, settings))
            .collect();

        Self {
            particles,
            bounds,
            settings: settings.clone(),
            frame: 0,
        }
    }

    /// Build from explicit particles (no randomness)
    pub fn from_particles(
        settings: &ParticleSettings,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            bounds: Vec2::new(width.max(0.0), height.max(0.0)),
            settings: settings.clone(),
            frame: 0,
        }
    }

    /// New viewport size. Existing particles keep their positions and find
    /// their way back through the normal bounds check.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Move every particle one frame
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.step(bounds);
        }
        self.frame += 1;
    }

    /// Connectors for the current positions
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        links(
            &self.particles,
            self.settings.link_distance,
            self.settings.link_max_opacity,
        )
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARTICLE_MAX_SPEED;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field(seed: u64, w: f32, h: f32) -> ParticleField {
        let mut rng = Pcg32::seed_from_u64(seed);
        ParticleField::new(&ParticleSettings::default(), w, h, &mut rng)
    }

    #[test]
    fn test_new_population() {
        let f = field(42, 1280.0, 720.0);
        assert_eq!(f.particles().len(), 70);
        assert_eq!(f.bounds(), Vec2::new(1280.0, 720.0));
        assert_eq!(f.frame(), 0);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = field(1234, 800.0, 600.0);
        let mut b = field(1234, 800.0, 600.0);
        for _ in 0..300 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.particles(), b.particles());

        let c = field(1235, 800.0, 600.0);
        assert_ne!(field(1234, 800.0, 600.0).particles(), c.particles());
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut f = field(9, 1000.0, 1000.0);
        let before: Vec<Vec2> = f.particles().iter().map(|p| p.pos).collect();
        f.resize(200.0, 150.0);
        let after: Vec<Vec2> = f.particles().iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
        assert_eq!(f.bounds(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_shrink_returns_stranded_particle() {
        let settings = ParticleSettings::default();
        // Outside the new box and already moving back toward it
        let p = Particle::new(Vec2::new(500.0, 50.0), Vec2::new(-0.1, 0.0), 1.0, 0.2, settings.rgb);
        let mut f = ParticleField::from_particles(&settings, 1000.0, 100.0, vec![p]);
        f.resize(400.0, 100.0);

        let start = f.particles()[0].pos.x;
        for _ in 0..100 {
            f.advance();
        }
        let x = f.particles()[0].pos.x;
        assert!(x < start - 9.0, "particle should keep drifting inward, x = {}", x);
    }

    #[test]
    fn test_advance_counts_frames() {
        let mut f = field(3, 640.0, 480.0);
        f.advance();
        f.advance();
        assert_eq!(f.frame(), 2);
    }

    proptest! {
        #[test]
        fn prop_particles_stay_within_one_step_of_bounds(
            seed in any::<u64>(),
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
            frames in 0usize..400,
        ) {
            let mut f = field(seed, w, h);
            for _ in 0..frames {
                f.advance();
            }
            let eps = PARTICLE_MAX_SPEED + 1e-3;
            for p in f.particles() {
                prop_assert!(p.pos.x >= -eps && p.pos.x <= w + eps, "x = {} w = {}", p.pos.x, w);
                prop_assert!(p.pos.y >= -eps && p.pos.y <= h + eps, "y = {} h = {}", p.pos.y, h);
            }
        }
    }
}
