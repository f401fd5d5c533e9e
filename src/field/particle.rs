//! A single drifting point

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rgba;
use crate::settings::ParticleSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    /// Radius
    pub size: f32,
    pub alpha: f32,
    /// CSS fill style, fixed at creation
    pub color: String,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, alpha: f32, rgb: [u8; 3]) -> Self {
        Self {
            pos,
            vel,
            size,
            alpha,
            color: rgba(rgb, alpha),
        }
    }

    /// Uniformly random particle inside `bounds`
    pub fn random<R: Rng>(rng: &mut R, bounds: Vec2, settings: &ParticleSettings) -> Self {
        let pos = Vec2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y);
        let s = settings.max_speed;
        let vel = Vec2::new(uniform(rng, -s, s), uniform(rng, -s, s));
        let size = uniform(rng, settings.min_radius, settings.max_radius);
        let alpha = uniform(rng, settings.min_alpha, settings.max_alpha);
        Self::new(pos, vel, size, alpha, settings.rgb)
    }

    /// Move one frame and reflect off the `[0, bounds]` box.
    ///
    /// Position is never clamped, so a particle can sit up to one frame's
    /// displacement outside the box before heading back in.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;

        if self.pos.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > bounds.x {
            self.vel.x = -self.vel.x.abs();
        }

        if self.pos.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > bounds.y {
            self.vel.y = -self.vel.y.abs();
        }
    }
}

/// Uniform in [lo, hi); tolerates lo == hi
#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}
