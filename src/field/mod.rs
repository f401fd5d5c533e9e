//! Particle field simulation
//!
//! Pure and deterministic given the injected RNG:
//! - One `advance` per display frame, no time scaling
//! - Reflective bounds, no clamping
//! - No rendering or platform dependencies

pub mod links;
pub mod particle;
pub mod state;

pub use links::{Link, link_opacity, links};
pub use particle::Particle;
pub use state::ParticleField;
