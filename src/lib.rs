//! Page FX - cosmetic effects for a single landing page
//!
//! Core modules:
//! - `field`: Deterministic particle simulation (motion, bounds, links)
//! - `renderer`: Canvas drawing seam and the field renderer
//! - `dom`: Class-list abstraction over page elements
//! - `navbar`, `carousel`, `reveal`: Event-driven class toggling
//! - `platform`: Browser wiring (listeners, timers, observers)
//! - `settings`: Runtime tuning with serde defaults

pub mod carousel;
pub mod dom;
pub mod error;
pub mod field;
pub mod navbar;
pub mod platform;
pub mod renderer;
pub mod reveal;
pub mod settings;

pub use carousel::Carousel;
pub use dom::ClassTarget;
pub use error::FxError;
pub use field::{Particle, ParticleField};
pub use navbar::ScrollNavbar;
pub use reveal::{RevealSet, Visibility};
pub use settings::Settings;

/// Effect configuration constants
pub mod consts {
    /// Particles in the background field
    pub const PARTICLE_COUNT: usize = 70;
    /// Per-axis velocity bound (pixels/frame)
    pub const PARTICLE_MAX_SPEED: f32 = 0.15;
    pub const PARTICLE_MIN_RADIUS: f32 = 0.5;
    pub const PARTICLE_MAX_RADIUS: f32 = 2.5;
    pub const PARTICLE_MIN_ALPHA: f32 = 0.1;
    pub const PARTICLE_MAX_ALPHA: f32 = 0.5;
    /// Neon cyan
    pub const PARTICLE_RGB: [u8; 3] = [0, 242, 255];

    /// Pairs closer than this get a connector
    pub const LINK_DISTANCE: f32 = 180.0;
    /// Connector opacity at distance 0, fading linearly to 0 at LINK_DISTANCE
    pub const LINK_MAX_OPACITY: f32 = 0.15;
    pub const LINK_WIDTH: f32 = 0.5;

    /// Scroll offset above which the navbar is "scrolled" (exclusive)
    pub const NAVBAR_SCROLL_THRESHOLD: f64 = 30.0;
    /// Carousel advance period
    pub const CAROUSEL_INTERVAL_MS: u32 = 4500;
    /// Visible fraction at which an element is revealed
    pub const REVEAL_THRESHOLD: f64 = 0.15;

    /// Element lookups
    pub const CANVAS_ID: &str = "gravity-bg";
    pub const NAVBAR_SELECTOR: &str = ".navbar";
    pub const CAROUSEL_CONTAINER_ID: &str = "team-roulette";
    pub const SLIDE_SELECTOR: &str = ".team-slide";
    pub const REVEAL_SELECTOR: &str = ".glass-card, .portfolio-item, .section-title";
    pub const CONFIG_ELEMENT_ID: &str = "page-fx-config";

    /// Class names
    pub const CLASS_SCROLLED: &str = "scrolled";
    pub const CLASS_SHADOW: &str = "shadow-lg";
    pub const CLASS_ACTIVE: &str = "active";
    pub const CLASS_REVEAL: &str = "reveal";
    pub const CLASS_REVEAL_ACTIVE: &str = "reveal-active";
}

/// CSS `rgba()` color string
#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}
