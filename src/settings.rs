//! Effect settings
//!
//! Defaults reproduce the stock page. A page can override any subset by
//! embedding a JSON object in `<script type="application/json" id="page-fx-config">`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::FxError;

/// Particle background tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub canvas_id: String,
    pub count: usize,
    /// Per-axis velocity bound
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
    pub rgb: [u8; 3],
    pub link_distance: f32,
    pub link_max_opacity: f32,
    pub link_width: f32,
    /// Draw one still frame instead of animating when the user asks for reduced motion
    pub respect_reduced_motion: bool,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),
            count: PARTICLE_COUNT,
            max_speed: PARTICLE_MAX_SPEED,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            min_alpha: PARTICLE_MIN_ALPHA,
            max_alpha: PARTICLE_MAX_ALPHA,
            rgb: PARTICLE_RGB,
            link_distance: LINK_DISTANCE,
            link_max_opacity: LINK_MAX_OPACITY,
            link_width: LINK_WIDTH,
            respect_reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarSettings {
    pub selector: String,
    pub threshold: f64,
}

impl Default for NavbarSettings {
    fn default() -> Self {
        Self {
            selector: NAVBAR_SELECTOR.to_string(),
            threshold: NAVBAR_SCROLL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub container_id: String,
    pub slide_selector: String,
    pub interval_ms: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            container_id: CAROUSEL_CONTAINER_ID.to_string(),
            slide_selector: SLIDE_SELECTOR.to_string(),
            interval_ms: CAROUSEL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub selector: String,
    /// Visible fraction in [0, 1]
    pub threshold: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            selector: REVEAL_SELECTOR.to_string(),
            threshold: REVEAL_THRESHOLD,
        }
    }
}

/// All effect settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub particles: ParticleSettings,
    pub navbar: NavbarSettings,
    pub carousel: CarouselSettings,
    pub reveal: RevealSettings,
}

impl Settings {
    /// Parse and validate a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), FxError> {
        let p = &self.particles;
        if !(p.max_speed >= 0.0) {
            return Err(invalid("particles.max_speed must be >= 0"));
        }
        if !(p.min_radius > 0.0 && p.min_radius <= p.max_radius) {
            return Err(invalid("particles radius range must be positive and ordered"));
        }
        if !(p.min_alpha >= 0.0 && p.min_alpha <= p.max_alpha && p.max_alpha <= 1.0) {
            return Err(invalid("particles alpha range must be ordered within [0, 1]"));
        }
        if !(p.link_distance > 0.0) {
            return Err(invalid("particles.link_distance must be > 0"));
        }
        if self.carousel.interval_ms == 0 {
            return Err(invalid("carousel.interval_ms must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid("reveal.threshold must be within [0, 1]"));
        }
        Ok(())
    }

    /// Load overrides from the page's config element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::debug!("No #{} element, using default settings", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", CONFIG_ELEMENT_ID);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring page settings ({}), using defaults", e);
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

fn invalid(msg: &str) -> FxError {
    FxError::InvalidSettings(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.particles.count, 70);
        assert_eq!(settings.carousel.interval_ms, 4500);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "particles": { "count": 12 }, "navbar": { "threshold": 80 } }"#)
                .unwrap();
        assert_eq!(settings.particles.count, 12);
        assert_eq!(settings.particles.link_distance, LINK_DISTANCE);
        assert_eq!(settings.navbar.threshold, 80.0);
        assert_eq!(settings.navbar.selector, NAVBAR_SELECTOR);
        assert_eq!(settings.reveal, RevealSettings::default());
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let err = Settings::from_json(r#"{ "particles": { "min_radius": 3.0 } }"#).unwrap_err();
        assert!(matches!(err, FxError::InvalidSettings(_)));

        let err = Settings::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, FxError::InvalidSettings(_)));

        let err = Settings::from_json(r#"{ "carousel": { "interval_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, FxError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ particles").unwrap_err();
        assert!(matches!(err, FxError::Config(_)));
    }
}
