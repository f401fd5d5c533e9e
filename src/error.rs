//! Error types for effect setup
//!
//! Nothing here is fatal to the page: the entry point logs the error and
//! moves on to the next component.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    /// Required element not on the page; the component is skipped
    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    #[error("element #{id} is not a canvas")]
    NotACanvas { id: String },

    #[error("2d canvas context unavailable")]
    NoContext,

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("malformed settings JSON: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl FxError {
    pub fn missing(selector: impl Into<String>) -> Self {
        FxError::MissingElement {
            selector: selector.into(),
        }
    }

    /// Absent markup is the expected way to opt out of an effect
    pub fn is_missing_element(&self) -> bool {
        matches!(self, FxError::MissingElement { .. })
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_display() {
        let err = FxError::missing(".navbar");
        assert!(err.is_missing_element());
        assert_eq!(err.to_string(), "element not found: .navbar");
    }

    #[test]
    fn test_json_error_converts() {
        let err: FxError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FxError::Config(_)));
        assert!(!err.is_missing_element());
    }
}
