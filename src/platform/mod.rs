//! Platform abstraction layer
//!
//! Browser-only wiring lives in `web`:
//! - Element lookup
//! - Event listeners and the per-frame loop
//! - Interval timer and IntersectionObserver
//! - Owned handles that release everything on drop

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::FxError;

/// Log the outcome of starting one component and keep its handle.
///
/// Missing markup is a quiet skip; anything else is a warning. Either way
/// the remaining components still start.
pub fn started<H>(name: &str, result: Result<H, FxError>) -> Option<H> {
    match result {
        Ok(handle) => {
            log::info!("{} started", name);
            Some(handle)
        }
        Err(e) if e.is_missing_element() => {
            log::debug!("{} skipped: {}", name, e);
            None
        }
        Err(e) => {
            log::warn!("{} failed to start: {}", name, e);
            None
        }
    }
}
