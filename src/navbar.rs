//! Scroll-reactive navigation bar

use crate::consts::{CLASS_SCROLLED, CLASS_SHADOW};
use crate::dom::ClassTarget;

/// Adds `scrolled` + `shadow-lg` once the page is scrolled past a threshold
#[derive(Debug)]
pub struct ScrollNavbar<T> {
    target: T,
    threshold: f64,
}

impl<T: ClassTarget> ScrollNavbar<T> {
    pub fn new(target: T, threshold: f64) -> Self {
        Self { target, threshold }
    }

    /// Strictly above the threshold counts as scrolled
    #[inline]
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }

    /// Apply the state for `scroll_y`; returns whether the bar is now scrolled
    pub fn on_scroll(&self, scroll_y: f64) -> bool {
        let scrolled = self.is_scrolled(scroll_y);
        if scrolled {
            self.target.add_class(CLASS_SCROLLED);
            self.target.add_class(CLASS_SHADOW);
        } else {
            self.target.remove_class(CLASS_SCROLLED);
            self.target.remove_class(CLASS_SHADOW);
        }
        scrolled
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakeElement;

    #[test]
    fn test_threshold_is_exclusive() {
        let nav = ScrollNavbar::new(FakeElement::default(), 30.0);

        assert!(nav.on_scroll(31.0));
        assert!(nav.target().has_class("scrolled"));
        assert!(nav.target().has_class("shadow-lg"));

        assert!(!nav.on_scroll(30.0));
        assert!(!nav.target().has_class("scrolled"));
        assert!(!nav.target().has_class("shadow-lg"));
    }

    #[test]
    fn test_idempotent() {
        let el = FakeElement::with_classes(&["navbar"]);
        let nav = ScrollNavbar::new(el.clone(), 30.0);
        nav.on_scroll(500.0);
        nav.on_scroll(600.0);
        assert_eq!(el.adds(), 2);

        nav.on_scroll(0.0);
        nav.on_scroll(0.0);
        assert!(!el.has_class("scrolled"));
        assert!(el.has_class("navbar"));
    }
}
