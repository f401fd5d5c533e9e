//! One-way reveal of elements as they scroll into view

use crate::consts::{CLASS_REVEAL, CLASS_REVEAL_ACTIVE};
use crate::dom::ClassTarget;

/// One visibility report for an element (an IntersectionObserver entry)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    /// Visible fraction in [0, 1]
    pub ratio: f64,
}

#[derive(Debug)]
pub struct RevealSet<T> {
    elements: Vec<T>,
    threshold: f64,
    revealed: usize,
}

impl<T: ClassTarget> RevealSet<T> {
    /// Tag every element with `reveal` so CSS can hide it until revealed
    pub fn new(elements: Vec<T>, threshold: f64) -> Self {
        let mut revealed = 0;
        for el in &elements {
            el.add_class(CLASS_REVEAL);
            if el.has_class(CLASS_REVEAL_ACTIVE) {
                revealed += 1;
            }
        }
        Self {
            elements,
            threshold,
            revealed,
        }
    }

    pub fn qualifies(&self, vis: Visibility) -> bool {
        vis.is_intersecting && vis.ratio >= self.threshold
    }

    /// Handle a visibility report. Returns true only on the transition to
    /// revealed; reports for an already revealed element are ignored.
    pub fn on_visibility(&mut self, el: &T, vis: Visibility) -> bool {
        if el.has_class(CLASS_REVEAL_ACTIVE) || !self.qualifies(vis) {
            return false;
        }
        el.add_class(CLASS_REVEAL_ACTIVE);
        self.revealed += 1;
        true
    }

    /// Reveal everything now; used when visibility can't be observed
    pub fn reveal_all(&mut self) {
        for el in &self.elements {
            el.add_class(CLASS_REVEAL_ACTIVE);
        }
        self.revealed = self.elements.len();
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed >= self.elements.len()
    }
}
