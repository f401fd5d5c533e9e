//! Auto-advancing slide carousel
//!
//! The host fires `tick` on a fixed interval whether or not the carousel is
//! paused; a paused tick does nothing.

use crate::consts::CLASS_ACTIVE;
use crate::dom::ClassTarget;

#[derive(Debug)]
pub struct Carousel<T> {
    slides: Vec<T>,
    index: usize,
    paused: bool,
}

impl<T: ClassTarget> Carousel<T> {
    /// None when there are no slides.
    ///
    /// Starts on the first slide already marked active (or slide 0) and
    /// clears `active` from every other slide.
    pub fn new(slides: Vec<T>) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }

        let index = slides
            .iter()
            .position(|s| s.has_class(CLASS_ACTIVE))
            .unwrap_or(0);

        for (i, slide) in slides.iter().enumerate() {
            if i == index {
                slide.add_class(CLASS_ACTIVE);
            } else {
                slide.remove_class(CLASS_ACTIVE);
            }
        }

        Some(Self {
            slides,
            index,
            paused: false,
        })
    }

    /// Advance to the next slide unless paused. Returns true if it moved.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }

        self.slides[self.index].remove_class(CLASS_ACTIVE);
        self.index = (self.index + 1) % self.slides.len();
        self.slides[self.index].add_class(CLASS_ACTIVE);
        true
    }

    /// Pointer entered the container
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left the container
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakeElement;

    fn slides(n: usize) -> Vec<FakeElement> {
        (0..n).map(|_| FakeElement::default()).collect()
    }

    fn active_count(c: &Carousel<FakeElement>) -> usize {
        c.slides().iter().filter(|s| s.has_class("active")).count()
    }

    #[test]
    fn test_empty_is_none() {
        assert!(Carousel::<FakeElement>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut c = Carousel::new(slides(3)).unwrap();
        assert_eq!(c.index(), 0);
        assert_eq!(active_count(&c), 1);

        for expected in [1, 2, 0] {
            assert!(c.tick());
            assert_eq!(c.index(), expected);
            assert_eq!(active_count(&c), 1);
            assert!(c.slides()[expected].has_class("active"));
        }
    }

    #[test]
    fn test_pause_holds_index() {
        let mut c = Carousel::new(slides(3)).unwrap();
        c.tick();
        c.pause();
        assert!(c.is_paused());
        for _ in 0..5 {
            assert!(!c.tick());
        }
        assert_eq!(c.index(), 1);
        assert_eq!(active_count(&c), 1);

        c.resume();
        assert!(c.tick());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_starts_on_marked_slide() {
        let s = vec![
            FakeElement::default(),
            FakeElement::with_classes(&["team-slide", "active"]),
            FakeElement::with_classes(&["active"]),
        ];
        let mut c = Carousel::new(s).unwrap();
        assert_eq!(c.index(), 1);
        assert_eq!(active_count(&c), 1);
        assert!(c.slides()[1].has_class("team-slide"));

        c.tick();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_single_slide_stays_active() {
        let mut c = Carousel::new(slides(1)).unwrap();
        c.tick();
        c.tick();
        assert_eq!(c.index(), 0);
        assert!(c.slides()[0].has_class("active"));
    }
}
