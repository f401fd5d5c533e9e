//! Class-list access to page elements
//!
//! Navbar, carousel and reveal logic only ever toggle CSS classes, so they
//! are written against this trait and tested without a browser.

/// An element whose class list can be edited
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

#[cfg(target_arch = "wasm32")]
impl ClassTarget for web_sys::Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("classList.add({}) failed: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("classList.remove({}) failed: {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}
