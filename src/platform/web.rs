//! Browser wiring for the four page effects
//!
//! Each `start_*` function looks up its markup, registers callbacks with the
//! browser and returns a handle that owns them. Dropping the handle cancels
//! the frame loop, clears the timer, removes listeners and disconnects the
//! observer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlCanvasElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::carousel::Carousel;
use crate::consts::CLASS_REVEAL_ACTIVE;
use crate::dom::ClassTarget;
use crate::error::FxError;
use crate::field::ParticleField;
use crate::navbar::ScrollNavbar;
use crate::renderer::{Canvas2d, draw_field};
use crate::reveal::{RevealSet, Visibility};
use crate::settings::{CarouselSettings, NavbarSettings, ParticleSettings, RevealSettings, Settings};

use super::started;

fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or_else(|| FxError::Js("no window".to_string()))
}

fn document(window: &Window) -> Result<Document, FxError> {
    window
        .document()
        .ok_or_else(|| FxError::Js("no document".to_string()))
}

/// Viewport size in CSS pixels
fn viewport_size(window: &Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// An event listener, removed when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, FxError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

// ---------------------------------------------------------------------------
// Particle field
// ---------------------------------------------------------------------------

/// Shared between the frame callback and the resize listener
struct Animation {
    field: RefCell<ParticleField>,
    surface: RefCell<Canvas2d>,
    /// Pending requestAnimationFrame id
    frame_id: Cell<Option<i32>>,
    /// None when drawing a single still frame
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Animation {
    fn schedule(&self) -> Result<(), FxError> {
        if let Some(callback) = self.callback.borrow().as_ref() {
            let id = window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.frame_id.set(Some(id));
        }
        Ok(())
    }

    fn redraw(&self) {
        let mut surface = self.surface.borrow_mut();
        draw_field(&self.field.borrow(), &mut *surface);
    }

    fn cancel(&self) {
        if let Some(id) = self.frame_id.take() {
            if let Ok(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

pub struct ParticleFieldHandle {
    animation: Rc<Animation>,
    _resize: Listener,
}

impl Drop for ParticleFieldHandle {
    fn drop(&mut self) {
        self.animation.cancel();
    }
}

pub fn start_particle_field(
    settings: &ParticleSettings,
    seed: u64,
) -> Result<ParticleFieldHandle, FxError> {
    let window = window()?;
    let document = document(&window)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(&settings.canvas_id)
        .ok_or_else(|| FxError::missing(format!("#{}", settings.canvas_id)))?
        .dyn_into()
        .map_err(|_| FxError::NotACanvas {
            id: settings.canvas_id.clone(),
        })?;
    let surface = Canvas2d::new(canvas)?;

    let (width, height) = viewport_size(&window);
    surface.set_size(width as u32, height as u32);

    let mut rng = Pcg32::seed_from_u64(seed);
    let field = ParticleField::new(settings, width, height, &mut rng);
    log::debug!(
        "Particle field: {} particles in {}x{} (seed {})",
        field.particles().len(),
        width,
        height,
        seed
    );

    let animation = Rc::new(Animation {
        field: RefCell::new(field),
        surface: RefCell::new(surface),
        frame_id: Cell::new(None),
        callback: RefCell::new(None),
    });

    let resize = {
        let animation = animation.clone();
        let window_clone = window.clone();
        Listener::new(window.as_ref(), "resize", move |_event: Event| {
            let (w, h) = viewport_size(&window_clone);
            animation.surface.borrow().set_size(w as u32, h as u32);
            animation.field.borrow_mut().resize(w, h);
            // Resizing the backing store wipes it
            if animation.callback.borrow().is_none() {
                animation.redraw();
            }
        })?
    };

    if settings.respect_reduced_motion && prefers_reduced_motion(&window) {
        log::info!("Reduced motion requested, drawing a still particle field");
        animation.redraw();
    } else {
        // Weak so the callback does not keep its own owner alive
        let weak = Rc::downgrade(&animation);
        let callback = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            let Some(animation) = weak.upgrade() else {
                return;
            };
            animation.frame_id.set(None);
            {
                let mut surface = animation.surface.borrow_mut();
                animation.field.borrow_mut().advance_frame(&mut *surface);
            }
            if let Err(e) = animation.schedule() {
                log::warn!("Particle loop stopped: {}", e);
            }
        });
        *animation.callback.borrow_mut() = Some(callback);
        animation.schedule()?;
    }

    Ok(ParticleFieldHandle {
        animation,
        _resize: resize,
    })
}

// ---------------------------------------------------------------------------
// Navbar
// ---------------------------------------------------------------------------

pub struct NavbarHandle {
    _scroll: Listener,
}

pub fn start_navbar(settings: &NavbarSettings) -> Result<NavbarHandle, FxError> {
    let window = window()?;
    let document = document(&window)?;

    let element = document
        .query_selector(&settings.selector)?
        .ok_or_else(|| FxError::missing(settings.selector.clone()))?;
    let navbar = ScrollNavbar::new(element, settings.threshold);

    // Page may load already scrolled
    navbar.on_scroll(window.scroll_y().unwrap_or(0.0));

    let window_clone = window.clone();
    let scroll = Listener::new(window.as_ref(), "scroll", move |_event: Event| {
        navbar.on_scroll(window_clone.scroll_y().unwrap_or(0.0));
    })?;

    Ok(NavbarHandle { _scroll: scroll })
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

pub struct CarouselHandle {
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
    _enter: Listener,
    _leave: Listener,
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.interval_id);
        }
    }
}

pub fn start_carousel(settings: &CarouselSettings) -> Result<CarouselHandle, FxError> {
    let window = window()?;
    let document = document(&window)?;

    let slides = query_all(&document, &settings.slide_selector)?;
    let container = document
        .get_element_by_id(&settings.container_id)
        .ok_or_else(|| FxError::missing(format!("#{}", settings.container_id)))?;
    let carousel = Carousel::new(slides)
        .ok_or_else(|| FxError::missing(settings.slide_selector.clone()))?;
    log::debug!("Carousel: {} slides", carousel.len());
    let carousel = Rc::new(RefCell::new(carousel));

    let tick = {
        let carousel = carousel.clone();
        Closure::<dyn FnMut()>::new(move || {
            carousel.borrow_mut().tick();
        })
    };
    let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        settings.interval_ms.min(i32::MAX as u32) as i32,
    )?;

    let enter = {
        let carousel = carousel.clone();
        Listener::new(container.as_ref(), "mouseenter", move |_event: Event| {
            carousel.borrow_mut().pause();
        })
    };
    let leave = {
        let carousel = carousel.clone();
        Listener::new(container.as_ref(), "mouseleave", move |_event: Event| {
            carousel.borrow_mut().resume();
        })
    };

    let (enter, leave) = match (enter, leave) {
        (Ok(enter), Ok(leave)) => (enter, leave),
        (Err(e), _) | (_, Err(e)) => {
            window.clear_interval_with_handle(interval_id);
            return Err(e);
        }
    };

    Ok(CarouselHandle {
        interval_id,
        _tick: tick,
        _enter: enter,
        _leave: leave,
    })
}

// ---------------------------------------------------------------------------
// Reveal
// ---------------------------------------------------------------------------

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct RevealHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn start_reveal(settings: &RevealSettings) -> Result<RevealHandle, FxError> {
    let window = window()?;
    let document = document(&window)?;

    let elements = query_all(&document, &settings.selector)?;
    if elements.is_empty() {
        return Err(FxError::missing(settings.selector.clone()));
    }
    let set = Rc::new(RefCell::new(RevealSet::new(elements, settings.threshold)));

    let callback = {
        let set = set.clone();
        ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut set = set.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let vis = Visibility {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if set.on_visibility(&target, vis) {
                    observer.unobserve(&target);
                }
            }
            if set.all_revealed() {
                log::debug!("All {} reveal targets shown", set.revealed());
                observer.disconnect();
            }
        })
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                // Elements are already tagged hidden; show them rather than strand them
                set.borrow_mut().reveal_all();
                return Err(e.into());
            }
        };

    for el in set.borrow().elements() {
        if !el.has_class(CLASS_REVEAL_ACTIVE) {
            observer.observe(el);
        }
    }

    Ok(RevealHandle {
        observer,
        _callback: callback,
    })
}

// ---------------------------------------------------------------------------
// All effects
// ---------------------------------------------------------------------------

/// Every running effect. Components whose markup is absent are `None`.
#[derive(Default)]
pub struct PageFx {
    particles: Option<ParticleFieldHandle>,
    navbar: Option<NavbarHandle>,
    carousel: Option<CarouselHandle>,
    reveal: Option<RevealHandle>,
}

impl PageFx {
    /// Start all four effects; each is independent of the others
    pub fn start(settings: &Settings, seed: u64) -> Self {
        let fx = Self {
            particles: started(
                "Particle field",
                start_particle_field(&settings.particles, seed),
            ),
            navbar: started("Navbar", start_navbar(&settings.navbar)),
            carousel: started("Carousel", start_carousel(&settings.carousel)),
            reveal: started("Reveal", start_reveal(&settings.reveal)),
        };
        log::info!("{} of 4 page effects running", fx.running());
        fx
    }

    pub fn running(&self) -> usize {
        [
            self.particles.is_some(),
            self.navbar.is_some(),
            self.carousel.is_some(),
            self.reveal.is_some(),
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }

    /// Release every timer, listener and observer
    pub fn teardown(self) {
        let running = self.running();
        drop(self);
        log::info!("Stopped {} page effects", running);
    }
}
