//! Page FX entry point
//!
//! In the browser this starts every effect once the document is parsed.
//! Natively it runs the particle field headlessly and reports what a frame
//! would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use page_fx::Settings;
    use page_fx::platform::web::PageFx;

    thread_local! {
        /// Effects live as long as the page unless the host tears them down
        static RUNNING: RefCell<Option<PageFx>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"page-fx: logger already initialized".into());
        }

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();

        if ready_state == "loading" {
            let on_ready = Closure::once_into_js(start);
            if let Err(e) = document
                .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            {
                log::error!("Could not wait for DOMContentLoaded: {:?}", e);
            }
        } else {
            start();
        }
    }

    fn start() {
        stop();

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Page FX starting (seed {})", seed);

        let fx = PageFx::start(&settings, seed);
        RUNNING.with(|running| *running.borrow_mut() = Some(fx));
    }

    pub fn stop() {
        let fx = RUNNING.with(|running| running.borrow_mut().take());
        if let Some(fx) = fx {
            fx.teardown();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Stop every effect and release its timers, listeners and observers
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn teardown() {
    wasm_app::stop();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use page_fx::renderer::FrameStats;
    use page_fx::{ParticleField, Settings};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Page FX (native) - headless particle run");
    log::info!("Browser effects need the wasm build, run with `trunk serve`");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42u64);
    let frames = 600u32;
    let (width, height) = (1280.0, 720.0);

    let settings = Settings::default();
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut field = ParticleField::new(&settings.particles, width, height, &mut rng);

    let mut stats = FrameStats::default();
    for _ in 0..frames {
        field.advance_frame(&mut stats);
    }

    let slack = settings.particles.max_speed + 1e-3;
    let in_bounds = field.particles().iter().all(|p| {
        p.pos.x >= -slack && p.pos.x <= width + slack && p.pos.y >= -slack && p.pos.y <= height + slack
    });

    println!("seed {}: {} frames, {} particles", seed, field.frame(), field.particles().len());
    println!(
        "  {:.1} connectors/frame, mean connector opacity {:.3}",
        stats.lines as f32 / frames as f32,
        if stats.lines > 0 { stats.line_opacity / stats.lines as f32 } else { 0.0 }
    );
    println!("  all particles within bounds: {}", if in_bounds { "✓" } else { "✗" });
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
