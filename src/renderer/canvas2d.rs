//! `Canvas` on top of the browser's 2D context

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Canvas;
use crate::error::FxError;

pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FxError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(FxError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the viewport
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Canvas for Canvas2d {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str) {
        self.ctx.begin_path();
        // arc() only fails on a negative radius
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(style);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, style: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
