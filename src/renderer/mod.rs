//! Field rendering
//!
//! Drawing goes through the `Canvas` trait so the frame logic runs the
//! same in the browser (2D context) and in headless tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;

use glam::Vec2;

use crate::field::ParticleField;
use crate::rgba;

/// Minimal immediate-mode drawing surface
pub trait Canvas {
    /// Clear the `[0, size]` rectangle
    fn clear(&mut self, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, style: &str);
}

/// Draw the field's current state: particles first, connectors over them
pub fn draw_field<C: Canvas + ?Sized>(field: &ParticleField, canvas: &mut C) {
    let settings = field.settings();
    let particles = field.particles();

    canvas.clear(field.bounds());

    for p in particles {
        canvas.fill_circle(p.pos, p.size, &p.color);
    }

    for link in field.links() {
        let style = rgba(settings.rgb, link.opacity);
        canvas.stroke_line(
            particles[link.a].pos,
            particles[link.b].pos,
            settings.link_width,
            &style,
        );
    }
}

impl ParticleField {
    /// Advance one display frame: move everything, then redraw
    pub fn advance_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.advance();
        draw_field(self, canvas);
    }
}

/// Canvas that only counts what it is asked to draw
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub clears: u32,
    pub circles: u32,
    pub lines: u32,
    /// Sum of connector opacities parsed back from their styles
    pub line_opacity: f32,
}

impl Canvas for FrameStats {
    fn clear(&mut self, _size: Vec2) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _style: &str) {
        self.circles += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, style: &str) {
        self.lines += 1;
        self.line_opacity += style_alpha(style).unwrap_or(0.0);
    }
}

/// Alpha component of an `rgba(r, g, b, a)` string
fn style_alpha(style: &str) -> Option<f32> {
    style
        .strip_suffix(')')?
        .rsplit(',')
        .next()?
        .trim()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Particle;
    use crate::settings::ParticleSettings;

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, size: Vec2) {
            self.ops.push(format!("clear {} {}", size.x, size.y));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str) {
            self.ops.push(format!("circle {} {} {} {}", center.x, center.y, radius, style));
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, style: &str) {
            self.ops.push(format!(
                "line {} {} {} {} {} {}",
                from.x, from.y, to.x, to.y, width, style
            ));
        }
    }

    fn still(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, 0.25, [0, 242, 255])
    }

    #[test]
    fn test_draw_order() {
        let settings = ParticleSettings::default();
        let field = ParticleField::from_particles(
            &settings,
            400.0,
            300.0,
            vec![still(10.0, 10.0), still(100.0, 10.0), still(390.0, 290.0)],
        );

        let mut canvas = Recorder::default();
        draw_field(&field, &mut canvas);

        assert_eq!(canvas.ops[0], "clear 400 300");
        assert!(canvas.ops[1..4].iter().all(|op| op.starts_with("circle")));
        assert_eq!(canvas.ops[1], "circle 10 10 2 rgba(0, 242, 255, 0.25)");
        // Only the 90-unit pair is linked
        assert_eq!(canvas.ops.len(), 5);
        assert_eq!(canvas.ops[4], "line 10 10 100 10 0.5 rgba(0, 242, 255, 0.075)");
    }

    #[test]
    fn test_advance_frame_moves_then_draws() {
        let settings = ParticleSettings::default();
        let p = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(0.1, 0.0), 1.0, 0.3, settings.rgb);
        let mut field = ParticleField::from_particles(&settings, 100.0, 100.0, vec![p]);

        let mut stats = FrameStats::default();
        field.advance_frame(&mut stats);
        field.advance_frame(&mut stats);

        assert_eq!(stats.clears, 2);
        assert_eq!(stats.circles, 2);
        assert_eq!(stats.lines, 0);
        assert!((field.particles()[0].pos.x - 50.2).abs() < 1e-4);
    }

    #[test]
    fn test_frame_stats_opacity() {
        let settings = ParticleSettings::default();
        let field = ParticleField::from_particles(
            &settings,
            400.0,
            300.0,
            vec![still(0.0, 0.0), still(90.0, 0.0)],
        );
        let mut stats = FrameStats::default();
        draw_field(&field, &mut stats);
        assert_eq!(stats.lines, 1);
        assert!((stats.line_opacity - 0.075).abs() < 1e-6);
    }

    #[test]
    fn test_style_alpha() {
        assert_eq!(style_alpha("rgba(0, 242, 255, 0.5)"), Some(0.5));
        assert_eq!(style_alpha("cyan"), None);
    }
}
