use anyhow::anyhow;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    DEEP_RGB, FOAM_RGB, LINK_BASE_ALPHA, LINK_DISTANCE_PX, MAX_LINKS_PER_PARTICLE, MIST_RGB,
};
use crate::core::entity::{Entity, EntityKind, Ripple, RippleTint};
use crate::core::Scene;

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.max(0.0))
}

/// Paints one scene onto its 2D canvas: background wash first, then every
/// live entity in store order so newer entities layer on top.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("2d context cast: {:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn draw(&self, scene: &Scene) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.paint_background(w, h);

        for entity in scene.entities() {
            match entity {
                Entity::Ripple(r) => self.paint_ripple(r),
                Entity::Ambient(a) => self.paint_glow_dot(a.pos.x, a.pos.y, a.size, a.opacity),
                Entity::Seeker(s) => self.paint_glow_dot(s.pos.x, s.pos.y, s.size, s.opacity),
                Entity::Trail(t) => self.paint_trail_dot(t.pos.x, t.pos.y, t.size, t.life),
            }
        }
        self.ctx.set_shadow_blur(0.0);

        self.paint_links(scene);
    }

    fn paint_background(&self, w: f64, h: f64) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        _ = gradient.add_color_stop(0.0, &rgba(FOAM_RGB, 0.05));
        _ = gradient.add_color_stop(0.5, &rgba(DEEP_RGB, 0.03));
        _ = gradient.add_color_stop(1.0, &rgba(MIST_RGB, 0.05));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    /// Up to three concentric strokes: a bold outer ring plus echo rings that
    /// appear once the ripple has grown past small thresholds.
    fn paint_ripple(&self, r: &Ripple) {
        let (x, y) = (r.center.x as f64, r.center.y as f64);
        let outer = match r.tint {
            RippleTint::Foam => rgba(FOAM_RGB, r.opacity),
            RippleTint::Deep => rgba(DEEP_RGB, r.opacity),
        };
        self.stroke_ring(x, y, r.radius as f64, 3.0, &outer);
        if r.radius > 15.0 {
            self.stroke_ring(
                x,
                y,
                r.radius as f64 * 0.7,
                2.0,
                &rgba(DEEP_RGB, r.opacity * 0.6),
            );
        }
        if r.radius > 30.0 {
            self.stroke_ring(
                x,
                y,
                r.radius as f64 * 0.85,
                1.5,
                &rgba(MIST_RGB, r.opacity * 0.4),
            );
        }
    }

    fn stroke_ring(&self, x: f64, y: f64, radius: f64, width: f64, color: &str) {
        if radius <= 0.0 {
            return;
        }
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn paint_glow_dot(&self, x: f32, y: f32, size: f32, opacity: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x as f64, y as f64, size as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&rgba(FOAM_RGB, opacity));
        self.ctx.fill();
        self.ctx.set_shadow_blur(15.0);
        self.ctx.set_shadow_color(&rgba(FOAM_RGB, 0.8));
    }

    fn paint_trail_dot(&self, x: f32, y: f32, size: f32, life: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x as f64, y as f64, size as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&rgba(FOAM_RGB, life.clamp(0.0, 1.0) * 0.5));
        self.ctx.fill();
    }

    /// Faint lines between nearby particles, capped per particle so dense
    /// pools stay cheap.
    fn paint_links(&self, scene: &Scene) {
        let dots: Vec<_> = scene
            .entities()
            .iter()
            .filter(|e| matches!(e.kind(), EntityKind::Ambient | EntityKind::Seeker))
            .map(|e| e.position())
            .collect();

        self.ctx.set_line_width(0.8);
        for (i, a) in dots.iter().enumerate() {
            let mut links = 0usize;
            for b in dots.iter().skip(i + 1) {
                if links >= MAX_LINKS_PER_PARTICLE {
                    break;
                }
                let dist = (*a - *b).length();
                if dist < LINK_DISTANCE_PX {
                    let alpha = LINK_BASE_ALPHA * (1.0 - dist / LINK_DISTANCE_PX);
                    self.ctx.begin_path();
                    self.ctx.move_to(a.x as f64, a.y as f64);
                    self.ctx.line_to(b.x as f64, b.y as f64);
                    self.ctx.set_stroke_style_str(&rgba(FOAM_RGB, alpha));
                    self.ctx.stroke();
                    links += 1;
                }
            }
        }
    }
}
