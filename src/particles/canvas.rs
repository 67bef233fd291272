use anyhow::anyhow;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::field::{Painter, Particle};

pub fn context_2d(canvas: &HtmlCanvasElement) -> anyhow::Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Match the backing store to the laid-out size. Returns the new size.
pub fn sync_backing_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (width as f64, height as f64)
}

fn hsl(hue: f64, saturation: u8, lightness: u8) -> String {
    format!("hsl({:.0}, {}%, {}%)", hue, saturation, lightness)
}

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn filled_circle(&self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius.max(0.0), 0.0, PI * 2.0)?;
        self.ctx.fill();
        Ok(())
    }

    fn try_glow(&self, x: f64, y: f64, radius: f64, hue: f64, alpha: f64) -> Result<(), JsValue> {
        let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0))?;
        gradient.add_color_stop(0.0, &hsl(hue, 70, 60))?;
        gradient.add_color_stop(1.0, "transparent")?;
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        let drawn = self.filled_circle(x, y, radius);
        self.ctx.restore();
        drawn
    }

    fn try_link(&self, from: &Particle, to: &Particle, alpha: f64, width: f64) -> Result<(), JsValue> {
        let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
        gradient.add_color_stop(0.0, &hsl(from.hue, 70, 60))?;
        gradient.add_color_stop(1.0, &hsl(to.hue, 70, 60))?;
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        self.ctx.restore();
        Ok(())
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fade(&mut self, width: f64, height: f64, alpha: f64) {
        self.ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", alpha));
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn glow(&mut self, x: f64, y: f64, radius: f64, hue: f64, alpha: f64) {
        if let Err(e) = self.try_glow(x, y, radius, hue, alpha) {
            log::trace!("glow skipped: {:?}", e);
        }
    }

    fn dot(&mut self, x: f64, y: f64, radius: f64, hue: f64, alpha: f64) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_str(&hsl(hue, 90, 80));
        if let Err(e) = self.filled_circle(x, y, radius) {
            log::trace!("dot skipped: {:?}", e);
        }
        self.ctx.restore();
    }

    fn link(&mut self, from: &Particle, to: &Particle, alpha: f64, width: f64) {
        if let Err(e) = self.try_link(from, to, alpha, width) {
            log::trace!("link skipped: {:?}", e);
        }
    }
}
