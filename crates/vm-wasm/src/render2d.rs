//! Canvas2D surface.
//!
//! Rasterizes `paint_frame` draw calls onto an HTML `<canvas>` via
//! `CanvasRenderingContext2d`.

use std::f64::consts::TAU;
use vm_core::model::{Color, ScreenPoint, ScreenRect};
use vm_render::paint::Surface;
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> Canvas2dSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: i32, height: i32) -> Self {
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }
}

impl Surface for Canvas2dSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        // Solid lines for the grid, whatever the host left behind.
        let _ = self.ctx.set_line_dash(&js_sys::Array::new());
        self.ctx.set_line_width(1.0);
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        let ctx = self.ctx;
        ctx.set_stroke_style_str(&css_color(color));
        ctx.begin_path();
        // +0.5 centers a 1px line on the pixel instead of straddling two.
        ctx.move_to(from.x as f64 + 0.5, from.y as f64 + 0.5);
        ctx.line_to(to.x as f64 + 0.5, to.y as f64 + 0.5);
        ctx.stroke();
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_ellipse(&mut self, rect: ScreenRect, color: Color) {
        let rx = rect.w as f64 / 2.0;
        let ry = rect.h as f64 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let ctx = self.ctx;
        ctx.set_fill_style_str(&css_color(color));
        ctx.begin_path();
        let _ = ctx.ellipse(rect.x as f64 + rx, rect.y as f64 + ry, rx, ry, 0.0, 0.0, TAU);
        ctx.fill();
    }
}

/// CSS `rgba()` string for a color.
pub fn css_color(c: Color) -> String {
    format!("rgba({}, {}, {}, {:.3})", c.r, c.g, c.b, c.a as f64 / 255.0)
}
