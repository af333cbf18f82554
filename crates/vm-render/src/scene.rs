//! Vello backend: records a frame into a `vello::Scene`.
//!
//! The caller owns the wgpu device/surface and submits the scene with
//! `vello::Renderer`; `present` here is a no-op.

use crate::paint::Surface;
use kurbo::{Affine, Ellipse, Line, Rect, Stroke};
use peniko::{Color as PenikoColor, Fill};
use vello::Scene;
use vm_core::Frame;
use vm_core::model::{Color, ScreenPoint, ScreenRect};

pub struct VelloSurface {
    pub scene: Scene,
    frame: Frame,
}

impl VelloSurface {
    pub fn new(frame: Frame) -> Self {
        Self {
            scene: Scene::new(),
            frame,
        }
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl Surface for VelloSurface {
    fn clear(&mut self, color: Color) {
        self.scene.reset();
        let bg = Rect::new(0.0, 0.0, self.frame.width as f64, self.frame.height as f64);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &bg);
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        // Half-pixel offset keeps 1px lines crisp on the pixel grid.
        let line = Line::new(
            (from.x as f64 + 0.5, from.y as f64 + 0.5),
            (to.x as f64 + 0.5, to.y as f64 + 0.5),
        );
        self.scene
            .stroke(&Stroke::new(1.0), Affine::IDENTITY, to_peniko(color), None, &line);
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &to_kurbo(rect),
        );
    }

    fn fill_ellipse(&mut self, rect: ScreenRect, color: Color) {
        let ellipse = Ellipse::from_rect(to_kurbo(rect));
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &ellipse);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn to_kurbo(r: ScreenRect) -> Rect {
    let (x, y) = (r.x as f64, r.y as f64);
    Rect::new(x, y, x + r.w as f64, y + r.h as f64)
}

fn to_peniko(c: Color) -> PenikoColor {
    PenikoColor::from_rgba8(c.r, c.g, c.b, c.a)
}
