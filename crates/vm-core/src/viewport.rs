//! Viewport controller: pan offset, zoom level, and the screen frame.

use crate::model::{ScreenPoint, WorldPoint};
use crate::transform::screen_to_world;

/// Lower zoom bound.
pub const MIN_ZOOM: f32 = 0.1;
/// Upper zoom bound.
pub const MAX_ZOOM: f32 = 10.0;
/// Size substituted for a non-positive frame dimension on init.
pub const MIN_FRAME_SIZE: i32 = 300;

/// The drawable area in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Frame {
    /// Build a frame from untrusted host dimensions. Each side is raised
    /// to at least `MIN_FRAME_SIZE`.
    pub fn clamped(width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            log::warn!(
                "invalid canvas dimensions {width}x{height}, falling back to minimum {MIN_FRAME_SIZE}"
            );
        }
        Self {
            width: width.max(MIN_FRAME_SIZE),
            height: height.max(MIN_FRAME_SIZE),
        }
    }

    /// Update the dimensions. Returns `false` (and leaves the frame alone)
    /// if either side is non-positive.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if width <= 0 || height <= 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        log::debug!("frame resized to {width}x{height}");
        true
    }

    /// Half of each dimension, as float (the world-origin offset).
    pub fn half_extent(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Center pixel, truncated.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2, self.height / 2)
    }
}

/// Pan offset (world units) and zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// World point shown at the frame center.
    pub pan: WorldPoint,
    /// Always within `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: WorldPoint::new(0.0, 0.0),
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Zoom around the frame center.
    pub fn set_zoom(&mut self, factor: f32, frame: Frame) {
        let c = frame.center();
        self.zoom_at_point(factor, c.x, c.y, frame);
    }

    /// Set the zoom level so the world point under `(sx, sy)` stays under
    /// it. Non-positive or non-finite factors are ignored.
    pub fn zoom_at_point(&mut self, factor: f32, sx: i32, sy: i32, frame: Frame) {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("ignoring zoom factor {factor}");
            return;
        }

        let anchor = ScreenPoint::new(sx, sy);
        let before = screen_to_world(anchor, self, frame);
        self.zoom = factor.clamp(MIN_ZOOM, MAX_ZOOM);
        let after = screen_to_world(anchor, self, frame);

        self.pan.x += before.x - after.x;
        self.pan.y += before.y - after.y;
        log::debug!(
            "zoom {:.3} at ({sx}, {sy}), pan now ({:.2}, {:.2})",
            self.zoom,
            self.pan.x,
            self.pan.y
        );
    }

    /// Multiply the current zoom, anchored at `(sx, sy)`.
    pub fn zoom_by(&mut self, multiplier: f32, sx: i32, sy: i32, frame: Frame) {
        self.zoom_at_point(self.zoom * multiplier, sx, sy, frame);
    }

    /// Pan by a screen-space delta. Dragging content right moves the view
    /// left, and the delta is divided by zoom so the content tracks the
    /// pointer at every zoom level.
    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.pan.x -= dx as f32 / self.zoom;
        self.pan.y -= dy as f32 / self.zoom;
    }

    /// Back to zoom 1 centered on the world origin.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FRAME: Frame = Frame {
        width: 800,
        height: 600,
    };

    fn assert_close(a: WorldPoint, b: WorldPoint) {
        assert!(
            (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn zoom_clamps_high_and_low() {
        let mut vp = Viewport::default();
        vp.zoom_at_point(100.0, 10, 10, FRAME);
        assert_eq!(vp.zoom, MAX_ZOOM);
        vp.zoom_at_point(0.001, 10, 10, FRAME);
        assert_eq!(vp.zoom, MIN_ZOOM);
    }

    #[test]
    fn invalid_factor_keeps_previous_state() {
        let mut vp = Viewport {
            pan: WorldPoint::new(5.0, 6.0),
            zoom: 2.0,
        };
        let before = vp;
        vp.zoom_at_point(0.0, 100, 100, FRAME);
        vp.zoom_at_point(-3.0, 100, 100, FRAME);
        vp.zoom_at_point(f32::NAN, 100, 100, FRAME);
        vp.zoom_at_point(f32::INFINITY, 100, 100, FRAME);
        assert_eq!(vp, before);
    }

    #[test]
    fn zoom_keeps_cursor_anchor() {
        let mut vp = Viewport::default();
        let cursor = ScreenPoint::new(650, 120);
        for factor in [2.0, 0.5, 7.25, 0.1, 10.0, 50.0, 1.0] {
            let w0 = screen_to_world(cursor, &vp, FRAME);
            vp.zoom_at_point(factor, cursor.x, cursor.y, FRAME);
            assert_close(screen_to_world(cursor, &vp, FRAME), w0);
        }
    }

    #[test]
    fn set_zoom_anchors_at_center() {
        let mut vp = Viewport {
            pan: WorldPoint::new(30.0, -10.0),
            zoom: 1.0,
        };
        vp.set_zoom(4.0, FRAME);
        assert_eq!(vp.zoom, 4.0);
        assert_close(vp.pan, WorldPoint::new(30.0, -10.0));
    }

    #[test]
    fn pan_is_scale_corrected() {
        let mut vp = Viewport {
            pan: WorldPoint::new(0.0, 0.0),
            zoom: 2.0,
        };
        vp.pan_by(10, 0);
        assert_eq!(vp.pan, WorldPoint::new(-5.0, 0.0));
        vp.pan_by(0, -8);
        assert_eq!(vp.pan, WorldPoint::new(-5.0, 4.0));
    }

    #[test]
    fn zoom_by_multiplies() {
        let mut vp = Viewport::default();
        vp.zoom_by(2.0, 400, 300, FRAME);
        vp.zoom_by(2.0, 400, 300, FRAME);
        assert_eq!(vp.zoom, 4.0);
    }

    #[test]
    fn frame_resize_rejects_non_positive() {
        let mut f = FRAME;
        assert!(!f.resize(0, 100));
        assert!(!f.resize(100, -1));
        assert_eq!(f, FRAME);
        assert!(f.resize(1024, 768));
        assert_eq!(
            f,
            Frame {
                width: 1024,
                height: 768
            }
        );
    }

    #[test]
    fn frame_clamped_substitutes_minimum() {
        assert_eq!(
            Frame::clamped(0, -20),
            Frame {
                width: 300,
                height: 300
            }
        );
        assert_eq!(
            Frame::clamped(1200, 100),
            Frame {
                width: 1200,
                height: 300
            }
        );
    }
}
