//! Screen ↔ world coordinate mapping.
//!
//! The frame center is the world origin at zoom 1 with zero pan. World
//! values stay in f32 the whole way through and are truncated to whole
//! pixels only when they cross into screen space.

use crate::model::{ScreenPoint, ScreenRect, WorldPoint, WorldRect};
use crate::viewport::{Frame, Viewport};

/// Map a screen pixel to the world point under it.
pub fn screen_to_world(p: ScreenPoint, viewport: &Viewport, frame: Frame) -> WorldPoint {
    let (cx, cy) = frame.half_extent();
    WorldPoint {
        x: (p.x as f32 - cx) / viewport.zoom + viewport.pan.x,
        y: (p.y as f32 - cy) / viewport.zoom + viewport.pan.y,
    }
}

/// Map a world rectangle to the pixel rectangle it covers.
pub fn world_to_screen(r: WorldRect, viewport: &Viewport, frame: Frame) -> ScreenRect {
    let (cx, cy) = frame.half_extent();
    ScreenRect {
        x: ((r.x - viewport.pan.x) * viewport.zoom + cx) as i32,
        y: ((r.y - viewport.pan.y) * viewport.zoom + cy) as i32,
        w: (r.width * viewport.zoom) as i32,
        h: (r.height * viewport.zoom) as i32,
    }
}

/// Map a single world point to its pixel.
pub fn world_point_to_screen(p: WorldPoint, viewport: &Viewport, frame: Frame) -> ScreenPoint {
    let r = world_to_screen(WorldRect::new(p.x, p.y, 0.0, 0.0), viewport, frame);
    ScreenPoint::new(r.x, r.y)
}

/// The world-space rectangle covered by the whole frame.
pub fn visible_world_rect(viewport: &Viewport, frame: Frame) -> WorldRect {
    let top_left = screen_to_world(ScreenPoint::new(0, 0), viewport, frame);
    let bottom_right = screen_to_world(ScreenPoint::new(frame.width, frame.height), viewport, frame);
    WorldRect {
        x: top_left.x,
        y: top_left.y,
        width: bottom_right.x - top_left.x,
        height: bottom_right.y - top_left.y,
    }
}
