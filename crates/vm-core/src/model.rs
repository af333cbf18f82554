//! Core data model for the VectorMate canvas.
//!
//! Shapes live in *world* space (f32, origin at the middle of the screen at
//! zoom 1). Everything the host sees is in *screen* space (i32 pixels).
//! The two spaces get separate point/rect types so a value can't silently
//! cross the boundary without going through `transform`.

use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Self = Self::rgba(255, 0, 0, 255);
    pub const GREEN: Self = Self::rgba(0, 255, 0, 255);
    pub const BLUE: Self = Self::rgba(0, 0, 255, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from host-supplied integers, clamping each channel
    /// into `0..=255`.
    pub fn from_ints(r: i32, g: i32, b: i32, a: i32) -> Self {
        let ch = |v: i32| v.clamp(0, 255) as u8;
        Self::rgba(ch(r), ch(g), ch(b), ch(a))
    }

    /// Next color in the red → green → blue cycle. Anything that isn't
    /// one of the three primaries restarts the cycle at red.
    pub fn cycle_primary(self) -> Self {
        if self == Self::RED {
            Self::GREEN
        } else if self == Self::GREEN {
            Self::BLUE
        } else {
            Self::RED
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A point in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WorldRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: WorldPoint) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A pixel position on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A pixel rectangle on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// The four corners, clockwise from top-left. Coordinates saturate at
    /// the `i32` range for rects that extend past it.
    pub fn corners(&self) -> [ScreenPoint; 4] {
        [
            ScreenPoint::new(self.x, self.y),
            ScreenPoint::new(self.right(), self.y),
            ScreenPoint::new(self.right(), self.bottom()),
            ScreenPoint::new(self.x, self.bottom()),
        ]
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────

/// Shape variants. Geometry beyond the bounding box is per-variant; hit
/// testing currently uses the bounding box for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    /// Ellipse inscribed in the bounding box.
    Circle,
}

impl ShapeKind {
    /// Whether a world point lies on this kind of shape with the given bounds.
    pub fn contains(self, bounds: &WorldRect, p: WorldPoint) -> bool {
        match self {
            ShapeKind::Rectangle | ShapeKind::Circle => bounds.contains(p),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

/// A drawable shape. Its identity is its index in the `ShapeStore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub bounds: WorldRect,
    pub color: Color,
    #[serde(default)]
    pub selected: bool,
}

impl Shape {
    pub fn new(kind: ShapeKind, bounds: WorldRect, color: Color) -> Self {
        Self {
            kind,
            bounds,
            color,
            selected: false,
        }
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self::new(ShapeKind::Rectangle, WorldRect::new(x, y, width, height), color)
    }

    pub fn circle(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self::new(ShapeKind::Circle, WorldRect::new(x, y, width, height), color)
    }

    pub fn contains(&self, p: WorldPoint) -> bool {
        self.kind.contains(&self.bounds, p)
    }
}
