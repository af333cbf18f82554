//! Shape store + viewport → backend draw calls.
//!
//! `paint_frame` is backend-agnostic: it computes screen geometry and hands
//! primitive calls to a `Surface`. Backends (Vello scene, Canvas2D in the
//! WASM bridge, the in-memory `DrawList`) only rasterize.

use vm_core::model::{Color, ScreenPoint, ScreenRect, Shape, ShapeKind, WorldPoint};
use vm_core::settings::CanvasSettings;
use vm_core::{Frame, ShapeStore, Viewport, visible_world_rect, world_point_to_screen, world_to_screen};

/// Side length of a selection handle, in pixels.
pub const HANDLE_SIZE: i32 = 8;
pub const HANDLE_COLOR: Color = Color::rgba(0, 100, 255, 255);
/// Grid lines closer together than this (in pixels) are not drawn.
pub const MIN_GRID_SPACING_PX: f32 = 5.0;

/// A draw-call sink.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color);
    fn fill_rect(&mut self, rect: ScreenRect, color: Color);
    /// Fill the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: ScreenRect, color: Color);
    fn present(&mut self) {}
}

/// Paint one complete frame: background, grid, shapes back-to-front with
/// handles on the selected one, then present.
pub fn paint_frame<S: Surface + ?Sized>(
    surface: &mut S,
    store: &ShapeStore,
    viewport: &Viewport,
    frame: Frame,
    settings: &CanvasSettings,
) {
    surface.clear(settings.background);

    if settings.grid.show {
        paint_grid(surface, viewport, frame, settings);
    }

    for shape in store {
        let screen = world_to_screen(shape.bounds, viewport, frame);
        paint_shape(surface, shape, screen);
        if shape.selected {
            paint_selection_handles(surface, screen);
        }
    }

    surface.present();
}

// ─── Shapes ──────────────────────────────────────────────────────────────

fn paint_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape, screen: ScreenRect) {
    log::trace!("PAINT {} at {:?}", shape.kind.name(), screen);
    match shape.kind {
        ShapeKind::Rectangle => surface.fill_rect(screen, shape.color),
        ShapeKind::Circle => surface.fill_ellipse(screen, shape.color),
    }
}

/// Square handles centered on each corner of `rect`.
pub fn selection_handles(rect: ScreenRect) -> [ScreenRect; 4] {
    let half = HANDLE_SIZE / 2;
    rect.corners().map(|c| {
        ScreenRect::new(
            c.x.saturating_sub(half),
            c.y.saturating_sub(half),
            HANDLE_SIZE,
            HANDLE_SIZE,
        )
    })
}

fn paint_selection_handles<S: Surface + ?Sized>(surface: &mut S, rect: ScreenRect) {
    for handle in selection_handles(rect) {
        surface.fill_rect(handle, HANDLE_COLOR);
    }
}

// ─── Grid ────────────────────────────────────────────────────────────────

/// Screen positions of the visible grid lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLines {
    /// x of each vertical line.
    pub vertical: Vec<i32>,
    /// y of each horizontal line.
    pub horizontal: Vec<i32>,
}

/// Compute grid lines aligned to world multiples of `size`, covering the
/// visible area. Empty when the lines would be denser than
/// `MIN_GRID_SPACING_PX` on screen.
pub fn grid_lines(viewport: &Viewport, frame: Frame, size: i32) -> GridLines {
    if size <= 0 || (size as f32) * viewport.zoom < MIN_GRID_SPACING_PX {
        return GridLines::default();
    }

    let visible = visible_world_rect(viewport, frame);
    let step = size as f32;
    let cols = (visible.x / step).floor() as i64..=(visible.right() / step).ceil() as i64;
    let rows = (visible.y / step).floor() as i64..=(visible.bottom() / step).ceil() as i64;

    let vertical = cols
        .map(|k| world_point_to_screen(WorldPoint::new(k as f32 * step, 0.0), viewport, frame).x)
        .collect();
    let horizontal = rows
        .map(|k| world_point_to_screen(WorldPoint::new(0.0, k as f32 * step), viewport, frame).y)
        .collect();

    GridLines {
        vertical,
        horizontal,
    }
}

fn paint_grid<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &Viewport,
    frame: Frame,
    settings: &CanvasSettings,
) {
    let lines = grid_lines(viewport, frame, settings.grid.size);
    let color = settings.grid.color;
    for x in lines.vertical {
        surface.line(ScreenPoint::new(x, 0), ScreenPoint::new(x, frame.height), color);
    }
    for y in lines.horizontal {
        surface.line(ScreenPoint::new(0, y), ScreenPoint::new(frame.width, y), color);
    }
}

// ─── In-memory surface ───────────────────────────────────────────────────

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Clear(Color),
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
    },
    FillRect {
        rect: ScreenRect,
        color: Color,
    },
    FillEllipse {
        rect: ScreenRect,
        color: Color,
    },
    Present,
}

/// A `Surface` that records calls instead of rasterizing. Used for
/// headless hosts and for checking paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCmd::Clear(color));
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.commands.push(DrawCmd::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        self.commands.push(DrawCmd::FillRect { rect, color });
    }

    fn fill_ellipse(&mut self, rect: ScreenRect, color: Color) {
        self.commands.push(DrawCmd::FillEllipse { rect, color });
    }

    fn present(&mut self) {
        self.commands.push(DrawCmd::Present);
    }
}
