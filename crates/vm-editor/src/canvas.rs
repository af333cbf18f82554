//! `CanvasState`: the explicitly owned canvas instance.
//!
//! Holds the shape store, viewport, frame, appearance settings and the
//! pointer session. Every host-facing operation goes through here; none of
//! them can fail. Bad input is clamped or ignored.

use crate::input::InputEvent;
use crate::interaction::{CanvasMutation, GestureState, Interaction};
use crate::shortcuts::{KEY_ZOOM_STEP, ShortcutAction, ShortcutMap};
use vm_core::model::{Color, ScreenPoint, Shape, WorldPoint};
use vm_core::settings::CanvasSettings;
use vm_core::{Frame, ShapeStore, Viewport, screen_to_world};
use vm_render::hit::hit_test;
use vm_render::paint::{Surface, paint_frame};

#[derive(Debug, Clone)]
pub struct CanvasState {
    pub store: ShapeStore,
    pub viewport: Viewport,
    pub frame: Frame,
    pub settings: CanvasSettings,
    interaction: Interaction,
}

impl Default for CanvasState {
    fn default() -> Self {
        let frame = Frame::default();
        Self::new(frame.width, frame.height)
    }
}

impl CanvasState {
    /// Create an empty canvas. Dimensions below the minimum are raised to it.
    pub fn new(width: i32, height: i32) -> Self {
        let frame = Frame::clamped(width, height);
        log::debug!("canvas created at {}x{}", frame.width, frame.height);
        Self {
            store: ShapeStore::new(),
            viewport: Viewport::default(),
            frame,
            settings: CanvasSettings::default(),
            interaction: Interaction::new(),
        }
    }

    /// Create a canvas pre-populated with the demo scene.
    pub fn with_demo_shapes(width: i32, height: i32) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.seed_demo_shapes();
        canvas
    }

    /// Tear down everything and start over at the given size.
    pub fn initialize(&mut self, width: i32, height: i32) {
        *self = Self::new(width, height);
    }

    /// Three rectangles around the world origin.
    pub fn seed_demo_shapes(&mut self) {
        self.store
            .add(Shape::rectangle(-50.0, -50.0, 100.0, 100.0, Color::RED));
        self.store
            .add(Shape::rectangle(100.0, 100.0, 80.0, 120.0, Color::GREEN));
        self.store
            .add(Shape::rectangle(-200.0, 80.0, 150.0, 50.0, Color::BLUE));
    }

    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.store.add(shape)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Emit one full frame into `surface`.
    pub fn render_frame<S: Surface + ?Sized>(&self, surface: &mut S) {
        paint_frame(surface, &self.store, &self.viewport, self.frame, &self.settings);
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Returns `true` if anything visible changed.
    pub fn on_pointer_down(&mut self, x: i32, y: i32, button: i32) -> bool {
        self.handle_event(&InputEvent::from_pointer_down(x, y, button))
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> bool {
        self.handle_event(&InputEvent::from_pointer_move(x, y))
    }

    pub fn on_pointer_up(&mut self, x: i32, y: i32, button: i32) -> bool {
        self.handle_event(&InputEvent::from_pointer_up(x, y, button))
    }

    pub fn on_wheel(&mut self, x: i32, y: i32, delta_y: f32) -> bool {
        self.handle_event(&InputEvent::Wheel { x, y, delta_y })
    }

    pub fn on_key_down(&mut self, key: &str) -> bool {
        match ShortcutMap::resolve(key) {
            Some(action) => self.dispatch_action(action),
            None => false,
        }
    }

    /// Route a normalized event through the interaction state machine.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key { key } = event {
            return self.on_key_down(key);
        }

        let hit = match event {
            InputEvent::PointerDown { x, y, .. } => hit_test(&self.store, self.screen_to_world(*x, *y)),
            _ => None,
        };
        let mutations = self.interaction.handle(event, hit, self.viewport.zoom);
        self.apply_mutations(mutations)
    }

    fn apply_mutations(&mut self, mutations: Vec<CanvasMutation>) -> bool {
        if mutations.is_empty() {
            return false;
        }
        for mutation in mutations {
            match mutation {
                CanvasMutation::DeselectAll => self.store.deselect_all(),
                CanvasMutation::Select { index } => {
                    self.store.select(index);
                }
                CanvasMutation::MoveShape { index, dx, dy } => self.store.translate(index, dx, dy),
                CanvasMutation::Pan { dx, dy } => self.viewport.pan_by(dx, dy),
                CanvasMutation::ZoomBy { multiplier, x, y } => {
                    self.viewport.zoom_by(multiplier, x, y, self.frame)
                }
            }
        }
        true
    }

    /// Apply a shortcut action. Returns `true` if anything visible changed.
    pub fn dispatch_action(&mut self, action: ShortcutAction) -> bool {
        log::debug!("shortcut {action:?}");
        match action {
            ShortcutAction::ToggleGrid => {
                self.settings.toggle_grid();
                true
            }
            ShortcutAction::ZoomIn => {
                let c = self.frame.center();
                self.viewport.zoom_by(KEY_ZOOM_STEP, c.x, c.y, self.frame);
                true
            }
            ShortcutAction::ZoomOut => {
                let c = self.frame.center();
                self.viewport.zoom_by(1.0 / KEY_ZOOM_STEP, c.x, c.y, self.frame);
                true
            }
            ShortcutAction::ResetView => {
                self.viewport.reset();
                true
            }
            ShortcutAction::Deselect => {
                let had_selection = self.store.selected_index().is_some();
                self.store.deselect_all();
                self.interaction.clear_selection();
                had_selection
            }
            ShortcutAction::Nudge { dx, dy } => match self.store.selected_index() {
                Some(index) => {
                    self.store.translate(index, dx, dy);
                    true
                }
                None => false,
            },
            ShortcutAction::CycleColor => match self.store.selected_index() {
                Some(index) => {
                    if let Some(shape) = self.store.get_mut(index) {
                        shape.color = shape.color.cycle_primary();
                    }
                    true
                }
                None => false,
            },
        }
    }

    // ─── Viewport / configuration ────────────────────────────────────────

    /// Resize the frame. Non-positive sizes are ignored; pan and zoom are
    /// left as they are.
    pub fn on_resize(&mut self, width: i32, height: i32) -> bool {
        let resized = self.frame.resize(width, height);
        if !resized {
            log::warn!("ignoring resize to {width}x{height}");
        }
        resized
    }

    pub fn set_zoom(&mut self, factor: f32) {
        self.viewport.set_zoom(factor, self.frame);
    }

    pub fn zoom_at_point(&mut self, factor: f32, x: i32, y: i32) {
        self.viewport.zoom_at_point(factor, x, y, self.frame);
    }

    pub fn set_background_color(&mut self, r: i32, g: i32, b: i32, a: i32) {
        self.settings.set_background(r, g, b, a);
    }

    pub fn set_grid_settings(&mut self, show: bool, size: i32, color: Option<Color>) {
        self.settings.set_grid(show, size, color);
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn screen_to_world(&self, x: i32, y: i32) -> WorldPoint {
        screen_to_world(ScreenPoint::new(x, y), &self.viewport, self.frame)
    }

    pub fn gesture(&self) -> GestureState {
        self.interaction.state()
    }

    /// Index recorded by the last primary press.
    pub fn selected_index(&self) -> Option<usize> {
        self.interaction.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vm_core::model::WorldRect;

    #[test]
    fn new_clamps_small_frames() {
        let c = CanvasState::new(0, -1);
        assert_eq!(
            c.frame,
            Frame {
                width: 300,
                height: 300
            }
        );
    }

    #[test]
    fn initialize_resets_everything() {
        let mut c = CanvasState::with_demo_shapes(800, 600);
        c.set_zoom(3.0);
        c.on_pointer_down(400, 300, 0);
        c.set_background_color(1, 2, 3, 4);

        c.initialize(1024, 768);
        assert!(c.store.is_empty());
        assert_eq!(c.viewport, Viewport::default());
        assert_eq!(c.settings, CanvasSettings::default());
        assert_eq!(c.gesture(), GestureState::Idle);
        assert_eq!(c.selected_index(), None);
        assert_eq!(
            c.frame,
            Frame {
                width: 1024,
                height: 768
            }
        );
    }

    #[test]
    fn nudge_and_color_cycle_need_selection() {
        let mut c = CanvasState::with_demo_shapes(800, 600);
        assert!(!c.on_key_down("ArrowLeft"));
        assert!(!c.on_key_down(" "));

        c.on_pointer_down(400, 300, 0);
        c.on_pointer_up(400, 300, 0);
        assert!(c.on_key_down("ArrowLeft"));
        assert!(c.on_key_down("ArrowDown"));
        assert!(c.on_key_down(" "));
        let shape = c.store.get(0).unwrap();
        assert_eq!(shape.bounds, WorldRect::new(-60.0, -40.0, 100.0, 100.0));
        assert_eq!(shape.color, Color::GREEN);
    }

    #[test]
    fn escape_clears_selection() {
        let mut c = CanvasState::with_demo_shapes(800, 600);
        c.on_pointer_down(400, 300, 0);
        c.on_pointer_up(400, 300, 0);
        assert!(c.on_key_down("Escape"));
        assert_eq!(c.store.selected_index(), None);
        assert_eq!(c.selected_index(), None);
        assert!(!c.on_key_down("Escape"));
    }

    #[test]
    fn zoom_keys_and_reset() {
        let mut c = CanvasState::new(800, 600);
        c.on_key_down("+");
        assert!((c.viewport.zoom - KEY_ZOOM_STEP).abs() < 1e-6);
        c.on_key_down("-");
        assert!((c.viewport.zoom - 1.0).abs() < 1e-6);
        c.viewport.pan_by(40, 40);
        c.on_key_down("0");
        assert_eq!(c.viewport, Viewport::default());
    }

    #[test]
    fn grid_key_toggles_setting() {
        let mut c = CanvasState::new(800, 600);
        assert!(c.settings.grid.show);
        assert!(c.on_key_down("g"));
        assert!(!c.settings.grid.show);
        assert!(!c.on_key_down("Tab"));
    }

    #[test]
    fn key_event_routes_through_handle_event() {
        let mut c = CanvasState::new(800, 600);
        assert!(c.handle_event(&InputEvent::Key {
            key: "G".to_string()
        }));
        assert!(!c.settings.grid.show);
    }

    #[test]
    fn resize_keeps_view() {
        let mut c = CanvasState::new(800, 600);
        c.set_zoom(2.0);
        let vp = c.viewport;
        assert!(c.on_resize(1000, 500));
        assert!(!c.on_resize(0, 500));
        assert_eq!(c.viewport, vp);
        assert_eq!(
            c.frame,
            Frame {
                width: 1000,
                height: 500
            }
        );
    }
}
