//! WASM bridge for VectorMate — exposes the canvas engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the
//! `<canvas>` element and the event listeners; it forwards raw pointer,
//! wheel, key and resize events here and calls `render` once per animation
//! frame.

mod render2d;

use render2d::Canvas2dSurface;
use vm_core::model::{Color, Shape};
use vm_core::settings::CanvasSettings;
use vm_editor::CanvasState;
use vm_editor::shortcuts::{ShortcutMap, action_name};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The WASM-facing canvas controller. All interaction from JS goes
/// through this struct.
#[wasm_bindgen]
pub struct VmCanvas {
    state: CanvasState,
}

#[wasm_bindgen]
impl VmCanvas {
    /// Create an empty canvas. Non-positive dimensions fall back to the
    /// minimum size. Hosts call `initialize` next to get the demo scene.
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32) -> Self {
        console_error_panic_hook_setup();
        init_logging();

        Self {
            state: CanvasState::new(width, height),
        }
    }

    /// Tear down all state (shapes, view, settings, pointer session) and
    /// start over at the given size with the three demo rectangles.
    pub fn initialize(&mut self, width: i32, height: i32) {
        self.state.initialize(width, height);
        self.state.seed_demo_shapes();
    }

    /// Remove every shape, keeping view and settings.
    pub fn clear_shapes(&mut self) {
        self.state.store = Default::default();
    }

    /// Render one frame to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let frame = self.state.frame;
        let mut surface = Canvas2dSurface::new(ctx, frame.width, frame.height);
        self.state.render_frame(&mut surface);
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Handle pointer down. `button` is the DOM `MouseEvent.button` code.
    /// Returns true if the canvas needs a repaint.
    pub fn on_pointer_down(&mut self, x: i32, y: i32, button: i32) -> bool {
        self.state.on_pointer_down(x, y, button)
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> bool {
        self.state.on_pointer_move(x, y)
    }

    pub fn on_pointer_up(&mut self, x: i32, y: i32, button: i32) -> bool {
        self.state.on_pointer_up(x, y, button)
    }

    /// Handle a wheel event at `(x, y)`; `delta_y < 0` zooms in.
    pub fn on_wheel(&mut self, x: i32, y: i32, delta_y: f32) -> bool {
        self.state.on_wheel(x, y, delta_y)
    }

    /// Handle a key press. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`
    pub fn on_key_down(&mut self, key: &str) -> String {
        let Some(action) = ShortcutMap::resolve(key) else {
            return r#"{"changed":false,"action":"none"}"#.to_string();
        };
        let changed = self.state.dispatch_action(action);
        let name = action_name(action);
        format!(r#"{{"changed":{changed},"action":"{name}"}}"#)
    }

    /// Resize the canvas. Returns false (and keeps the old size) for
    /// non-positive dimensions.
    pub fn on_resize(&mut self, width: i32, height: i32) -> bool {
        self.state.on_resize(width, height)
    }

    // ─── View ────────────────────────────────────────────────────────────

    /// Zoom around the canvas center.
    pub fn set_zoom(&mut self, factor: f32) {
        self.state.set_zoom(factor);
    }

    /// Zoom keeping the world point under `(x, y)` fixed on screen.
    pub fn zoom_at_point(&mut self, factor: f32, x: i32, y: i32) {
        self.state.zoom_at_point(factor, x, y);
    }

    pub fn get_zoom(&self) -> f32 {
        self.state.viewport.zoom
    }

    pub fn get_pan_x(&self) -> f32 {
        self.state.viewport.pan.x
    }

    pub fn get_pan_y(&self) -> f32 {
        self.state.viewport.pan.y
    }

    // ─── Settings ────────────────────────────────────────────────────────

    pub fn set_background_color(&mut self, r: i32, g: i32, b: i32, a: i32) {
        self.state.set_background_color(r, g, b, a);
    }

    /// Grid visibility and spacing (world units, minimum 5).
    pub fn set_grid_settings(&mut self, show: bool, size: i32) {
        self.state.set_grid_settings(show, size, None);
    }

    /// Like `set_grid_settings`, also setting the line color.
    pub fn set_grid_settings_with_color(
        &mut self,
        show: bool,
        size: i32,
        r: i32,
        g: i32,
        b: i32,
        a: i32,
    ) {
        self.state
            .set_grid_settings(show, size, Some(Color::from_ints(r, g, b, a)));
    }

    /// Current settings as JSON.
    pub fn settings_json(&self) -> String {
        self.state.settings.to_json()
    }

    /// Replace all settings from JSON. Returns false (keeping the current
    /// settings) if the JSON doesn't parse.
    pub fn set_settings_json(&mut self, json: &str) -> bool {
        match CanvasSettings::from_json(json) {
            Ok(settings) => {
                self.state.settings = settings;
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    // ─── Shapes ──────────────────────────────────────────────────────────

    /// Add a rectangle (world coordinates). Returns its index.
    #[allow(clippy::too_many_arguments)]
    pub fn add_rectangle(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        r: i32,
        g: i32,
        b: i32,
        a: i32,
    ) -> usize {
        let color = Color::from_ints(r, g, b, a);
        self.state
            .add_shape(Shape::rectangle(x, y, width, height, color))
    }

    /// Add a circle inscribed in the given box (world coordinates).
    #[allow(clippy::too_many_arguments)]
    pub fn add_circle(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        r: i32,
        g: i32,
        b: i32,
        a: i32,
    ) -> usize {
        let color = Color::from_ints(r, g, b, a);
        self.state.add_shape(Shape::circle(x, y, width, height, color))
    }

    /// Index of the selected shape, or -1.
    pub fn get_selected_index(&self) -> i32 {
        self.state
            .selected_index()
            .map(|i| i as i32)
            .unwrap_or(-1)
    }

    /// All shapes, back-to-front, as a JSON array.
    pub fn shapes_json(&self) -> String {
        serde_json::to_string(self.state.store.as_slice()).unwrap_or_else(|_| "[]".to_string())
    }
}

// ─── Logging ─────────────────────────────────────────────────────────────

/// Routes `log` records to the browser console.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&msg),
            log::Level::Warn => web_sys::console::warn_1(&msg),
            log::Level::Info => web_sys::console::info_1(&msg),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
    }
}

/// Raise console verbosity, e.g. `set_log_level("debug")` from devtools.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => false,
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("VectorMate WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
