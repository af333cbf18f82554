//! Keyboard shortcut mapping.
//!
//! Maps `KeyboardEvent.key` values to semantic `ShortcutAction`s. Keys the
//! host UI handles itself (tool panels, text inputs) never reach here.

/// World units moved per arrow-key press.
pub const NUDGE_STEP: f32 = 10.0;
/// Zoom multiplier for the zoom in/out keys.
pub const KEY_ZOOM_STEP: f32 = 1.2;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShortcutAction {
    // ── View ──
    ToggleGrid,
    ZoomIn,
    ZoomOut,
    ResetView,

    // ── Selection ──
    Deselect,
    /// Move the selected shape by a world-space step.
    Nudge { dx: f32, dy: f32 },
    /// Cycle the selected shape through red → green → blue.
    CycleColor,
}

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key to an action. Returns `None` for unbound keys.
    pub fn resolve(key: &str) -> Option<ShortcutAction> {
        match key {
            "g" | "G" => Some(ShortcutAction::ToggleGrid),
            "+" | "=" => Some(ShortcutAction::ZoomIn),
            "-" | "_" => Some(ShortcutAction::ZoomOut),
            "0" => Some(ShortcutAction::ResetView),
            "Escape" => Some(ShortcutAction::Deselect),
            " " => Some(ShortcutAction::CycleColor),
            "ArrowLeft" => Some(ShortcutAction::Nudge {
                dx: -NUDGE_STEP,
                dy: 0.0,
            }),
            "ArrowRight" => Some(ShortcutAction::Nudge {
                dx: NUDGE_STEP,
                dy: 0.0,
            }),
            "ArrowUp" => Some(ShortcutAction::Nudge {
                dx: 0.0,
                dy: -NUDGE_STEP,
            }),
            "ArrowDown" => Some(ShortcutAction::Nudge {
                dx: 0.0,
                dy: NUDGE_STEP,
            }),
            _ => None,
        }
    }
}

/// Short camelCase name for an action, as reported to the host.
pub fn action_name(action: ShortcutAction) -> &'static str {
    match action {
        ShortcutAction::ToggleGrid => "toggleGrid",
        ShortcutAction::ZoomIn => "zoomIn",
        ShortcutAction::ZoomOut => "zoomOut",
        ShortcutAction::ResetView => "resetView",
        ShortcutAction::Deselect => "deselect",
        ShortcutAction::Nudge { .. } => "nudge",
        ShortcutAction::CycleColor => "cycleColor",
    }
}
