//! Pointer interaction state machine.
//!
//! Translates pointer events into `CanvasMutation`s that `CanvasState`
//! applies to the shape store and viewport.
//!
//! | State      | Entered by              | Pointer move does             | Left by          |
//! |------------|-------------------------|-------------------------------|------------------|
//! | `Idle`     | start, gesture end      | nothing                       | press            |
//! | `Panning`  | middle press            | pans by the screen delta      | middle release   |
//! | `Dragging` | primary press on shape  | moves the shape, delta / zoom | primary release  |
//!
//! A press that arrives while a gesture is already running is ignored, so
//! pressing primary mid-pan (or middle mid-drag) can't start a second one.

use crate::input::{InputEvent, PointerButton};
use vm_core::model::ScreenPoint;

/// Zoom multiplier per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Panning,
    Dragging,
}

/// Edits produced by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasMutation {
    DeselectAll,
    Select { index: usize },
    /// Move a shape by a world-space delta.
    MoveShape { index: usize, dx: f32, dy: f32 },
    /// Pan by a screen-space delta.
    Pan { dx: i32, dy: i32 },
    /// Multiply zoom, anchored at a screen point.
    ZoomBy { multiplier: f32, x: i32, y: i32 },
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: GestureState,
    last_screen_pos: ScreenPoint,
    selected: Option<usize>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Shape picked by the last primary press, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn last_screen_pos(&self) -> ScreenPoint {
        self.last_screen_pos
    }

    /// Forget the current selection (the store is cleared separately).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Handle one event.
    ///
    /// `hit` is the topmost shape under a `PointerDown`, computed by the
    /// caller; `zoom` is the current zoom level, used to turn screen deltas
    /// into world deltas while dragging.
    pub fn handle(&mut self, event: &InputEvent, hit: Option<usize>, zoom: f32) -> Vec<CanvasMutation> {
        match *event {
            InputEvent::PointerDown { x, y, button } => self.pointer_down(x, y, button, hit),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y, zoom),
            InputEvent::PointerUp { button, .. } => {
                self.pointer_up(button);
                vec![]
            }
            InputEvent::Wheel { x, y, delta_y } => wheel(x, y, delta_y),
            InputEvent::Key { .. } => vec![],
        }
    }

    fn pointer_down(&mut self, x: i32, y: i32, button: PointerButton, hit: Option<usize>) -> Vec<CanvasMutation> {
        if self.state != GestureState::Idle {
            log::debug!("ignoring {button:?} press during {:?}", self.state);
            return vec![];
        }

        self.last_screen_pos = ScreenPoint::new(x, y);

        match button {
            PointerButton::Middle => {
                self.state = GestureState::Panning;
                log::debug!("pan start at ({x}, {y})");
                vec![]
            }
            PointerButton::Primary => {
                self.selected = hit;
                match hit {
                    Some(index) => {
                        self.state = GestureState::Dragging;
                        log::debug!("drag start on shape {index}");
                        vec![CanvasMutation::DeselectAll, CanvasMutation::Select { index }]
                    }
                    None => vec![CanvasMutation::DeselectAll],
                }
            }
            PointerButton::Secondary | PointerButton::Other(_) => vec![],
        }
    }

    fn pointer_move(&mut self, x: i32, y: i32, zoom: f32) -> Vec<CanvasMutation> {
        let dx = x.saturating_sub(self.last_screen_pos.x);
        let dy = y.saturating_sub(self.last_screen_pos.y);
        self.last_screen_pos = ScreenPoint::new(x, y);

        if dx == 0 && dy == 0 {
            return vec![];
        }

        match (self.state, self.selected) {
            (GestureState::Panning, _) => vec![CanvasMutation::Pan { dx, dy }],
            (GestureState::Dragging, Some(index)) => vec![CanvasMutation::MoveShape {
                index,
                dx: dx as f32 / zoom,
                dy: dy as f32 / zoom,
            }],
            _ => vec![],
        }
    }

    fn pointer_up(&mut self, button: PointerButton) {
        match (self.state, button) {
            (GestureState::Panning, PointerButton::Middle) => {
                log::debug!("pan end");
                self.state = GestureState::Idle;
            }
            (GestureState::Dragging, PointerButton::Primary) => {
                log::debug!("drag end");
                self.state = GestureState::Idle;
            }
            _ => {}
        }
    }
}

fn wheel(x: i32, y: i32, delta_y: f32) -> Vec<CanvasMutation> {
    let multiplier = if delta_y < 0.0 {
        WHEEL_ZOOM_STEP
    } else if delta_y > 0.0 {
        1.0 / WHEEL_ZOOM_STEP
    } else {
        return vec![];
    };
    vec![CanvasMutation::ZoomBy { multiplier, x, y }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn down(x: i32, y: i32, button: i32) -> InputEvent {
        InputEvent::from_pointer_down(x, y, button)
    }

    fn mv(x: i32, y: i32) -> InputEvent {
        InputEvent::from_pointer_move(x, y)
    }

    fn up(x: i32, y: i32, button: i32) -> InputEvent {
        InputEvent::from_pointer_up(x, y, button)
    }

    #[test]
    fn primary_press_on_shape_starts_drag() {
        let mut it = Interaction::new();
        let muts = it.handle(&down(10, 10, 0), Some(2), 1.0);
        assert_eq!(
            muts,
            vec![CanvasMutation::DeselectAll, CanvasMutation::Select { index: 2 }]
        );
        assert_eq!(it.state(), GestureState::Dragging);
        assert_eq!(it.selected(), Some(2));
    }

    #[test]
    fn primary_press_on_background_deselects() {
        let mut it = Interaction::new();
        it.handle(&down(10, 10, 0), Some(1), 1.0);
        it.handle(&up(10, 10, 0), None, 1.0);
        let muts = it.handle(&down(500, 500, 0), None, 1.0);
        assert_eq!(muts, vec![CanvasMutation::DeselectAll]);
        assert_eq!(it.state(), GestureState::Idle);
        assert_eq!(it.selected(), None);
    }

    #[test]
    fn drag_delta_is_divided_by_zoom() {
        let mut it = Interaction::new();
        it.handle(&down(100, 100, 0), Some(0), 2.0);
        let muts = it.handle(&mv(110, 100), None, 2.0);
        assert_eq!(
            muts,
            vec![CanvasMutation::MoveShape {
                index: 0,
                dx: 5.0,
                dy: 0.0
            }]
        );
    }

    #[test]
    fn middle_press_pans_with_screen_delta() {
        let mut it = Interaction::new();
        assert!(it.handle(&down(50, 50, 1), None, 2.0).is_empty());
        assert_eq!(it.state(), GestureState::Panning);
        let muts = it.handle(&mv(60, 45), None, 2.0);
        assert_eq!(muts, vec![CanvasMutation::Pan { dx: 10, dy: -5 }]);
        it.handle(&up(60, 45, 1), None, 2.0);
        assert_eq!(it.state(), GestureState::Idle);
    }

    #[test]
    fn idle_move_only_tracks_position() {
        let mut it = Interaction::new();
        assert!(it.handle(&mv(30, 40), None, 1.0).is_empty());
        assert_eq!(it.last_screen_pos(), ScreenPoint::new(30, 40));
    }

    #[test]
    fn release_must_match_gesture_button() {
        let mut it = Interaction::new();
        it.handle(&down(0, 0, 1), None, 1.0);
        it.handle(&up(0, 0, 0), None, 1.0);
        assert_eq!(it.state(), GestureState::Panning);

        let mut it = Interaction::new();
        it.handle(&down(0, 0, 0), Some(0), 1.0);
        it.handle(&up(0, 0, 1), None, 1.0);
        assert_eq!(it.state(), GestureState::Dragging);
        it.handle(&up(0, 0, 0), None, 1.0);
        assert_eq!(it.state(), GestureState::Idle);
        // Selection survives the end of the drag.
        assert_eq!(it.selected(), Some(0));
    }

    #[test]
    fn extreme_pointer_delta_saturates() {
        let mut it = Interaction::new();
        it.handle(&down(0, 0, 1), None, 1.0);
        it.handle(&mv(-10, 0), None, 1.0);
        assert_eq!(
            it.handle(&mv(i32::MAX, 0), None, 1.0),
            vec![CanvasMutation::Pan { dx: i32::MAX, dy: 0 }]
        );
        assert_eq!(it.last_screen_pos(), ScreenPoint::new(i32::MAX, 0));
    }

    #[test]
    fn press_during_gesture_is_ignored() {
        let mut it = Interaction::new();
        it.handle(&down(0, 0, 1), None, 1.0);
        assert!(it.handle(&down(5, 5, 0), Some(3), 1.0).is_empty());
        assert_eq!(it.state(), GestureState::Panning);
        assert_eq!(it.selected(), None);
        // The pan continues from the original anchor.
        assert_eq!(
            it.handle(&mv(4, 0), None, 1.0),
            vec![CanvasMutation::Pan { dx: 4, dy: 0 }]
        );
    }

    #[test]
    fn secondary_press_does_nothing() {
        let mut it = Interaction::new();
        assert!(it.handle(&down(7, 8, 2), Some(0), 1.0).is_empty());
        assert_eq!(it.state(), GestureState::Idle);
        assert_eq!(it.last_screen_pos(), ScreenPoint::new(7, 8));
    }

    #[test]
    fn wheel_zooms_at_cursor() {
        let mut it = Interaction::new();
        let ev = InputEvent::Wheel {
            x: 10,
            y: 20,
            delta_y: -120.0,
        };
        assert_eq!(
            it.handle(&ev, None, 1.0),
            vec![CanvasMutation::ZoomBy {
                multiplier: WHEEL_ZOOM_STEP,
                x: 10,
                y: 20
            }]
        );
        let ev = InputEvent::Wheel {
            x: 0,
            y: 0,
            delta_y: 0.0,
        };
        assert!(it.handle(&ev, None, 1.0).is_empty());
    }
}
