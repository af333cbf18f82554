pub mod canvas;
pub mod input;
pub mod interaction;
pub mod shortcuts;

pub use canvas::CanvasState;
pub use input::{InputEvent, PointerButton};
pub use interaction::{CanvasMutation, GestureState, Interaction};
pub use shortcuts::{ShortcutAction, ShortcutMap};
