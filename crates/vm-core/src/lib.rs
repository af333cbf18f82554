pub mod model;
pub mod settings;
pub mod store;
pub mod transform;
pub mod viewport;

pub use model::*;
pub use settings::{CanvasSettings, GridSettings};
pub use store::ShapeStore;
pub use transform::{screen_to_world, visible_world_rect, world_point_to_screen, world_to_screen};
pub use viewport::{Frame, MAX_ZOOM, MIN_FRAME_SIZE, MIN_ZOOM, Viewport};
