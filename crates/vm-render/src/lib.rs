pub mod hit;
pub mod paint;
pub mod scene;

pub use hit::hit_test;
pub use paint::{DrawCmd, DrawList, GridLines, Surface, grid_lines, paint_frame};
pub use scene::VelloSurface;
