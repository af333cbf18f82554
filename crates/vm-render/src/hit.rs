//! Hit testing: world point → shape index.
//!
//! Walks the store back-to-front (last painted = topmost) so the shape the
//! user sees on top is the one that gets picked.

use vm_core::ShapeStore;
use vm_core::model::WorldPoint;

/// Find the topmost shape containing `p`.
/// Returns `None` if only background is under the point.
pub fn hit_test(store: &ShapeStore, p: WorldPoint) -> Option<usize> {
    store
        .as_slice()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, shape)| shape.contains(p))
        .map(|(idx, _)| idx)
}
