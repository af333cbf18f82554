//! Ordered shape collection.
//!
//! Insertion order is paint order: index 0 is drawn first (back), the
//! last shape is drawn last (front) and wins hit tests on overlap.

use crate::model::{Color, Shape};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything else. Returns its index.
    pub fn add(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn deselect_all(&mut self) {
        for shape in &mut self.shapes {
            shape.selected = false;
        }
    }

    /// Mark `index` selected. Returns `false` if it doesn't exist.
    pub fn select(&mut self, index: usize) -> bool {
        match self.shapes.get_mut(index) {
            Some(shape) => {
                shape.selected = true;
                true
            }
            None => false,
        }
    }

    /// Move a shape by a world-space delta. Out-of-range indices are ignored.
    pub fn translate(&mut self, index: usize, dx: f32, dy: f32) {
        if let Some(shape) = self.shapes.get_mut(index) {
            shape.bounds.x += dx;
            shape.bounds.y += dy;
        }
    }

    pub fn set_color(&mut self, index: usize, color: Color) {
        if let Some(shape) = self.shapes.get_mut(index) {
            shape.color = color;
        }
    }

    /// Index of the first selected shape, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.shapes.iter().position(|s| s.selected)
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Back-to-front.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

impl<'a> IntoIterator for &'a ShapeStore {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorldRect;
    use pretty_assertions::assert_eq;

    fn two_shapes() -> ShapeStore {
        let mut store = ShapeStore::new();
        store.add(Shape::rectangle(0.0, 0.0, 10.0, 10.0, Color::RED));
        store.add(Shape::circle(5.0, 5.0, 10.0, 10.0, Color::GREEN));
        store
    }

    #[test]
    fn add_returns_index_in_paint_order() {
        let mut store = two_shapes();
        let idx = store.add(Shape::rectangle(1.0, 1.0, 1.0, 1.0, Color::BLUE));
        assert_eq!(idx, 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).map(|s| s.color), Some(Color::BLUE));
    }

    #[test]
    fn translate_moves_bounds() {
        let mut store = two_shapes();
        store.translate(1, 2.5, -4.0);
        assert_eq!(
            store.get(1).unwrap().bounds,
            WorldRect::new(7.5, 1.0, 10.0, 10.0)
        );
    }

    #[test]
    fn translate_out_of_range_is_noop() {
        let mut store = two_shapes();
        let before = store.clone();
        store.translate(7, 100.0, 100.0);
        assert_eq!(store, before);
    }

    #[test]
    fn deselect_all_clears_every_flag() {
        let mut store = two_shapes();
        assert!(store.select(0));
        assert!(store.select(1));
        store.deselect_all();
        assert!(store.iter().all(|s| !s.selected));
        assert_eq!(store.selected_index(), None);
    }

    #[test]
    fn select_missing_index_fails() {
        let mut store = two_shapes();
        assert!(!store.select(2));
        assert!(store.select(1));
        assert_eq!(store.selected_index(), Some(1));
    }

    #[test]
    fn set_color_ignores_missing_index() {
        let mut store = two_shapes();
        store.set_color(0, Color::BLUE);
        store.set_color(9, Color::BLUE);
        assert_eq!(store.get(0).unwrap().color, Color::BLUE);
        assert_eq!(store.get(1).unwrap().color, Color::GREEN);
    }
}
