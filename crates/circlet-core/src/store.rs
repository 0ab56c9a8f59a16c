//! Ordered shape storage and the click-resolution policy.

use crate::geometry::Point;
use crate::shapes::{Circle, Shape, ShapeTrait};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`ShapeStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A positional query ran past the last shape.
    #[error("shape index {index} is out of range (store holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// What a click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No shape contained the point; a new selected circle was created.
    Created,
    /// The topmost hit became the sole selection.
    Selected(usize),
    /// The toggle modifier flipped the topmost hit; `selected` is its new
    /// flag.
    Toggled { index: usize, selected: bool },
}

/// The ordered shape collection.
///
/// Insertion order is significant: it is both the z-order for rendering
/// (later shapes paint on top) and the tie-break order for hit testing
/// (later shapes win). Removal keeps the relative order of survivors, so
/// the invariant holds for the store's whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Number of shapes held.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the store holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape; it becomes the topmost in z-order.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Checked positional access, indices in insertion order.
    ///
    /// Querying past the end is a caller contract violation and surfaces
    /// as [`StoreError::OutOfRange`] instead of a silent default.
    pub fn get(&self, index: usize) -> Result<&Shape, StoreError> {
        self.shapes.get(index).ok_or(StoreError::OutOfRange {
            index,
            len: self.shapes.len(),
        })
    }

    /// Iterate shapes in insertion (z-) order.
    ///
    /// The iterator borrows the store: traversals are stateless and
    /// re-entrant, and an empty store yields immediately.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Iterate shapes mutably in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    /// Unset the selection flag on every shape.
    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
    }

    /// Remove every selected shape, returning how many went.
    ///
    /// Survivors keep their relative order. With nothing selected (or
    /// nothing at all) the store is left untouched, so calling this twice
    /// in a row is the same as calling it once.
    pub fn remove_selected(&mut self) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|shape| !shape.is_selected());
        let removed = before - self.shapes.len();
        if removed > 0 {
            log::debug!(
                "removed {removed} selected shape(s), {} remain",
                self.shapes.len()
            );
        }
        removed
    }

    /// The hit list: indices of every shape containing `point`, in
    /// insertion order.
    pub fn hits(&self, point: Point) -> Vec<usize> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.contains(point))
            .map(|(index, _)| index)
            .collect()
    }

    /// Resolve a click at `point`.
    ///
    /// An empty hit list creates: the selection is cleared and a new
    /// selected circle with the default radius appears at the point.
    /// This happens with `toggle` held too; empty-space clicks always
    /// create.
    ///
    /// Otherwise the last hit wins the tie-break. Insertion order is
    /// z-order, so the last hit is the visually topmost shape under the
    /// cursor. With `toggle` held its flag flips and every other shape is
    /// left alone; without it the shape becomes the sole selection.
    pub fn resolve_click(&mut self, point: Point, toggle: bool) -> ClickOutcome {
        let Some(&index) = self.hits(point).last() else {
            self.clear_selection();
            let mut circle = Circle::new(point);
            circle.set_selected(true);
            self.add(circle);
            log::debug!("click at {point:?} hit nothing; created shape {}", self.shapes.len() - 1);
            return ClickOutcome::Created;
        };

        if toggle {
            let shape = &mut self.shapes[index];
            let selected = !shape.is_selected();
            shape.set_selected(selected);
            log::debug!("click at {point:?} toggled shape {index} to selected={selected}");
            ClickOutcome::Toggled { index, selected }
        } else {
            self.clear_selection();
            self.shapes[index].set_selected(true);
            log::debug!("click at {point:?} selected shape {index}");
            ClickOutcome::Selected(index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingContext;

    fn circle_at(x: i32, y: i32) -> Circle {
        Circle::new(Point::new(x, y))
    }

    fn selected_circle_at(x: i32, y: i32) -> Circle {
        let mut circle = circle_at(x, y);
        circle.set_selected(true);
        circle
    }

    fn centers(store: &ShapeStore) -> Vec<Point> {
        store
            .iter()
            .map(|shape| match shape {
                Shape::Circle(c) => c.center,
            })
            .collect()
    }

    fn selection_flags(store: &ShapeStore) -> Vec<bool> {
        store.iter().map(Shape::is_selected).collect()
    }

    #[test]
    fn test_traversal_order_is_insertion_order() {
        let mut store = ShapeStore::new();
        store.add(circle_at(0, 0));
        store.add(circle_at(100, 0));
        store.add(circle_at(200, 0));

        assert_eq!(
            centers(&store),
            vec![Point::new(0, 0), Point::new(100, 0), Point::new(200, 0)]
        );
    }

    #[test]
    fn test_traversal_is_restartable() {
        let mut store = ShapeStore::new();
        store.add(circle_at(0, 0));
        store.add(circle_at(100, 0));

        let first: Vec<_> = store.iter().map(Shape::is_selected).collect();
        let second: Vec<_> = store.iter().map(Shape::is_selected).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_traversal_yields_immediately() {
        let store = ShapeStore::new();
        assert!(store.iter().next().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_past_end_is_out_of_range() {
        let mut store = ShapeStore::new();
        assert_eq!(
            store.get(0),
            Err(StoreError::OutOfRange { index: 0, len: 0 })
        );

        store.add(circle_at(0, 0));
        assert!(store.get(0).is_ok());
        assert_eq!(
            store.get(1),
            Err(StoreError::OutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_clear_selection_clears_every_flag() {
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));
        store.add(circle_at(100, 0));
        store.add(selected_circle_at(200, 0));

        store.clear_selection();
        assert_eq!(selection_flags(&store), vec![false, false, false]);
    }

    #[test]
    fn test_remove_selected_keeps_survivor_order() {
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));
        store.add(circle_at(100, 0));
        store.add(selected_circle_at(200, 0));

        assert_eq!(store.remove_selected(), 2);
        assert_eq!(centers(&store), vec![Point::new(100, 0)]);
    }

    #[test]
    fn test_remove_selected_is_idempotent() {
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));
        store.add(circle_at(100, 0));

        store.remove_selected();
        let after_first = centers(&store);
        assert_eq!(store.remove_selected(), 0);
        assert_eq!(centers(&store), after_first);
    }

    #[test]
    fn test_remove_selected_on_empty_store() {
        let mut store = ShapeStore::new();
        assert_eq!(store.remove_selected(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_click_creates_selected_default_circle() {
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));

        let outcome = store.resolve_click(Point::new(500, 500), false);
        assert_eq!(outcome, ClickOutcome::Created);
        assert_eq!(store.len(), 2);
        // The previous selection is gone; only the new circle is selected.
        assert_eq!(selection_flags(&store), vec![false, true]);

        let Shape::Circle(created) = store.get(1).unwrap();
        assert_eq!(created.center, Point::new(500, 500));
        assert_eq!(created.radius(), Circle::DEFAULT_RADIUS);
    }

    #[test]
    fn test_empty_click_with_toggle_still_creates() {
        // The modifier has no carve-out on empty space: such clicks
        // always create.
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));

        let outcome = store.resolve_click(Point::new(500, 500), true);
        assert_eq!(outcome, ClickOutcome::Created);
        assert_eq!(selection_flags(&store), vec![false, true]);
    }

    #[test]
    fn test_tie_break_selects_topmost_hit() {
        let mut store = ShapeStore::new();
        // Overlapping circles: (10, 0) is inside both.
        store.add(circle_at(0, 0));
        store.add(circle_at(20, 0));

        let outcome = store.resolve_click(Point::new(10, 0), false);
        assert_eq!(outcome, ClickOutcome::Selected(1));
        assert_eq!(selection_flags(&store), vec![false, true]);
    }

    #[test]
    fn test_plain_click_replaces_selection() {
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));
        store.add(circle_at(200, 0));

        let outcome = store.resolve_click(Point::new(200, 0), false);
        assert_eq!(outcome, ClickOutcome::Selected(1));
        assert_eq!(selection_flags(&store), vec![false, true]);
    }

    #[test]
    fn test_toggle_click_deselects_only_target() {
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));
        store.add(selected_circle_at(200, 0));

        let outcome = store.resolve_click(Point::new(0, 0), true);
        assert_eq!(
            outcome,
            ClickOutcome::Toggled {
                index: 0,
                selected: false
            }
        );
        assert_eq!(selection_flags(&store), vec![false, true]);
    }

    #[test]
    fn test_toggle_click_extends_selection() {
        let mut store = ShapeStore::new();
        store.add(selected_circle_at(0, 0));
        store.add(circle_at(200, 0));

        let outcome = store.resolve_click(Point::new(200, 0), true);
        assert_eq!(
            outcome,
            ClickOutcome::Toggled {
                index: 1,
                selected: true
            }
        );
        assert_eq!(selection_flags(&store), vec![true, true]);
    }

    #[test]
    fn test_hits_in_insertion_order() {
        let mut store = ShapeStore::new();
        store.add(circle_at(0, 0));
        store.add(circle_at(20, 0));
        store.add(circle_at(500, 500));

        assert_eq!(store.hits(Point::new(10, 0)), vec![0, 1]);
        assert_eq!(store.hits(Point::new(-1000, 0)), Vec::<usize>::new());
    }

    #[test]
    fn test_render_traversal_in_z_order() {
        let mut store = ShapeStore::new();
        store.add(circle_at(0, 0));
        store.add(selected_circle_at(100, 0));

        let mut ctx = RecordingContext::default();
        for shape in store.iter() {
            shape.render(&mut ctx);
        }

        let drawn: Vec<Point> = ctx.circles.iter().map(|(center, _, _)| *center).collect();
        assert_eq!(drawn, vec![Point::new(0, 0), Point::new(100, 0)]);
        assert_eq!(ctx.circles[0].2, crate::shapes::ShapeStyle::UNSELECTED);
        assert_eq!(ctx.circles[1].2, crate::shapes::ShapeStyle::SELECTED);
    }
}
