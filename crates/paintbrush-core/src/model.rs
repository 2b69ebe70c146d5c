//! Committed drawing history with undo and redo.

use crate::shapes::Shape;

/// Ordered list of committed shapes plus the redo buffer.
///
/// Shapes are painted in list order, so later shapes cover earlier ones.
/// Undo moves the newest shape onto the redo buffer and redo moves it back.
#[derive(Debug, Clone, Default)]
pub struct ShapeModel {
    shapes: Vec<Shape>,
    redo_stack: Vec<Shape>,
}

impl ShapeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished shape. Any undone shapes are discarded.
    pub fn commit(&mut self, shape: Shape) {
        log::info!("Committed {} shape {}", shape.kind(), shape.id());
        self.shapes.push(shape);
        self.redo_stack.clear();
    }

    /// Undo the most recent shape.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.shapes.pop() {
            Some(shape) => {
                log::debug!("Undo {} shape {}", shape.kind(), shape.id());
                self.redo_stack.push(shape);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone shape.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(shape) => {
                log::debug!("Redo {} shape {}", shape.kind(), shape.id());
                self.shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// Remove all shapes and the redo buffer. Not undoable.
    pub fn clear(&mut self) {
        log::info!(
            "Cleared {} shapes ({} undone)",
            self.shapes.len(),
            self.redo_stack.len()
        );
        self.shapes.clear();
        self.redo_stack.clear();
    }

    /// Drop undone shapes so they can no longer be redone.
    pub fn discard_redo(&mut self) {
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} undone shapes", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Committed shapes, oldest first.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::point::Point;
    use crate::shapes::{Line, Oval, Rectangle, ShapeStyle};

    fn line(x: i32) -> Shape {
        Shape::Line(Line::new(Point::new(x, 0), Rgba8::RED))
    }

    #[test]
    fn test_commit_appends_in_order() {
        let mut model = ShapeModel::new();
        let a = line(1);
        let b = Shape::Rectangle(Rectangle::new(Point::ORIGIN, ShapeStyle::default()));
        let (a_id, b_id) = (a.id(), b.id());
        model.commit(a);
        model.commit(b);
        let ids: Vec<_> = model.shapes().iter().map(Shape::id).collect();
        assert_eq!(ids, vec![a_id, b_id]);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut model = ShapeModel::new();
        let shape = line(1);
        let id = shape.id();
        model.commit(shape);

        assert!(model.undo());
        assert!(model.is_empty());
        assert_eq!(model.redo_len(), 1);

        assert!(model.redo());
        assert_eq!(model.shapes()[0].id(), id);
        assert_eq!(model.redo_len(), 0);
    }

    #[test]
    fn test_undo_redo_on_empty_are_noops() {
        let mut model = ShapeModel::new();
        assert!(!model.undo());
        assert!(!model.redo());
        assert!(!model.can_undo());
        assert!(!model.can_redo());
    }

    #[test]
    fn test_redo_order_is_lifo() {
        let mut model = ShapeModel::new();
        let first = line(1);
        let second = line(2);
        let (first_id, second_id) = (first.id(), second.id());
        model.commit(first);
        model.commit(second);

        assert!(model.undo());
        assert!(model.undo());
        assert!(model.redo());
        assert_eq!(model.shapes()[0].id(), first_id);
        assert!(model.redo());
        assert_eq!(model.shapes()[1].id(), second_id);
    }

    #[test]
    fn test_commit_discards_redo() {
        let mut model = ShapeModel::new();
        model.commit(line(1));
        assert!(model.undo());
        model.commit(Shape::Oval(Oval::new(Point::ORIGIN, ShapeStyle::default())));
        assert!(!model.can_redo());
        assert!(!model.redo());
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_clear_empties_both_lists() {
        let mut model = ShapeModel::new();
        model.commit(line(1));
        model.commit(line(2));
        assert!(model.undo());
        model.clear();
        assert!(model.is_empty());
        assert_eq!(model.redo_len(), 0);
        assert!(!model.undo());
    }

    #[test]
    fn test_discard_redo() {
        let mut model = ShapeModel::new();
        model.commit(line(1));
        assert!(model.undo());
        model.discard_redo();
        assert!(!model.can_redo());
        assert!(model.is_empty());
    }
}
