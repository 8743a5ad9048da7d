//! Composite shapes: an ordered, owned list of primitives drawn and moved as one.

use crate::framebuffer::FrameBuffer;
use crate::shape::{Primitive, Rectangle, Shape};
use bevy::math::Vec2;

/// One rigid visual body made of primitive shapes.
///
/// Members are drawn in insertion order, so later members paint over earlier
/// ones where they overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeShape {
    shapes: Vec<Shape>,
}

impl CompositeShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an owned copy of `shape`.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Remove the member at `id`.
    ///
    /// # Panics
    /// If `id` is out of range.  Indices always come from a live scan of this
    /// composite, so an invalid one is a logic error.
    pub fn remove_shape(&mut self, id: usize) -> Shape {
        assert!(
            id < self.shapes.len(),
            "shape index {id} out of range for composite of {}",
            self.shapes.len()
        );
        self.shapes.remove(id)
    }

    /// Append copies of every member of `other`, preserving their order.
    pub fn add_composite_shape(&mut self, other: &CompositeShape) {
        self.shapes.extend(other.shapes.iter().cloned());
    }

    pub fn draw(&self, frame: &mut FrameBuffer) {
        for shape in &self.shapes {
            shape.draw(frame);
        }
    }

    /// Rotate every member 90° clockwise around `pivot`.
    ///
    /// All-or-nothing: each member is first trialled on a box-equivalent copy,
    /// and if any would leave the field no member is touched.
    pub fn rotate_right_around(&mut self, pivot: Vec2) -> bool {
        let feasible = self
            .shapes
            .iter()
            .all(|shape| shape.as_box().rotate_right_around(pivot));
        if !feasible {
            return false;
        }
        for shape in &mut self.shapes {
            shape.rotate_right_around(pivot);
        }
        true
    }

    /// Rotate around the centroid of the members' centres (integer-truncated).
    ///
    /// An empty composite has nothing to rotate and reports failure.
    pub fn rotate_right_around_self(&mut self) -> bool {
        match self.centroid() {
            Some(pivot) => self.rotate_right_around(pivot),
            None => false,
        }
    }

    /// Average of the members' centres, truncated to whole pixels.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.shapes.is_empty() {
            return None;
        }
        let (sum_x, sum_y) = self.shapes.iter().fold((0u64, 0u64), |(sx, sy), shape| {
            let c = shape.center();
            (sx + c.x as u64, sy + c.y as u64)
        });
        let n = self.shapes.len() as u64;
        Some(Vec2::new((sum_x / n) as f32, (sum_y / n) as f32))
    }

    /// # Panics
    /// If `id` is out of range.
    pub fn shape_at(&self, id: usize) -> &Shape {
        &self.shapes[id]
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Translate every member by `delta`, unchecked.  Callers gate on bounds.
    pub fn move_on(&mut self, delta: Vec2) {
        for shape in &mut self.shapes {
            let moved = shape.coordinate() + delta;
            shape.set_coordinate(moved);
        }
    }

    /// True if any member overlaps `probe`.
    pub fn check_for_collide(&self, probe: &dyn Primitive) -> bool {
        self.shapes.iter().any(|s| s.is_collided_with_shape(probe))
    }

    /// Index of the first member overlapping a rectangular probe at
    /// `coordinate`/`size`.
    pub fn get_collided_shape_id(&self, coordinate: Vec2, size: Vec2) -> Option<usize> {
        let probe = Rectangle::new(coordinate, size, 0);
        self.shapes
            .iter()
            .position(|s| s.is_collided_with_shape(&probe))
    }

    pub fn coordinate_of_shape_at(&self, id: usize) -> Vec2 {
        self.shapes[id].coordinate()
    }

    pub fn size_of_shape_at(&self, id: usize) -> Vec2 {
        self.shapes[id].size()
    }
}
