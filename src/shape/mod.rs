//! Primitive shapes: the drawable building blocks every body is made of.
//!
//! The family is closed ([`Rectangle`], [`Circle`], [`RightTriangle`]) and
//! is stored as the [`Shape`] enum.  The shared capability surface is the
//! [`Primitive`] trait: each variant supplies `draw`, `rotate_right` and
//! `mirror_shape`; transforms and the overlap test are provided on top of the
//! common [`ShapeData`].
//!
//! Every successful transform leaves the shape fully inside the field.  A
//! transform that would not returns `false` and changes nothing.

mod circle;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::RightTriangle;

use crate::framebuffer::FrameBuffer;
use crate::geometry::Aabb;
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Position of a right triangle's 90° corner.  Vestigial for other shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Corner {
    /// Next orientation after a 90° clockwise turn:
    /// bottom-left → top-left → top-right → bottom-right → bottom-left.
    pub fn rotated_right(self) -> Self {
        match self {
            Corner::BottomLeft => Corner::TopLeft,
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
        }
    }

    /// Reflection across the vertical axis.
    pub fn mirrored(self) -> Self {
        match self {
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
        }
    }
}

/// Discriminant of the [`Shape`] family, used by snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    RightTriangle,
}

/// State common to every primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeData {
    /// Top-left corner.
    pub coordinate: Vec2,
    /// `(height, width)` in field axes.
    pub size: Vec2,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    pub corner: Corner,
}

impl ShapeData {
    pub fn new(coordinate: Vec2, size: Vec2, color: u32) -> Self {
        Self {
            coordinate,
            size,
            color,
            corner: Corner::default(),
        }
    }
}

/// 90° clockwise rotation of a box around `pivot`.
///
/// Returns the rotated box's new top-left, or `None` if the rotated box
/// (with width and height swapped) would leave the field.
pub fn rotated_right_coordinate(coordinate: Vec2, size: Vec2, pivot: Vec2) -> Option<Vec2> {
    let offset = coordinate - pivot;
    let rotated = Vec2::new(pivot.x + offset.y, pivot.y - offset.x - size.x);
    Aabb::new(rotated, Vec2::new(size.y, size.x))
        .in_field()
        .then_some(rotated)
}

/// Capability interface shared by every primitive shape.
pub trait Primitive {
    fn data(&self) -> &ShapeData;
    fn data_mut(&mut self) -> &mut ShapeData;

    /// Rasterize into `frame` using the shape's own coordinate, size and color.
    fn draw(&self, frame: &mut FrameBuffer);

    /// Swap width and height, advancing orientation where it has meaning.
    fn rotate_right(&mut self);

    /// Reflect across the vertical axis.  No-op for shapes without orientation.
    fn mirror_shape(&mut self) {}

    fn coordinate(&self) -> Vec2 {
        self.data().coordinate
    }

    fn size(&self) -> Vec2 {
        self.data().size
    }

    fn color(&self) -> u32 {
        self.data().color
    }

    fn corner(&self) -> Corner {
        self.data().corner
    }

    fn set_coordinate(&mut self, coordinate: Vec2) {
        self.data_mut().coordinate = coordinate;
    }

    fn aabb(&self) -> Aabb {
        Aabb::new(self.coordinate(), self.size())
    }

    fn center(&self) -> Vec2 {
        self.coordinate() + self.size() / 2.0
    }

    /// Rotate the whole shape 90° clockwise around an external point.
    fn rotate_right_around(&mut self, pivot: Vec2) -> bool {
        match rotated_right_coordinate(self.coordinate(), self.size(), pivot) {
            Some(coordinate) => {
                self.data_mut().coordinate = coordinate;
                self.rotate_right();
                true
            }
            None => false,
        }
    }

    /// Translate by `delta` if the result stays inside the field.
    fn move_shape(&mut self, delta: Vec2) -> bool {
        let moved = Aabb::new(self.coordinate() + delta, self.size());
        if !moved.in_field() {
            return false;
        }
        self.data_mut().coordinate = moved.min;
        true
    }

    /// True if any corner of `other`'s box lies strictly inside this shape's box.
    fn is_collided_with_shape(&self, other: &dyn Primitive) -> bool {
        self.aabb().contains_any_corner_of(&other.aabb())
    }
}

/// A primitive shape owned by a composite.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    RightTriangle(RightTriangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::RightTriangle(_) => ShapeKind::RightTriangle,
        }
    }

    /// Rebuild a shape of `kind` from its raw state.
    pub fn from_parts(kind: ShapeKind, data: ShapeData) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::from_data(data)),
            ShapeKind::Circle => Shape::Circle(Circle::from_data(data)),
            ShapeKind::RightTriangle => Shape::RightTriangle(RightTriangle::from_data(data)),
        }
    }

    /// A rectangle covering the same box, used to trial transforms.
    pub fn as_box(&self) -> Rectangle {
        Rectangle::from_data(*self.data())
    }
}

impl Primitive for Shape {
    fn data(&self) -> &ShapeData {
        match self {
            Shape::Rectangle(s) => s.data(),
            Shape::Circle(s) => s.data(),
            Shape::RightTriangle(s) => s.data(),
        }
    }

    fn data_mut(&mut self) -> &mut ShapeData {
        match self {
            Shape::Rectangle(s) => s.data_mut(),
            Shape::Circle(s) => s.data_mut(),
            Shape::RightTriangle(s) => s.data_mut(),
        }
    }

    fn draw(&self, frame: &mut FrameBuffer) {
        match self {
            Shape::Rectangle(s) => s.draw(frame),
            Shape::Circle(s) => s.draw(frame),
            Shape::RightTriangle(s) => s.draw(frame),
        }
    }

    fn rotate_right(&mut self) {
        match self {
            Shape::Rectangle(s) => s.rotate_right(),
            Shape::Circle(s) => s.rotate_right(),
            Shape::RightTriangle(s) => s.rotate_right(),
        }
    }

    fn mirror_shape(&mut self) {
        match self {
            Shape::Rectangle(s) => s.mirror_shape(),
            Shape::Circle(s) => s.mirror_shape(),
            Shape::RightTriangle(s) => s.mirror_shape(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<RightTriangle> for Shape {
    fn from(s: RightTriangle) -> Self {
        Shape::RightTriangle(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn all_kinds() -> Vec<Shape> {
        vec![
            Rectangle::new(Vec2::new(100.0, 200.0), Vec2::new(20.0, 40.0), 0x111111).into(),
            Circle::new(Vec2::new(100.0, 200.0), Vec2::new(30.0, 50.0), 0x222222).into(),
            RightTriangle::new(Vec2::new(100.0, 200.0), Vec2::new(10.0, 60.0), 0x333333).into(),
        ]
    }

    #[test]
    fn four_right_rotations_restore_size_and_orientation() {
        for original in all_kinds() {
            let mut shape = original.clone();
            for _ in 0..4 {
                shape.rotate_right();
            }
            assert_eq!(shape.size(), original.size(), "{:?}", original.kind());
            assert_eq!(shape.corner(), original.corner(), "{:?}", original.kind());
        }
    }

    #[test]
    fn corner_cycle_is_clockwise() {
        let mut c = Corner::BottomLeft;
        let mut seen = Vec::new();
        for _ in 0..4 {
            c = c.rotated_right();
            seen.push(c);
        }
        assert_eq!(
            seen,
            vec![
                Corner::TopLeft,
                Corner::TopRight,
                Corner::BottomRight,
                Corner::BottomLeft
            ]
        );
    }

    #[test]
    fn mirror_swaps_across_vertical_axis() {
        assert_eq!(Corner::BottomLeft.mirrored(), Corner::BottomRight);
        assert_eq!(Corner::TopRight.mirrored(), Corner::TopLeft);
        let mut rect = Rectangle::new(Vec2::ZERO, Vec2::new(5.0, 5.0), 0);
        rect.mirror_shape();
        assert_eq!(rect.corner(), Corner::BottomLeft, "rectangles ignore mirroring");
    }

    #[test]
    fn rotate_around_pivot_matches_quadrant_geometry() {
        // Pivot above-left of the shape.
        let mut rect = Rectangle::new(Vec2::new(110.0, 120.0), Vec2::new(10.0, 30.0), 0);
        assert!(rect.rotate_right_around(Vec2::new(100.0, 100.0)));
        // offset (10, 20) → new top-left (100 + 20, 100 - 10 - 10)
        assert_eq!(rect.coordinate(), Vec2::new(120.0, 80.0));
        assert_eq!(rect.size(), Vec2::new(30.0, 10.0));
    }

    #[test]
    fn rotate_around_pivot_rejects_out_of_field_and_leaves_shape_unchanged() {
        let mut tri = RightTriangle::new(Vec2::new(5.0, 5.0), Vec2::new(50.0, 10.0), 0);
        let before = tri.clone();
        // Pivot at the origin swings the shape to negative columns.
        assert!(!tri.rotate_right_around(Vec2::new(0.0, 0.0)));
        assert_eq!(tri, before);
    }

    #[test]
    fn four_rotations_around_a_pivot_return_home() {
        let mut rect = Rectangle::new(Vec2::new(300.0, 400.0), Vec2::new(10.0, 30.0), 0);
        let pivot = Vec2::new(320.0, 420.0);
        for _ in 0..4 {
            assert!(rect.rotate_right_around(pivot));
        }
        assert_eq!(rect.coordinate(), Vec2::new(300.0, 400.0));
        assert_eq!(rect.size(), Vec2::new(10.0, 30.0));
    }

    #[test]
    fn move_shape_keeps_far_corner_in_field() {
        let mut circle = Circle::new(
            Vec2::new(SCREEN_HEIGHT as f32 - 20.0, SCREEN_WIDTH as f32 - 20.0),
            Vec2::new(10.0, 10.0),
            0,
        );
        assert!(circle.move_shape(Vec2::new(10.0, 10.0)));
        assert!(!circle.move_shape(Vec2::new(1.0, 0.0)));
        assert_eq!(
            circle.coordinate(),
            Vec2::new(SCREEN_HEIGHT as f32 - 10.0, SCREEN_WIDTH as f32 - 10.0)
        );
    }

    #[test]
    fn overlap_test_is_strict_and_asymmetric() {
        let big = Rectangle::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0), 0);
        let small = Rectangle::new(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0), 0);
        assert!(big.is_collided_with_shape(&small));
        assert!(!small.is_collided_with_shape(&big));

        let touching = Rectangle::new(Vec2::new(100.0, 0.0), Vec2::new(5.0, 5.0), 0);
        assert!(!big.is_collided_with_shape(&touching));
    }

    #[test]
    fn from_parts_restores_kind_and_state() {
        for shape in all_kinds() {
            let rebuilt = Shape::from_parts(shape.kind(), *shape.data());
            assert_eq!(rebuilt, shape);
        }
    }
}
