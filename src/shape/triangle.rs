use super::{Corner, Primitive, ShapeData};
use crate::framebuffer::FrameBuffer;
use crate::geometry::GridPoint;
use bevy::math::Vec2;

/// Half of its box, cut along the diagonal; the 90° corner sits at `corner`.
///
/// Defaults to the right angle in the bottom-left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RightTriangle {
    data: ShapeData,
}

impl RightTriangle {
    pub fn new(coordinate: Vec2, size: Vec2, color: u32) -> Self {
        Self::from_data(ShapeData::new(coordinate, size, color))
    }

    pub fn from_data(data: ShapeData) -> Self {
        Self { data }
    }

    pub fn with_corner(mut self, corner: Corner) -> Self {
        self.data.corner = corner;
        self
    }
}

impl Primitive for RightTriangle {
    fn data(&self) -> &ShapeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ShapeData {
        &mut self.data
    }

    /// Row `i` of the box is filled up to the hypotenuse, whose slope is
    /// `height / width` in row units.
    fn draw(&self, frame: &mut FrameBuffer) {
        let start = GridPoint::from(self.data.coordinate);
        let rows = self.data.size.x as u32;
        let cols = self.data.size.y as u32;
        if rows == 0 || cols == 0 {
            return;
        }
        let slope = self.data.size.y / self.data.size.x;
        let color = self.data.color;

        for i in 0..rows {
            let edge = i as f32 * slope;
            let mut paint = |j: u32| frame.put(GridPoint::new(start.x + i, start.y + j), color);

            match self.data.corner {
                Corner::BottomLeft => {
                    let mut j = 0;
                    while j < cols && (j as f32) < edge {
                        paint(j);
                        j += 1;
                    }
                }
                Corner::BottomRight => {
                    let mut k = 0;
                    while k < cols && (k as f32) < edge {
                        paint(cols - 1 - k);
                        k += 1;
                    }
                }
                Corner::TopLeft => {
                    let mut j = 0;
                    while j < cols && (j as f32) < self.data.size.y - edge {
                        paint(j);
                        j += 1;
                    }
                }
                Corner::TopRight => {
                    for j in (edge as u32)..cols {
                        paint(j);
                    }
                }
            }
        }
    }

    fn rotate_right(&mut self) {
        self.data.size = Vec2::new(self.data.size.y, self.data.size.x);
        self.data.corner = self.data.corner.rotated_right();
    }

    fn mirror_shape(&mut self) {
        self.data.corner = self.data.corner.mirrored();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = 0x00FF00;

    fn painted(tri: &RightTriangle) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        tri.draw(&mut frame);
        frame
    }

    fn at(frame: &FrameBuffer, x: u32, y: u32) -> bool {
        frame.get(GridPoint::new(x, y)) == Some(INK)
    }

    #[test]
    fn bottom_left_fills_toward_the_bottom_left() {
        let frame = painted(&RightTriangle::new(Vec2::ZERO, Vec2::new(10.0, 10.0), INK));
        assert!(at(&frame, 9, 0), "bottom-left pixel");
        assert!(!at(&frame, 0, 9), "top-right pixel");
        assert!(!at(&frame, 1, 9));
    }

    #[test]
    fn mirrored_triangle_fills_the_reflected_half() {
        let tri = RightTriangle::new(Vec2::ZERO, Vec2::new(10.0, 10.0), INK);
        let mut mirrored = tri.clone();
        mirrored.mirror_shape();
        assert_eq!(mirrored.corner(), Corner::BottomRight);

        let a = painted(&tri);
        let b = painted(&mirrored);
        for x in 0..10 {
            for y in 0..10 {
                assert_eq!(at(&a, x, y), at(&b, x, 9 - y), "pixel {x},{y}");
            }
        }
    }

    #[test]
    fn top_corners_fill_the_top_row() {
        for corner in [Corner::TopLeft, Corner::TopRight] {
            let frame = painted(
                &RightTriangle::new(Vec2::ZERO, Vec2::new(8.0, 8.0), INK).with_corner(corner),
            );
            let top_row = (0..8).filter(|&y| at(&frame, 0, y)).count();
            assert_eq!(top_row, 8, "{corner:?}");
        }
    }

    #[test]
    fn rotate_right_advances_orientation() {
        let mut tri = RightTriangle::new(Vec2::ZERO, Vec2::new(4.0, 12.0), INK);
        tri.rotate_right();
        assert_eq!(tri.corner(), Corner::TopLeft);
        assert_eq!(tri.size(), Vec2::new(12.0, 4.0));
    }

    #[test]
    fn fill_never_leaves_the_box() {
        for corner in [
            Corner::BottomLeft,
            Corner::BottomRight,
            Corner::TopLeft,
            Corner::TopRight,
        ] {
            let frame = painted(
                &RightTriangle::new(Vec2::new(20.0, 30.0), Vec2::new(6.0, 15.0), INK)
                    .with_corner(corner),
            );
            for x in 0..60 {
                for y in 0..60 {
                    if at(&frame, x, y) {
                        assert!((20..26).contains(&x) && (30..45).contains(&y), "{corner:?} {x},{y}");
                    }
                }
            }
        }
    }
}
