use super::{Primitive, ShapeData};
use crate::framebuffer::FrameBuffer;
use crate::geometry::GridPoint;
use bevy::math::Vec2;

/// Filled ellipse inscribed in its box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    data: ShapeData,
}

impl Circle {
    pub fn new(coordinate: Vec2, size: Vec2, color: u32) -> Self {
        Self::from_data(ShapeData::new(coordinate, size, color))
    }

    pub fn from_data(data: ShapeData) -> Self {
        Self { data }
    }
}

impl Primitive for Circle {
    fn data(&self) -> &ShapeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ShapeData {
        &mut self.data
    }

    /// Scanline fill of `x²/a² + y²/b² ≤ 1` around the box centre.
    ///
    /// Each row's half-span is `√(((a² − i²)·b²) / a²)` with the quotient taken
    /// in integers, mirrored across both axes.
    fn draw(&self, frame: &mut FrameBuffer) {
        let start = GridPoint::from(self.data.coordinate);
        let a = (self.data.size.x / 2.0) as i64;
        let b = (self.data.size.y / 2.0) as i64;
        if a <= 0 || b <= 0 {
            return;
        }

        let cx = start.x as i64 + a;
        let cy = start.y as i64 + b;

        for i in (1 - a)..a {
            let span = (((a * a - i * i) * b * b) / (a * a)) as f64;
            let span = span.sqrt();

            let mut j = -(span as i64);
            while j < 0 {
                frame.put_signed(cx + i, cy + j, self.data.color);
                j += 1;
            }
            let mut j = 0i64;
            while (j as f64) < span {
                frame.put_signed(cx + i, cy + j, self.data.color);
                j += 1;
            }
        }
    }

    fn rotate_right(&mut self) {
        self.data.size = Vec2::new(self.data.size.y, self.data.size.x);
    }
}
