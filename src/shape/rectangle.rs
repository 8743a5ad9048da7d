use super::{Primitive, ShapeData};
use crate::framebuffer::FrameBuffer;
use crate::geometry::GridPoint;
use bevy::math::Vec2;

/// Axis-aligned filled block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rectangle {
    data: ShapeData,
}

impl Rectangle {
    pub fn new(coordinate: Vec2, size: Vec2, color: u32) -> Self {
        Self::from_data(ShapeData::new(coordinate, size, color))
    }

    pub fn from_data(data: ShapeData) -> Self {
        Self { data }
    }
}

impl Primitive for Rectangle {
    fn data(&self) -> &ShapeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ShapeData {
        &mut self.data
    }

    fn draw(&self, frame: &mut FrameBuffer) {
        let start = GridPoint::from(self.data.coordinate);
        let end_x = (self.data.size.x + start.x as f32) as u32;
        let end_y = (self.data.size.y + start.y as f32) as u32;

        for x in start.x..end_x {
            for y in start.y..end_y {
                frame.put(GridPoint::new(x, y), self.data.color);
            }
        }
    }

    fn rotate_right(&mut self) {
        self.data.size = Vec2::new(self.data.size.y, self.data.size.x);
    }
}
