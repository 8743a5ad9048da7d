//! The four static walls framing the field.

use super::EntityKind;
use crate::body::Body;
use crate::constants::{BORDER_MASK, BORDER_WIDTH, COLOR_BORDERS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::shape::Rectangle;
use bevy::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderSide {
    /// Insertion order used when building a scene.
    pub const SCENE_ORDER: [BorderSide; 4] = [
        BorderSide::Right,
        BorderSide::Top,
        BorderSide::Left,
        BorderSide::Bottom,
    ];

    /// Top-left corner and size of this wall.
    pub fn rect(self) -> (Vec2, Vec2) {
        let h = SCREEN_HEIGHT as f32;
        let w = SCREEN_WIDTH as f32;
        let bw = BORDER_WIDTH as f32;
        match self {
            BorderSide::Left => (Vec2::ZERO, Vec2::new(h, bw)),
            BorderSide::Right => (Vec2::new(0.0, w - bw), Vec2::new(h, bw)),
            BorderSide::Top => (Vec2::ZERO, Vec2::new(bw, w)),
            BorderSide::Bottom => (Vec2::new(h - bw, bw), Vec2::new(bw, w - 2.0 * bw)),
        }
    }
}

/// A wall reacts to nothing and belongs to no layer; movers react to its mask.
pub fn init(side: BorderSide) -> Body {
    let (coordinate, size) = side.rect();
    let mut body = Body::new(EntityKind::Border(side)).with_collision(0, BORDER_MASK);
    body.add_shape(Rectangle::new(coordinate, size, COLOR_BORDERS));
    body
}
