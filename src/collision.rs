//! Directional classification of a box overlap.

use crate::geometry::Corners;

/// Side of the *receiving* body that is overlapped by the other body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollideDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl CollideDirection {
    /// Map the corners of the receiver's box that lie inside the other shape
    /// to a direction.
    ///
    /// Pairs of corners on one edge win over single corners; among pairs the
    /// order is up, left, right, down, and among single corners it is
    /// down-right, down-left, up-left, up-right.  `None` when no corner is inside.
    pub fn classify(corners: Corners) -> Option<Self> {
        let Corners {
            top_left,
            bottom_left,
            top_right,
            bottom_right,
        } = corners;

        let direction = if top_left && top_right {
            CollideDirection::Up
        } else if top_left && bottom_left {
            CollideDirection::Left
        } else if top_right && bottom_right {
            CollideDirection::Right
        } else if bottom_right && bottom_left {
            CollideDirection::Down
        } else if bottom_right {
            CollideDirection::DownRight
        } else if bottom_left {
            CollideDirection::DownLeft
        } else if top_left {
            CollideDirection::UpLeft
        } else if top_right {
            CollideDirection::UpRight
        } else {
            return None;
        };
        Some(direction)
    }

    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            CollideDirection::Up
                | CollideDirection::Down
                | CollideDirection::Left
                | CollideDirection::Right
        )
    }
}
