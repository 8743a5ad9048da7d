//! Coordinate primitives and the axis-aligned box test shared by shapes and bodies.
//!
//! Floating geometry uses [`Vec2`] directly (full arithmetic, scalar multiply).
//! [`GridPoint`] is the unsigned pixel coordinate used when rasterizing.
//! Both follow the crate-wide convention: `x` is the row, `y` is the column.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bevy::math::Vec2;
use std::ops::{Add, Sub};

/// Field extents as a vector: `(SCREEN_HEIGHT, SCREEN_WIDTH)`.
#[inline]
pub fn field_extent() -> Vec2 {
    Vec2::new(SCREEN_HEIGHT as f32, SCREEN_WIDTH as f32)
}

/// True when `point` lies within `[0, SCREEN_HEIGHT] × [0, SCREEN_WIDTH]`.
///
/// The far edge is inclusive so a box may end exactly on the field edge.
#[inline]
pub fn in_field(point: Vec2) -> bool {
    let extent = field_extent();
    point.x >= 0.0 && point.y >= 0.0 && point.x <= extent.x && point.y <= extent.y
}

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// Unsigned pixel coordinate on the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Componentwise; saturates at `u32::MAX`.
impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

/// Guarded subtraction: applied componentwise only when both components of
/// `self` are strictly greater than `rhs`; otherwise `self` is returned as is.
impl Sub for GridPoint {
    type Output = GridPoint;

    fn sub(self, rhs: GridPoint) -> GridPoint {
        if self.x > rhs.x && self.y > rhs.y {
            GridPoint::new(self.x - rhs.x, self.y - rhs.y)
        } else {
            self
        }
    }
}

/// Truncates toward zero; negative components saturate at 0.
impl From<Vec2> for GridPoint {
    fn from(v: Vec2) -> Self {
        GridPoint::new(v.x as u32, v.y as u32)
    }
}

impl From<GridPoint> for Vec2 {
    fn from(p: GridPoint) -> Self {
        Vec2::new(p.x as f32, p.y as f32)
    }
}

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// Axis-aligned box given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

/// Which corners of an inner box lie strictly inside an outer box.
///
/// Corner names follow the field convention (`x` down, `y` right):
/// top-left is `(min.x, min.y)`, bottom-left `(max.x, min.y)`,
/// top-right `(min.x, max.y)`, bottom-right `(max.x, max.y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Corners {
    pub top_left: bool,
    pub bottom_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
}

impl Corners {
    #[inline]
    pub fn any(self) -> bool {
        self.top_left || self.bottom_left || self.top_right || self.bottom_right
    }
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict-interior corner test of `inner` against `self`.
    ///
    /// Only `inner`'s corners are examined, never the reverse: a box nested
    /// entirely inside `inner` with no corner crossing reports nothing.  Boxes
    /// that merely share an edge report nothing either.
    pub fn corners_inside(&self, inner: &Aabb) -> Corners {
        let outer_min = self.min;
        let outer_max = self.max();
        let inner_min = inner.min;
        let inner_max = inner.max();

        let strictly_between = |lo: f32, v: f32, hi: f32| lo < v && v < hi;

        let near_x = strictly_between(outer_min.x, inner_min.x, outer_max.x);
        let near_y = strictly_between(outer_min.y, inner_min.y, outer_max.y);
        let far_x = strictly_between(outer_min.x, inner_max.x, outer_max.x);
        let far_y = strictly_between(outer_min.y, inner_max.y, outer_max.y);

        Corners {
            top_left: near_x && near_y,
            bottom_left: far_x && near_y,
            top_right: near_x && far_y,
            bottom_right: far_x && far_y,
        }
    }

    /// True if any corner of `inner` is strictly inside `self`.
    #[inline]
    pub fn contains_any_corner_of(&self, inner: &Aabb) -> bool {
        self.corners_inside(inner).any()
    }

    /// True when both corners of the box lie within the field.
    #[inline]
    pub fn in_field(&self) -> bool {
        in_field(self.min) && in_field(self.max())
    }
}
