//! Concrete entities: thin behavior policies layered over [`Body`].
//!
//! Each submodule provides an `init` constructor that builds the entity's
//! shapes and collision bits.  Per-frame behavior is dispatched on
//! [`EntityKind`] by [`Body::act`] and [`Body::collision_act`].
//!
//! | Entity     | Layer  | Mask                 |
//! |------------|--------|----------------------|
//! | Border     | `0x00` | `0x01`               |
//! | Ship       | `0x1D` | `0x02`               |
//! | Projectile | `0x01` | `0x02`               |
//! | Asteroid   | `0x03` | `0x04`/`0x08`/`0x10` |
//! | Life icon  | `0x00` | `0x00`               |

pub mod asteroid;
pub mod border;
pub mod icon;
pub mod projectile;
pub mod ship;

pub use asteroid::AsteroidTier;
pub use border::BorderSide;

use crate::body::Body;
use crate::collision::CollideDirection;
use crate::constants::{BORDER_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::context::SimContext;
use crate::input::InputState;
use bevy::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ship,
    Projectile,
    Asteroid(AsteroidTier),
    Border(BorderSide),
    LifeIcon,
}

impl Body {
    /// Advance one frame.
    pub fn act(&mut self, dt: f32, input: &dyn InputState, ctx: &mut SimContext) {
        match self.kind() {
            EntityKind::Ship => ship::act(self, dt, input, ctx),
            EntityKind::Projectile | EntityKind::Asteroid(_) => drift(self, dt),
            EntityKind::Border(_) | EntityKind::LifeIcon => {}
        }
    }

    /// React to a classified overlap with `other`.
    pub fn collision_act(
        &mut self,
        direction: CollideDirection,
        other: &Body,
        _shape_id: usize,
        ctx: &mut SimContext,
    ) {
        let mask = self.layer() & other.mask();
        match self.kind() {
            EntityKind::Ship => ship::collision_act(self, direction, mask, ctx),
            EntityKind::Projectile => projectile::collision_act(self, direction, mask),
            EntityKind::Asteroid(_) => asteroid::collision_act(self, direction, mask),
            EntityKind::Border(_) | EntityKind::LifeIcon => {}
        }
    }
}

/// Straight-line motion along `direction · dt · speed`.  A blocked step is dropped.
fn drift(body: &mut Body, dt: f32) {
    let step = body.direction() * dt * body.speed();
    if step != Vec2::ZERO {
        body.move_on(step);
    }
}

/// Jump that puts a body back on the far side of the field after it reaches
/// a border.  Diagonal contacts have no bounce.
pub(crate) fn border_bounce(body: &Body, direction: CollideDirection) -> Option<Vec2> {
    let border = BORDER_WIDTH as f32;
    let coordinate = body.coordinate();
    let size = body.size();
    match direction {
        CollideDirection::Right => Some(Vec2::new(0.0, -(coordinate.y - border - 1.0))),
        CollideDirection::Left => Some(Vec2::new(
            0.0,
            SCREEN_WIDTH as f32 - 2.0 * border - size.y,
        )),
        CollideDirection::Up => Some(Vec2::new(
            SCREEN_HEIGHT as f32 - 2.0 * border - size.x,
            0.0,
        )),
        CollideDirection::Down => Some(Vec2::new(-(coordinate.x - border - 1.0), 0.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Rectangle;

    fn mover_at(x: f32, y: f32) -> Body {
        let mut body = Body::new(EntityKind::Projectile);
        assert!(body.add_shape(Rectangle::new(Vec2::new(x, y), Vec2::new(20.0, 20.0), 1)));
        body
    }

    #[test]
    fn bounce_right_wraps_to_the_left_inner_edge() {
        let body = mover_at(300.0, 1000.0);
        let delta = border_bounce(&body, CollideDirection::Right).expect("cardinal");
        assert_eq!(body.coordinate().y + delta.y, BORDER_WIDTH as f32 + 1.0);
        assert_eq!(delta.x, 0.0);
    }

    #[test]
    fn bounce_up_lands_against_the_bottom_border() {
        let body = mover_at(5.0, 300.0);
        let delta = border_bounce(&body, CollideDirection::Up).expect("cardinal");
        // Delta is a fixed offset, not an absolute target.
        assert_eq!(delta, Vec2::new(768.0 - 20.0 - 20.0, 0.0));
    }

    #[test]
    fn diagonals_do_not_bounce() {
        let body = mover_at(300.0, 300.0);
        for d in [
            CollideDirection::UpLeft,
            CollideDirection::UpRight,
            CollideDirection::DownLeft,
            CollideDirection::DownRight,
        ] {
            assert_eq!(border_bounce(&body, d), None);
        }
    }

    #[test]
    fn drift_is_skipped_when_blocked() {
        let mut body = mover_at(740.0, 300.0);
        body.set_direction(Vec2::new(1.0, 0.0));
        body.set_speed(10.0);
        drift(&mut body, 1.0);
        assert_eq!(body.coordinate(), Vec2::new(740.0, 300.0));

        drift(&mut body, 0.5);
        assert_eq!(body.coordinate(), Vec2::new(745.0, 300.0));
    }
}
