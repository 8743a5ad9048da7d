use super::EntityKind;
use crate::body::Body;
use crate::collision::CollideDirection;
use crate::config::GameConfig;
use crate::constants::{BORDER_MASK, COLOR_PROJECTILE, PROJECTILE_LAYER, PROJECTILE_SIZE, SHIP_MASK};
use crate::shape::Circle;
use bevy::math::Vec2;

/// Build a shot whose top-left sits at `at`.
///
/// Returns `None` when the shot would not fit in the field.
pub fn init(at: Vec2, direction: Vec2, config: &GameConfig) -> Option<Body> {
    let mut body =
        Body::new(EntityKind::Projectile).with_collision(PROJECTILE_LAYER, SHIP_MASK);
    if !body.add_shape(Circle::new(at, Vec2::splat(PROJECTILE_SIZE as f32), COLOR_PROJECTILE)) {
        return None;
    }
    body.set_direction(direction);
    body.set_speed(config.drift_speed);
    Some(body)
}

/// Shots die on flat contact with a wall.  A corner graze lets them through.
pub(super) fn collision_act(body: &mut Body, direction: CollideDirection, mask: u16) {
    if mask == BORDER_MASK && direction.is_cardinal() {
        body.delete_request();
    }
}
