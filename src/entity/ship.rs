//! The player's ship: a hull drawn twice plus a nozzle that marks the heading.
//!
//! Member layout is fixed: `0` and `1` are the hull, [`NOZZLE`] is the nozzle.
//! The heading is always `hull centre − nozzle centre`, so the ship moves away
//! from the nozzle on Down and toward it on Up.

use super::{border_bounce, EntityKind};
use crate::body::Body;
use crate::collision::CollideDirection;
use crate::config::GameConfig;
use crate::constants::{
    ANY_ASTEROID_MASK, BORDER_MASK, COLOR_NOZZLE_TINT, COLOR_SHIP, SCREEN_HEIGHT, SCREEN_WIDTH,
    SHIP_HULL_SIZE, SHIP_LAYER, SHIP_MASK, SHIP_NOZZLE_SIZE, SIZE_UNIT, SPEED_UNIT,
};
use crate::context::SimContext;
use crate::geometry::{field_extent, Aabb};
use crate::input::{GameKey, InputState};
use crate::shape::{Circle, Primitive};
use bevy::log::{debug, info, warn};
use bevy::math::Vec2;
use rand::Rng;

pub const HULL: usize = 0;
pub const NOZZLE: usize = 2;

/// Hull circle with its nozzle tucked against the right-hand rim.
pub(crate) fn hull_and_nozzle(hull_coordinate: Vec2) -> (Circle, Circle) {
    let hull_size = SHIP_HULL_SIZE as f32;
    let hull = Circle::new(hull_coordinate, Vec2::splat(hull_size), COLOR_SHIP);
    let nozzle_offset = hull_size - (SIZE_UNIT / 2) as f32 - 2.0;
    let nozzle = Circle::new(
        hull_coordinate + Vec2::new(0.0, nozzle_offset),
        Vec2::splat(SHIP_NOZZLE_SIZE as f32),
        COLOR_SHIP + COLOR_NOZZLE_TINT,
    );
    (hull, nozzle)
}

/// Build the ship centred in the field.
pub fn init(config: &GameConfig) -> Body {
    let hull_size = SHIP_HULL_SIZE as f32;
    let start = Vec2::new(
        (SCREEN_HEIGHT / 2) as f32 - hull_size / 2.0,
        (SCREEN_WIDTH / 2) as f32 - hull_size / 2.0,
    );
    let (hull, nozzle) = hull_and_nozzle(start);

    let mut body = Body::new(EntityKind::Ship).with_collision(SHIP_LAYER, SHIP_MASK);
    body.add_shape(hull.clone());
    body.add_shape(hull.clone());
    body.add_shape(nozzle.clone());
    body.set_direction(hull.center() - nozzle.center());
    body.set_speed(config.ship_speed);
    body
}

/// Where projectiles leave the ship.
pub fn muzzle_point(body: &Body) -> Vec2 {
    body.composite().shape_at(NOZZLE).center()
}

pub(super) fn act(body: &mut Body, dt: f32, input: &dyn InputState, ctx: &mut SimContext) {
    let angle = ctx.config.rotate_degree * dt / 2.0;
    if input.is_key_pressed(GameKey::Left) {
        turn_nozzle(body, angle);
    }
    if input.is_key_pressed(GameKey::Right) {
        turn_nozzle(body, -angle);
    }

    let mut step = Vec2::ZERO;
    if input.is_key_pressed(GameKey::Down) {
        step = body.direction() * dt * body.speed();
    }
    if input.is_key_pressed(GameKey::Up) {
        step = -body.direction() * dt * body.speed();
    }
    if step != Vec2::ZERO {
        body.move_on(step);
    }
}

/// Swing the nozzle around the hull centre by `angle` radians.
///
/// A turn that would push the nozzle out of the field is skipped.
pub fn turn_nozzle(body: &mut Body, angle: f32) {
    let hull_center = body.composite().shape_at(HULL).center();
    let nozzle = body.composite().shape_at(NOZZLE);
    let offset = nozzle.center() - hull_center;

    let (sin, cos) = angle.sin_cos();
    let turned = Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos);
    let coordinate = hull_center + turned - nozzle.size() / 2.0;
    if !Aabb::new(coordinate, nozzle.size()).in_field() {
        return;
    }

    let mut moved = body.remove_shape(NOZZLE);
    moved.set_coordinate(coordinate);
    let accepted = body.add_shape(moved);
    debug_assert!(accepted, "nozzle position was checked against the field");
    body.calculate_self_coordinates();
    body.set_direction(hull_center - muzzle_point(body));
}

pub(super) fn collision_act(
    body: &mut Body,
    direction: CollideDirection,
    mask: u16,
    ctx: &mut SimContext,
) {
    if mask == BORDER_MASK {
        if let Some(delta) = border_bounce(body, direction) {
            body.move_immediately(delta);
        }
    }
    if mask & ANY_ASTEROID_MASK != 0 {
        relocate(body, ctx);
        ctx.life_count -= 1;
        info!("Ship hit by asteroid; {} lives left", ctx.life_count);
    }
}

/// Jump the ship by a random offset, trying up to `relocation_attempts`
/// candidates before falling back to the field centre.
fn relocate(body: &mut Body, ctx: &mut SimContext) {
    let base = SIZE_UNIT as f32;
    let span = (2.0 * SPEED_UNIT) as u32;
    for attempt in 0..ctx.config.relocation_attempts {
        let delta = Vec2::new(
            base + ctx.rng.gen_range(0..span) as f32,
            base + ctx.rng.gen_range(0..span) as f32,
        );
        if body.move_immediately(delta) {
            debug!("Ship relocated by {delta} after {} attempts", attempt + 1);
            return;
        }
    }

    let centered = (field_extent() - body.size()) / 2.0;
    let delta = centered - body.coordinate();
    warn!(
        "No relocation accepted after {} attempts; centring ship",
        ctx.config.relocation_attempts
    );
    body.move_immediately(delta);
}
