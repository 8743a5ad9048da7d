//! Drifting rocks in three tiers.  The two larger tiers break into smaller ones.

use super::{border_bounce, EntityKind};
use crate::body::Body;
use crate::collision::CollideDirection;
use crate::config::GameConfig;
use crate::constants::{
    ASTEROID_LARGE_SIZE, ASTEROID_LAYER, ASTEROID_MEDIUM_SIZE, ASTEROID_SMALL_SIZE,
    BORDER_MASK, COLOR_ASTEROID_LARGE, COLOR_ASTEROID_MEDIUM, COLOR_ASTEROID_SMALL,
    LARGE_ASTEROID_MASK, MEDIUM_ASTEROID_MASK, SHIP_MASK, SMALL_ASTEROID_MASK, SPEED_UNIT,
};
use crate::context::SimContext;
use crate::geometry::field_extent;
use crate::shape::Circle;
use bevy::math::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    pub fn size(self) -> f32 {
        match self {
            AsteroidTier::Large => ASTEROID_LARGE_SIZE as f32,
            AsteroidTier::Medium => ASTEROID_MEDIUM_SIZE as f32,
            AsteroidTier::Small => ASTEROID_SMALL_SIZE as f32,
        }
    }

    pub fn color(self) -> u32 {
        match self {
            AsteroidTier::Large => COLOR_ASTEROID_LARGE,
            AsteroidTier::Medium => COLOR_ASTEROID_MEDIUM,
            AsteroidTier::Small => COLOR_ASTEROID_SMALL,
        }
    }

    pub fn mask(self) -> u16 {
        match self {
            AsteroidTier::Large => LARGE_ASTEROID_MASK,
            AsteroidTier::Medium => MEDIUM_ASTEROID_MASK,
            AsteroidTier::Small => SMALL_ASTEROID_MASK,
        }
    }

    /// Tier spawned when one of these is destroyed.
    pub fn fragment(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }

    /// Random heading `(1 + r₁, 1 + r₂)`.  Large rocks draw from a wider range.
    pub fn random_direction(self, rng: &mut impl Rng) -> Vec2 {
        let span = match self {
            AsteroidTier::Large => SPEED_UNIT as u32,
            AsteroidTier::Medium | AsteroidTier::Small => SPEED_UNIT as u32 - 2,
        };
        Vec2::new(
            1.0 + rng.gen_range(0..span) as f32,
            1.0 + rng.gen_range(0..span) as f32,
        )
    }
}

/// Build an asteroid whose top-left sits at `at`.
///
/// If the circle would not fit in the field the body stays unplaced; callers
/// keep positions inside the field.
pub fn init(tier: AsteroidTier, at: Vec2, direction: Vec2, config: &GameConfig) -> Body {
    let mut body =
        Body::new(EntityKind::Asteroid(tier)).with_collision(ASTEROID_LAYER, tier.mask());
    body.add_shape(Circle::new(at, Vec2::splat(tier.size()), tier.color()));
    body.set_direction(direction);
    body.set_speed(config.drift_speed);
    body
}

/// Children of a destroyed `parent`: each starts at a random point of the
/// parent's footprint, pulled back so it fits in the field.
pub fn fragments(parent: &Body, tier: AsteroidTier, ctx: &mut SimContext) -> Vec<Body> {
    let footprint = parent.size();
    let limit = field_extent() - Vec2::splat(tier.size());
    (0..ctx.config.fragment_count)
        .map(|_| {
            let offset = Vec2::new(
                ctx.rng.gen_range(0..(footprint.x as u32).max(1)) as f32,
                ctx.rng.gen_range(0..(footprint.y as u32).max(1)) as f32,
            );
            let at = (parent.coordinate() + offset).clamp(Vec2::ZERO, limit);
            let direction = tier.random_direction(&mut ctx.rng);
            init(tier, at, direction, &ctx.config)
        })
        .collect()
}

pub(super) fn collision_act(body: &mut Body, direction: CollideDirection, mask: u16) {
    if mask == BORDER_MASK {
        if let Some(delta) = border_bounce(body, direction) {
            body.move_immediately(delta);
        }
    }
    if mask == SHIP_MASK {
        body.delete_request();
    }
}
