//! The body registry: owns every live body, runs the frame, sweeps the dead
//! and dispatches pairwise collisions.
//!
//! ## Frame order
//!
//! 1. `act` on every body, in insertion order.
//! 2. Sweep: every flagged body is removed; large and medium asteroids leave
//!    fragments behind, appended after the survivors.
//! 3. `check_collision` over all ordered pairs, fragments included.
//!
//! Pair checks are O(n²).  Scenes hold tens of bodies.

use crate::body::Body;
use crate::context::SimContext;
use crate::entity::{asteroid, EntityKind};
use crate::framebuffer::FrameBuffer;
use crate::input::InputState;
use bevy::log::debug;

#[derive(Debug, Clone, Default)]
pub struct Bodies {
    bodies: Vec<Body>,
}

impl Bodies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// # Panics
    /// If `id` is out of range.
    pub fn body_at(&self, id: usize) -> &Body {
        &self.bodies[id]
    }

    pub fn last_mut(&mut self) -> Option<&mut Body> {
        self.bodies.last_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn draw(&self, frame: &mut FrameBuffer) {
        for body in &self.bodies {
            body.draw(frame);
        }
    }

    pub fn act(&mut self, dt: f32, input: &dyn InputState, ctx: &mut SimContext) {
        for body in &mut self.bodies {
            body.act(dt, input, ctx);
        }
        self.sweep(ctx);
        self.check_collision(ctx);
    }

    /// Remove every flagged body and append the fragments they leave.
    ///
    /// Returns the number of bodies removed.
    pub fn sweep(&mut self, ctx: &mut SimContext) -> usize {
        let mut fragments = Vec::new();
        let before = self.bodies.len();
        self.bodies.retain(|body| {
            if !body.is_deletable() {
                return true;
            }
            if let EntityKind::Asteroid(tier) = body.kind() {
                if let Some(child) = tier.fragment() {
                    fragments.extend(asteroid::fragments(body, child, ctx));
                }
            }
            false
        });
        let removed = before - self.bodies.len();
        if !fragments.is_empty() {
            debug!("Sweep removed {removed} bodies, spawned {} fragments", fragments.len());
        }
        self.bodies.extend(fragments);
        removed
    }

    /// Dispatch every overlapping, mask-compatible ordered pair.
    ///
    /// For the pair `(layered, masked)` the masked body must react to the
    /// layered body's category, a corner of the layered box must sit inside
    /// the masked box, and some member of the masked body must be hit.  The
    /// layered body then handles the collision.
    pub fn check_collision(&mut self, ctx: &mut SimContext) {
        let n = self.bodies.len();
        for l in 0..n {
            for m in 0..n {
                if l == m {
                    continue;
                }
                let (layered, masked) = pair_mut(&mut self.bodies, l, m);
                if !masked.is_collidable(layered) || !layered.is_box_collided(masked) {
                    continue;
                }
                if let Some(shape_id) = masked.get_collided_shape_id(layered) {
                    layered.procedure_collision(masked, shape_id, ctx);
                }
            }
        }
    }
}

/// Mutable access to `bodies[a]` alongside shared access to `bodies[b]`.
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &Body) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &head[b])
    }
}
