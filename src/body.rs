//! The body: one composite shape plus the cached box, collision bits and motion
//! every entity shares.
//!
//! Entity behavior (`act`, `collision_act`) lives in [`crate::entity`]; this
//! module owns the geometry bookkeeping and the broad-phase tests.

use crate::collision::CollideDirection;
use crate::composite::CompositeShape;
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::context::SimContext;
use crate::entity::EntityKind;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Aabb;
use crate::shape::{Primitive, Shape};
use bevy::math::Vec2;

/// One past the field extents on both axes.  Marks a box with no shapes yet.
pub const UNPLACED: Vec2 = Vec2::new(SCREEN_HEIGHT as f32 + 1.0, SCREEN_WIDTH as f32 + 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    kind: EntityKind,
    composite: CompositeShape,
    /// Cached bounding box.  Both fields hold [`UNPLACED`] until the first shape lands.
    coordinate: Vec2,
    size: Vec2,
    /// Categories this body belongs to.
    layer: u16,
    /// Categories this body reacts to.
    mask: u16,
    direction: Vec2,
    speed: f32,
    deletable: bool,
}

impl Body {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            composite: CompositeShape::new(),
            coordinate: UNPLACED,
            size: UNPLACED,
            layer: 0,
            mask: 0,
            direction: Vec2::ZERO,
            speed: 0.0,
            deletable: false,
        }
    }

    pub fn with_collision(mut self, layer: u16, mask: u16) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn composite(&self) -> &CompositeShape {
        &self.composite
    }

    pub fn coordinate(&self) -> Vec2 {
        self.coordinate
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.coordinate, self.size)
    }

    pub fn is_placed(&self) -> bool {
        self.coordinate != UNPLACED
    }

    pub fn layer(&self) -> u16 {
        self.layer
    }

    pub fn mask(&self) -> u16 {
        self.mask
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    // ── Shapes ────────────────────────────────────────────────────────────────

    /// Grow the cached box to cover `shape`, then append it.
    ///
    /// Returns `false` (and appends nothing) if the shape is not fully inside
    /// the field.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> bool {
        let shape = shape.into();
        if !self.recalculate_self_coordinates(shape.coordinate(), shape.size()) {
            return false;
        }
        self.composite.add_shape(shape);
        true
    }

    /// Add every member of `other` through [`add_shape`](Self::add_shape).
    ///
    /// Returns `true` only if every member was accepted.
    pub fn add_composite_shape(&mut self, other: &CompositeShape) -> bool {
        other
            .shapes()
            .iter()
            .fold(true, |all, shape| self.add_shape(shape.clone()) && all)
    }

    /// Remove a member.  The cached box is left as is; call
    /// [`calculate_self_coordinates`](Self::calculate_self_coordinates) to shrink it.
    ///
    /// # Panics
    /// If `id` is out of range.
    pub fn remove_shape(&mut self, id: usize) -> Shape {
        self.composite.remove_shape(id)
    }

    /// Rebuild the cached box from scratch over every member.
    ///
    /// An empty composite goes back to [`UNPLACED`].
    pub fn calculate_self_coordinates(&mut self) {
        let mut shapes = self.composite.shapes().iter();
        let Some(first) = shapes.next() else {
            self.coordinate = UNPLACED;
            self.size = UNPLACED;
            return;
        };
        let (min, max) = shapes.fold((first.aabb().min, first.aabb().max()), |(min, max), s| {
            let b = s.aabb();
            (min.min(b.min), max.max(b.max()))
        });
        self.coordinate = min;
        self.size = max - min;
    }

    /// Incremental growth: adopt the shape's box if unplaced, else take the
    /// running min of the near corner and max of the far corner.
    fn recalculate_self_coordinates(&mut self, coordinate: Vec2, size: Vec2) -> bool {
        let incoming = Aabb::new(coordinate, size);
        if !incoming.in_field() {
            return false;
        }
        if !self.is_placed() {
            self.coordinate = coordinate;
            self.size = size;
            return true;
        }
        let min = self.coordinate.min(incoming.min);
        let max = self.aabb().max().max(incoming.max());
        self.coordinate = min;
        self.size = max - min;
        true
    }

    pub fn draw(&self, frame: &mut FrameBuffer) {
        self.composite.draw(frame);
    }

    // ── Motion ────────────────────────────────────────────────────────────────

    /// True if the box translated by `delta` stays inside the field.  Never mutates.
    pub fn is_move_acceptible(&self, delta: Vec2) -> bool {
        let moved = self.coordinate + delta;
        // Reject underflow before looking at the far corner.
        if moved.x < 0.0 || moved.y < 0.0 {
            return false;
        }
        Aabb::new(moved, self.size).in_field()
    }

    /// Translate every member and the cached box by `delta`, or do nothing.
    pub fn move_on(&mut self, delta: Vec2) -> bool {
        if !self.is_move_acceptible(delta) {
            return false;
        }
        self.composite.move_on(delta);
        self.coordinate += delta;
        true
    }

    /// Same contract as [`move_on`](Self::move_on); used for corrective jumps
    /// computed from collision geometry rather than from `direction · dt`.
    pub fn move_immediately(&mut self, delta: Vec2) -> bool {
        self.move_on(delta)
    }

    // ── Collision ─────────────────────────────────────────────────────────────

    /// Broad phase: a corner of this body's box lies strictly inside `other`'s.
    pub fn is_box_collided(&self, other: &Body) -> bool {
        other.aabb().contains_any_corner_of(&self.aabb())
    }

    /// True when `other` belongs to a category this body reacts to.
    pub fn is_collidable(&self, other: &Body) -> bool {
        other.layer & self.mask != 0
    }

    /// First member of this body hit by a probe shaped like `other`'s box.
    pub fn get_collided_shape_id(&self, other: &Body) -> Option<usize> {
        self.composite
            .get_collided_shape_id(other.coordinate, other.size)
    }

    /// Which side of this body overlaps member `shape_id` of `other`.
    ///
    /// # Panics
    /// If `shape_id` is out of range for `other`.
    pub fn collision_direction(&self, other: &Body, shape_id: usize) -> Option<CollideDirection> {
        let target = other.composite.shape_at(shape_id).aabb();
        CollideDirection::classify(target.corners_inside(&self.aabb()))
    }

    /// Classify the overlap with `other`'s member and hand it to this body's
    /// collision policy.  Nothing happens when no corner is inside.
    pub fn procedure_collision(&mut self, other: &Body, shape_id: usize, ctx: &mut SimContext) {
        if let Some(direction) = self.collision_direction(other, shape_id) {
            self.collision_act(direction, other, shape_id, ctx);
        }
    }

    /// One-way: once flagged, the registry removes the body during its next sweep.
    pub fn delete_request(&mut self) {
        self.deletable = true;
    }

    pub fn is_deletable(&self) -> bool {
        self.deletable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Rectangle};

    fn block(x: f32, y: f32, h: f32, w: f32) -> Rectangle {
        Rectangle::new(Vec2::new(x, y), Vec2::new(h, w), 0x123456)
    }

    fn body_with(shapes: &[Rectangle]) -> Body {
        let mut body = Body::new(EntityKind::Projectile);
        for s in shapes {
            assert!(body.add_shape(s.clone()));
        }
        body
    }

    #[test]
    fn new_body_is_unplaced() {
        let body = Body::new(EntityKind::Ship);
        assert!(!body.is_placed());
        assert_eq!(body.coordinate(), UNPLACED);
        assert_eq!(body.size(), UNPLACED);
        assert!(!body.is_deletable());
    }

    #[test]
    fn first_shape_is_adopted_and_later_shapes_extend() {
        let mut body = body_with(&[block(100.0, 100.0, 10.0, 10.0)]);
        assert_eq!(body.coordinate(), Vec2::new(100.0, 100.0));
        assert_eq!(body.size(), Vec2::new(10.0, 10.0));

        assert!(body.add_shape(block(90.0, 120.0, 5.0, 30.0)));
        assert_eq!(body.coordinate(), Vec2::new(90.0, 100.0));
        assert_eq!(body.size(), Vec2::new(20.0, 50.0));
    }

    #[test]
    fn box_never_shrinks_on_add() {
        let mut body = body_with(&[block(100.0, 100.0, 50.0, 50.0)]);
        assert!(body.add_shape(block(110.0, 110.0, 5.0, 5.0)));
        assert_eq!(body.coordinate(), Vec2::new(100.0, 100.0));
        assert_eq!(body.size(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn out_of_field_shape_is_rejected_without_side_effects() {
        let mut body = body_with(&[block(100.0, 100.0, 10.0, 10.0)]);
        let before = body.clone();
        assert!(!body.add_shape(block(760.0, 100.0, 20.0, 20.0)));
        assert_eq!(body, before);
    }

    #[test]
    fn full_rescan_shrinks_after_removal() {
        let mut body = body_with(&[block(100.0, 100.0, 10.0, 10.0), block(300.0, 300.0, 10.0, 10.0)]);
        body.remove_shape(1);
        assert_eq!(body.size(), Vec2::new(210.0, 210.0), "removal alone keeps the box");
        body.calculate_self_coordinates();
        assert_eq!(body.coordinate(), Vec2::new(100.0, 100.0));
        assert_eq!(body.size(), Vec2::new(10.0, 10.0));

        body.remove_shape(0);
        body.calculate_self_coordinates();
        assert!(!body.is_placed());
    }

    #[test]
    fn add_composite_shape_goes_through_the_box_check() {
        let mut extra = CompositeShape::new();
        extra.add_shape(Circle::new(Vec2::new(200.0, 200.0), Vec2::new(10.0, 10.0), 1));
        extra.add_shape(Circle::new(Vec2::new(800.0, 200.0), Vec2::new(10.0, 10.0), 2));

        let mut body = body_with(&[block(100.0, 100.0, 10.0, 10.0)]);
        assert!(!body.add_composite_shape(&extra));
        assert_eq!(body.composite().len(), 2, "only the in-field member lands");
        assert_eq!(body.size(), Vec2::new(110.0, 110.0));
    }

    #[test]
    fn move_translates_everything_or_nothing() {
        let mut body = body_with(&[block(100.0, 100.0, 10.0, 10.0), block(120.0, 130.0, 10.0, 10.0)]);

        assert!(body.move_on(Vec2::new(5.0, -7.0)));
        assert_eq!(body.coordinate(), Vec2::new(105.0, 93.0));
        assert_eq!(body.composite().coordinate_of_shape_at(1), Vec2::new(125.0, 123.0));

        let before = body.clone();
        assert!(!body.move_on(Vec2::new(-106.0, 0.0)), "would underflow");
        assert!(!body.move_immediately(Vec2::new(0.0, 1000.0)), "far edge leaves the field");
        assert_eq!(body, before);
    }

    #[test]
    fn move_may_end_exactly_on_the_field_edge() {
        let mut body = body_with(&[block(100.0, 100.0, 10.0, 10.0)]);
        let to_corner = Vec2::new(SCREEN_HEIGHT as f32 - 110.0, SCREEN_WIDTH as f32 - 110.0);
        assert!(body.is_move_acceptible(to_corner));
        assert!(!body.is_move_acceptible(to_corner + Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn unplaced_body_cannot_move() {
        let body = Body::new(EntityKind::Projectile);
        assert!(!body.is_move_acceptible(Vec2::ZERO));
    }

    #[test]
    fn collidable_uses_other_layer_against_own_mask() {
        let ship = body_with(&[block(100.0, 100.0, 10.0, 10.0)]).with_collision(0x1D, 0x02);
        let rock = body_with(&[block(100.0, 100.0, 10.0, 10.0)]).with_collision(0x03, 0x04);
        assert!(rock.is_collidable(&ship), "0x1D & 0x04");
        assert!(ship.is_collidable(&rock), "0x03 & 0x02");

        let wall = body_with(&[block(0.0, 0.0, 10.0, 10.0)]).with_collision(0x00, 0x01);
        assert!(wall.is_collidable(&ship));
        assert!(!ship.is_collidable(&wall), "walls belong to no layer");
    }

    #[test]
    fn box_collision_checks_own_corners_only() {
        let small = body_with(&[block(110.0, 110.0, 10.0, 10.0)]);
        let large = body_with(&[block(100.0, 100.0, 100.0, 100.0)]);
        assert!(small.is_box_collided(&large));
        assert!(!large.is_box_collided(&small));
    }

    #[test]
    fn collision_direction_reads_corners_against_the_hit_member() {
        // Member 1 of the wall overlaps the right edge of the mover.
        let wall = body_with(&[block(0.0, 0.0, 10.0, 10.0), block(50.0, 195.0, 200.0, 20.0)]);
        let mover = body_with(&[block(100.0, 100.0, 20.0, 100.0)]);
        assert_eq!(wall.get_collided_shape_id(&mover), Some(1));
        assert_eq!(mover.collision_direction(&wall, 1), Some(CollideDirection::Right));
        assert_eq!(mover.collision_direction(&wall, 0), None);
    }

    #[test]
    fn delete_request_is_sticky() {
        let mut body = body_with(&[block(1.0, 1.0, 1.0, 1.0)]);
        body.delete_request();
        body.delete_request();
        assert!(body.is_deletable());
    }
}
