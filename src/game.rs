//! One game session: the scene, the life icons and the per-frame rules that
//! tie them together.
//!
//! The frame driver calls [`Game::act`] then [`Game::draw`] once per frame and
//! stops once [`Game::status`] turns terminal.

use crate::body::Body;
use crate::config::GameConfig;
use crate::constants::BORDER_WIDTH;
use crate::context::SimContext;
use crate::entity::{asteroid, border, icon, projectile, ship, AsteroidTier, BorderSide, EntityKind};
use crate::framebuffer::FrameBuffer;
use crate::geometry::field_extent;
use crate::input::{GameKey, InputState};
use crate::registry::Bodies;
use bevy::log::{debug, info};
use bevy::math::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    /// Every asteroid is gone.
    Cleared,
    /// The last life was lost.
    GameOver,
    /// The player asked to leave.
    Quit,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Running
    }
}

pub struct Game {
    scene: Bodies,
    lives: Bodies,
    ctx: SimContext,
    status: GameStatus,
    frames: u64,
}

impl Game {
    /// Build the opening scene: ship, the four walls, then each asteroid tier.
    pub fn initialize(config: GameConfig) -> Self {
        let mut ctx = SimContext::new(config);
        let mut scene = Bodies::new();

        scene.add_body(ship::init(&ctx.config));
        for side in BorderSide::SCENE_ORDER {
            scene.add_body(border::init(side));
        }

        let tiers = [
            (AsteroidTier::Large, ctx.config.large_asteroid_count),
            (AsteroidTier::Medium, ctx.config.medium_asteroid_count),
            (AsteroidTier::Small, ctx.config.small_asteroid_count),
        ];
        for (tier, count) in tiers {
            for _ in 0..count {
                let at = random_inner_position(tier, &mut ctx);
                let direction = tier.random_direction(&mut ctx.rng);
                scene.add_body(asteroid::init(tier, at, direction, &ctx.config));
            }
        }

        let mut lives = Bodies::new();
        for body in icon::row() {
            lives.add_body(body);
        }

        info!(
            "Scene ready: {} bodies, {} lives",
            scene.len(),
            ctx.life_count
        );

        Self {
            scene,
            lives,
            ctx,
            status: GameStatus::Running,
            frames: 0,
        }
    }

    /// One tick.  A no-op once the status is terminal.
    pub fn act(&mut self, dt: f32, input: &dyn InputState) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        if input.is_key_pressed(GameKey::Escape) {
            self.set_status(GameStatus::Quit);
            return self.status;
        }
        if input.is_key_pressed(GameKey::Space) {
            self.fire();
        }

        self.scene.act(dt, input, &mut self.ctx);

        if self.is_cleared() {
            self.set_status(GameStatus::Cleared);
        }
        if (self.ctx.life_count.max(0) as usize) < self.lives.len() {
            if let Some(icon) = self.lives.last_mut() {
                icon.delete_request();
            }
        }
        if self.ctx.life_count < 1 {
            self.set_status(GameStatus::GameOver);
        }
        self.lives.act(dt, input, &mut self.ctx);

        self.frames += 1;
        self.status
    }

    /// Clear `frame` and paint the scene, then the life icons on top.
    pub fn draw(&self, frame: &mut FrameBuffer) {
        frame.clear();
        self.scene.draw(frame);
        self.lives.draw(frame);
    }

    /// End the session and release both registries.
    pub fn finalize(self) -> GameStatus {
        info!(
            "Session over: {:?} after {} frames with {} lives left",
            self.status, self.frames, self.ctx.life_count
        );
        self.status
    }

    /// Spawn a shot at the muzzle, heading away from the hull.
    fn fire(&mut self) {
        let Some(hero) = self.ship() else {
            return;
        };
        let at = ship::muzzle_point(hero);
        let direction = -hero.direction();
        match projectile::init(at, direction, &self.ctx.config) {
            Some(shot) => self.scene.add_body(shot),
            None => debug!("Shot at {at} does not fit in the field; dropped"),
        }
    }

    fn is_cleared(&self) -> bool {
        self.scene
            .iter()
            .all(|b| matches!(b.kind(), EntityKind::Ship | EntityKind::Border(_)))
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            info!("Game status {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn life_count(&self) -> i32 {
        self.ctx.life_count
    }

    pub fn config(&self) -> &GameConfig {
        &self.ctx.config
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn ship(&self) -> Option<&Body> {
        self.scene.iter().find(|b| b.kind() == EntityKind::Ship)
    }

    pub fn scene(&self) -> &Bodies {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Bodies {
        &mut self.scene
    }

    pub fn lives(&self) -> &Bodies {
        &self.lives
    }
}

/// Uniform top-left for an asteroid fully inside the walls.
fn random_inner_position(tier: AsteroidTier, ctx: &mut SimContext) -> Vec2 {
    let wall = BORDER_WIDTH as f32;
    let hi = field_extent() - Vec2::splat(wall + tier.size());
    Vec2::new(
        ctx.rng.gen_range(wall..=hi.x).floor(),
        ctx.rng.gen_range(wall..=hi.y).floor(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COLOR_PROJECTILE, COLOR_SHIP};
    use crate::geometry::GridPoint;
    use crate::input::FrameInput;

    fn quiet_config() -> GameConfig {
        GameConfig {
            large_asteroid_count: 0,
            medium_asteroid_count: 0,
            small_asteroid_count: 0,
            seed: Some(99),
            ..GameConfig::default()
        }
    }

    fn parked_rock(game: &Game, x: f32, y: f32) -> Body {
        asteroid::init(AsteroidTier::Small, Vec2::new(x, y), Vec2::ZERO, game.config())
    }

    #[test]
    fn opening_scene_follows_the_configured_counts() {
        let game = Game::initialize(GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        });
        assert_eq!(game.scene().len(), 1 + 4 + 3 + 6 + 8);
        assert_eq!(game.scene().body_at(0).kind(), EntityKind::Ship);
        assert_eq!(game.scene().body_at(1).kind(), EntityKind::Border(BorderSide::Right));
        assert_eq!(game.scene().body_at(4).kind(), EntityKind::Border(BorderSide::Bottom));
        assert_eq!(game.lives().len(), 3);
        assert_eq!(game.life_count(), 3);

        let wall = BORDER_WIDTH as f32;
        for rock in game.scene().iter().skip(5) {
            assert!(rock.is_placed());
            let max = rock.aabb().max();
            assert!(rock.coordinate().min_element() >= wall);
            assert!(max.x <= 768.0 - wall && max.y <= 1024.0 - wall);
        }
    }

    #[test]
    fn empty_field_is_cleared_on_the_first_frame() {
        let mut game = Game::initialize(quiet_config());
        assert_eq!(game.act(0.016, &FrameInput::new()), GameStatus::Cleared);
        // Terminal: further frames change nothing.
        let frames = game.frames();
        game.act(0.016, &FrameInput::with_keys([GameKey::Space]));
        assert_eq!(game.frames(), frames);
    }

    #[test]
    fn escape_quits() {
        let mut game = Game::initialize(quiet_config());
        assert_eq!(game.act(0.016, &FrameInput::with_keys([GameKey::Escape])), GameStatus::Quit);
        assert_eq!(game.finalize(), GameStatus::Quit);
    }

    #[test]
    fn space_fires_one_shot_per_frame_away_from_the_hull() {
        let mut game = Game::initialize(quiet_config());
        let parked = parked_rock(&game, 600.0, 50.0);
        game.scene_mut().add_body(parked);
        let heading = game.ship().expect("ship").direction();

        let fire = FrameInput::with_keys([GameKey::Space]);
        game.act(0.0, &fire);
        game.act(0.0, &fire);
        let shots: Vec<&Body> = game
            .scene()
            .iter()
            .filter(|b| b.kind() == EntityKind::Projectile)
            .collect();
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].direction(), -heading);
        assert_eq!(shots[0].coordinate(), Vec2::new(374.0, 525.0));
        assert_eq!(game.status(), GameStatus::Running, "shots keep the field from clearing");
    }

    #[test]
    fn three_asteroid_hits_end_the_game_on_the_third() {
        let mut game = Game::initialize(quiet_config());
        let parked = parked_rock(&game, 600.0, 50.0);
        game.scene_mut().add_body(parked);
        let idle = FrameInput::new();

        for (hit, expected) in [
            (1, GameStatus::Running),
            (2, GameStatus::Running),
            (3, GameStatus::GameOver),
        ] {
            let hero = game.ship().expect("ship").coordinate();
            // Covers the ship's bottom-left corner.
            let rock = parked_rock(&game, hero.x + 21.0, hero.y - 7.0);
            game.scene_mut().add_body(rock);

            let status = game.act(0.0, &idle);
            assert_eq!(game.life_count(), 3 - hit, "after hit {hit}");
            assert_eq!(status, expected, "after hit {hit}");
            assert_eq!(game.lives().len(), 3 - hit as usize);

            // Retire the rock so it cannot strike twice.
            if let Some(rock) = game.scene_mut().last_mut() {
                rock.delete_request();
            }
        }
    }

    #[test]
    fn draw_paints_scene_then_icons_over_a_cleared_buffer() {
        let mut game = Game::initialize(quiet_config());
        let mut frame = FrameBuffer::new();
        frame.put(GridPoint::new(300, 300), 0xFFFFFF);
        let parked = parked_rock(&game, 600.0, 50.0);
        game.scene_mut().add_body(parked);
        game.act(0.0, &FrameInput::with_keys([GameKey::Space]));

        game.draw(&mut frame);
        assert_eq!(frame.get(GridPoint::new(300, 300)), Some(0), "stale pixel cleared");
        assert_eq!(frame.get(GridPoint::new(384, 512)), Some(COLOR_SHIP), "hull centre");
        assert_eq!(frame.get(GridPoint::new(25, 30)), Some(COLOR_SHIP), "first life icon");
        assert_eq!(frame.get(GridPoint::new(379, 530)), Some(COLOR_PROJECTILE), "fresh shot");
    }
}
