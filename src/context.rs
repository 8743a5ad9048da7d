//! Per-session state threaded through every `act` call.

use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Mutable state shared by all bodies during one game session.
///
/// Owned by [`crate::game::Game`] and lent to the registries each frame.
#[derive(Debug)]
pub struct SimContext {
    pub rng: StdRng,
    /// Remaining lives.  The ship's asteroid handler decrements it.
    pub life_count: i32,
    pub config: GameConfig,
}

impl SimContext {
    /// Seed from `config.seed`, or from entropy when unset.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            life_count: config.starting_lives,
            config,
        }
    }

    /// Deterministic context for tests and headless runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }
}
