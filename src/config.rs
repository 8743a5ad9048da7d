//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tuneable values in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! large_asteroid_count = 5
//! seed = 42
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_relocation_attempts, validate_speed, SimError, SimResult};
use bevy::log::{info, warn};
use bevy::prelude::{ResMut, Resource};
use serde::Deserialize;
use std::path::Path;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable scene and gameplay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Scene ─────────────────────────────────────────────────────────────────
    pub large_asteroid_count: u16,
    pub medium_asteroid_count: u16,
    pub small_asteroid_count: u16,
    pub fragment_count: u16,
    pub starting_lives: i32,

    // ── Motion ────────────────────────────────────────────────────────────────
    pub ship_speed: f32,
    pub drift_speed: f32,
    pub rotate_degree: f32,

    // ── Ship relocation ───────────────────────────────────────────────────────
    pub relocation_attempts: u32,

    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            large_asteroid_count: LARGE_ASTEROID_COUNT,
            medium_asteroid_count: MEDIUM_ASTEROID_COUNT,
            small_asteroid_count: SMALL_ASTEROID_COUNT,
            fragment_count: FRAGMENT_COUNT,
            starting_lives: STARTING_LIVES,
            ship_speed: SPEED_UNIT,
            drift_speed: DRIFT_SPEED,
            rotate_degree: ROTATE_DEGREE,
            relocation_attempts: RELOCATION_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        validate_speed("ship_speed", self.ship_speed)?;
        validate_speed("drift_speed", self.drift_speed)?;
        validate_speed("rotate_degree", self.rotate_degree)?;
        validate_relocation_attempts(self.relocation_attempts)?;
        if self.starting_lives < 1 {
            return Err(SimError::InvalidConfig {
                name: "starting_lives",
                value: self.starting_lives as f32,
                expected: "[1, ∞)",
            });
        }
        Ok(())
    }

    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str, path: &str) -> SimResult<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|e| SimError::ConfigParse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Load the config from `path`.
///
/// A missing file is not an error (defaults are returned).  Parse or
/// validation failures are logged and also fall back to defaults, so a bad
/// edit never prevents the game from starting.
pub fn load_game_config(path: impl AsRef<Path>) -> GameConfig {
    let path = path.as_ref();
    let display_path = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(contents) => match GameConfig::from_toml_str(&contents, &display_path) {
            Ok(loaded) => {
                info!("Loaded game config from {}", display_path);
                loaded
            }
            Err(e) => {
                warn!("{e}; using defaults");
                GameConfig::default()
            }
        },
        Err(_) => {
            info!("No {} found; using compiled defaults", display_path);
            GameConfig::default()
        }
    }
}

/// Startup system: replace the [`GameConfig`] resource with the contents of
/// [`CONFIG_PATH`].  Must run before the scene is built.
pub fn load_game_config_system(mut config: ResMut<GameConfig>) {
    *config = load_game_config(CONFIG_PATH);
}
