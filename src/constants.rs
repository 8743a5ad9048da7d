//! Centralised field geometry and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//!
//! ## Axis convention
//!
//! The field is addressed as `(x, y)` where **`x` is the row** (vertical,
//! bounded by [`SCREEN_HEIGHT`]) and **`y` is the column** (horizontal, bounded
//! by [`SCREEN_WIDTH`]).  Every module follows this convention, including the
//! `Vec2` values used for sub-pixel geometry.

// ── Field ─────────────────────────────────────────────────────────────────────

/// Horizontal extent of the field in pixels (the `y` axis).
pub const SCREEN_WIDTH: u32 = 1024;

/// Vertical extent of the field in pixels (the `x` axis).
pub const SCREEN_HEIGHT: u32 = 768;

/// Thickness of each of the four border bodies.
pub const BORDER_WIDTH: u32 = 10;

// ── Units ─────────────────────────────────────────────────────────────────────

/// Base length every entity size is expressed in.
pub const SIZE_UNIT: u32 = 10;

/// Ship speed multiplier applied to `direction · dt`.
///
/// Also bounds the random components of asteroid directions and of the ship's
/// post-hit relocation offset.
pub const SPEED_UNIT: f32 = 10.0;

/// Speed multiplier for asteroids and projectiles (`direction · dt · DRIFT_SPEED`).
pub const DRIFT_SPEED: f32 = 10.0;

/// Nozzle rotation rate.  Applied as `ROTATE_DEGREE · dt / 2` **radians** per frame.
pub const ROTATE_DEGREE: f32 = 20.0;

// ── Colors (0xRRGGBB) ─────────────────────────────────────────────────────────

pub const COLOR_BORDERS: u32 = 0x000000;
pub const COLOR_SHIP: u32 = 0x77AA33;
/// Added to [`COLOR_SHIP`] to tint the nozzle.
pub const COLOR_NOZZLE_TINT: u32 = 0x663300;
pub const COLOR_PROJECTILE: u32 = 0xFF0022;
pub const COLOR_ASTEROID_LARGE: u32 = 0x550066;
pub const COLOR_ASTEROID_MEDIUM: u32 = 0x552222;
pub const COLOR_ASTEROID_SMALL: u32 = 0x557722;

// ── Entity Sizes ──────────────────────────────────────────────────────────────

pub const SHIP_HULL_SIZE: u32 = SIZE_UNIT * 3;
pub const SHIP_NOZZLE_SIZE: u32 = SIZE_UNIT;
pub const PROJECTILE_SIZE: u32 = SIZE_UNIT;
pub const ASTEROID_LARGE_SIZE: u32 = SIZE_UNIT * 10;
pub const ASTEROID_MEDIUM_SIZE: u32 = SIZE_UNIT * 5;
pub const ASTEROID_SMALL_SIZE: u32 = SIZE_UNIT * 2;

/// Top-left corners of the three life icons.
pub const LIFE_ICON_POSITIONS: [(f32, f32); 3] = [(10.0, 15.0), (10.0, 65.0), (10.0, 115.0)];

// ── Collision Categories ──────────────────────────────────────────────────────
//
// A body reacts to another when `self.layer & other.mask != 0`.

pub const BORDER_MASK: u16 = 0x01;
/// Carried by the ship *and* by every projectile it fires.
pub const SHIP_MASK: u16 = 0x02;
pub const LARGE_ASTEROID_MASK: u16 = 0x04;
pub const MEDIUM_ASTEROID_MASK: u16 = 0x08;
pub const SMALL_ASTEROID_MASK: u16 = 0x10;
/// Union of all asteroid masks.
pub const ANY_ASTEROID_MASK: u16 = LARGE_ASTEROID_MASK | MEDIUM_ASTEROID_MASK | SMALL_ASTEROID_MASK;

pub const SHIP_LAYER: u16 = BORDER_MASK | ANY_ASTEROID_MASK;
pub const PROJECTILE_LAYER: u16 = BORDER_MASK;
pub const ASTEROID_LAYER: u16 = BORDER_MASK | SHIP_MASK;

// ── Scene Setup ───────────────────────────────────────────────────────────────

pub const LARGE_ASTEROID_COUNT: u16 = 3;
pub const MEDIUM_ASTEROID_COUNT: u16 = 6;
pub const SMALL_ASTEROID_COUNT: u16 = 8;

/// Children spawned when a large or medium asteroid is destroyed.
pub const FRAGMENT_COUNT: u16 = 4;

pub const STARTING_LIVES: i32 = 3;

/// Random candidates tried when relocating the ship after an asteroid hit
/// before falling back to the field centre.
pub const RELOCATION_ATTEMPTS: u32 = 64;
