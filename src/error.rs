//! Simulation-specific error types.
//!
//! The per-frame geometry path never errors: rejected transforms report
//! `false` and leave state untouched.  These types cover the edges of the
//! crate instead: configuration loading and composite-shape snapshots.
//!
//! ## Usage
//!
//! ```rust
//! use rockfield::error::{SimError, SimResult};
//!
//! fn parse_count(raw: i64) -> SimResult<u16> {
//!     u16::try_from(raw).map_err(|_| SimError::InvalidConfig {
//!         name: "large_asteroid_count",
//!         value: raw as f32,
//!         expected: "0..=65535",
//!     })
//! }
//! # assert!(parse_count(3).is_ok());
//! ```

use std::fmt;

/// Top-level error enum for the rockfield simulation.
#[derive(Debug)]
pub enum SimError {
    /// A configuration value is outside the range the simulation can run with.
    InvalidConfig {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// The configuration file exists but is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        path: String,
        message: String,
    },

    /// A composite-shape snapshot could not be serialized.
    SnapshotEncode(String),

    /// A composite-shape snapshot could not be parsed or has an unsupported version.
    SnapshotDecode(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is outside accepted range {}",
                name, value, expected
            ),
            SimError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
            SimError::SnapshotEncode(message) => {
                write!(f, "failed to encode shape snapshot: {}", message)
            }
            SimError::SnapshotDecode(message) => {
                write!(f, "failed to decode shape snapshot: {}", message)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if a speed multiplier is not strictly positive and finite.
pub fn validate_speed(name: &'static str, value: f32) -> SimResult<()> {
    if !value.is_finite() || value <= 0.0 {
        Err(SimError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if the relocation retry budget is zero.
///
/// Zero attempts would always fall straight through to the centre fallback.
pub fn validate_relocation_attempts(value: u32) -> SimResult<()> {
    if value == 0 {
        Err(SimError::InvalidConfig {
            name: "relocation_attempts",
            value: value as f32,
            expected: "[1, ∞)",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_must_be_positive() {
        assert!(validate_speed("ship_speed", 10.0).is_ok());
        assert!(validate_speed("ship_speed", 0.0).is_err());
        assert!(validate_speed("ship_speed", -1.0).is_err());
        assert!(validate_speed("ship_speed", f32::NAN).is_err());
    }

    #[test]
    fn relocation_attempts_must_be_nonzero() {
        assert!(validate_relocation_attempts(1).is_ok());
        assert!(validate_relocation_attempts(0).is_err());
    }

    #[test]
    fn display_names_the_rejected_key() {
        let err = validate_speed("drift_speed", -2.0).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("drift_speed"), "message was: {text}");
    }
}
