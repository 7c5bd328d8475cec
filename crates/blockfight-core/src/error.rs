//! Error types for the simulation's API surface.
//!
//! Gameplay itself never fails: quantities are clamped and capped actions are
//! dropped. Errors only arise from invalid tuning and from asking the match
//! state machine for a transition its current phase does not allow.

use thiserror::Error;

use crate::entity::FighterSlot;

/// Errors produced while loading or validating a [`Tuning`](crate::config::Tuning).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value was NaN or infinite.
    #[error("tuning value `{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A value that must be strictly positive was zero or negative.
    #[error("tuning value `{field}` must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A value that must not be negative was negative.
    #[error("tuning value `{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A spawn point lies outside the arena.
    #[error("spawn x {x} for {slot} lies outside the arena [0, {arena_width}]")]
    SpawnOutOfBounds {
        /// Fighter whose spawn point is invalid.
        slot: FighterSlot,
        /// The configured spawn x.
        x: f32,
        /// The configured arena width.
        arena_width: f32,
    },

    /// The ground line sits outside the arena or leaves no room for a fighter.
    #[error("ground line {ground_y} must lie in ({fighter_height}, {arena_height}]")]
    GroundOutOfBounds {
        /// The configured ground line.
        ground_y: f32,
        /// The configured fighter height.
        fighter_height: f32,
        /// The configured arena height.
        arena_height: f32,
    },

    /// The projectile cap was zero.
    #[error("max_live_projectiles must be at least 1")]
    ZeroProjectileCap,

    /// The tuning document was not valid JSON for [`Tuning`](crate::config::Tuning).
    #[error("malformed tuning document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by match phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// `restart()` or `terminate()` was requested while the round is still running.
    #[error("the round is still in progress")]
    RoundInProgress,

    /// A transition was requested after the match was terminated.
    #[error("the match has been terminated")]
    Terminated,
}
