//! # Blockfight Core
//!
//! Deterministic simulation core for a two-fighter, side-view arena game.
//!
//! This crate owns everything that happens inside a tick: control state,
//! movement and gravity, melee and projectile combat, shields, slash effects
//! and the round state machine. Rendering, windows and timers belong to the
//! host, which talks to the core through [`host`].
//!
//! ## Architecture
//!
//! - **Entities**: Fighters, projectiles, slash effects
//! - **Input**: Held controls with per-press latches, resolved into intents
//! - **Resolvers**: Physics, combat, effects, run in a fixed order
//! - **Snapshots**: Immutable per-tick views for renderers
//!
//! ## Usage
//!
//! ```
//! use blockfight_core::input::ControlCode;
//! use blockfight_core::{Match, MatchPhase};
//!
//! let mut game = Match::default();
//! game.press(ControlCode::KEY_D);
//! for _ in 0..10 {
//!     game.advance();
//! }
//!
//! assert_eq!(game.snapshot().fighters[0].position.x, 100.0);
//! assert_eq!(game.phase(), MatchPhase::Running);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod host;
pub mod input;
pub mod resolver;
pub mod simulation;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::Tuning;
pub use error::{ConfigError, MatchError};
pub use events::{MatchEvent, TickReport};
pub use simulation::Match;
pub use snapshot::Snapshot;
pub use state::MatchPhase;
