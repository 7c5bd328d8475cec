//! Test module for scenario, determinism and property tests.
//!
//! These tests drive a whole [`Match`](crate::simulation::Match) through its
//! public API, the way a host would:
//! - **Determinism tests**: Same script, same snapshots
//! - **Integration tests**: End-to-end gameplay scenarios
//! - **Property tests**: Invariants under random input
//!
//! # Test Structure
//!
//! - `determinism.rs`: Replays scripts on independent matches
//! - `integration.rs`: Gameplay scenarios tick by tick
//! - `properties.rs`: `proptest` invariants
//! - `helpers.rs`: Match setup and input scripting utilities

mod helpers;
mod properties;

pub use helpers::*;
