//! Resolver module: the per-tick state mutation stages.
//!
//! Each tick, once input has been resolved into [`Intents`], the match runs its
//! resolvers in a fixed order:
//!
//! 1. [`PhysicsResolver`]: movement, jump, gravity, ground clamp, facing
//! 2. [`CombatResolver`]: melee, projectile spawn/flight/hits, shield regen
//! 3. [`EffectResolver`]: slash fade and expiry
//!
//! # Invariants
//!
//! - Resolvers MUST be deterministic given the same state and intents
//! - Resolvers iterate fighters in slot order and collections in spawn order
//! - Resolvers never read events; they only record them

mod combat;
mod effects;
mod physics;

pub use combat::CombatResolver;
pub use effects::EffectResolver;
pub use physics::PhysicsResolver;

use crate::config::Tuning;
use crate::entity::FighterSlot;
use crate::events::EventLog;
use crate::input::Intents;
use crate::state::MatchState;

/// Read-only inputs shared by every resolver for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    /// Tick being processed (1-based).
    pub tick: u64,
    /// Gameplay constants.
    pub tuning: &'a Tuning,
    /// Resolved intents, indexed by [`FighterSlot::index`].
    pub intents: [Intents; 2],
}

impl TickContext<'_> {
    /// Intents for `slot`.
    #[must_use]
    pub const fn intents_for(&self, slot: FighterSlot) -> Intents {
        self.intents[slot.index()]
    }
}

/// A stage of the tick that mutates the match state.
///
/// # Example
///
/// ```
/// use blockfight_core::events::EventLog;
/// use blockfight_core::resolver::{Resolver, TickContext};
/// use blockfight_core::state::MatchState;
///
/// struct Noop;
///
/// impl Resolver for Noop {
///     fn name(&self) -> &'static str {
///         "noop"
///     }
///
///     fn resolve(&self, _ctx: &TickContext<'_>, _state: &mut MatchState, _log: &mut EventLog) {}
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Applies this stage to `state`, recording anything notable in `log`.
    fn resolve(&self, ctx: &TickContext<'_>, state: &mut MatchState, log: &mut EventLog);
}

/// The resolvers in tick order.
#[must_use]
pub fn default_pipeline() -> Vec<Box<dyn Resolver>> {
    vec![
        Box::new(PhysicsResolver::new()),
        Box::new(CombatResolver::new()),
        Box::new(EffectResolver::new()),
    ]
}

/// Axis-aligned proximity: both gaps strictly below their reach.
pub(crate) fn within_reach(dx: f32, dy: f32, reach_x: f32, reach_y: f32) -> bool {
    dx.abs() < reach_x && dy.abs() < reach_y
}
