//! Physics resolver for fighter movement.
//!
//! The `PhysicsResolver` handles, per fighter:
//! - Horizontal steps from `MOVE_LEFT` / `MOVE_RIGHT` (both may apply and cancel)
//! - Shield stance from `SHIELD`
//! - Jump impulse from `JUMP` (grounded only)
//! - Gravity and ground clamping
//!
//! and then recomputes both fighters' facing from their new positions.
//!
//! # Fixed Timestep
//!
//! All rates are per tick. Integration is explicit Euler with one substep:
//! velocity first, then position.

use crate::config::Tuning;
use crate::entity::{Facing, Fighter};
use crate::events::EventLog;
use crate::input::Intents;
use crate::state::MatchState;

use super::{Resolver, TickContext};

/// Resolver for fighter movement and orientation.
///
/// # Example
///
/// ```
/// use blockfight_core::resolver::{PhysicsResolver, Resolver};
///
/// let resolver = PhysicsResolver::new();
/// assert_eq!(resolver.name(), "physics");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicsResolver;

impl PhysicsResolver {
    /// Creates a new physics resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies one fighter's intents and integrates its vertical motion.
    pub fn step_fighter(fighter: &mut Fighter, intents: Intents, tuning: &Tuning) {
        if intents.contains(Intents::MOVE_LEFT) {
            fighter.position.x -= tuning.move_step;
        }
        if intents.contains(Intents::MOVE_RIGHT) {
            fighter.position.x += tuning.move_step;
        }

        fighter.shielding = intents.contains(Intents::SHIELD);

        if intents.contains(Intents::JUMP) && fighter.on_ground {
            fighter.velocity_y = tuning.jump_impulse;
            fighter.on_ground = false;
        }

        if !fighter.on_ground {
            fighter.velocity_y += tuning.gravity;
            fighter.position.y += fighter.velocity_y;
        }

        let ground = tuning.ground_contact_y();
        if fighter.position.y >= ground {
            fighter.position.y = ground;
            fighter.velocity_y = 0.0;
            fighter.on_ground = true;
        }
    }

    /// Points each fighter at the other.
    pub fn update_facing(fighters: &mut [Fighter; 2]) {
        let (x_one, x_two) = (fighters[0].position.x, fighters[1].position.x);
        fighters[0].facing = Facing::toward(x_one, x_two);
        fighters[1].facing = Facing::toward(x_two, x_one);
    }
}

impl Resolver for PhysicsResolver {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn resolve(&self, ctx: &TickContext<'_>, state: &mut MatchState, _log: &mut EventLog) {
        for fighter in &mut state.fighters {
            let intents = ctx.intents_for(fighter.slot);
            Self::step_fighter(fighter, intents, ctx.tuning);
        }
        Self::update_facing(&mut state.fighters);
    }
}
