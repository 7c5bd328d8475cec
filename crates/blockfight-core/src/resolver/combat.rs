//! Combat resolver for melee, projectiles and shield regeneration.
//!
//! The `CombatResolver` handles:
//! - `MELEE` intents: spawn a slash effect and resolve the hit instantly
//! - `RANGED` intents: spawn a projectile unless the shared cap is reached
//! - Projectile flight: advance, hit-test against the non-owner, cull out of bounds
//! - Shield regeneration for fighters not shielding
//!
//! # Damage Routing
//!
//! Every hit goes through [`Fighter::take_hit`]: a shielding target loses
//! shield, anyone else loses health. Both floor at zero.

use glam::Vec2;
use tracing::debug;

use crate::config::Tuning;
use crate::entity::{FighterSlot, Projectile, SlashEffect};
use crate::events::{EventLog, MatchEvent};
use crate::input::Intents;
use crate::state::MatchState;

use super::{within_reach, Resolver, TickContext};

/// Resolver for attacks, projectile flight and shield regeneration.
///
/// # Processing Order
///
/// 1. For each fighter in slot order: melee, then ranged spawn
/// 2. Advance every live projectile (including ones spawned this tick) and
///    resolve hits, building the next generation of the live set
/// 3. Regenerate shields
///
/// # Example
///
/// ```
/// use blockfight_core::resolver::{CombatResolver, Resolver};
///
/// let resolver = CombatResolver::new();
/// assert_eq!(resolver.name(), "combat");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Swings for `attacker`.
    ///
    /// The slash effect always spawns. The hit test uses both fighters'
    /// current positions; where the slash is drawn does not matter.
    fn melee(attacker: FighterSlot, state: &mut MatchState, tuning: &Tuning, log: &mut EventLog) {
        let (origin, facing) = {
            let fighter = state.fighter(attacker);
            (fighter.position, fighter.facing)
        };

        let slash_at = origin + Vec2::new(tuning.slash_offset_x * facing.sign(), tuning.slash_offset_y);
        state.effects.push(SlashEffect::new(slash_at, facing));
        log.record(MatchEvent::MeleeSwing {
            attacker,
            direction: facing,
        });

        let target = state.fighter_mut(attacker.opponent());
        let gap = target.position - origin;
        if within_reach(gap.x, gap.y, tuning.melee_reach_x, tuning.melee_reach_y) {
            let blocked = target.take_hit(tuning.melee_damage, tuning.melee_shield_damage);
            debug!(%attacker, blocked, health = target.health, shield = target.shield, "melee hit");
            log.record(MatchEvent::MeleeHit { attacker, blocked });
        }
    }

    /// Fires for `attacker` if the shared projectile cap allows it.
    ///
    /// The shot travels in the attacker's slot direction, not its facing.
    fn fire(attacker: FighterSlot, state: &mut MatchState, tuning: &Tuning, log: &mut EventLog) {
        if state.projectiles.len() >= tuning.max_live_projectiles {
            debug!(%attacker, live = state.projectiles.len(), "projectile cap reached, shot dropped");
            log.record(MatchEvent::ProjectileRejected { owner: attacker });
            return;
        }

        let direction = attacker.ranged_direction().sign();
        let origin = state.fighter(attacker).position;
        let id = state.allocate_projectile_id();
        state.projectiles.push(Projectile {
            id,
            position: origin
                + Vec2::new(tuning.projectile_offset_x * direction, tuning.projectile_offset_y),
            velocity_x: tuning.projectile_speed * direction,
            owner: attacker,
            color: attacker.color(),
        });
        debug!(%attacker, %id, "projectile fired");
        log.record(MatchEvent::ProjectileFired {
            owner: attacker,
            id,
        });
    }

    /// Moves every projectile, applies hits and rebuilds the live set from
    /// the survivors.
    fn advance_projectiles(state: &mut MatchState, tuning: &Tuning, log: &mut EventLog) {
        let live = std::mem::take(&mut state.projectiles);
        let mut survivors = Vec::with_capacity(live.len());

        for mut projectile in live {
            projectile.position.x += projectile.velocity_x;

            let target = state.fighter_mut(projectile.owner.opponent());
            let gap = projectile.position - target.position;
            if within_reach(
                gap.x,
                gap.y,
                tuning.projectile_reach_x,
                tuning.projectile_reach_y,
            ) {
                let blocked =
                    target.take_hit(tuning.projectile_damage, tuning.projectile_shield_damage);
                debug!(
                    owner = %projectile.owner,
                    id = %projectile.id,
                    blocked,
                    health = target.health,
                    shield = target.shield,
                    "projectile hit"
                );
                log.record(MatchEvent::ProjectileHit {
                    owner: projectile.owner,
                    id: projectile.id,
                    blocked,
                });
                continue;
            }

            if !projectile.in_bounds(tuning.arena_width) {
                log.record(MatchEvent::ProjectileExpired {
                    id: projectile.id,
                    position: projectile.position,
                });
                continue;
            }

            survivors.push(projectile);
        }

        state.projectiles = survivors;
    }

    /// Regenerates shield for every fighter not shielding.
    fn regenerate_shields(state: &mut MatchState, tuning: &Tuning) {
        for fighter in &mut state.fighters {
            if !fighter.shielding {
                fighter.regenerate_shield(tuning.shield_regen, tuning.max_shield);
            }
        }
    }
}

impl Resolver for CombatResolver {
    fn name(&self) -> &'static str {
        "combat"
    }

    fn resolve(&self, ctx: &TickContext<'_>, state: &mut MatchState, log: &mut EventLog) {
        for slot in FighterSlot::ALL {
            let intents = ctx.intents_for(slot);
            if intents.contains(Intents::MELEE) {
                Self::melee(slot, state, ctx.tuning, log);
            }
            if intents.contains(Intents::RANGED) {
                Self::fire(slot, state, ctx.tuning, log);
            }
        }

        Self::advance_projectiles(state, ctx.tuning, log);
        Self::regenerate_shields(state, ctx.tuning);
    }
}
