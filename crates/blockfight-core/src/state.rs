//! `MatchState` holds everything the simulation mutates.
//!
//! The state is owned by a [`Match`](crate::simulation::Match) and mutated only
//! by the resolvers during [`Match::advance`](crate::simulation::Match::advance)
//! and by press/release calls between ticks. Renderers never see it directly;
//! they receive a [`Snapshot`](crate::snapshot::Snapshot).

use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::entity::{Fighter, FighterSlot, Projectile, ProjectileId, SlashEffect};
use crate::input::ControlState;

/// Match phase.
///
/// `Running` → `RoundOver` when a fighter's health reaches zero, then either
/// back to `Running` on restart or to `Terminated` on quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ticks are being processed.
    Running,
    /// A fighter fell; waiting for the host to restart or quit.
    RoundOver {
        /// Winner of the finished round.
        winner: FighterSlot,
    },
    /// The host declined to restart. No further transitions.
    Terminated,
}

impl MatchPhase {
    /// Whether ticks are processed in this phase.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Complete mutable state of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Both fighters, indexed by [`FighterSlot::index`].
    pub fighters: [Fighter; 2],
    /// Live projectiles in spawn order.
    pub projectiles: Vec<Projectile>,
    /// Live slash effects in spawn order.
    pub effects: Vec<SlashEffect>,
    /// Held controls and debounce latches.
    pub controls: ControlState,
    /// Current phase.
    pub phase: MatchPhase,
    /// Ticks processed since the match was created.
    pub tick: u64,
    /// Round number, starting at 1.
    pub round: u32,
    /// Ticks processed in the current round.
    pub round_tick: u64,
    /// Next projectile id to hand out.
    next_projectile_id: u64,
}

impl MatchState {
    /// Creates a fresh state for round one with both fighters at spawn.
    #[must_use]
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            fighters: [
                Fighter::spawn(FighterSlot::One, tuning),
                Fighter::spawn(FighterSlot::Two, tuning),
            ],
            projectiles: Vec::new(),
            effects: Vec::new(),
            controls: ControlState::new(),
            phase: MatchPhase::Running,
            tick: 0,
            round: 1,
            round_tick: 0,
            next_projectile_id: 0,
        }
    }

    /// The fighter in `slot`.
    #[must_use]
    pub fn fighter(&self, slot: FighterSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    /// Mutable access to the fighter in `slot`.
    pub fn fighter_mut(&mut self, slot: FighterSlot) -> &mut Fighter {
        &mut self.fighters[slot.index()]
    }

    /// Hands out the next projectile id.
    pub fn allocate_projectile_id(&mut self) -> ProjectileId {
        let id = ProjectileId::new(self.next_projectile_id);
        self.next_projectile_id += 1;
        id
    }

    /// Starts a new round: fighters back to spawn, projectiles, effects and
    /// held controls cleared, phase `Running`.
    ///
    /// The tick counter, round counter and projectile ids carry over.
    pub fn reset_round(&mut self, tuning: &Tuning) {
        for fighter in &mut self.fighters {
            fighter.reset(tuning);
        }
        self.projectiles.clear();
        self.effects.clear();
        self.controls.clear();
        self.phase = MatchPhase::Running;
        self.round += 1;
        self.round_tick = 0;
    }

    /// The round's winner if a fighter has fallen.
    ///
    /// Slot one wins iff its health is above zero; when both fall on the same
    /// tick slot two wins.
    #[must_use]
    pub fn decided_winner(&self) -> Option<FighterSlot> {
        let one = self.fighter(FighterSlot::One);
        let two = self.fighter(FighterSlot::Two);
        if one.health <= 0.0 || two.health <= 0.0 {
            Some(if one.health > 0.0 {
                FighterSlot::One
            } else {
                FighterSlot::Two
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn new_state_is_running_round_one() {
        let state = MatchState::new(&Tuning::default());
        assert_eq!(state.phase, MatchPhase::Running);
        assert_eq!(state.round, 1);
        assert_eq!(state.tick, 0);
        assert!(state.projectiles.is_empty());
        assert!(state.effects.is_empty());
        assert_eq!(state.fighter(FighterSlot::Two).slot, FighterSlot::Two);
    }

    #[test]
    fn projectile_ids_increase() {
        let mut state = MatchState::new(&Tuning::default());
        let a = state.allocate_projectile_id();
        let b = state.allocate_projectile_id();
        assert!(a < b);
    }

    #[test]
    fn no_winner_while_both_stand() {
        let state = MatchState::new(&Tuning::default());
        assert_eq!(state.decided_winner(), None);
    }

    #[test]
    fn winner_is_the_survivor() {
        let mut state = MatchState::new(&Tuning::default());
        state.fighter_mut(FighterSlot::One).health = 0.0;
        assert_eq!(state.decided_winner(), Some(FighterSlot::Two));

        let mut state = MatchState::new(&Tuning::default());
        state.fighter_mut(FighterSlot::Two).health = 0.0;
        assert_eq!(state.decided_winner(), Some(FighterSlot::One));
    }

    #[test]
    fn double_knockout_goes_to_slot_two() {
        let mut state = MatchState::new(&Tuning::default());
        state.fighter_mut(FighterSlot::One).health = 0.0;
        state.fighter_mut(FighterSlot::Two).health = 0.0;
        assert_eq!(state.decided_winner(), Some(FighterSlot::Two));
    }

    #[test]
    fn reset_round_restores_spawn_state() {
        let tuning = Tuning::default();
        let mut state = MatchState::new(&tuning);
        state.fighter_mut(FighterSlot::One).position = Vec2::new(400.0, 200.0);
        state.fighter_mut(FighterSlot::Two).health = 0.0;
        state.effects.push(SlashEffect::new(Vec2::ZERO, crate::entity::Facing::Left));
        state.controls.press(crate::input::ControlCode::KEY_A);
        state.phase = MatchPhase::RoundOver {
            winner: FighterSlot::One,
        };
        state.tick = 77;
        state.round_tick = 77;

        state.reset_round(&tuning);

        assert_eq!(state.fighter(FighterSlot::One).position, Vec2::new(50.0, 300.0));
        assert_eq!(state.fighter(FighterSlot::Two).health, 100.0);
        assert!(state.effects.is_empty());
        assert!(state.controls.is_empty());
        assert_eq!(state.phase, MatchPhase::Running);
        assert_eq!(state.round, 2);
        assert_eq!(state.round_tick, 0);
        assert_eq!(state.tick, 77);
    }
}
