//! Seeded random input: both fighters mash their controls.
//!
//! Every decision comes from one `ChaCha8Rng`, so a run is reproducible from
//! its seed.

use blockfight_core::entity::FighterSlot;
use blockfight_core::input::ControlCode;
use blockfight_core::Match;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Chance per fighter per tick of flipping one control.
const FLIP_CHANCE: f64 = 0.2;

/// Drives both fighters from a single seeded generator.
pub struct RandomPilot {
    rng: ChaCha8Rng,
}

impl RandomPilot {
    /// Creates a pilot whose every decision follows from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Presses or releases at most one control per fighter.
    pub fn drive(&mut self, game: &mut Match) {
        for slot in FighterSlot::ALL {
            if !self.rng.gen_bool(FLIP_CHANCE) {
                continue;
            }
            let controls = controls_for(game, slot);
            let code = controls[self.rng.gen_range(0..controls.len())];
            if game.state().controls.is_held(code) {
                game.release(code);
            } else {
                game.press(code);
            }
        }
    }
}

fn controls_for(game: &Match, slot: FighterSlot) -> [ControlCode; 6] {
    let bindings = game.state().fighter(slot).bindings;
    [
        bindings.left,
        bindings.right,
        bindings.jump,
        bindings.melee,
        bindings.ranged,
        ControlCode::shield_for(slot),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(seed: u64, ticks: usize) -> Match {
        let mut game = Match::default();
        let mut pilot = RandomPilot::new(seed);
        for _ in 0..ticks {
            pilot.drive(&mut game);
            game.advance();
        }
        game
    }

    #[test]
    fn same_seed_same_match() {
        assert_eq!(run(9, 500).snapshot(), run(9, 500).snapshot());
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(run(1, 500).snapshot(), run(2, 500).snapshot());
    }

    #[test]
    fn pilot_only_touches_bound_controls() {
        let game = run(3, 300);
        let mut allowed: Vec<ControlCode> = controls_for(&game, FighterSlot::One).to_vec();
        allowed.extend(controls_for(&game, FighterSlot::Two));
        assert!(game.state().controls.held().all(|code| allowed.contains(&code)));
    }
}
