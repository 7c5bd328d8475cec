//! Property tests: invariants that hold under arbitrary input.

use proptest::prelude::*;

use crate::entity::FighterSlot;
use crate::events::MatchEvent;
use crate::simulation::Match;
use crate::state::MatchState;

use super::helpers::{Action, ALL_CONTROLS};

fn action() -> impl Strategy<Value = Action> {
    let code = prop::sample::select(ALL_CONTROLS.to_vec());
    prop_oneof![
        code.clone().prop_map(Action::Press),
        code.prop_map(Action::Release),
        Just(Action::Advance),
        Just(Action::Advance),
    ]
}

fn script() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action(), 1..400)
}

fn check_invariants(state: &MatchState, ground: f32) -> Result<(), TestCaseError> {
    for fighter in &state.fighters {
        prop_assert!((0.0..=100.0).contains(&fighter.health), "health {}", fighter.health);
        prop_assert!((0.0..=100.0).contains(&fighter.shield), "shield {}", fighter.shield);
        prop_assert!(fighter.position.y <= ground, "y {} below ground", fighter.position.y);
        let resting = fighter.position.y == ground && fighter.velocity_y == 0.0;
        prop_assert_eq!(fighter.on_ground, resting);
    }
    prop_assert!(state.projectiles.len() <= 3);
    for effect in &state.effects {
        prop_assert!(effect.alpha > 0.0 && effect.alpha <= 1.0);
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_every_tick(script in script()) {
        let mut game = Match::default();
        let ground = game.tuning().ground_contact_y();

        for action in script {
            match action {
                Action::Press(code) => game.press(code),
                Action::Release(code) => game.release(code),
                Action::Advance => {
                    if game.winner().is_some() {
                        game.restart().unwrap();
                    }
                    game.advance();
                    check_invariants(game.state(), ground)?;
                }
            }
        }
    }

    #[test]
    fn attacks_fire_at_most_once_per_press(script in script()) {
        let mut game = Match::default();
        let bindings = game.state().fighter(FighterSlot::One).bindings;
        let (mut melee_presses, mut ranged_presses) = (0_usize, 0_usize);
        let (mut swings, mut shots) = (0_usize, 0_usize);

        for action in script {
            match action {
                Action::Press(code) => {
                    let fresh = !game.state().controls.is_held(code);
                    if fresh && code == bindings.melee {
                        melee_presses += 1;
                    }
                    if fresh && code == bindings.ranged {
                        ranged_presses += 1;
                    }
                    game.press(code);
                }
                Action::Release(code) => game.release(code),
                Action::Advance => {
                    for event in game.advance().events {
                        match event {
                            MatchEvent::MeleeSwing { attacker: FighterSlot::One, .. } => swings += 1,
                            MatchEvent::ProjectileFired { owner: FighterSlot::One, .. }
                            | MatchEvent::ProjectileRejected { owner: FighterSlot::One } => shots += 1,
                            _ => {}
                        }
                    }
                }
            }
        }

        prop_assert!(swings <= melee_presses);
        prop_assert!(shots <= ranged_presses);
    }

    #[test]
    fn replay_is_identical(script in script()) {
        let mut first = Match::default();
        let mut second = Match::default();

        for game in [&mut first, &mut second] {
            for action in &script {
                match *action {
                    Action::Press(code) => game.press(code),
                    Action::Release(code) => game.release(code),
                    Action::Advance => {
                        game.advance();
                    }
                }
            }
        }

        prop_assert_eq!(first.snapshot(), second.snapshot());
    }
}
