//! Test helper functions for setting up matches and scripting input.

use crate::entity::FighterSlot;
use crate::events::TickReport;
use crate::input::ControlCode;
use crate::simulation::Match;
use crate::snapshot::Snapshot;

// =============================================================================
// Scripted Input
// =============================================================================

/// One host action in an input script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press a control.
    Press(ControlCode),
    /// Release a control.
    Release(ControlCode),
    /// Run one tick.
    Advance,
}

/// Every control either fighter can use, shields included.
pub const ALL_CONTROLS: [ControlCode; 12] = [
    ControlCode::KEY_A,
    ControlCode::KEY_D,
    ControlCode::KEY_W,
    ControlCode::KEY_Q,
    ControlCode::KEY_E,
    ControlCode::SHIFT,
    ControlCode::ARROW_LEFT,
    ControlCode::ARROW_RIGHT,
    ControlCode::ARROW_UP,
    ControlCode::NUMPAD_1,
    ControlCode::NUMPAD_2,
    ControlCode::CONTROL,
];

/// Applies `script` to `game` and returns the snapshot after every tick.
pub fn play(game: &mut Match, script: &[Action]) -> Vec<Snapshot> {
    let mut frames = Vec::new();
    for action in script {
        match *action {
            Action::Press(code) => game.press(code),
            Action::Release(code) => game.release(code),
            Action::Advance => {
                game.advance();
                frames.push(game.snapshot());
            }
        }
    }
    frames
}

// =============================================================================
// Match Setup
// =============================================================================

/// Moves a fighter to `x`. Facing catches up in the next tick's physics step,
/// before combat runs.
pub fn place(game: &mut Match, slot: FighterSlot, x: f32) {
    game.state_mut().fighter_mut(slot).position.x = x;
}

/// Presses `code`, runs one tick and releases it.
pub fn tap(game: &mut Match, code: ControlCode) -> TickReport {
    game.press(code);
    let report = game.advance();
    game.release(code);
    report
}

/// Runs `ticks` ticks with no change to the held controls.
pub fn idle(game: &mut Match, ticks: u32) {
    for _ in 0..ticks {
        game.advance();
    }
}

/// Health of the fighter in `slot`.
pub fn health(game: &Match, slot: FighterSlot) -> f32 {
    game.state().fighter(slot).health
}

/// Shield of the fighter in `slot`.
pub fn shield(game: &Match, slot: FighterSlot) -> f32 {
    game.state().fighter(slot).shield
}
