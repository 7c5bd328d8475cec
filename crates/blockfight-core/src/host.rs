//! Host seams: how a window, a headless runner or a test harness plugs into a
//! [`Match`].
//!
//! The core owns no clock, no window and no dialog. A host supplies:
//!
//! - a [`Renderer`] that receives one [`Snapshot`] per processed tick
//! - a [`MatchEndHandler`] that decides whether to play another round
//!
//! and [`TickDriver`] wires them to a match. The driver is clock-agnostic: the
//! host calls [`TickDriver::step`] at its own cadence (nominally every
//! [`TICK_MILLIS`](crate::config::TICK_MILLIS)).
//!
//! # Example
//!
//! ```
//! use blockfight_core::host::{RoundLimit, TickDriver};
//! use blockfight_core::simulation::Match;
//! use blockfight_core::snapshot::Snapshot;
//!
//! let mut frames = 0;
//! let mut driver = TickDriver::new(|_: &Snapshot| frames += 1, RoundLimit::new(1));
//! let mut game = Match::default();
//!
//! let summary = driver.run(&mut game, 10, |_, _| {}).unwrap();
//! drop(driver);
//!
//! assert_eq!(summary.ticks, 10);
//! assert_eq!(frames, 10);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entity::FighterSlot;
use crate::error::MatchError;
use crate::simulation::Match;
use crate::snapshot::Snapshot;
use crate::state::MatchPhase;

// =============================================================================
// Traits
// =============================================================================

/// Receives the view of each processed tick.
pub trait Renderer {
    /// Draws, streams or records `snapshot`.
    fn render(&mut self, snapshot: &Snapshot);
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot),
{
    fn render(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

/// The host's answer to "play again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundDecision {
    /// Reset the fighters and start another round.
    Restart,
    /// End the match.
    Quit,
}

/// Notified once per finished round.
pub trait MatchEndHandler {
    /// Called after the tick that ended the round.
    fn on_round_over(&mut self, winner: FighterSlot) -> RoundDecision;
}

/// Restarts until a fixed number of rounds has been played, then quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLimit {
    remaining: u32,
}

impl RoundLimit {
    /// Plays `rounds` rounds in total. Zero behaves like one.
    #[must_use]
    pub const fn new(rounds: u32) -> Self {
        Self { remaining: rounds }
    }
}

impl MatchEndHandler for RoundLimit {
    fn on_round_over(&mut self, _winner: FighterSlot) -> RoundDecision {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            RoundDecision::Quit
        } else {
            RoundDecision::Restart
        }
    }
}

// =============================================================================
// TickDriver
// =============================================================================

/// What a single driver step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A tick ran and the round continues.
    Ticked,
    /// The round was over and a new one was started.
    Restarted {
        /// Winner of the finished round.
        winner: FighterSlot,
        /// Whether a tick ran first. False when the round had already ended
        /// before the step.
        advanced: bool,
    },
    /// The round was over and the match was terminated.
    Finished {
        /// Winner of the final round.
        winner: FighterSlot,
        /// Whether a tick ran first. False when the round had already ended
        /// before the step.
        advanced: bool,
    },
    /// The match was already terminated; nothing ran.
    Stopped,
}

impl StepOutcome {
    /// Whether the step processed a tick.
    #[must_use]
    pub const fn advanced(self) -> bool {
        match self {
            Self::Ticked => true,
            Self::Restarted { advanced, .. } | Self::Finished { advanced, .. } => advanced,
            Self::Stopped => false,
        }
    }
}

/// Totals for a [`TickDriver::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ticks processed during the run.
    pub ticks: u64,
    /// Rounds won, indexed by [`FighterSlot::index`].
    pub wins: [u32; 2],
    /// Whether the run ended because the match was terminated.
    pub terminated: bool,
}

impl RunSummary {
    /// Rounds decided during the run.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins[0] + self.wins[1]
    }
}

/// Drives a [`Match`]: advance, render, and settle finished rounds.
#[derive(Debug)]
pub struct TickDriver<R, H> {
    renderer: R,
    handler: H,
}

impl<R: Renderer, H: MatchEndHandler> TickDriver<R, H> {
    /// Creates a driver from its two collaborators.
    pub const fn new(renderer: R, handler: H) -> Self {
        Self { renderer, handler }
    }

    /// Runs one tick and, if it ended the round, applies the handler's
    /// decision.
    ///
    /// # Errors
    ///
    /// Propagates [`MatchError`] from the phase transition. Transitions are
    /// only attempted from `RoundOver`, where they succeed.
    pub fn step(&mut self, game: &mut Match) -> Result<StepOutcome, MatchError> {
        match game.phase() {
            MatchPhase::Terminated => return Ok(StepOutcome::Stopped),
            MatchPhase::RoundOver { winner } => return self.settle(game, winner, false),
            MatchPhase::Running => {}
        }

        game.advance();
        self.renderer.render(&game.snapshot());

        match game.winner() {
            Some(winner) => self.settle(game, winner, true),
            None => Ok(StepOutcome::Ticked),
        }
    }

    fn settle(
        &mut self,
        game: &mut Match,
        winner: FighterSlot,
        advanced: bool,
    ) -> Result<StepOutcome, MatchError> {
        match self.handler.on_round_over(winner) {
            RoundDecision::Restart => {
                game.restart()?;
                Ok(StepOutcome::Restarted { winner, advanced })
            }
            RoundDecision::Quit => {
                game.terminate()?;
                Ok(StepOutcome::Finished { winner, advanced })
            }
        }
    }

    /// Steps until the match terminates or `max_ticks` ticks have run.
    ///
    /// `input` is called before every tick with the upcoming tick number so
    /// the host can press and release controls. A round that is already over
    /// when the run starts is settled first; that step does not count toward
    /// `max_ticks`.
    ///
    /// # Errors
    ///
    /// Propagates [`MatchError`] from [`TickDriver::step`].
    pub fn run<F>(
        &mut self,
        game: &mut Match,
        max_ticks: u64,
        mut input: F,
    ) -> Result<RunSummary, MatchError>
    where
        F: FnMut(u64, &mut Match),
    {
        let mut summary = RunSummary::default();

        while summary.ticks < max_ticks {
            if game.phase().is_running() {
                input(game.tick() + 1, game);
            }
            let outcome = self.step(game)?;
            if outcome.advanced() {
                summary.ticks += 1;
            }
            match outcome {
                StepOutcome::Ticked => {}
                StepOutcome::Restarted { winner, .. } => {
                    summary.wins[winner.index()] += 1;
                }
                StepOutcome::Finished { winner, .. } => {
                    summary.wins[winner.index()] += 1;
                    summary.terminated = true;
                    break;
                }
                StepOutcome::Stopped => {
                    summary.terminated = true;
                    break;
                }
            }
        }

        info!(
            ticks = summary.ticks,
            red_wins = summary.wins[0],
            blue_wins = summary.wins[1],
            terminated = summary.terminated,
            "run finished"
        );
        Ok(summary)
    }

    /// The renderer.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The match-end handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Splits the driver back into its collaborators.
    pub fn into_parts(self) -> (R, H) {
        (self.renderer, self.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ControlCode;

    #[derive(Default)]
    struct Recorder {
        ticks: Vec<u64>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, snapshot: &Snapshot) {
            self.ticks.push(snapshot.tick);
        }
    }

    struct Always(RoundDecision, Vec<FighterSlot>);

    impl MatchEndHandler for Always {
        fn on_round_over(&mut self, winner: FighterSlot) -> RoundDecision {
            self.1.push(winner);
            self.0
        }
    }

    fn doomed_match() -> Match {
        let mut game = Match::default();
        game.state_mut().fighter_mut(FighterSlot::One).health = 0.0;
        game
    }

    #[test]
    fn step_renders_each_tick() {
        let mut driver = TickDriver::new(Recorder::default(), RoundLimit::new(1));
        let mut game = Match::default();

        for _ in 0..3 {
            assert_eq!(driver.step(&mut game).unwrap(), StepOutcome::Ticked);
        }

        assert_eq!(driver.renderer().ticks, vec![1, 2, 3]);
    }

    #[test]
    fn restart_decision_starts_new_round() {
        let mut driver = TickDriver::new(Recorder::default(), Always(RoundDecision::Restart, vec![]));
        let mut game = doomed_match();

        let outcome = driver.step(&mut game).unwrap();

        assert_eq!(
            outcome,
            StepOutcome::Restarted {
                winner: FighterSlot::Two,
                advanced: true,
            }
        );
        assert!(outcome.advanced());
        assert_eq!(game.phase(), MatchPhase::Running);
        assert_eq!(game.round(), 2);
        assert_eq!(driver.handler().1, vec![FighterSlot::Two]);
    }

    #[test]
    fn quit_decision_terminates() {
        let mut driver = TickDriver::new(Recorder::default(), Always(RoundDecision::Quit, vec![]));
        let mut game = doomed_match();

        assert_eq!(
            driver.step(&mut game).unwrap(),
            StepOutcome::Finished {
                winner: FighterSlot::Two,
                advanced: true,
            }
        );
        assert_eq!(driver.step(&mut game).unwrap(), StepOutcome::Stopped);
        assert_eq!(driver.renderer().ticks, vec![1]);
    }

    #[test]
    fn step_settles_round_left_over_by_caller() {
        let mut driver = TickDriver::new(Recorder::default(), Always(RoundDecision::Quit, vec![]));
        let mut game = doomed_match();
        game.advance();

        let outcome = driver.step(&mut game).unwrap();

        assert_eq!(
            outcome,
            StepOutcome::Finished {
                winner: FighterSlot::Two,
                advanced: false,
            }
        );
        assert!(!outcome.advanced());
        assert!(driver.renderer().ticks.is_empty());
    }

    #[test]
    fn round_limit_counts_down() {
        let mut limit = RoundLimit::new(3);
        assert_eq!(limit.on_round_over(FighterSlot::One), RoundDecision::Restart);
        assert_eq!(limit.on_round_over(FighterSlot::Two), RoundDecision::Restart);
        assert_eq!(limit.on_round_over(FighterSlot::One), RoundDecision::Quit);

        assert_eq!(
            RoundLimit::new(0).on_round_over(FighterSlot::One),
            RoundDecision::Quit
        );
    }

    #[test]
    fn run_stops_at_max_ticks() {
        let mut driver = TickDriver::new(Recorder::default(), RoundLimit::new(1));
        let mut game = Match::default();

        let summary = driver.run(&mut game, 25, |_, _| {}).unwrap();

        assert_eq!(summary.ticks, 25);
        assert_eq!(summary.rounds(), 0);
        assert!(!summary.terminated);
        assert_eq!(game.tick(), 25);
    }

    #[test]
    fn run_passes_upcoming_tick_to_input() {
        let mut driver = TickDriver::new(Recorder::default(), RoundLimit::new(1));
        let mut game = Match::default();
        let mut seen = Vec::new();

        driver
            .run(&mut game, 3, |tick, game| {
                seen.push(tick);
                if tick == 2 {
                    game.press(ControlCode::KEY_D);
                }
            })
            .unwrap();

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(game.state().fighter(FighterSlot::One).position.x, 60.0);
    }

    #[test]
    fn run_counts_rounds_until_quit() {
        let mut driver = TickDriver::new(Recorder::default(), RoundLimit::new(2));
        let mut game = Match::default();

        let summary = driver
            .run(&mut game, 100, |_, game| {
                // Fighter 2 falls on every tick it is alive.
                game.state_mut().fighter_mut(FighterSlot::Two).health = 0.0;
            })
            .unwrap();

        assert_eq!(summary.wins, [2, 0]);
        assert_eq!(summary.ticks, 2);
        assert!(summary.terminated);
        assert_eq!(game.phase(), MatchPhase::Terminated);
    }

    #[test]
    fn run_settles_pending_round_without_spending_ticks() {
        let mut driver = TickDriver::new(Recorder::default(), RoundLimit::new(5));
        let mut game = doomed_match();
        game.advance();
        let before = game.tick();
        let mut inputs = Vec::new();

        let summary = driver
            .run(&mut game, 1, |tick, _| inputs.push(tick))
            .unwrap();

        assert_eq!(summary.wins, [0, 1]);
        assert_eq!(summary.ticks, 1);
        assert_eq!(game.tick() - before, 1);
        assert_eq!(game.round(), 2);
        assert_eq!(inputs, vec![before + 1]);
        assert_eq!(driver.renderer().ticks, vec![before + 1]);
    }

    #[test]
    fn run_from_finished_round_counts_no_ticks() {
        let mut driver = TickDriver::new(Recorder::default(), RoundLimit::new(1));
        let mut game = doomed_match();
        game.advance();

        let summary = driver.run(&mut game, 10, |_, _| {}).unwrap();

        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.wins, [0, 1]);
        assert!(summary.terminated);
        assert_eq!(game.tick(), 1);
    }
}
