//! Simulation module with the per-tick execution loop.
//!
//! The [`Match`] struct owns the state and runs one tick per
//! [`Match::advance`] call:
//!
//! 1. **INPUT**: Resolve held controls into per-fighter [`Intents`](crate::input::Intents),
//!    consuming edge-triggered presses
//! 2. **RESOLUTION**: Run the resolvers in order (physics, combat, effects)
//! 3. **CHECK**: Decide the round if a fighter has fallen
//!
//! # Determinism
//!
//! A match has no hidden inputs: no clock, no RNG, no global state. Given the
//! same tuning and the same sequence of press/release/advance calls, two
//! matches produce identical snapshots on every tick.
//!
//! # Example
//!
//! ```
//! use blockfight_core::input::ControlCode;
//! use blockfight_core::simulation::Match;
//!
//! let mut game = Match::default();
//!
//! // Fighter 1 fires once.
//! game.press(ControlCode::KEY_E);
//! let report = game.advance();
//! game.release(ControlCode::KEY_E);
//!
//! assert_eq!(report.tick, 1);
//! assert_eq!(game.snapshot().projectiles.len(), 1);
//! ```

use std::fmt;

use tracing::{debug, info};

use crate::config::Tuning;
use crate::entity::FighterSlot;
use crate::error::{ConfigError, MatchError};
use crate::events::{EventLog, MatchEvent, TickReport};
use crate::input::{ControlCode, InputResolver};
use crate::resolver::{default_pipeline, Resolver, TickContext};
use crate::snapshot::Snapshot;
use crate::state::{MatchPhase, MatchState};

// =============================================================================
// Match
// =============================================================================

/// A two-fighter match: state, tuning and the resolver pipeline.
///
/// `Match` is `Send`, so a host may move it to whatever thread runs its tick
/// loop, but it never spawns threads or takes locks itself.
pub struct Match {
    /// Everything the tick mutates.
    state: MatchState,
    /// Gameplay constants, fixed for the life of the match.
    tuning: Tuning,
    /// Resolvers in execution order.
    resolvers: Vec<Box<dyn Resolver>>,
    /// Events recorded during the current tick.
    log: EventLog,
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("state", &self.state)
            .field("tuning", &self.tuning)
            .field("resolvers", &format!("[{} resolvers]", self.resolvers.len()))
            .finish_non_exhaustive()
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::with_validated(Tuning::default())
    }
}

impl Match {
    /// Creates a match in round one with both fighters at spawn.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `tuning` fails [`Tuning::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use blockfight_core::config::Tuning;
    /// use blockfight_core::simulation::Match;
    ///
    /// let game = Match::new(Tuning::default()).unwrap();
    /// assert_eq!(game.tick(), 0);
    /// assert_eq!(game.round(), 1);
    ///
    /// let broken = Tuning { max_health: 0.0, ..Tuning::default() };
    /// assert!(Match::new(broken).is_err());
    /// ```
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self::with_validated(tuning))
    }

    fn with_validated(tuning: Tuning) -> Self {
        Self {
            state: MatchState::new(&tuning),
            tuning,
            resolvers: default_pipeline(),
            log: EventLog::new(),
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Marks `code` as held. Takes effect on the next tick.
    ///
    /// Unknown codes are stored but never bound to an intent. Pressing a code
    /// that is already held does not re-arm it.
    pub fn press(&mut self, code: ControlCode) {
        self.state.controls.press(code);
    }

    /// Marks `code` as released and re-arms it.
    pub fn release(&mut self, code: ControlCode) {
        self.state.controls.release(code);
    }

    // =========================================================================
    // Tick
    // =========================================================================

    /// Runs one tick.
    ///
    /// Outside [`MatchPhase::Running`] this changes nothing and returns a
    /// report with `advanced == false`.
    pub fn advance(&mut self) -> TickReport {
        if !self.state.phase.is_running() {
            return TickReport::skipped(self.state.tick);
        }

        self.state.tick += 1;
        self.state.round_tick += 1;

        // INPUT
        let intents = InputResolver::resolve_pair(&mut self.state.controls, &self.state.fighters);
        let ctx = TickContext {
            tick: self.state.tick,
            tuning: &self.tuning,
            intents,
        };

        // RESOLUTION
        for resolver in &self.resolvers {
            resolver.resolve(&ctx, &mut self.state, &mut self.log);
        }

        // CHECK
        if let Some(winner) = self.state.decided_winner() {
            self.state.phase = MatchPhase::RoundOver { winner };
            self.log.record(MatchEvent::RoundOver { winner });
            info!(
                tick = self.state.tick,
                round = self.state.round,
                round_ticks = self.state.round_tick,
                %winner,
                "round over"
            );
        }

        let events = self.log.take_events();
        if !events.is_empty() {
            debug!(tick = self.state.tick, count = events.len(), "tick events");
        }

        TickReport {
            tick: self.state.tick,
            advanced: true,
            events,
        }
    }

    // =========================================================================
    // Phase transitions
    // =========================================================================

    /// Starts a new round after a round ended.
    ///
    /// Both fighters return to spawn with full health and shield; projectiles,
    /// effects and held controls are cleared.
    ///
    /// # Errors
    ///
    /// [`MatchError::RoundInProgress`] while the round is running and
    /// [`MatchError::Terminated`] after [`Match::terminate`].
    pub fn restart(&mut self) -> Result<(), MatchError> {
        self.require_round_over()?;
        self.state.reset_round(&self.tuning);
        self.log = EventLog::new();
        info!(round = self.state.round, tick = self.state.tick, "round restarted");
        Ok(())
    }

    /// Ends the match after a round ended. No further ticks are processed.
    ///
    /// # Errors
    ///
    /// [`MatchError::RoundInProgress`] while the round is running and
    /// [`MatchError::Terminated`] if already terminated.
    pub fn terminate(&mut self) -> Result<(), MatchError> {
        self.require_round_over()?;
        self.state.phase = MatchPhase::Terminated;
        info!(rounds = self.state.round, tick = self.state.tick, "match terminated");
        Ok(())
    }

    fn require_round_over(&self) -> Result<(), MatchError> {
        match self.state.phase {
            MatchPhase::RoundOver { .. } => Ok(()),
            MatchPhase::Running => Err(MatchError::RoundInProgress),
            MatchPhase::Terminated => Err(MatchError::Terminated),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Winner of the finished round, while the phase is `RoundOver`.
    #[must_use]
    pub const fn winner(&self) -> Option<FighterSlot> {
        match self.state.phase {
            MatchPhase::RoundOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Ticks processed since the match was created.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.state.tick
    }

    /// Current round, starting at 1.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.state.round
    }

    /// Gameplay constants.
    #[must_use]
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Read-only access to the full state.
    #[must_use]
    pub const fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable access to the full state.
    ///
    /// Intended for test setup and scripted scenarios. Mutating the state
    /// mid-round bypasses the resolvers.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Captures the renderer view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.tuning)
    }
}
