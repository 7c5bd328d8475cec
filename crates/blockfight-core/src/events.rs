//! Events: notifications of things that happened during a tick.
//!
//! Resolvers never read events back; they exist for the host (sound cues,
//! hit flashes, telemetry) and for tests. Each tick's events are collected in
//! an [`EventLog`] and handed out in a [`TickReport`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::{Facing, FighterSlot, ProjectileId};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A fighter swung, whether or not it connected.
    MeleeSwing {
        /// Fighter that swung.
        attacker: FighterSlot,
        /// Direction of the swing.
        direction: Facing,
    },
    /// A melee swing connected.
    MeleeHit {
        /// Fighter that swung.
        attacker: FighterSlot,
        /// Shield absorbed the hit.
        blocked: bool,
    },
    /// A projectile was spawned.
    ProjectileFired {
        /// Fighter that fired.
        owner: FighterSlot,
        /// The new projectile.
        id: ProjectileId,
    },
    /// A ranged intent was dropped because the projectile cap was reached.
    ///
    /// Informational only: the dropped shot leaves no trace in the match
    /// state and never affects gameplay.
    ProjectileRejected {
        /// Fighter whose shot was dropped.
        owner: FighterSlot,
    },
    /// A projectile struck its target and was removed.
    ProjectileHit {
        /// Fighter that fired.
        owner: FighterSlot,
        /// The projectile.
        id: ProjectileId,
        /// Shield absorbed the hit.
        blocked: bool,
    },
    /// A projectile left the arena and was removed.
    ProjectileExpired {
        /// The projectile.
        id: ProjectileId,
        /// Where it left the arena.
        position: Vec2,
    },
    /// A fighter's health reached zero; the round is over.
    RoundOver {
        /// Winner of the round.
        winner: FighterSlot,
    },
}

impl MatchEvent {
    /// The fighter primarily responsible for this event, if any.
    ///
    /// For hits this is the attacker; for a round-over it is the winner.
    #[must_use]
    pub const fn actor(&self) -> Option<FighterSlot> {
        match self {
            Self::MeleeSwing { attacker, .. } | Self::MeleeHit { attacker, .. } => Some(*attacker),
            Self::ProjectileFired { owner, .. }
            | Self::ProjectileRejected { owner }
            | Self::ProjectileHit { owner, .. } => Some(*owner),
            Self::ProjectileExpired { .. } => None,
            Self::RoundOver { winner } => Some(*winner),
        }
    }

    /// The fighter that took damage, if this event is a hit.
    #[must_use]
    pub const fn victim(&self) -> Option<FighterSlot> {
        match self {
            Self::MeleeHit { attacker, .. } => Some(attacker.opponent()),
            Self::ProjectileHit { owner, .. } => Some(owner.opponent()),
            _ => None,
        }
    }
}

/// Append-only event record for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event.
    pub fn record(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    /// Drains and returns all recorded events in recording order.
    pub fn take_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recorded events.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Result of one call to [`Match::advance`](crate::simulation::Match::advance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick counter after the step; unchanged if the step was skipped.
    pub tick: u64,
    /// Whether the step ran. False once the round is over.
    pub advanced: bool,
    /// Events in the order they happened.
    pub events: Vec<MatchEvent>,
}

impl TickReport {
    /// A report for a skipped step.
    #[must_use]
    pub const fn skipped(tick: u64) -> Self {
        Self {
            tick,
            advanced: false,
            events: Vec::new(),
        }
    }

    /// Winner if this tick ended the round.
    #[must_use]
    pub fn round_winner(&self) -> Option<FighterSlot> {
        self.events.iter().find_map(|event| match event {
            MatchEvent::RoundOver { winner } => Some(*winner),
            _ => None,
        })
    }
}
