//! `Snapshot` is the immutable, per-tick view handed to renderers.
//!
//! A snapshot copies out exactly what a renderer needs: fighter poses and
//! resources, projectile positions and colors, slash effects, the match phase
//! and the two status bars. It holds no references into the match, so it can
//! be queued, serialized or sent to another thread.
//!
//! # Example
//!
//! ```
//! use blockfight_core::simulation::Match;
//!
//! let mut game = Match::default();
//! game.advance();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.tick, 1);
//! assert_eq!(snapshot.fighters[0].bars.health, 1.0);
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::entity::{Facing, Fighter, FighterColor, FighterSlot, ProjectileId};
use crate::state::{MatchPhase, MatchState};

/// Arena geometry a renderer needs to lay out the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaView {
    /// Arena width.
    pub width: f32,
    /// Arena height.
    pub height: f32,
    /// Y of the ground line.
    pub ground_y: f32,
}

/// Health and shield as fractions of their maxima, for the status bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusBars {
    /// Health fraction in `[0, 1]`.
    pub health: f32,
    /// Shield fraction in `[0, 1]`.
    pub shield: f32,
}

impl StatusBars {
    /// Projects a fighter's resources onto `[0, 1]`.
    #[must_use]
    pub fn of(fighter: &Fighter, tuning: &Tuning) -> Self {
        Self {
            health: (fighter.health / tuning.max_health).clamp(0.0, 1.0),
            shield: (fighter.shield / tuning.max_shield).clamp(0.0, 1.0),
        }
    }
}

/// Renderer-facing view of one fighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterView {
    /// Which fighter.
    pub slot: FighterSlot,
    /// Body color.
    pub color: FighterColor,
    /// Position.
    pub position: Vec2,
    /// Orientation.
    pub facing: Facing,
    /// Health in absolute units.
    pub health: f32,
    /// Shield in absolute units.
    pub shield: f32,
    /// Shield raised.
    pub shielding: bool,
    /// Standing on the ground.
    pub on_ground: bool,
    /// Status bar fractions.
    pub bars: StatusBars,
}

/// Renderer-facing view of one projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Identifier, stable while in flight.
    pub id: ProjectileId,
    /// Position.
    pub position: Vec2,
    /// Owner's color.
    pub color: FighterColor,
}

/// Renderer-facing view of one slash effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    /// Position.
    pub position: Vec2,
    /// Direction of the swing.
    pub direction: Facing,
    /// Opacity in `(0, 1]`.
    pub alpha: f32,
}

/// Immutable projection of the match after a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Ticks processed since the match began.
    pub tick: u64,
    /// Current round, starting at 1.
    pub round: u32,
    /// Match phase.
    pub phase: MatchPhase,
    /// Arena geometry.
    pub arena: ArenaView,
    /// Both fighters in slot order.
    pub fighters: [FighterView; 2],
    /// Live projectiles in spawn order.
    pub projectiles: Vec<ProjectileView>,
    /// Live slash effects in spawn order.
    pub effects: Vec<EffectView>,
}

impl Snapshot {
    /// Captures the current state.
    #[must_use]
    pub fn capture(state: &MatchState, tuning: &Tuning) -> Self {
        Self {
            tick: state.tick,
            round: state.round,
            phase: state.phase,
            arena: ArenaView {
                width: tuning.arena_width,
                height: tuning.arena_height,
                ground_y: tuning.ground_y,
            },
            fighters: [
                Self::fighter_view(&state.fighters[0], tuning),
                Self::fighter_view(&state.fighters[1], tuning),
            ],
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    id: p.id,
                    position: p.position,
                    color: p.color,
                })
                .collect(),
            effects: state
                .effects
                .iter()
                .map(|e| EffectView {
                    position: e.position,
                    direction: e.direction,
                    alpha: e.alpha,
                })
                .collect(),
        }
    }

    fn fighter_view(fighter: &Fighter, tuning: &Tuning) -> FighterView {
        FighterView {
            slot: fighter.slot,
            color: fighter.color(),
            position: fighter.position,
            facing: fighter.facing,
            health: fighter.health,
            shield: fighter.shield,
            shielding: fighter.shielding,
            on_ground: fighter.on_ground,
            bars: StatusBars::of(fighter, tuning),
        }
    }

    /// View of the fighter in `slot`.
    #[must_use]
    pub fn fighter(&self, slot: FighterSlot) -> &FighterView {
        &self.fighters[slot.index()]
    }
}
