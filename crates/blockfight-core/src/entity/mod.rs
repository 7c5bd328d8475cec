//! Entity model for the fighting simulation.
//!
//! This module provides the identity and orientation types shared by every
//! part of the simulation:
//! - [`FighterSlot`]: Which of the two fighters an entity belongs to
//! - [`Facing`]: Horizontal orientation, `-1` or `+1`
//! - [`FighterColor`]: Color tag a renderer uses for a fighter and its shots
//! - [`ProjectileId`]: Unique identifier for a projectile within a match
//!
//! The entity structs themselves live in [`components`].
//!
//! # Example
//!
//! ```
//! use blockfight_core::entity::{Facing, FighterSlot};
//!
//! assert_eq!(FighterSlot::One.opponent(), FighterSlot::Two);
//! assert_eq!(Facing::toward(50.0, 700.0), Facing::Right);
//! assert!((Facing::Left.sign() + 1.0).abs() < f32::EPSILON);
//! ```

pub mod components;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use components::{ControlBindings, Fighter, Projectile, SlashEffect};

/// One of the two fighter positions in a match.
///
/// The slot is the fighter's identity: it selects the spawn point, the color,
/// the fixed shield control and the direction of ranged attacks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FighterSlot {
    /// Player one, spawns on the left.
    One,
    /// Player two, spawns on the right.
    Two,
}

impl FighterSlot {
    /// Both slots in resolution order.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Returns the other slot.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Index into per-fighter arrays (`0` or `1`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The color tag for this slot.
    #[must_use]
    pub const fn color(self) -> FighterColor {
        match self {
            Self::One => FighterColor::Red,
            Self::Two => FighterColor::Blue,
        }
    }

    /// Direction ranged attacks travel for this slot.
    ///
    /// Fixed by slot, not by the fighter's current facing: slot one always
    /// shoots right and slot two always shoots left.
    #[must_use]
    pub const fn ranged_direction(self) -> Facing {
        match self {
            Self::One => Facing::Right,
            Self::Two => Facing::Left,
        }
    }
}

impl fmt::Display for FighterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "fighter 1"),
            Self::Two => write!(f, "fighter 2"),
        }
    }
}

/// Horizontal orientation of a fighter or effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Toward decreasing x (`-1`).
    Left,
    /// Toward increasing x (`+1`).
    Right,
}

impl Facing {
    /// Facing from `from_x` toward `to_x`.
    ///
    /// Right only when `from_x < to_x`; coincident positions face left.
    #[must_use]
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if from_x < to_x {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// `-1.0` for left, `+1.0` for right.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Color tag carried by fighters and their projectiles.
///
/// The simulation never interprets it; it exists so a renderer can draw a
/// projectile in its owner's color without looking the owner up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterColor {
    /// Slot one.
    Red,
    /// Slot two.
    Blue,
}

impl fmt::Display for FighterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// Unique identifier for a projectile.
///
/// `ProjectileId` is a newtype wrapper around `u64`. Ids are handed out in
/// spawn order and never reused within a match, so ordering by id is ordering
/// by spawn time.
///
/// # Example
///
/// ```
/// use blockfight_core::entity::ProjectileId;
///
/// let id1 = ProjectileId::new(1);
/// let id2 = ProjectileId::new(2);
///
/// assert!(id1 < id2);
/// assert_eq!(id1.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(u64);

impl ProjectileId {
    /// Creates a new `ProjectileId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectileId({})", self.0)
    }
}

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectileId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}
