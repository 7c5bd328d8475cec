//! Entity structs: fighters, projectiles and slash effects.
//!
//! These are plain data. Behavior lives in the resolvers, which mutate them
//! once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Facing, FighterColor, FighterSlot, ProjectileId};
use crate::config::Tuning;
use crate::input::ControlCode;

/// Per-fighter control bindings.
///
/// The shield control is not part of the bindings: it is fixed per slot (see
/// [`ControlCode::shield_for`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlBindings {
    /// Held: step left.
    pub left: ControlCode,
    /// Held: step right.
    pub right: ControlCode,
    /// Pressed: jump.
    pub jump: ControlCode,
    /// Pressed: melee attack.
    pub melee: ControlCode,
    /// Pressed: ranged attack.
    pub ranged: ControlCode,
}

impl ControlBindings {
    /// The classic keyboard layout for a slot.
    ///
    /// Slot one uses `A`/`D`/`W` with `Q` and `E` for attacks; slot two uses
    /// the arrow keys with numpad `1` and `2`.
    #[must_use]
    pub const fn for_slot(slot: FighterSlot) -> Self {
        match slot {
            FighterSlot::One => Self {
                left: ControlCode::KEY_A,
                right: ControlCode::KEY_D,
                jump: ControlCode::KEY_W,
                melee: ControlCode::KEY_Q,
                ranged: ControlCode::KEY_E,
            },
            FighterSlot::Two => Self {
                left: ControlCode::ARROW_LEFT,
                right: ControlCode::ARROW_RIGHT,
                jump: ControlCode::ARROW_UP,
                melee: ControlCode::NUMPAD_1,
                ranged: ControlCode::NUMPAD_2,
            },
        }
    }
}

/// A controllable combatant.
///
/// `position.y` is the top of the body; the fighter stands on the ground when
/// `position.y == tuning.ground_contact_y()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    /// Identity of this fighter.
    pub slot: FighterSlot,
    /// Position in arena units.
    pub position: Vec2,
    /// Vertical velocity (negative is up).
    pub velocity_y: f32,
    /// Standing on the ground.
    pub on_ground: bool,
    /// Health in `[0, max_health]`.
    pub health: f32,
    /// Shield energy in `[0, max_shield]`.
    pub shield: f32,
    /// Shield control held this tick.
    pub shielding: bool,
    /// Toward the opponent, recomputed every tick.
    pub facing: Facing,
    /// Controls this fighter answers to.
    pub bindings: ControlBindings,
}

impl Fighter {
    /// Creates a fighter at its slot's spawn point, standing, at full health
    /// and shield, with the default bindings for its slot.
    #[must_use]
    pub fn spawn(slot: FighterSlot, tuning: &Tuning) -> Self {
        Self::spawn_with_bindings(slot, ControlBindings::for_slot(slot), tuning)
    }

    /// Like [`Fighter::spawn`] with custom bindings.
    #[must_use]
    pub fn spawn_with_bindings(
        slot: FighterSlot,
        bindings: ControlBindings,
        tuning: &Tuning,
    ) -> Self {
        let opponent_x = tuning.spawn_x(slot.opponent());
        let x = tuning.spawn_x(slot);
        Self {
            slot,
            position: Vec2::new(x, tuning.ground_contact_y()),
            velocity_y: 0.0,
            on_ground: true,
            health: tuning.max_health,
            shield: tuning.max_shield,
            shielding: false,
            facing: Facing::toward(x, opponent_x),
            bindings,
        }
    }

    /// Returns the fighter to its spawn state, keeping its bindings.
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::spawn_with_bindings(self.slot, self.bindings, tuning);
    }

    /// Color tag for this fighter.
    #[must_use]
    pub const fn color(&self) -> FighterColor {
        self.slot.color()
    }

    /// Health above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Routes a hit through the shield or health.
    ///
    /// A shielding fighter loses `shield_damage` from its shield, otherwise it
    /// loses `health_damage` from its health. Both floor at zero. Shielding
    /// with an empty shield still absorbs the hit.
    ///
    /// Returns `true` when the shield took the hit.
    pub fn take_hit(&mut self, health_damage: f32, shield_damage: f32) -> bool {
        if self.shielding {
            self.shield = (self.shield - shield_damage).max(0.0);
            true
        } else {
            self.health = (self.health - health_damage).max(0.0);
            false
        }
    }

    /// Adds `amount` shield, capped at `max`.
    pub fn regenerate_shield(&mut self, amount: f32, max: f32) {
        self.shield = (self.shield + amount).min(max);
    }
}

/// A ranged attack in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Spawn-ordered identifier.
    pub id: ProjectileId,
    /// Position in arena units.
    pub position: Vec2,
    /// Horizontal velocity; the sign is the travel direction.
    pub velocity_x: f32,
    /// Fighter that fired it. Never hit by its own projectile.
    pub owner: FighterSlot,
    /// Owner's color.
    pub color: FighterColor,
}

impl Projectile {
    /// Whether the projectile lies within `[0, arena_width]`.
    #[must_use]
    pub fn in_bounds(&self, arena_width: f32) -> bool {
        (0.0..=arena_width).contains(&self.position.x)
    }
}

/// Fading visual left by a melee swing.
///
/// Purely cosmetic: melee damage is resolved at the instant of the swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashEffect {
    /// Position in arena units.
    pub position: Vec2,
    /// Direction of the swing.
    pub direction: Facing,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl SlashEffect {
    /// Creates a fully opaque slash.
    #[must_use]
    pub const fn new(position: Vec2, direction: Facing) -> Self {
        Self {
            position,
            direction,
            alpha: 1.0,
        }
    }

    /// Fully faded; due for removal.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0
    }
}
