//! Gameplay tuning.
//!
//! [`Tuning`] gathers every numeric constant the simulation uses. The defaults
//! reproduce the classic two-player layout: an 800×400 arena with the ground
//! line at y = 340 and fighters spawning at x = 50 and x = 700.
//!
//! Coordinates are screen-style: x grows to the right and y grows downward, so
//! a jump is a negative vertical velocity and gravity is positive.
//!
//! A tuning document may override any subset of fields:
//!
//! ```
//! use blockfight_core::config::Tuning;
//!
//! let tuning = Tuning::from_json_str(r#"{ "gravity": 0.75, "max_live_projectiles": 5 }"#).unwrap();
//! assert!((tuning.gravity - 0.75).abs() < f32::EPSILON);
//! assert_eq!(tuning.max_live_projectiles, 5);
//! assert!((tuning.move_step - 5.0).abs() < f32::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

use crate::entity::FighterSlot;
use crate::error::ConfigError;

/// Simulated time covered by one tick, in milliseconds.
///
/// The core never reads a clock; hosts use this to pace their tick driver.
pub const TICK_MILLIS: u64 = 16;

/// Gameplay constants for one match.
///
/// All distances are in arena units, all rates are per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Arena width; projectiles beyond `[0, arena_width]` are removed.
    pub arena_width: f32,
    /// Arena height (renderer only).
    pub arena_height: f32,
    /// Y of the ground line.
    pub ground_y: f32,
    /// Fighter body height; a fighter stands at `ground_y - fighter_height`.
    pub fighter_height: f32,
    /// Spawn x for slot one.
    pub spawn_x_one: f32,
    /// Spawn x for slot two.
    pub spawn_x_two: f32,

    /// Horizontal step per held direction.
    pub move_step: f32,
    /// Downward acceleration applied while airborne.
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_impulse: f32,

    /// Full health and the health ceiling.
    pub max_health: f32,
    /// Full shield and the shield ceiling.
    pub max_shield: f32,
    /// Shield regained per tick while not shielding.
    pub shield_regen: f32,

    /// Melee connects when the horizontal gap is below this.
    pub melee_reach_x: f32,
    /// Melee connects when the vertical gap is below this.
    pub melee_reach_y: f32,
    /// Health removed by an unblocked melee hit.
    pub melee_damage: f32,
    /// Shield removed by a blocked melee hit.
    pub melee_shield_damage: f32,
    /// Horizontal offset of the slash effect in the facing direction.
    pub slash_offset_x: f32,
    /// Vertical offset of the slash effect below the fighter's origin.
    pub slash_offset_y: f32,
    /// Alpha lost by a slash effect each tick.
    pub slash_fade: f32,

    /// Horizontal projectile speed (sign comes from the attacker's slot).
    pub projectile_speed: f32,
    /// Horizontal spawn offset ahead of the attacker.
    pub projectile_offset_x: f32,
    /// Vertical spawn offset below the attacker's origin.
    pub projectile_offset_y: f32,
    /// Projectile hits when the horizontal gap is below this.
    pub projectile_reach_x: f32,
    /// Projectile hits when the vertical gap is below this.
    pub projectile_reach_y: f32,
    /// Health removed by an unblocked projectile.
    pub projectile_damage: f32,
    /// Shield removed by a blocked projectile.
    pub projectile_shield_damage: f32,
    /// Projectiles allowed in flight at once, shared by both fighters.
    pub max_live_projectiles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 400.0,
            ground_y: 340.0,
            fighter_height: 40.0,
            spawn_x_one: 50.0,
            spawn_x_two: 700.0,

            move_step: 5.0,
            gravity: 0.5,
            jump_impulse: -12.0,

            max_health: 100.0,
            max_shield: 100.0,
            shield_regen: 0.5,

            melee_reach_x: 50.0,
            melee_reach_y: 50.0,
            melee_damage: 5.0,
            melee_shield_damage: 7.0,
            slash_offset_x: 30.0,
            slash_offset_y: 20.0,
            slash_fade: 0.1,

            projectile_speed: 5.0,
            projectile_offset_x: 30.0,
            projectile_offset_y: 20.0,
            projectile_reach_x: 30.0,
            projectile_reach_y: 40.0,
            projectile_damage: 10.0,
            projectile_shield_damage: 15.0,
            max_live_projectiles: 3,
        }
    }
}

impl Tuning {
    /// Parses and validates a JSON tuning document.
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and any error from
    /// [`Tuning::validate`] for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Checks that the tuning describes a playable arena.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ground_y", self.ground_y),
            ("fighter_height", self.fighter_height),
            ("spawn_x_one", self.spawn_x_one),
            ("spawn_x_two", self.spawn_x_two),
            ("move_step", self.move_step),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("max_health", self.max_health),
            ("max_shield", self.max_shield),
            ("shield_regen", self.shield_regen),
            ("melee_reach_x", self.melee_reach_x),
            ("melee_reach_y", self.melee_reach_y),
            ("melee_damage", self.melee_damage),
            ("melee_shield_damage", self.melee_shield_damage),
            ("slash_offset_x", self.slash_offset_x),
            ("slash_offset_y", self.slash_offset_y),
            ("slash_fade", self.slash_fade),
            ("projectile_speed", self.projectile_speed),
            ("projectile_offset_x", self.projectile_offset_x),
            ("projectile_offset_y", self.projectile_offset_y),
            ("projectile_reach_x", self.projectile_reach_x),
            ("projectile_reach_y", self.projectile_reach_y),
            ("projectile_damage", self.projectile_damage),
            ("projectile_shield_damage", self.projectile_shield_damage),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("fighter_height", self.fighter_height),
            ("max_health", self.max_health),
            ("max_shield", self.max_shield),
            ("slash_fade", self.slash_fade),
            ("projectile_speed", self.projectile_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("move_step", self.move_step),
            ("gravity", self.gravity),
            ("shield_regen", self.shield_regen),
            ("melee_reach_x", self.melee_reach_x),
            ("melee_reach_y", self.melee_reach_y),
            ("melee_damage", self.melee_damage),
            ("melee_shield_damage", self.melee_shield_damage),
            ("projectile_reach_x", self.projectile_reach_x),
            ("projectile_reach_y", self.projectile_reach_y),
            ("projectile_damage", self.projectile_damage),
            ("projectile_shield_damage", self.projectile_shield_damage),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.ground_y <= self.fighter_height || self.ground_y > self.arena_height {
            return Err(ConfigError::GroundOutOfBounds {
                ground_y: self.ground_y,
                fighter_height: self.fighter_height,
                arena_height: self.arena_height,
            });
        }

        for slot in FighterSlot::ALL {
            let x = self.spawn_x(slot);
            if !(0.0..=self.arena_width).contains(&x) {
                return Err(ConfigError::SpawnOutOfBounds {
                    slot,
                    x,
                    arena_width: self.arena_width,
                });
            }
        }

        if self.max_live_projectiles == 0 {
            return Err(ConfigError::ZeroProjectileCap);
        }

        Ok(())
    }

    /// The y at which a fighter stands on the ground.
    #[must_use]
    pub fn ground_contact_y(&self) -> f32 {
        self.ground_y - self.fighter_height
    }

    /// Spawn x for the given slot.
    #[must_use]
    pub const fn spawn_x(&self, slot: FighterSlot) -> f32 {
        match slot {
            FighterSlot::One => self.spawn_x_one,
            FighterSlot::Two => self.spawn_x_two,
        }
    }
}
