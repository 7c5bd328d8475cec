//! Input resolution: held controls to per-fighter intents.
//!
//! The host reports press and release events through [`ControlState`]. Once
//! per tick the [`InputResolver`] turns the held set into an [`Intents`] value
//! for each fighter.
//!
//! # Continuous and edge-triggered controls
//!
//! Movement and shield are continuous: they apply on every tick the control is
//! held. Jump, melee and ranged are edge-triggered: a press fires once, then the
//! control is latched until it is released. Holding melee for a second yields
//! one swing, not sixty. Repeated press events for a control that is already
//! held (keyboard auto-repeat) do not re-arm it.
//!
//! # Example
//!
//! ```
//! use blockfight_core::config::Tuning;
//! use blockfight_core::entity::{Fighter, FighterSlot};
//! use blockfight_core::input::{ControlCode, ControlState, InputResolver, Intents};
//!
//! let fighter = Fighter::spawn(FighterSlot::One, &Tuning::default());
//! let mut controls = ControlState::new();
//! controls.press(ControlCode::KEY_Q);
//!
//! let first = InputResolver::resolve(&mut controls, &fighter);
//! assert!(first.contains(Intents::MELEE));
//!
//! // Still held next tick, but already consumed.
//! let second = InputResolver::resolve(&mut controls, &fighter);
//! assert!(!second.contains(Intents::MELEE));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::entity::{Fighter, FighterSlot};

// =============================================================================
// Control Codes
// =============================================================================

/// An opaque control code reported by the host's input source.
///
/// The named constants use the classic desktop key codes so a windowing host
/// can forward its key events unchanged. Any other value is accepted and simply
/// matches no binding.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ControlCode(u32);

impl ControlCode {
    /// Shift.
    pub const SHIFT: Self = Self(16);
    /// Control.
    pub const CONTROL: Self = Self(17);
    /// Left arrow.
    pub const ARROW_LEFT: Self = Self(37);
    /// Up arrow.
    pub const ARROW_UP: Self = Self(38);
    /// Right arrow.
    pub const ARROW_RIGHT: Self = Self(39);
    /// `A`.
    pub const KEY_A: Self = Self(65);
    /// `D`.
    pub const KEY_D: Self = Self(68);
    /// `E`.
    pub const KEY_E: Self = Self(69);
    /// `Q`.
    pub const KEY_Q: Self = Self(81);
    /// `W`.
    pub const KEY_W: Self = Self(87);
    /// Numpad `1`.
    pub const NUMPAD_1: Self = Self(97);
    /// Numpad `2`.
    pub const NUMPAD_2: Self = Self(98);

    /// Creates a control code from its raw value.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The shield control for a slot: Shift for slot one, Control for slot two.
    ///
    /// Fixed per slot; not part of a fighter's bindings.
    #[must_use]
    pub const fn shield_for(slot: FighterSlot) -> Self {
        match slot {
            FighterSlot::One => Self::SHIFT,
            FighterSlot::Two => Self::CONTROL,
        }
    }
}

impl fmt::Debug for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlCode({})", self.0)
    }
}

impl From<u32> for ControlCode {
    fn from(code: u32) -> Self {
        Self::new(code)
    }
}

// =============================================================================
// Control State
// =============================================================================

/// Held controls plus the debounce latch for edge-triggered ones.
///
/// Owned by the match. Press and release events may arrive at any time between
/// ticks; the resolver reads the whole set at the start of the next tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// Controls currently held down.
    held: BTreeSet<ControlCode>,
    /// Held controls whose press has already fired an action.
    latched: BTreeSet<ControlCode>,
}

impl ControlState {
    /// Creates an empty control state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press. Pressing an already-held control is ignored.
    pub fn press(&mut self, code: ControlCode) {
        if self.held.insert(code) {
            self.latched.remove(&code);
        }
    }

    /// Records a release, re-arming the control for its next press.
    pub fn release(&mut self, code: ControlCode) {
        self.held.remove(&code);
        self.latched.remove(&code);
    }

    /// Whether the control is held, fired or not.
    #[must_use]
    pub fn is_held(&self, code: ControlCode) -> bool {
        self.held.contains(&code)
    }

    /// Whether the control is held and has not fired yet.
    #[must_use]
    pub fn is_armed(&self, code: ControlCode) -> bool {
        self.held.contains(&code) && !self.latched.contains(&code)
    }

    /// Consumes an armed press.
    ///
    /// Returns `true` exactly once per press; the control stays held but is
    /// latched until released.
    pub fn take(&mut self, code: ControlCode) -> bool {
        if self.is_armed(code) {
            self.latched.insert(code);
            true
        } else {
            false
        }
    }

    /// Drops all held controls and latches.
    pub fn clear(&mut self) {
        self.held.clear();
        self.latched.clear();
    }

    /// Held controls in code order.
    pub fn held(&self) -> impl Iterator<Item = ControlCode> + '_ {
        self.held.iter().copied()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

// =============================================================================
// Intents
// =============================================================================

bitflags! {
    /// Discrete actions one fighter performs in one tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Intents: u8 {
        /// Step left this tick.
        const MOVE_LEFT = 1 << 0;
        /// Step right this tick.
        const MOVE_RIGHT = 1 << 1;
        /// Jump (only produced while grounded).
        const JUMP = 1 << 2;
        /// Shield raised this tick.
        const SHIELD = 1 << 3;
        /// Melee swing.
        const MELEE = 1 << 4;
        /// Ranged attack.
        const RANGED = 1 << 5;
    }
}

impl Intents {
    /// The edge-triggered subset.
    pub const EDGE_TRIGGERED: Self = Self::JUMP.union(Self::MELEE).union(Self::RANGED);
}

// =============================================================================
// Input Resolver
// =============================================================================

/// Maps the held control set to a fighter's intents for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputResolver;

impl InputResolver {
    /// Resolves `fighter`'s intents and consumes the edge-triggered presses
    /// that fired.
    ///
    /// Jump is only produced while the fighter is on the ground. An airborne
    /// fighter's jump press stays armed and fires on landing if still held.
    /// Melee and ranged always consume their press; whether a ranged shot
    /// actually spawns is decided by the combat resolver.
    pub fn resolve(controls: &mut ControlState, fighter: &Fighter) -> Intents {
        let bindings = &fighter.bindings;
        let mut intents = Intents::empty();

        if controls.is_held(bindings.left) {
            intents |= Intents::MOVE_LEFT;
        }
        if controls.is_held(bindings.right) {
            intents |= Intents::MOVE_RIGHT;
        }
        if controls.is_held(ControlCode::shield_for(fighter.slot)) {
            intents |= Intents::SHIELD;
        }
        if fighter.on_ground && controls.take(bindings.jump) {
            intents |= Intents::JUMP;
        }
        if controls.take(bindings.melee) {
            intents |= Intents::MELEE;
        }
        if controls.take(bindings.ranged) {
            intents |= Intents::RANGED;
        }

        intents
    }

    /// Resolves both fighters in slot order.
    pub fn resolve_pair(controls: &mut ControlState, fighters: &[Fighter; 2]) -> [Intents; 2] {
        [
            Self::resolve(controls, &fighters[0]),
            Self::resolve(controls, &fighters[1]),
        ]
    }
}
