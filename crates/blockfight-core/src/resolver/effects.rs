//! Effect resolver: slash effects fade by a fixed step each tick and are
//! dropped once fully transparent.

use crate::events::EventLog;
use crate::state::MatchState;

use super::{Resolver, TickContext};

/// Resolver for transient visual effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectResolver;

impl EffectResolver {
    /// Creates a new effect resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for EffectResolver {
    fn name(&self) -> &'static str {
        "effects"
    }

    fn resolve(&self, ctx: &TickContext<'_>, state: &mut MatchState, _log: &mut EventLog) {
        let fade = ctx.tuning.slash_fade;
        state.effects = std::mem::take(&mut state.effects)
            .into_iter()
            .filter_map(|mut effect| {
                effect.alpha -= fade;
                (!effect.is_expired()).then_some(effect)
            })
            .collect();
    }
}
