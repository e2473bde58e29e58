use std::fmt;

use tracing::trace;

use crate::effect::EffectCondition;
use crate::stats::{CreatureType, Entity};

impl fmt::Display for EffectCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectCondition::HpBelow50 => f.write_str("HP_BELOW_50"),
            EffectCondition::IsUndead => f.write_str("IS_UNDEAD"),
            EffectCondition::Unrecognized => f.write_str("UNRECOGNIZED"),
        }
    }
}

/// Whether `condition` lets an effect through against `target`.
///
/// A target without stats cannot satisfy a condition that reads them.
pub fn condition_met(condition: EffectCondition, target: &Entity) -> bool {
    let met = match condition {
        EffectCondition::HpBelow50 => target
            .stats
            .as_ref()
            .is_some_and(|s| i64::from(s.hp) * 2 < i64::from(s.max_hp)),
        EffectCondition::IsUndead => target
            .stats
            .as_ref()
            .is_some_and(|s| s.creature_type == CreatureType::Undead),
        EffectCondition::Unrecognized => true,
    };
    trace!(%condition, target = %target.id, met, "condition check");
    met
}

/// Absent conditions always pass.
pub fn gate(condition: Option<EffectCondition>, target: &Entity) -> Result<(), EffectCondition> {
    match condition {
        Some(c) if !condition_met(c, target) => Err(c),
        _ => Ok(()),
    }
}
