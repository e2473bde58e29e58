use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effect::Magnitude;
use crate::stats::Entity;
use crate::{ability_mod, RandomSource};

/// Probability that any valued effect crits.
pub const CRIT_CHANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectValue {
    /// Never negative.
    pub value: i32,
    pub is_crit: bool,
}

fn to_i32(rolled: u32) -> i32 {
    i32::try_from(rolled).unwrap_or(i32::MAX)
}

/// Base amount, plus dice, plus a crit reroll of those dice, plus attribute scaling.
///
/// The crit check draws once whether or not dice are declared; only effects with
/// dice gain value from it. Scaling is skipped when the source has no stats.
pub fn calculate_value(
    magnitude: &Magnitude,
    source: &Entity,
    dice: &mut dyn RandomSource,
) -> EffectValue {
    let mut value = magnitude.base_amount;
    let spec = magnitude.dice.filter(|d| !d.is_empty());

    if let Some(spec) = spec {
        let rolled = to_i32(spec.roll(dice));
        debug!(dice = %spec, rolled, "rolled effect dice");
        value = value.saturating_add(rolled);
    }

    let is_crit = dice.chance() < CRIT_CHANCE;
    if is_crit {
        if let Some(spec) = spec {
            let extra = to_i32(spec.roll(dice));
            debug!(dice = %spec, extra, "crit reroll");
            value = value.saturating_add(extra);
        } else {
            debug!("crit on a flat effect; flag only");
        }
    }

    if let (Some(scaling), Some(stats)) = (magnitude.scaling, source.stats.as_ref()) {
        let modifier = ability_mod(stats.abilities.score(scaling.attribute));
        let bonus = (f64::from(modifier) * scaling.factor).floor() as i32;
        debug!(
            attribute = ?scaling.attribute,
            modifier,
            factor = scaling.factor,
            bonus,
            "attribute scaling"
        );
        value = value.saturating_add(bonus);
    }

    EffectValue {
        value: value.max(0),
        is_crit,
    }
}
