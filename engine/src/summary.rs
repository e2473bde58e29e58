use serde::Serialize;

use crate::effect::Effect;
use crate::resolve::{resolve_effect, EffectResult, Payload};
use crate::stats::Entity;
use crate::RandomSource;

/// Aggregate of many resolutions of one effect, for balancing content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub samples: u32,
    /// Resolutions that produced a numeric payload.
    pub valued: u32,
    pub min: i32,
    pub max: i32,
    pub mean: f64,
    /// Critical damage results.
    pub crits: u32,
    pub gated: u32,
}

/// The number a result carries, if any.
pub fn payload_amount(result: &EffectResult) -> Option<i32> {
    match result.payload.as_ref()? {
        Payload::Damage { amount, .. }
        | Payload::Healing { amount }
        | Payload::ResourceChange { amount, .. }
        | Payload::StatModifier { amount, .. } => Some(*amount),
        Payload::Revived { hp } => Some(*hp),
        _ => None,
    }
}

pub fn simulate(
    effect: &Effect,
    source: &Entity,
    target: &Entity,
    dice: &mut dyn RandomSource,
    samples: u32,
) -> Summary {
    let mut summary = Summary {
        samples,
        valued: 0,
        min: 0,
        max: 0,
        mean: 0.0,
        crits: 0,
        gated: 0,
    };
    let mut total: i64 = 0;

    for _ in 0..samples {
        let result = resolve_effect(effect, source, target, dice);
        if result.gated {
            summary.gated += 1;
            continue;
        }
        if matches!(result.payload, Some(Payload::Damage { is_crit: true, .. })) {
            summary.crits += 1;
        }
        if let Some(amount) = payload_amount(&result) {
            if summary.valued == 0 {
                summary.min = amount;
                summary.max = amount;
            } else {
                summary.min = summary.min.min(amount);
                summary.max = summary.max.max(amount);
            }
            summary.valued += 1;
            total += i64::from(amount);
        }
    }

    if summary.valued > 0 {
        summary.mean = total as f64 / f64::from(summary.valued);
    }
    summary
}
