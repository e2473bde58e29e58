//! Reference application of an [`EffectResult`] to a stats snapshot.
//!
//! The resolver never calls this. Callers that keep their own battle state can
//! ignore it; callers that want the stock rules get a fresh, clamped copy back.

use crate::effect::EffectDuration;
use crate::resolve::{EffectResult, Payload};
use crate::stats::{CombatStats, ResourceKind};

/// What changed on the copy, for the caller's own follow-ups (death, UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Applied {
    pub hp_before: i32,
    pub hp_after: i32,
    /// HP went from above 0 to 0 on this application.
    pub dropped: bool,
}

fn rounds(duration: EffectDuration) -> Option<u32> {
    match duration {
        EffectDuration::Instant => None,
        EffectDuration::Rounds(n) => Some(n),
        EffectDuration::Permanent => Some(u32::MAX),
    }
}

/// Returns `stats` with `result` applied. Values are clamped into `[0, max]`.
///
/// Stat modifiers are not folded into the stats block; the caller tracks them
/// alongside their timers.
pub fn applied(stats: &CombatStats, result: &EffectResult) -> (CombatStats, Applied) {
    let mut next = stats.clone();
    let hp_before = stats.hp;

    match &result.payload {
        Some(Payload::Damage { amount, .. }) => {
            next.hp = next.hp.saturating_sub(*amount).max(0);
        }
        Some(Payload::Healing { amount }) => {
            // Healing does not lift the dead; see Revived.
            if next.hp > 0 {
                next.hp = next.hp.saturating_add(*amount).min(next.max_hp);
            }
        }
        Some(Payload::Revived { hp }) => {
            if next.hp <= 0 {
                next.hp = (*hp).clamp(1, next.max_hp.max(1));
            }
        }
        Some(Payload::ResourceChange { resource, amount }) => {
            let (current, max) = next.resource(*resource);
            let updated = current.saturating_add(*amount).clamp(0, max.max(0));
            match resource {
                ResourceKind::Mana => next.mana = updated,
                ResourceKind::Stamina => next.stamina = updated,
            }
        }
        Some(Payload::StatusApplied { status, duration }) => {
            if let Some(n) = rounds(*duration) {
                // Reapplying refreshes to the longer of the two timers.
                let slot = next.statuses.entry(status.clone()).or_insert(0);
                *slot = (*slot).max(n);
            }
        }
        Some(Payload::StatusRemoved { status }) => {
            next.statuses.shift_remove(status);
        }
        Some(Payload::Dispelled { statuses }) => {
            for s in statuses {
                next.statuses.shift_remove(s);
            }
        }
        Some(Payload::StatModifier { .. }) | Some(Payload::Summon { .. }) | None => {}
    }

    let report = Applied {
        hp_before,
        hp_after: next.hp,
        dropped: hp_before > 0 && next.hp == 0,
    };
    (next, report)
}
