//! Effect dispatch: one terminal branch per effect kind.
//!
//! The resolver reads its two entities and returns an [`EffectResult`] describing
//! what should happen. Applying it (clamping HP, ticking timers, death) is left to
//! the caller; see [`crate::apply`] for a reference helper.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::conditions::gate;
use crate::damage::{mitigation_for, Mitigation};
use crate::effect::{Effect, EffectDuration, EffectKind, EffectType, Magnitude};
use crate::stats::{DamageType, Entity, ResourceKind};
use crate::value::{calculate_value, EffectValue};
use crate::RandomSource;

/// The single structured outcome of an effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    Damage {
        amount: i32,
        damage_type: DamageType,
        is_crit: bool,
    },
    Healing {
        amount: i32,
    },
    ResourceChange {
        resource: ResourceKind,
        amount: i32,
    },
    StatusApplied {
        status: String,
        duration: EffectDuration,
    },
    StatusRemoved {
        status: String,
    },
    /// Every status a dispel stripped, in the order the target gained them.
    Dispelled {
        statuses: Vec<String>,
    },
    StatModifier {
        stat: String,
        amount: i32,
        duration: EffectDuration,
    },
    /// Emitted by both SUMMON and TRANSFORM.
    Summon {
        template: String,
    },
    Revived {
        hp: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResult {
    pub effect_type: EffectType,
    /// At most one; `None` when gated out or when a kind had nothing to emit.
    pub payload: Option<Payload>,
    pub message: String,
    #[serde(default)]
    pub animation_key: Option<String>,
    /// The effect's condition was not met. No effect occurred.
    #[serde(default)]
    pub gated: bool,
}

impl EffectResult {
    fn new(effect_type: EffectType, payload: Option<Payload>, message: String) -> Self {
        Self {
            effect_type,
            payload,
            message,
            animation_key: None,
            gated: false,
        }
    }

    pub fn damage(&self) -> Option<(i32, DamageType, bool)> {
        match self.payload {
            Some(Payload::Damage {
                amount,
                damage_type,
                is_crit,
            }) => Some((amount, damage_type, is_crit)),
            _ => None,
        }
    }

    pub fn healing(&self) -> Option<i32> {
        match self.payload {
            Some(Payload::Healing { amount }) => Some(amount),
            _ => None,
        }
    }

    pub fn log_tag(&self) -> &'static str {
        if self.gated {
            return "GATED";
        }
        match self.effect_type {
            EffectType::Damage => "DMG",
            EffectType::Heal => "HEAL",
            EffectType::BuffStat | EffectType::DebuffStat => "STAT",
            EffectType::ApplyStatus | EffectType::RemoveStatus | EffectType::Dispel => "COND",
            EffectType::RestoreResource => "RES",
            EffectType::Teleport => "MOVE",
            EffectType::Transform | EffectType::Summon => "SUMMON",
            EffectType::Revive => "STATE",
            EffectType::ModifyAction => "ACTION",
        }
    }
}

/// Combat-log line, e.g. `[DMG] Goblin takes 5 fire damage (resisted)`.
impl fmt::Display for EffectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.log_tag(), self.message)
    }
}

fn signed(n: i32) -> String {
    if n >= 0 {
        format!("+{}", n)
    } else {
        format!("-{}", n.unsigned_abs())
    }
}

fn crit_note(is_crit: bool) -> &'static str {
    if is_crit { " (critical!)" } else { "" }
}

/// Resolve `effect` from `source` against `target`.
///
/// Never fails and never mutates either entity. Missing optional content skips
/// whatever depends on it.
pub fn resolve_effect(
    effect: &Effect,
    source: &Entity,
    target: &Entity,
    dice: &mut dyn RandomSource,
) -> EffectResult {
    let effect_type = effect.effect_type();
    debug!(
        ?effect_type,
        source = %source.id,
        target = %target.id,
        "resolving effect"
    );

    if let Err(condition) = gate(effect.condition, target) {
        trace!(%condition, "effect gated out");
        return EffectResult {
            gated: true,
            ..EffectResult::new(
                effect_type,
                None,
                format!(
                    "{} is unaffected: condition {} not met",
                    target.name, condition
                ),
            )
        };
    }

    let mut value = |m: &Magnitude| -> EffectValue { calculate_value(m, source, dice) };

    let mut result = match &effect.kind {
        EffectKind::Damage {
            magnitude,
            damage_type,
        } => {
            let EffectValue { value: raw, is_crit } = value(magnitude);
            let dtype = damage_type.unwrap_or_default();
            let mitigation = match target.stats.as_ref() {
                Some(s) => mitigation_for(dtype, &s.resistances, &s.vulnerabilities, &s.immunities),
                None => Mitigation::Normal,
            };
            let amount = mitigation.apply(raw);
            debug!(raw, ?mitigation, amount, %dtype, is_crit, "damage resolved");
            let note = match mitigation {
                Mitigation::Immune => " (immune)",
                Mitigation::Vulnerable => " (vulnerable)",
                Mitigation::Resistant => " (resisted)",
                Mitigation::Normal => "",
            };
            EffectResult::new(
                effect_type,
                Some(Payload::Damage {
                    amount,
                    damage_type: dtype,
                    is_crit,
                }),
                format!(
                    "{} takes {} {} damage{}{}",
                    target.name,
                    amount,
                    dtype,
                    note,
                    crit_note(is_crit)
                ),
            )
        }
        EffectKind::Heal { magnitude } => {
            let EffectValue { value: amount, is_crit } = value(magnitude);
            EffectResult::new(
                effect_type,
                Some(Payload::Healing { amount }),
                format!("{} recovers {} HP{}", target.name, amount, crit_note(is_crit)),
            )
        }
        EffectKind::RestoreResource {
            magnitude,
            resource,
        } => {
            let EffectValue { value: amount, .. } = value(magnitude);
            match resource {
                Some(resource) => EffectResult::new(
                    effect_type,
                    Some(Payload::ResourceChange {
                        resource: *resource,
                        amount,
                    }),
                    format!("{} restores {} {}", target.name, amount, resource),
                ),
                None => EffectResult::new(
                    effect_type,
                    None,
                    format!("{} feels nothing: no resource declared", target.name),
                ),
            }
        }
        EffectKind::ApplyStatus { status, duration } => match status {
            Some(status) => {
                let duration = duration.unwrap_or(EffectDuration::DEFAULT);
                EffectResult::new(
                    effect_type,
                    Some(Payload::StatusApplied {
                        status: status.clone(),
                        duration,
                    }),
                    format!("{} gains {} ({})", target.name, status, duration),
                )
            }
            None => EffectResult::new(
                effect_type,
                None,
                format!("{} gains nothing: no status declared", target.name),
            ),
        },
        EffectKind::BuffStat {
            magnitude,
            stat,
            duration,
        }
        | EffectKind::DebuffStat {
            magnitude,
            stat,
            duration,
        } => {
            let EffectValue { value: v, .. } = value(magnitude);
            match stat {
                Some(stat) => {
                    let amount = if effect_type == EffectType::DebuffStat {
                        -v
                    } else {
                        v
                    };
                    let duration = duration.unwrap_or(EffectDuration::DEFAULT);
                    EffectResult::new(
                        effect_type,
                        Some(Payload::StatModifier {
                            stat: stat.clone(),
                            amount,
                            duration,
                        }),
                        format!(
                            "{} {} {} ({})",
                            target.name,
                            stat,
                            signed(amount),
                            duration
                        ),
                    )
                }
                None => EffectResult::new(
                    effect_type,
                    None,
                    format!("{} is unchanged: no stat declared", target.name),
                ),
            }
        }
        EffectKind::Teleport {} => EffectResult::new(
            effect_type,
            None,
            format!("{} teleports", source.name),
        ),
        EffectKind::Transform { template } => match template {
            Some(t) => EffectResult::new(
                effect_type,
                Some(Payload::Summon {
                    template: t.clone(),
                }),
                format!("{} transforms into {}", source.name, t),
            ),
            None => EffectResult::new(
                effect_type,
                None,
                format!("{} stays as is: no form declared", source.name),
            ),
        },
        EffectKind::Summon { template } => match template {
            Some(t) => EffectResult::new(
                effect_type,
                Some(Payload::Summon {
                    template: t.clone(),
                }),
                format!("{} summons {}", source.name, t),
            ),
            None => EffectResult::new(
                effect_type,
                None,
                format!("{} summons nothing: no creature declared", source.name),
            ),
        },
        EffectKind::ModifyAction { base_amount } => EffectResult::new(
            effect_type,
            None,
            format!(
                "{}'s actions are modified ({})",
                target.name,
                signed(*base_amount)
            ),
        ),
        EffectKind::RemoveStatus { status } => remove_status(effect_type, status.as_deref(), target),
        EffectKind::Dispel { status: Some(status) } => {
            remove_status(effect_type, Some(status.as_str()), target)
        }
        EffectKind::Dispel { status: None } => {
            let statuses: Vec<String> = target
                .stats
                .as_ref()
                .map(|s| s.statuses.keys().cloned().collect())
                .unwrap_or_default();
            if statuses.is_empty() {
                EffectResult::new(
                    effect_type,
                    None,
                    format!("{} has nothing to dispel", target.name),
                )
            } else {
                let message = format!("{} is dispelled of {}", target.name, statuses.join(", "));
                EffectResult::new(effect_type, Some(Payload::Dispelled { statuses }), message)
            }
        }
        EffectKind::Revive { magnitude } => {
            let down = target.stats.as_ref().is_some_and(|s| s.hp <= 0);
            if down {
                let EffectValue { value: v, .. } = value(magnitude);
                let hp = v.max(1);
                EffectResult::new(
                    effect_type,
                    Some(Payload::Revived { hp }),
                    format!("{} is revived with {} HP", target.name, hp),
                )
            } else {
                EffectResult::new(
                    effect_type,
                    None,
                    format!("{} is not down", target.name),
                )
            }
        }
    };

    result.animation_key = effect.animation_key.clone();
    result
}

fn remove_status(effect_type: EffectType, status: Option<&str>, target: &Entity) -> EffectResult {
    match status {
        Some(status) => EffectResult::new(
            effect_type,
            Some(Payload::StatusRemoved {
                status: status.to_string(),
            }),
            format!("{} is no longer {}", target.name, status),
        ),
        None => EffectResult::new(
            effect_type,
            None,
            format!("{} is unchanged: no status declared", target.name),
        ),
    }
}
