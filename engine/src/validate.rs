//! Authoring-time checks for content.
//!
//! The resolver tolerates anything; these checks catch content that would only
//! resolve by precedence accident.

use thiserror::Error;

use crate::effect::Effect;
use crate::stats::{CombatStats, DamageType, Entity};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    #[error("{entity}: {dtype} is listed in both {first} and {second}")]
    OverlappingDamageTags {
        entity: String,
        dtype: DamageType,
        first: &'static str,
        second: &'static str,
    },
    #[error("{entity}: {field} {value} exceeds max {max}")]
    AboveMax {
        entity: String,
        field: &'static str,
        value: i32,
        max: i32,
    },
    #[error("effect {0}: dice {1} has no sides")]
    SidelessDice(String, String),
    #[error("effect {0}: scaling factor {1} is not finite")]
    BadScalingFactor(String, f64),
}

pub fn validate_stats(name: &str, stats: &CombatStats) -> Result<(), ContentError> {
    let sets = [
        ("immunities", &stats.immunities),
        ("vulnerabilities", &stats.vulnerabilities),
        ("resistances", &stats.resistances),
    ];
    for (i, (first, a)) in sets.iter().enumerate() {
        for (second, b) in &sets[i + 1..] {
            // Sort so the reported type does not depend on hash order.
            let mut shared: Vec<_> = a.intersection(b).copied().collect();
            shared.sort_by_key(|d| d.label());
            if let Some(dtype) = shared.first() {
                return Err(ContentError::OverlappingDamageTags {
                    entity: name.to_string(),
                    dtype: *dtype,
                    first: *first,
                    second: *second,
                });
            }
        }
    }

    for (field, value, max) in [
        ("hp", stats.hp, stats.max_hp),
        ("mana", stats.mana, stats.max_mana),
        ("stamina", stats.stamina, stats.max_stamina),
    ] {
        if value > max {
            return Err(ContentError::AboveMax {
                entity: name.to_string(),
                field,
                value,
                max,
            });
        }
    }
    Ok(())
}

pub fn validate_entity(entity: &Entity) -> Result<(), ContentError> {
    match &entity.stats {
        Some(stats) => validate_stats(&entity.id, stats),
        None => Ok(()),
    }
}

pub fn validate_effect(id: &str, effect: &Effect) -> Result<(), ContentError> {
    let Some(magnitude) = effect.kind.magnitude() else {
        return Ok(());
    };
    if let Some(dice) = magnitude.dice {
        if dice.count > 0 && dice.sides == 0 {
            return Err(ContentError::SidelessDice(id.to_string(), dice.to_string()));
        }
    }
    if let Some(scaling) = magnitude.scaling {
        if !scaling.factor.is_finite() {
            return Err(ContentError::BadScalingFactor(id.to_string(), scaling.factor));
        }
    }
    Ok(())
}
