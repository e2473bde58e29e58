use std::collections::HashSet;

use crate::stats::{CombatStats, DamageType};

/// How a target's tags treated a damage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mitigation {
    Immune,
    Vulnerable,
    Resistant,
    Normal,
}

/// First match wins: immune, then vulnerable, then resistant.
pub fn mitigation_for(
    dtype: DamageType,
    resist: &HashSet<DamageType>,
    vuln: &HashSet<DamageType>,
    immune: &HashSet<DamageType>,
) -> Mitigation {
    if immune.contains(&dtype) {
        Mitigation::Immune
    } else if vuln.contains(&dtype) {
        Mitigation::Vulnerable
    } else if resist.contains(&dtype) {
        Mitigation::Resistant
    } else {
        Mitigation::Normal
    }
}

impl Mitigation {
    pub fn apply(self, amount: i32) -> i32 {
        let amount = amount.max(0);
        match self {
            Mitigation::Immune => 0,
            Mitigation::Vulnerable => amount.saturating_mul(2),
            Mitigation::Resistant => amount / 2,
            Mitigation::Normal => amount,
        }
    }
}

/// Apply immunity, vulnerability or resistance to a raw damage amount.
pub fn adjust_damage_by_type(
    amount: i32,
    dtype: DamageType,
    resist: &HashSet<DamageType>,
    vuln: &HashSet<DamageType>,
    immune: &HashSet<DamageType>,
) -> i32 {
    mitigation_for(dtype, resist, vuln, immune).apply(amount)
}

/// Same as [`adjust_damage_by_type`], reading the sets off a target's stats.
/// A target without stats takes the raw amount.
pub fn resolve_damage_type(amount: i32, dtype: DamageType, target: Option<&CombatStats>) -> i32 {
    match target {
        Some(stats) => adjust_damage_by_type(
            amount,
            dtype,
            &stats.resistances,
            &stats.vulnerabilities,
            &stats.immunities,
        ),
        None => amount.max(0),
    }
}
