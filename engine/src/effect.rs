//! Authored effect definitions.
//!
//! One [`EffectKind`] variant per effect type, each carrying only the fields that
//! kind reads. Every kind-specific field is optional: content may omit it and the
//! resolver skips whatever depends on it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::{Ability, DamageType, ResourceKind};
use crate::DiceSpec;

fn default_factor() -> f64 {
    1.0
}

/// Attribute scaling: `floor(mod(attribute) * factor)` is added to the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaling {
    pub attribute: Ability,
    #[serde(default = "default_factor")]
    pub factor: f64,
}

/// Inputs to the value calculator shared by every kind that produces a number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Magnitude {
    #[serde(default)]
    pub base_amount: i32,
    #[serde(default)]
    pub dice: Option<DiceSpec>,
    #[serde(default)]
    pub scaling: Option<Scaling>,
}

impl Magnitude {
    pub fn flat(amount: i32) -> Self {
        Self {
            base_amount: amount,
            ..Self::default()
        }
    }

    pub fn dice(count: u32, sides: u32) -> Self {
        Self {
            dice: Some(DiceSpec::new(count, sides)),
            ..Self::default()
        }
    }

    pub fn plus(mut self, amount: i32) -> Self {
        self.base_amount += amount;
        self
    }

    pub fn scaled(mut self, attribute: Ability, factor: f64) -> Self {
        self.scaling = Some(Scaling { attribute, factor });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectDuration {
    Instant,
    Rounds(u32),
    Permanent,
}

impl EffectDuration {
    /// Statuses and stat modifiers without an authored duration last this long.
    pub const DEFAULT: EffectDuration = EffectDuration::Rounds(3);
}

impl fmt::Display for EffectDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectDuration::Instant => f.write_str("instant"),
            EffectDuration::Rounds(1) => f.write_str("1 round"),
            EffectDuration::Rounds(n) => write!(f, "{} rounds", n),
            EffectDuration::Permanent => f.write_str("permanent"),
        }
    }
}

/// Gate evaluated against the target before anything is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectCondition {
    /// Target HP strictly below half its max.
    #[serde(rename = "HP_BELOW_50")]
    HpBelow50,
    IsUndead,
    /// Any tag this engine does not know. Always passes.
    #[serde(other)]
    Unrecognized,
}

/// Who the caller should aim the effect at. Carried for the caller; never read here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetMode {
    #[serde(rename = "SELF")]
    Caster,
    #[default]
    Target,
    AllAllies,
    AllEnemies,
    Area,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    Damage {
        #[serde(flatten)]
        magnitude: Magnitude,
        #[serde(default)]
        damage_type: Option<DamageType>,
    },
    Heal {
        #[serde(flatten)]
        magnitude: Magnitude,
    },
    BuffStat {
        #[serde(flatten)]
        magnitude: Magnitude,
        #[serde(default)]
        stat: Option<String>,
        #[serde(default)]
        duration: Option<EffectDuration>,
    },
    DebuffStat {
        #[serde(flatten)]
        magnitude: Magnitude,
        #[serde(default)]
        stat: Option<String>,
        #[serde(default)]
        duration: Option<EffectDuration>,
    },
    ApplyStatus {
        #[serde(default)]
        status: Option<String>,
        #[serde(default)]
        duration: Option<EffectDuration>,
    },
    RemoveStatus {
        #[serde(default)]
        status: Option<String>,
    },
    RestoreResource {
        #[serde(flatten)]
        magnitude: Magnitude,
        #[serde(default)]
        resource: Option<ResourceKind>,
    },
    Teleport {},
    Transform {
        #[serde(default)]
        template: Option<String>,
    },
    Summon {
        #[serde(default)]
        template: Option<String>,
    },
    Dispel {
        #[serde(default)]
        status: Option<String>,
    },
    Revive {
        #[serde(flatten)]
        magnitude: Magnitude,
    },
    ModifyAction {
        /// Interpreted by the caller.
        #[serde(default)]
        base_amount: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    Damage,
    Heal,
    BuffStat,
    DebuffStat,
    ApplyStatus,
    RemoveStatus,
    RestoreResource,
    Teleport,
    Transform,
    Summon,
    Dispel,
    Revive,
    ModifyAction,
}

impl EffectKind {
    pub fn effect_type(&self) -> EffectType {
        match self {
            EffectKind::Damage { .. } => EffectType::Damage,
            EffectKind::Heal { .. } => EffectType::Heal,
            EffectKind::BuffStat { .. } => EffectType::BuffStat,
            EffectKind::DebuffStat { .. } => EffectType::DebuffStat,
            EffectKind::ApplyStatus { .. } => EffectType::ApplyStatus,
            EffectKind::RemoveStatus { .. } => EffectType::RemoveStatus,
            EffectKind::RestoreResource { .. } => EffectType::RestoreResource,
            EffectKind::Teleport {} => EffectType::Teleport,
            EffectKind::Transform { .. } => EffectType::Transform,
            EffectKind::Summon { .. } => EffectType::Summon,
            EffectKind::Dispel { .. } => EffectType::Dispel,
            EffectKind::Revive { .. } => EffectType::Revive,
            EffectKind::ModifyAction { .. } => EffectType::ModifyAction,
        }
    }

    /// The calculator inputs, for kinds that compute a value.
    pub fn magnitude(&self) -> Option<&Magnitude> {
        match self {
            EffectKind::Damage { magnitude, .. }
            | EffectKind::Heal { magnitude }
            | EffectKind::BuffStat { magnitude, .. }
            | EffectKind::DebuffStat { magnitude, .. }
            | EffectKind::RestoreResource { magnitude, .. }
            | EffectKind::Revive { magnitude } => Some(magnitude),
            _ => None,
        }
    }
}

/// A single authored rules outcome attached to an item, spell or skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(flatten)]
    pub kind: EffectKind,
    #[serde(default)]
    pub condition: Option<EffectCondition>,
    #[serde(default)]
    pub target: TargetMode,
    #[serde(default)]
    pub animation_key: Option<String>,
}

impl Effect {
    pub fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            condition: None,
            target: TargetMode::default(),
            animation_key: None,
        }
    }

    pub fn damage(magnitude: Magnitude, damage_type: Option<DamageType>) -> Self {
        Self::new(EffectKind::Damage {
            magnitude,
            damage_type,
        })
    }

    pub fn heal(magnitude: Magnitude) -> Self {
        Self::new(EffectKind::Heal { magnitude })
    }

    pub fn apply_status(status: impl Into<String>, duration: Option<EffectDuration>) -> Self {
        Self::new(EffectKind::ApplyStatus {
            status: Some(status.into()),
            duration,
        })
    }

    pub fn with_condition(mut self, condition: EffectCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_target(mut self, target: TargetMode) -> Self {
        self.target = target;
        self
    }

    pub fn with_animation(mut self, key: impl Into<String>) -> Self {
        self.animation_key = Some(key.into());
        self
    }

    pub fn effect_type(&self) -> EffectType {
        self.kind.effect_type()
    }
}
