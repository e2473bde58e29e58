use std::{collections::HashSet, fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ability_mod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl FromStr for Ability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "str" | "strength" => Ok(Ability::Str),
            "dex" | "dexterity" => Ok(Ability::Dex),
            "con" | "constitution" => Ok(Ability::Con),
            "int" | "intelligence" => Ok(Ability::Int),
            "wis" | "wisdom" => Ok(Ability::Wis),
            "cha" | "charisma" => Ok(Ability::Cha),
            other => Err(format!("unknown ability: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(rename = "str")]
    pub str_: i32,
    pub dex: i32,
    pub con: i32,
    #[serde(rename = "int")]
    pub int_: i32,
    pub wis: i32,
    pub cha: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            str_: 10,
            dex: 10,
            con: 10,
            int_: 10,
            wis: 10,
            cha: 10,
        }
    }
}

impl AbilityScores {
    pub fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.str_,
            Ability::Dex => self.dex,
            Ability::Con => self.con,
            Ability::Int => self.int_,
            Ability::Wis => self.wis,
            Ability::Cha => self.cha,
        }
    }

    pub fn mod_of(&self, ability: Ability) -> i32 {
        ability_mod(self.score(ability))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DamageType {
    /// Generic type used when a damage effect declares none.
    #[default]
    Physical,
    Bludgeoning,
    Piercing,
    Slashing,
    Fire,
    Cold,
    Lightning,
    Acid,
    Poison,
    Psychic,
    Radiant,
    Necrotic,
    Thunder,
    Force,
}

impl DamageType {
    pub fn parse(s: &str) -> Option<DamageType> {
        use DamageType::*;
        match s.trim().to_lowercase().as_str() {
            "physical" => Some(Physical),
            "bludgeoning" => Some(Bludgeoning),
            "piercing" => Some(Piercing),
            "slashing" => Some(Slashing),
            "fire" => Some(Fire),
            "cold" => Some(Cold),
            "lightning" => Some(Lightning),
            "acid" => Some(Acid),
            "poison" => Some(Poison),
            "psychic" => Some(Psychic),
            "radiant" => Some(Radiant),
            "necrotic" => Some(Necrotic),
            "thunder" => Some(Thunder),
            "force" => Some(Force),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        use DamageType::*;
        match self {
            Physical => "physical",
            Bludgeoning => "bludgeoning",
            Piercing => "piercing",
            Slashing => "slashing",
            Fire => "fire",
            Cold => "cold",
            Lightning => "lightning",
            Acid => "acid",
            Poison => "poison",
            Psychic => "psychic",
            Radiant => "radiant",
            Necrotic => "necrotic",
            Thunder => "thunder",
            Force => "force",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreatureType {
    #[default]
    Humanoid,
    Beast,
    Undead,
    Construct,
    Elemental,
    Fiend,
    Celestial,
    Dragon,
    Aberration,
    Monstrosity,
    Fey,
    Giant,
    Ooze,
    Plant,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Mana,
    Stamina,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Mana => f.write_str("mana"),
            ResourceKind::Stamina => f.write_str("stamina"),
        }
    }
}

/// The slice of an entity's sheet the resolver reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: i32,
    pub max_hp: i32,
    #[serde(default)]
    pub mana: i32,
    #[serde(default)]
    pub max_mana: i32,
    #[serde(default)]
    pub stamina: i32,
    #[serde(default)]
    pub max_stamina: i32,
    #[serde(default)]
    pub abilities: AbilityScores,
    #[serde(default)]
    pub creature_type: CreatureType,
    #[serde(default)]
    pub resistances: HashSet<DamageType>,
    #[serde(default)]
    pub vulnerabilities: HashSet<DamageType>,
    #[serde(default)]
    pub immunities: HashSet<DamageType>,
    /// Status id → rounds remaining.
    #[serde(default)]
    pub statuses: IndexMap<String, u32>,
}

impl CombatStats {
    pub fn new(max_hp: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            ..Self::default()
        }
    }

    pub fn resource(&self, kind: ResourceKind) -> (i32, i32) {
        match kind {
            ResourceKind::Mana => (self.mana, self.max_mana),
            ResourceKind::Stamina => (self.stamina, self.max_stamina),
        }
    }

    pub fn has_status(&self, id: &str) -> bool {
        self.statuses.contains_key(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A read-only snapshot of a combatant at the moment of resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stats: Option<CombatStats>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub position: Option<Position>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stats: Option<CombatStats>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            equipment: Vec::new(),
            position: None,
        }
    }
}
