use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub mod apply;
pub mod conditions;
pub mod content;
pub mod damage;
pub mod effect;
pub mod resolve;
pub mod stats;
pub mod summary;
pub mod validate;
pub mod value;

pub use damage::resolve_damage_type;
pub use effect::{
    Effect, EffectCondition, EffectDuration, EffectKind, EffectType, Magnitude, Scaling,
    TargetMode,
};
pub use resolve::{resolve_effect, EffectResult, Payload};
pub use stats::{
    Ability, AbilityScores, CombatStats, CreatureType, DamageType, Entity, Position,
    ResourceKind,
};
pub use value::{calculate_value, EffectValue, CRIT_CHANCE};

/// Where dice faces and crit draws come from.
pub trait RandomSource {
    /// One face of a die, in `1..=sides`. A zero-sided die yields 0.
    fn roll_die(&mut self, sides: u32) -> u32;
    /// Uniform draw in `[0, 1)`.
    fn chance(&mut self) -> f64;
}

/// Seeded ChaCha-backed source. Same seed, same combat log.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for Dice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rng.gen_range(1..=sides)
    }

    fn chance(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Fixed-sequence source for tests and replays.
///
/// Faces and chance draws cycle through their own scripts. With no faces every
/// die shows 1; with no chances every draw is 1.0, so nothing ever crits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    chances: Vec<f64>,
    face_idx: usize,
    chance_idx: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<u32>, chances: Vec<f64>) -> Self {
        Self {
            faces,
            chances,
            face_idx: 0,
            chance_idx: 0,
        }
    }

    pub fn from_faces(faces: Vec<u32>) -> Self {
        Self::new(faces, Vec::new())
    }

    /// Every chance draw is 0.0, so every crit check succeeds.
    pub fn always_crit(faces: Vec<u32>) -> Self {
        Self::new(faces, vec![0.0])
    }
}

impl RandomSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        let face = if self.faces.is_empty() {
            1
        } else {
            let f = self.faces[self.face_idx % self.faces.len()];
            self.face_idx += 1;
            f
        };
        face.clamp(1, sides)
    }

    fn chance(&mut self) -> f64 {
        if self.chances.is_empty() {
            return 1.0;
        }
        let c = self.chances[self.chance_idx % self.chances.len()];
        self.chance_idx += 1;
        c
    }
}

/// Sum of `count` independent faces of a `sides`-sided die, saturating at `u32::MAX`.
/// `roll_dice(_, 0, _) == 0`.
pub fn roll_dice(dice: &mut dyn RandomSource, count: u32, sides: u32) -> u32 {
    (0..count).fold(0u32, |total, _| total.saturating_add(dice.roll_die(sides)))
}

/// D&D ability modifier = floor((score - 10) / 2) for integer scores.
pub fn ability_mod(score: i32) -> i32 {
    // `div_euclid` with positive divisor matches mathematical floor division.
    score.saturating_sub(10).div_euclid(2)
}

/// A dice expression such as `2d6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
}

impl DiceSpec {
    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    pub fn roll(self, dice: &mut dyn RandomSource) -> u32 {
        roll_dice(dice, self.count, self.sides)
    }

    pub fn is_empty(self) -> bool {
        self.count == 0 || self.sides == 0
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dice spec (expected XdY), got: {0}")]
pub struct ParseDiceError(String);

impl FromStr for DiceSpec {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (count, sides) = lowered
            .split_once('d')
            .ok_or_else(|| ParseDiceError(s.to_string()))?;
        // "d8" means one die.
        let count = if count.is_empty() {
            1
        } else {
            count.parse().map_err(|_| ParseDiceError(s.to_string()))?
        };
        let sides = sides.parse().map_err(|_| ParseDiceError(s.to_string()))?;
        Ok(Self { count, sides })
    }
}
