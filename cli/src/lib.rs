use std::{borrow::Cow, path::Path};

use anyhow::{anyhow, Result};
use effect_engine::content::{
    builtin_effects, builtin_entities, load_effect, load_effects, load_entities, load_entity,
    EffectLibrary, Roster,
};
use effect_engine::{Dice, Effect, Entity};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Built-in effects and entities, overlaid with any files given.
pub struct Library {
    pub effects: EffectLibrary,
    pub entities: Roster,
}

impl Library {
    pub fn load(effects: Option<&Path>, entities: Option<&Path>) -> Result<Self> {
        let mut lib = Library {
            effects: builtin_effects()?,
            entities: builtin_entities()?,
        };
        if let Some(path) = effects {
            lib.effects.extend(load_effects(path)?);
        }
        if let Some(path) = entities {
            lib.entities.extend(load_entities(path)?);
        }
        debug!(
            effects = lib.effects.len(),
            entities = lib.entities.len(),
            "content loaded"
        );
        Ok(lib)
    }

    /// A library id, or else a path to a file holding a single effect.
    pub fn effect_arg(&self, arg: &str) -> Result<Cow<'_, Effect>> {
        if let Some(effect) = self.effects.get(arg) {
            return Ok(Cow::Borrowed(effect));
        }
        let path = Path::new(arg);
        if path.is_file() {
            return Ok(Cow::Owned(load_effect(path)?));
        }
        Err(anyhow!("unknown effect '{}'", arg))
    }

    /// A roster id, or else a path to a file holding a single entity.
    pub fn entity_arg(&self, arg: &str) -> Result<Cow<'_, Entity>> {
        if let Some(entity) = self.entities.get(arg) {
            return Ok(Cow::Borrowed(entity));
        }
        let path = Path::new(arg);
        if path.is_file() {
            return Ok(Cow::Owned(load_entity(path)?));
        }
        Err(anyhow!("unknown entity '{}'", arg))
    }
}

pub fn dice_for(seed: Option<u64>) -> Dice {
    match seed {
        Some(seed) => Dice::from_seed(seed),
        None => Dice::from_entropy(),
    }
}
