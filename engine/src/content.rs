use std::{fs, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::effect::Effect;
use crate::stats::Entity;
use crate::validate::{validate_effect, validate_entity};

const BUILTIN_EFFECTS: &str = include_str!("../content/effects.json");
const BUILTIN_ENTITIES: &str = include_str!("../content/entities.yaml");

/// Effect library: id → definition, in authored order.
pub type EffectLibrary = IndexMap<String, Effect>;
/// Entity roster: id → snapshot, in authored order.
pub type Roster = IndexMap<String, Entity>;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

/// Parse JSON or YAML, picked by file extension.
pub fn parse_text<T: DeserializeOwned>(text: &str, path: &Path) -> Result<T> {
    if is_yaml(path) {
        serde_yaml::from_str(text)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))
    } else {
        serde_json::from_str(text)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))
    }
}

pub fn effects_from_str(text: &str, path: &Path) -> Result<EffectLibrary> {
    let effects: EffectLibrary = parse_text(text, path)?;
    for (id, effect) in &effects {
        validate_effect(id, effect)?;
    }
    Ok(effects)
}

pub fn entities_from_str(text: &str, path: &Path) -> Result<Roster> {
    let list: Vec<Entity> = parse_text(text, path)?;
    let mut roster = Roster::new();
    for entity in list {
        validate_entity(&entity)?;
        if roster.contains_key(&entity.id) {
            anyhow::bail!("duplicate entity id '{}' in {}", entity.id, path.display());
        }
        roster.insert(entity.id.clone(), entity);
    }
    Ok(roster)
}

/// Read a content file, honouring a UTF-8/UTF-16 byte-order mark if present.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
    }
}

pub fn load_effects(path: &Path) -> Result<EffectLibrary> {
    effects_from_str(&read_text(path)?, path)
}

pub fn load_entities(path: &Path) -> Result<Roster> {
    entities_from_str(&read_text(path)?, path)
}

/// A file holding one effect definition; the file stem names it in errors.
pub fn load_effect(path: &Path) -> Result<Effect> {
    let effect: Effect = parse_text(&read_text(path)?, path)?;
    let id = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    validate_effect(&id, &effect)?;
    Ok(effect)
}

/// A file holding one entity snapshot.
pub fn load_entity(path: &Path) -> Result<Entity> {
    let entity: Entity = parse_text(&read_text(path)?, path)?;
    validate_entity(&entity)?;
    Ok(entity)
}

pub fn builtin_effects() -> Result<EffectLibrary> {
    effects_from_str(BUILTIN_EFFECTS, Path::new("builtin/effects.json"))
}

pub fn builtin_entities() -> Result<Roster> {
    entities_from_str(BUILTIN_ENTITIES, Path::new("builtin/entities.yaml"))
}
