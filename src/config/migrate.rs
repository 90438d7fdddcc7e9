//! Configuration file checks and in-place upgrades.
//!
//! Older host setups wrote the JavaScript option names (`startOfWeekDay`,
//! `enableModeration`, ...). Those keys are renamed, and any field the file
//! lacks is filled in with its default.

use super::Config;
use crate::errors::{AppError, AppResult};
use log::info;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const LEGACY_KEYS: [(&str, &str); 5] = [
    ("startOfWeekDay", "start_of_week"),
    ("enableModeration", "moderation_enabled"),
    ("timeFormat", "time_format"),
    ("userRole", "role"),
    ("customConfig", "taxonomy"),
];

/// Keys every configuration file is expected to carry.
pub const REQUIRED_KEYS: [&str; 5] = [
    "appointments_file",
    "start_of_week",
    "time_format",
    "utc_offset",
    "moderation_enabled",
];

fn as_mapping(yaml: &mut Value) -> AppResult<&mut Mapping> {
    yaml.as_mapping_mut()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))
}

/// Required keys missing from the YAML document.
pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let mut yaml: Value = serde_yaml::from_str(content)?;
    let map = as_mapping(&mut yaml)?;

    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Rename legacy keys and add missing ones. Returns the upgraded document and
/// the list of performed actions (empty when nothing changed).
pub fn migrate_content(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut yaml: Value = serde_yaml::from_str(content)?;
    let map = as_mapping(&mut yaml)?;
    let mut actions = Vec::new();

    for (old, new) in LEGACY_KEYS {
        let old_key = Value::String(old.to_string());
        let new_key = Value::String(new.to_string());
        if let Some(v) = map.remove(&old_key) {
            if !map.contains_key(&new_key) {
                map.insert(new_key, v);
                actions.push(format!("renamed '{old}' to '{new}'"));
            } else {
                actions.push(format!("dropped legacy '{old}' (already set as '{new}')"));
            }
        }
    }

    let defaults = serde_yaml::to_value(Config::default())?;
    if let Value::Mapping(defaults) = defaults {
        for key in REQUIRED_KEYS {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k)
                && let Some(v) = defaults.get(&k)
            {
                map.insert(k, v.clone());
                actions.push(format!("added missing '{key}'"));
            }
        }
    }

    // must still deserialize after the rewrite
    let upgraded: Config = serde_yaml::from_value(yaml.clone())?;
    upgraded.validate()?;

    Ok((serde_yaml::to_string(&yaml)?, actions))
}

/// Upgrade the configuration file at `path` in place.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let (upgraded, actions) = migrate_content(&content)?;

    if !actions.is_empty() {
        fs::write(path, upgraded)?;
        info!("configuration {} migrated: {}", path.display(), actions.join(", "));
    }
    Ok(actions)
}
