//! Configuration file upgrades: detect keys missing from an older file and
//! write them back with their default values.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Ok(Mapping::new()),
    }
}

fn file_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        _ => Ok(Mapping::new()),
    }
}

/// Keys a complete configuration has but the file at `path` lacks.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let defaults = default_mapping()?;
    let current = file_mapping(path)?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default. Existing values are kept.
/// Returns `Ok(true)` when the file was rewritten.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    let defaults = default_mapping()?;
    let mut current = file_mapping(path)?;

    for key in &missing {
        let k = Value::String(key.clone());
        if let Some(v) = defaults.get(&k) {
            current.insert(k, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    success(format!("Configuration migrated: added {}", missing.join(", ")));
    Ok(true)
}
