use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::metadata::PKG_NAME;

pub const ENV_DATA_DIR: &str = "CLOSET_DATA_DIR";
pub const ENV_SEED_SAMPLE_DATA: &str = "CLOSET_SEED_SAMPLE_DATA";
pub const ENV_PRETTY_JSON: &str = "CLOSET_PRETTY_JSON";

/// Behaviour switches for a [`crate::ClosetStore`], independent of where its
/// data lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Fill an empty closet with the sample wardrobe on first open.
    pub seed_sample_data: bool,
    /// Write indented JSON instead of compact JSON.
    pub pretty_json: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            pretty_json: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosetConfig {
    pub data_dir: PathBuf,
    pub seed_sample_data: bool,
    pub pretty_json: bool,
}

impl Default for ClosetConfig {
    fn default() -> Self {
        let options = StoreOptions::default();
        Self {
            data_dir: default_data_dir(),
            seed_sample_data: options.seed_sample_data,
            pretty_json: options.pretty_json,
        }
    }
}

impl ClosetConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `CLOSET_DATA_DIR`, `CLOSET_SEED_SAMPLE_DATA` and
    /// `CLOSET_PRETTY_JSON`.
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(ENV_SEED_SAMPLE_DATA) {
            config.seed_sample_data = parse_flag(ENV_SEED_SAMPLE_DATA, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PRETTY_JSON) {
            config.pretty_json = parse_flag(ENV_PRETTY_JSON, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON settings file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(StoreError::InvalidConfig(format!(
                "{ENV_DATA_DIR} cannot be empty"
            )));
        }
        Ok(())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            seed_sample_data: self.seed_sample_data,
            pretty_json: self.pretty_json,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(PKG_NAME)
}

fn parse_flag(name: &str, raw: &str) -> StoreResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(StoreError::InvalidConfig(format!(
            "Invalid {name} '{raw}': expected true or false"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_end_in_package_dir() {
        let config = ClosetConfig::from_lookup(|_| None).unwrap();
        assert!(config.data_dir.ends_with(PKG_NAME));
        assert!(config.seed_sample_data);
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClosetConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/closet"),
            (ENV_SEED_SAMPLE_DATA, "off"),
            (ENV_PRETTY_JSON, "YES"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/closet"));
        assert_eq!(
            config.store_options(),
            StoreOptions {
                seed_sample_data: false,
                pretty_json: true
            }
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ClosetConfig::from_lookup(lookup_from(&[(ENV_PRETTY_JSON, "maybe")])).unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig(_)));

        let err = ClosetConfig::from_lookup(lookup_from(&[(ENV_DATA_DIR, "")])).unwrap_err();
        assert!(err.to_string().contains(ENV_DATA_DIR));
    }

    #[test]
    fn test_json_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "data_dir": "/srv/closet", "pretty_json": true }"#).unwrap();

        let config = ClosetConfig::from_json_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/closet"));
        assert!(config.pretty_json);
        assert!(config.seed_sample_data);
    }
}
