//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "save_file": "database_save.txt",
//!   "load_file": "database_loadfrom.txt",
//!   "edit_validation": "full",
//!   "id_ceiling": null,
//!   "log_level": "warn"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::store::{EditValidation, IdPolicy, StoreOptions};

use super::errors::{CliError, CliResult};

/// Edit validation mode as spelled in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditValidationMode {
    #[default]
    Full,
    Lenient,
}

impl From<EditValidationMode> for EditValidation {
    fn from(mode: EditValidationMode) -> Self {
        match mode {
            EditValidationMode::Full => EditValidation::Full,
            EditValidationMode::Lenient => EditValidation::Lenient,
        }
    }
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default target of the shell's save action
    #[serde(default = "default_save_file")]
    pub save_file: PathBuf,

    /// Default source of the shell's load action
    #[serde(default = "default_load_file")]
    pub load_file: PathBuf,

    #[serde(default)]
    pub edit_validation: EditValidationMode,

    /// When set, ids are searched below this value first
    #[serde(default)]
    pub id_ceiling: Option<u32>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_save_file() -> PathBuf {
    PathBuf::from("database_save.txt")
}
fn default_load_file() -> PathBuf {
    PathBuf::from("database_loadfrom.txt")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_file: default_save_file(),
            load_file: default_load_file(),
            edit_validation: EditValidationMode::default(),
            id_ceiling: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if let Some(ceiling) = self.id_ceiling {
            if ceiling < 2 {
                return Err(CliError::config_error(format!(
                    "id_ceiling must be at least 2, got {}",
                    ceiling
                )));
            }
        }

        self.level_filter()?;

        if self.save_file.as_os_str().is_empty() || self.load_file.as_os_str().is_empty() {
            return Err(CliError::config_error("save_file and load_file must not be empty"));
        }

        Ok(())
    }

    pub fn level_filter(&self) -> CliResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            CliError::config_error(format!("Invalid log_level: '{}'", self.log_level))
        })
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            id_policy: IdPolicy::from_ceiling(self.id_ceiling),
            edit_validation: self.edit_validation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.store_options(), StoreOptions::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_json(
            r#"{
                "save_file": "out.txt",
                "load_file": "in.txt",
                "edit_validation": "lenient",
                "id_ceiling": 1000,
                "log_level": "debug"
            }"#,
        )
        .unwrap();

        let options = config.store_options();
        assert_eq!(options.id_policy, IdPolicy::Ceiling(1000));
        assert_eq!(options.edit_validation, EditValidation::Lenient);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.save_file, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_json(r#"{"id_ceiling": 1}"#).is_err());
        assert!(Config::from_json(r#"{"log_level": "loud"}"#).is_err());
        assert!(Config::from_json(r#"{"edit_validation": "none"}"#).is_err());
        assert!(Config::from_json(r#"{"unknown": true}"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rosterdb.json");
        fs::write(&path, r#"{"log_level": "off"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Off);
    }
}
