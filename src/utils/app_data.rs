use crate::glossary::DuplicatePolicy;
use crate::utils::separators::{SeparatorSet, DEFAULT_SEPARATORS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "glossgen";
const CONFIG_FILE: &str = "config.json";

/// Generator settings, read from `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Characters that split definitions into words
    #[serde(default = "default_separators")]
    pub separators: String,

    /// `<title>` of the index page
    #[serde(default = "default_index_title")]
    pub index_title: String,

    /// `<h2>` heading of the index page
    #[serde(default = "default_index_heading")]
    pub index_heading: String,

    /// Handling of terms defined more than once
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

fn default_separators() -> String {
    DEFAULT_SEPARATORS.to_string()
}

fn default_index_title() -> String {
    "Glossary".to_string()
}

fn default_index_heading() -> String {
    "Glossary".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            separators: default_separators(),
            index_title: default_index_title(),
            index_heading: default_index_heading(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load config from `explicit` if given, else from the user config
    /// directory, else fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Separator set described by this config
    pub fn separator_set(&self) -> SeparatorSet {
        SeparatorSet::from_chars(&self.separators)
    }
}

/// Get the path to the user config file, if a config directory exists
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.separators, " \t,");
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.separator_set(), SeparatorSet::default());
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"index_title": "Terms", "duplicates": "last-write-wins"}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.index_title, "Terms");
        assert_eq!(config.index_heading, "Glossary");
        assert_eq!(config.separators, " \t,");
        assert_eq!(config.duplicates, DuplicatePolicy::LastWriteWins);
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"separators": " ;"}"#).unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        let seps = config.separator_set();
        assert!(seps.contains(';'));
        assert!(!seps.contains(','));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/glossgen.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
