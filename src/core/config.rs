//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::rewrite::RuleSpec;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI settings
    pub ui: UiConfig,
    /// Clause simplification settings
    pub rewrite: RewriteConfig,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    /// Sidebar width
    pub sidebar_width: f32,
    /// Feature key of the view shown at startup ("home" for the landing view)
    pub start_page: String,
}

/// Substitutions used by the simplify view, applied in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    pub rules: Vec<RuleSpec>,
}

/// Configuration read at startup
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// Whether saving may replace the file it came from
    pub writable: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            sidebar_width: 220.0,
            start_page: "home".to_string(),
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            rules: RuleSpec::defaults(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "clausewise", "ClauseWise")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory, see [`Self::load_or_recover_from`]
    pub fn load_or_recover() -> LoadedConfig {
        match Self::config_path() {
            Some(path) => Self::load_or_recover_from(&path),
            None => {
                tracing::warn!("Could not determine config directory, using defaults");
                LoadedConfig {
                    config: Self::default(),
                    writable: false,
                }
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults on failure
    ///
    /// An unreadable file is moved aside to `<name>.bak` so a later save
    /// cannot destroy it. If it cannot be moved, the result is not writable.
    pub fn load_or_recover_from(path: &Path) -> LoadedConfig {
        let err = match Self::load_from(path) {
            Ok(config) => {
                return LoadedConfig {
                    config,
                    writable: true,
                }
            }
            Err(e) => e,
        };
        tracing::error!("Failed to load config, using defaults: {:#}", err);

        let backup = Self::backup_path(path);
        let writable = match std::fs::rename(path, &backup) {
            Ok(()) => {
                tracing::warn!("Moved unreadable config to: {}", backup.display());
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Could not move {} aside ({}); it will not be overwritten",
                    path.display(),
                    e
                );
                false
            }
        };

        LoadedConfig {
            config: Self::default(),
            writable,
        }
    }

    /// `config.json` -> `config.json.bak`
    fn backup_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".bak");
        path.with_file_name(name)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.ui.theme != "light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.rewrite.rules.len(), 5);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.ui.theme = "light".to_string();
        config.ui.start_page = "qa".to_string();
        config.rewrite.rules.push(RuleSpec::new("whereas", "since"));
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!loaded.is_dark());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "ui": { "theme": "light" } }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.start_page, "home");
        assert_eq!(config.rewrite, RewriteConfig::default());
    }

    #[test]
    fn test_malformed_file_is_kept_as_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let original = r#"{ "rewrite": { "rules": [ { "pattern": "whereas" "#;
        std::fs::write(&path, original).unwrap();

        let loaded = AppConfig::load_or_recover_from(&path);
        assert_eq!(loaded.config, AppConfig::default());
        assert!(loaded.writable);
        assert!(!path.exists());

        loaded.config.save_to(&path).unwrap();
        let backup = dir.path().join("config.json.bak");
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), original);
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_valid_file_loads_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = AppConfig::default();
        config.rewrite.rules = vec![RuleSpec::new("whereas", "since")];
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_or_recover_from(&path);
        assert!(loaded.writable);
        assert_eq!(loaded.config, config);
        assert!(!dir.path().join("config.json.bak").exists());
    }

    #[test]
    fn test_missing_file_loads_writable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_or_recover_from(&dir.path().join("config.json"));
        assert!(loaded.writable);
        assert_eq!(loaded.config, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
