//! botsmith-config: editor configuration loading and saving.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
    #[error("Config directory not found")]
    NoDirFound,
}

/// Lint settings for template analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Warn when a template references a parameter no input or system
    /// name provides.
    #[serde(default = "default_true")]
    pub warn_unknown_params: bool,
    /// Warn when a skill has no description.
    #[serde(default)]
    pub warn_missing_description: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            warn_unknown_params: true,
            warn_missing_description: false,
        }
    }
}

/// Top-level botsmith configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotsmithConfig {
    /// Extra directories to load skills from, beyond the defaults.
    #[serde(default)]
    pub skill_dirs: Vec<PathBuf>,
    /// Author name recorded on saved skill versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Lint settings.
    #[serde(default)]
    pub lint: LintConfig,
}

/// Resolve the botsmith config directory (`~/.botsmith/`).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join(".botsmith"))
        .ok_or(ConfigError::NoDirFound)
}

/// Resolve the config file path (`~/.botsmith/config.json5`).
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.json5"))
}

/// Load configuration from the default path, falling back to defaults.
pub fn load_config() -> Result<BotsmithConfig, ConfigError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let path = config_file_path()?;
    load_config_from(&path)
}

/// Load configuration from a specific path, falling back to defaults if not found.
pub fn load_config_from(path: &Path) -> Result<BotsmithConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {}, using defaults", path.display());
        return Ok(BotsmithConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: BotsmithConfig = json5::from_str(&content)?;
    Ok(config)
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = config_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Save configuration to the default path.
pub fn save_config(config: &BotsmithConfig) -> Result<(), ConfigError> {
    let dir = ensure_config_dir()?;
    let path = dir.join("config.json5");
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::Io(std::io::Error::other(e)))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.json5")).unwrap();
        assert!(config.skill_dirs.is_empty());
        assert!(config.lint.warn_unknown_params);
        assert!(!config.lint.warn_missing_description);
    }

    #[test]
    fn test_load_json5_with_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json5");
        fs::write(
            &path,
            r#"{
                // project skill roots
                skill_dirs: ["./skills"],
                author: "ops-team",
                lint: { warn_missing_description: true },
            }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.skill_dirs, vec![PathBuf::from("./skills")]);
        assert_eq!(config.author.as_deref(), Some("ops-team"));
        assert!(config.lint.warn_unknown_params);
        assert!(config.lint.warn_missing_description);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json5");
        fs::write(&path, "not valid json5 {{{").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Json5(_))
        ));
    }
}
