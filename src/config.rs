//! Configuration management for the ATS checker

use crate::error::{AtsCheckerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest upload accepted by default.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_upload_bytes: u64,
    pub allowed_extensions: Vec<String>,
    pub enable_cache: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Console,
    Json,
    Markdown,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: ["pdf", "docx", "txt", "md"].iter().map(|s| s.to_string()).collect(),
            enable_cache: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsCheckerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsCheckerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-checker")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.input.max_upload_bytes == 0 {
            return Err(AtsCheckerError::Configuration(
                "input.max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        if self.input.allowed_extensions.is_empty() {
            return Err(AtsCheckerError::Configuration(
                "input.allowed_extensions must list at least one extension".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input.max_upload_bytes, 5 * 1024 * 1024);
        assert!(config.input.allowed_extensions.contains(&"docx".to_string()));
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.input.enable_cache = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert!(!loaded.input.enable_cache);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AtsCheckerError::Configuration(_))));

        let mut config = Config::default();
        config.input.allowed_extensions.clear();
        config.save_to(&path).unwrap();
        assert!(matches!(Config::load_from(&path), Err(AtsCheckerError::Configuration(_))));
    }
}
