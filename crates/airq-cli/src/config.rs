//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::cli::{ConfigKey, OutputFormat, parse_bool_arg};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub format: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Compact JSON output
    #[serde(default)]
    pub compact: bool,

    /// Show the health advisory in text output
    #[serde(default = "default_true")]
    pub advisory: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: None,
            no_color: false,
            compact: false,
            advisory: true,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("airq")
            .join("config.toml")
    }

    /// Load config from `path`, or return default if it does not exist.
    ///
    /// A config that exists but cannot be read or parsed is reported on
    /// stderr and replaced by the default, so a broken file never blocks a
    /// calculation.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Update one key from its string form.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::Format => {
                if OutputFormat::from_config(value).is_none() {
                    bail!("Invalid format '{}'. Valid values: text, json, csv", value);
                }
                self.format = Some(value.to_lowercase());
            }
            ConfigKey::NoColor => self.no_color = parse_bool_arg(value).map_err(anyhow::Error::msg)?,
            ConfigKey::Compact => self.compact = parse_bool_arg(value).map_err(anyhow::Error::msg)?,
            ConfigKey::Advisory => self.advisory = parse_bool_arg(value).map_err(anyhow::Error::msg)?,
        }
        Ok(())
    }

    /// Default output format from the config, if set and valid.
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(OutputFormat::from_config)
    }
}

/// Resolve the output format: explicit flag, then `--json`, then config, then text.
pub fn resolve_format(flag: Option<OutputFormat>, json: bool, config: &Config) -> OutputFormat {
    flag.or(json.then_some(OutputFormat::Json))
        .or_else(|| config.default_format())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.format, None);
        assert!(!config.no_color);
        assert!(config.advisory);
    }

    #[test]
    fn test_missing_advisory_defaults_to_true() {
        let config: Config = toml::from_str("format = \"json\"\n").unwrap();
        assert!(config.advisory);
        assert_eq!(config.default_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("airq").join("config.toml");

        let config = Config {
            format: Some("csv".to_string()),
            no_color: true,
            compact: true,
            advisory: false,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp_dir.path().join("missing.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "format = [").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set(ConfigKey::Format, "JSON").unwrap();
        config.set(ConfigKey::NoColor, "yes").unwrap();
        config.set(ConfigKey::Advisory, "off").unwrap();

        assert_eq!(config.format.as_deref(), Some("json"));
        assert!(config.no_color);
        assert!(!config.advisory);

        assert!(config.set(ConfigKey::Format, "yaml").is_err());
        assert!(config.set(ConfigKey::Compact, "sometimes").is_err());
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = Config {
            format: Some("csv".to_string()),
            ..Config::default()
        };

        assert_eq!(
            resolve_format(Some(OutputFormat::Text), true, &config),
            OutputFormat::Text
        );
        assert_eq!(resolve_format(None, true, &config), OutputFormat::Json);
        assert_eq!(resolve_format(None, false, &config), OutputFormat::Csv);
        assert_eq!(
            resolve_format(None, false, &Config::default()),
            OutputFormat::Text
        );
    }
}
