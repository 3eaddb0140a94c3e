//! Config command implementation.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::style;

pub fn cmd_config(action: ConfigAction, path: &Path, no_color: bool) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_from(path);
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{}", content);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(path);
            config.set(key, &value)?;
            config.save_to(path)?;
            println!(
                "{}",
                style::format_success(&format!("Set {:?} = {}", key, value), no_color)
            );
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init => {
            if path.exists() {
                bail!("Config file already exists: {}", path.display());
            }
            Config::default().save_to(path)?;
            println!(
                "{}",
                style::format_success(
                    &format!("Created config file: {}", path.display()),
                    no_color
                )
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigKey;

    #[test]
    fn test_set_persists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        cmd_config(
            ConfigAction::Set {
                key: ConfigKey::Format,
                value: "csv".to_string(),
            },
            &path,
            true,
        )
        .unwrap();

        assert_eq!(Config::load_from(&path).format.as_deref(), Some("csv"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        cmd_config(ConfigAction::Init, &path, true).unwrap();
        assert!(cmd_config(ConfigAction::Init, &path, true).is_err());
    }
}
