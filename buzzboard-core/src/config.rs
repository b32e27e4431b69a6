//! Global BuzzBoard configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{BuzzboardError, BuzzboardResult};

static DEFAULT_DATA_DIR: &str = "~/.buzzboard";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/buzzboard/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct BuzzboardConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for BuzzboardConfig {
    fn default() -> Self {
        BuzzboardConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl BuzzboardConfig {
    pub fn config_path() -> BuzzboardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BuzzboardError::Config("Could not determine config directory".into()))?
            .join("buzzboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> BuzzboardResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: BuzzboardConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| BuzzboardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BuzzboardError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/buzzboard/config.toml
    pub fn save(&self) -> BuzzboardResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| BuzzboardError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| BuzzboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Where event data lives, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BuzzboardResult<()> {
        let contents = format!(
            "\
# buzzboard configuration

# Where your event data lives:
# data_dir = \"{DEFAULT_DATA_DIR}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BuzzboardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BuzzboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
