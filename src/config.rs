use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "gityield.toml";

/// Represents the complete configuration for git-yield.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_true() -> bool {
    true
}

/// Which remote tags are fetched from and pushed to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,

    /// Fetch tags before computing the next version
    #[serde(default = "default_true")]
    pub fetch: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
            fetch: true,
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Refuse to tag when the working tree has uncommitted changes
    #[serde(default = "default_true")]
    pub require_clean: bool,

    /// Create and push without asking, same as `--force`
    #[serde(default)]
    pub skip_confirmation: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            require_clean: true,
            skip_confirmation: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gityield.toml` in current directory
/// 3. `.gityield.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            debug!("No {} found, using default config", CONFIG_FILE_NAME);
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
