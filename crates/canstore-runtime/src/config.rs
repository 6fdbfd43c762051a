use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "CANSTORE_CONFIG";
pub const LOCAL_CONFIG_FILE: &str = "canstore.toml";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CANSTORE_CONFIG environment variable (with tilde expansion)
/// 3. ./canstore.toml if it exists
/// 4. XDG config directory (canstore/config.toml)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand_tilde(&env_path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("canstore").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no local canstore.toml and no XDG config directory"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Static catalog file (JSON array of products)
    pub catalog_path: PathBuf,
    /// Directory that product image filenames are resolved against
    pub images_dir: PathBuf,
    /// Prefix printed before every price
    pub currency: String,
    /// Header text
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("products.json"),
            images_dir: PathBuf::from("images"),
            currency: "$".to_string(),
            title: "The Can Store".to_string(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, images_dir: Option<PathBuf>) -> Self {
        if let Some(path) = catalog {
            self.catalog_path = path;
        }
        if let Some(dir) = images_dir {
            self.images_dir = dir;
        }
        self
    }
}
