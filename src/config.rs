//! Configuration loading and persona-directory resolution.

use crate::error::RegistryError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration, read from an optional TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Persona directory; None means use the platform default
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an explicit path, or from the default location
    /// when none is given. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, RegistryError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Ok(p) => p,
                // No platform config dir (e.g. stripped-down CI): defaults.
                Err(_) => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            RegistryError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            RegistryError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }
}

/// Default config file path under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, RegistryError> {
    Ok(project_config_dir()?.join("config.toml"))
}

/// Default persona directory under the platform config directory.
pub fn default_personas_dir() -> Result<PathBuf, RegistryError> {
    Ok(project_config_dir()?.join("agents"))
}

fn project_config_dir() -> Result<PathBuf, RegistryError> {
    if let Ok(home) = std::env::var("AGENTRY_CONFIG_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    let project_dirs = directories::ProjectDirs::from("", "agentry", "agentry").ok_or_else(|| {
        RegistryError::Config("Could not determine platform config directory".to_string())
    })?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Resolve the persona directory with precedence: CLI flag, `AGENTRY_DIR`
/// env, config file, platform default.
pub fn resolve_personas_dir(
    cli_dir: Option<PathBuf>,
    config: &Config,
) -> Result<PathBuf, RegistryError> {
    if let Some(dir) = cli_dir {
        if !dir.as_os_str().is_empty() {
            return Ok(dir);
        }
    }
    if let Ok(env_dir) = std::env::var("AGENTRY_DIR") {
        if !env_dir.is_empty() {
            return Ok(PathBuf::from(env_dir));
        }
    }
    if let Some(dir) = &config.dir {
        if !dir.as_os_str().is_empty() {
            return Ok(dir.clone());
        }
    }
    default_personas_dir()
}
