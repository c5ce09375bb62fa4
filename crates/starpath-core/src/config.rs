//! Configuration for starpath
//!
//! Configuration lives in `config.toml`, resolved in order:
//! 1. an explicit path (`--config`)
//! 2. `$STARPATH_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/starpath/config.toml`
//!
//! A missing file yields defaults; a malformed one is an error.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StarpathError};

pub use types::{GraphDefaults, SearchConfig, StarpathConfig};

const CONFIG_DIR: &str = "starpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "STARPATH_CONFIG_DIR";

impl StarpathConfig {
    /// Default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load from `explicit` or the default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(StarpathError::io_operation(
                        "read config",
                        path.display(),
                        "file does not exist",
                    ));
                }
                Self::load(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| StarpathError::io_operation("read config", path.display(), e))?;
        let config: StarpathConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StarpathError::io_operation("create config dir", parent.display(), e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| StarpathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| StarpathError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}
