//! Core TOML config loading: read from path or platform default.

use crate::schema::FrameFindConfig;
use framefind_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation is left to the
/// caller (see [`crate::load_config`]).
pub fn load_from_path(path: &Path) -> Result<FrameFindConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: FrameFindConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/framefind/config.toml`
/// On Linux: `~/.config/framefind/config.toml`
///
/// If the file does not exist, writes the documented default and returns defaults.
pub fn load_default() -> Result<FrameFindConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(FrameFindConfig::default())
        }
        Err(e) => Err(e),
    }
}
