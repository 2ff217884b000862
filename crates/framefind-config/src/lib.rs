//! framefind configuration.
//!
//! TOML-based configuration with full validation. All sections use
//! sensible defaults so partial configs work out of the box.
//!
//! ```rust,no_run
//! use framefind_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FrameFindConfig, CONFIG_SCHEMA_VERSION};

use framefind_common::ConfigError;
use std::path::Path;

/// Load and validate config from the platform default path.
///
/// Creates a documented default file if none exists.
pub fn load_config() -> Result<FrameFindConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<FrameFindConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FrameFindConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
