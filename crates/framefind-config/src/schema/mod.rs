//! Configuration schema types for framefind.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod find;
mod host;
mod system;
mod window;

pub use find::*;
pub use host::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FrameFindConfig {
    pub find: FindConfig,
    pub shortcuts: ShortcutsConfig,
    pub host: HostConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
