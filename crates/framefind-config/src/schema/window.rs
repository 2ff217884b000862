//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings for the `framefind` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial width in logical pixels (valid range: 200-8192).
    pub width: u32,
    /// Initial height in logical pixels (valid range: 200-8192).
    pub height: u32,
    /// Enable webview devtools.
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "framefind".into(),
            width: 1024,
            height: 768,
            devtools: cfg!(debug_assertions),
        }
    }
}
