//! Find session and shortcut suppression settings.

use serde::{Deserialize, Serialize};

/// Find-in-page behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FindConfig {
    /// Selection handling when a stop request does not say.
    pub keep_selection_on_stop: bool,
}

/// Global shortcut suppression while a surface has focus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutsConfig {
    /// Ask the host to ignore menu accelerators while the surface is focused.
    pub suppress_while_focused: bool,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            suppress_while_focused: true,
        }
    }
}
