//! Host boundary settings.

use serde::{Deserialize, Serialize};

/// Host request channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Pending host commands per queue; extra commands are dropped (valid range: 1-4096).
    pub queue_capacity: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { queue_capacity: 64 }
    }
}
