//! The typed gateway to host-side capabilities.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use framefind_common::{HostError, SurfaceId, WindowId};

/// Addresses one surface inside one host window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTarget {
    pub window_id: WindowId,
    pub surface_id: SurfaceId,
}

impl FrameTarget {
    pub fn new(window_id: WindowId, surface_id: SurfaceId) -> Self {
        Self {
            window_id,
            surface_id,
        }
    }
}

/// Options for a find request.
///
/// The default is the empty set, which the host treats as a fresh search
/// starting at the top of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    /// Search direction. `None` means forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<bool>,
    /// Continue from the current match instead of restarting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find_next: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_case: Option<bool>,
}

impl FindOptions {
    /// Options that step the running search one match in the given direction.
    pub fn continuation(forward: bool) -> Self {
        Self {
            forward: Some(forward),
            find_next: Some(true),
            match_case: None,
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.find_next == Some(true)
    }
}

/// Options for a stop request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopFindOptions {
    /// Preserve the text selection left by the last match.
    pub keep_selection: bool,
}

/// Host operations reachable from the surface side.
///
/// Every call is addressed by window (and surface, for find). Results of a
/// find never come back through the return value; they arrive later as
/// surface events. An `Err` means the request did not make it across.
#[async_trait]
pub trait HostProxy: Send + Sync {
    async fn find_in_frame(
        &self,
        target: &FrameTarget,
        query: &str,
        options: &FindOptions,
    ) -> Result<(), HostError>;

    async fn stop_find_in_frame(
        &self,
        target: &FrameTarget,
        options: &StopFindOptions,
    ) -> Result<(), HostError>;

    /// Register (`ignore = true`) or unregister a window as one whose menu
    /// accelerators are ignored. The host keeps a boolean per window.
    async fn set_ignore_menu_shortcuts(
        &self,
        window_id: WindowId,
        ignore: bool,
    ) -> Result<(), HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_serialize_to_empty_object() {
        let json = serde_json::to_string(&FindOptions::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn continuation_options_serialize_camel_case() {
        let json = serde_json::to_value(FindOptions::continuation(false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "forward": false, "findNext": true })
        );
    }

    #[test]
    fn continuation_flag() {
        assert!(!FindOptions::default().is_continuation());
        assert!(FindOptions::continuation(true).is_continuation());
    }

    #[test]
    fn stop_options_shape() {
        let json = serde_json::to_value(StopFindOptions {
            keep_selection: true,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "keepSelection": true }));
    }

    #[test]
    fn frame_target_shape() {
        let target = FrameTarget::new(WindowId(9), SurfaceId::from("frame-a"));
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "windowId": 9, "surfaceId": "frame-a" })
        );
    }
}
