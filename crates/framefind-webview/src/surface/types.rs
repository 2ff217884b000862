use serde::{Deserialize, Serialize};

/// A channel-tagged message posted by the embedded page.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMessage {
    pub channel: String,
    pub payload: serde_json::Value,
}

/// Structured form of the page's `found_in_page` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResult {
    /// Number of matches for the current query.
    pub matches: u32,
    /// 1-based index of the highlighted match, when the page reports one.
    #[serde(default)]
    pub active_match_ordinal: Option<u32>,
    /// Whether this is the last update for the find step.
    #[serde(default = "default_final_update")]
    pub final_update: bool,
}

fn default_final_update() -> bool {
    true
}

impl FindResult {
    pub fn has_matches(&self) -> bool {
        self.matches > 0
    }

    /// Parse the raw payload of a `found_in_page` message.
    pub fn from_payload(payload: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(payload.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let result = FindResult::from_payload(&serde_json::json!({
            "matches": 5,
            "activeMatchOrdinal": 2,
            "finalUpdate": false
        }))
        .unwrap();
        assert_eq!(result.matches, 5);
        assert_eq!(result.active_match_ordinal, Some(2));
        assert!(!result.final_update);
        assert!(result.has_matches());
    }

    #[test]
    fn count_only_payload_uses_defaults() {
        let result = FindResult::from_payload(&serde_json::json!({ "matches": 0 })).unwrap();
        assert_eq!(result.active_match_ordinal, None);
        assert!(result.final_update);
        assert!(!result.has_matches());
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(FindResult::from_payload(&serde_json::json!(null)).is_none());
        assert!(FindResult::from_payload(&serde_json::json!({ "matches": -1 })).is_none());
        assert!(FindResult::from_payload(&serde_json::json!("3")).is_none());
    }
}
