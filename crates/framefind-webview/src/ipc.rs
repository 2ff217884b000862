//! IPC protocol between Rust and the embedded page.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the page calls `window.ipc.postMessage(JSON.stringify({...}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to run the
//!   find functions installed by [`IPC_INIT_SCRIPT`].

use serde::{Deserialize, Serialize};

use crate::host::{FindOptions, StopFindOptions};

/// Channel raised by the page when its window gains focus.
pub const DID_FOCUS: &str = "did_focus";
/// Channel raised by the page when its window loses focus.
pub const DID_BLUR: &str = "did_blur";
/// Channel carrying the result of a native find step.
pub const FOUND_IN_PAGE: &str = "found_in_page";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The channel / message kind.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a string, structured JSON, or nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcPayload {
    /// The payload as a JSON value (`Null` for `None`).
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            IpcPayload::Text(s) => serde_json::Value::String(s.clone()),
            IpcPayload::Json(v) => v.clone(),
            IpcPayload::None => serde_json::Value::Null,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript installed as an initialization script into every WebView.
///
/// Sets up the IPC bridge, forwards window focus/blur as `did_focus` /
/// `did_blur`, and provides the find entry points used by the host.
/// A find step posts `found_in_page` with the match count.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.framefind = window.framefind || {};

    var ipc = window.framefind.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        }
    };

    window.addEventListener('focus', function() { ipc.send('did_focus', null); });
    window.addEventListener('blur', function() { ipc.send('did_blur', null); });

    function countMatches(query, matchCase) {
        if (!query) {
            return 0;
        }
        var text = document.body ? document.body.innerText : '';
        if (!matchCase) {
            text = text.toLowerCase();
            query = query.toLowerCase();
        }
        var count = 0;
        var at = text.indexOf(query);
        while (at !== -1) {
            count++;
            at = text.indexOf(query, at + query.length);
        }
        return count;
    }

    window.framefind.find = {
        _query: null,
        _ordinal: 0,
        run: function(query, options) {
            if (!query) {
                return;
            }
            options = options || {};
            var forward = options.forward !== false;
            var matchCase = options.matchCase === true;
            var resume = options.findNext === true && this._query === query;
            var selection = window.getSelection();
            if (!resume && selection) {
                selection.removeAllRanges();
            }
            this._query = query;

            var matches = countMatches(query, matchCase);
            var found = matches > 0 && window.find(query, matchCase, !forward, true, false, false, false);
            if (!found) {
                this._ordinal = 0;
            } else if (!resume) {
                this._ordinal = 1;
            } else if (forward) {
                this._ordinal = this._ordinal >= matches ? 1 : this._ordinal + 1;
            } else {
                this._ordinal = this._ordinal <= 1 ? matches : this._ordinal - 1;
            }

            ipc.send('found_in_page', {
                matches: matches,
                activeMatchOrdinal: this._ordinal,
                finalUpdate: true
            });
        },
        stop: function(options) {
            options = options || {};
            this._query = null;
            this._ordinal = 0;
            var selection = window.getSelection();
            if (!options.keepSelection && selection) {
                selection.removeAllRanges();
            }
        }
    };
})();
"#;

/// Generate the JS call that runs one native find step.
pub fn js_find_in_page(query: &str, options: &FindOptions) -> String {
    format!(
        "window.framefind.find.run({}, {});",
        serde_json::to_string(query).unwrap_or_else(|_| "\"\"".to_string()),
        serde_json::to_string(options).unwrap_or_else(|_| "{}".to_string()),
    )
}

/// Generate the JS call that ends the native find session.
pub fn js_stop_find(options: &StopFindOptions) -> String {
    format!(
        "window.framefind.find.stop({});",
        serde_json::to_string(options).unwrap_or_else(|_| "{}".to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_with_json_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"found_in_page","payload":{"matches":3}}"#)
            .unwrap();
        assert_eq!(msg.kind, FOUND_IN_PAGE);
        assert_eq!(msg.payload.to_value()["matches"], 3);
    }

    #[test]
    fn parses_message_with_null_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"did_focus","payload":null}"#).unwrap();
        assert_eq!(msg.kind, DID_FOCUS);
        assert!(msg.payload.to_value().is_null());
    }

    #[test]
    fn rejects_garbage() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn text_payload_becomes_json_string() {
        let msg = IpcMessage::from_json(r#"{"kind":"note","payload":"hello"}"#).unwrap();
        assert_eq!(msg.payload.to_value(), serde_json::json!("hello"));
    }

    #[test]
    fn find_script_quotes_query_and_options() {
        let js = js_find_in_page("it's \"here\"", &FindOptions::continuation(false));
        assert_eq!(
            js,
            r#"window.framefind.find.run("it's \"here\"", {"forward":false,"findNext":true});"#
        );
    }

    #[test]
    fn fresh_find_script_passes_empty_options() {
        let js = js_find_in_page("foo", &FindOptions::default());
        assert_eq!(js, r#"window.framefind.find.run("foo", {});"#);
    }

    #[test]
    fn stop_script_carries_keep_selection() {
        let js = js_stop_find(&StopFindOptions {
            keep_selection: true,
        });
        assert_eq!(js, r#"window.framefind.find.stop({"keepSelection":true});"#);
    }

    #[test]
    fn init_script_wires_channels() {
        assert!(IPC_INIT_SCRIPT.contains("'did_focus'"));
        assert!(IPC_INIT_SCRIPT.contains("'did_blur'"));
        assert!(IPC_INIT_SCRIPT.contains("'found_in_page'"));
        assert!(IPC_INIT_SCRIPT.contains("window.framefind.find"));
    }

    #[test]
    fn init_script_returns_early_on_empty_query() {
        // indexOf("") never advances, so both the counter and the find step
        // must bail out before looping.
        let count_at = IPC_INIT_SCRIPT.find("function countMatches").unwrap();
        let run_at = IPC_INIT_SCRIPT.find("run: function(query, options)").unwrap();
        let count_guard = IPC_INIT_SCRIPT[count_at..].find("if (!query)").unwrap();
        let count_loop = IPC_INIT_SCRIPT[count_at..].find("while").unwrap();
        let run_guard = IPC_INIT_SCRIPT[run_at..].find("if (!query)").unwrap();
        let run_count = IPC_INIT_SCRIPT[run_at..].find("countMatches(").unwrap();
        assert!(count_guard < count_loop);
        assert!(run_guard < run_count);
    }
}
