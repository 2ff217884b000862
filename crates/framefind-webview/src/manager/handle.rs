use wry::WebView;

use framefind_common::{HostError, SurfaceId};

use crate::host::{FindOptions, NativeFrame, StopFindOptions};

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The surface this WebView renders.
    pub(super) surface_id: SurfaceId,
}

impl WebViewHandle {
    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Return focus to the parent window.
    pub fn focus_parent(&self) -> Result<(), wry::Error> {
        self.webview.focus_parent()
    }
}

impl NativeFrame for WebViewHandle {
    fn find(&self, query: &str, options: &FindOptions) -> Result<(), HostError> {
        self.evaluate_script(&crate::ipc::js_find_in_page(query, options))
            .map_err(|e| HostError::Script(format!("{}: {e}", self.surface_id)))
    }

    fn stop_find(&self, options: &StopFindOptions) -> Result<(), HostError> {
        self.evaluate_script(&crate::ipc::js_stop_find(options))
            .map_err(|e| HostError::Script(format!("{}: {e}", self.surface_id)))
    }
}
