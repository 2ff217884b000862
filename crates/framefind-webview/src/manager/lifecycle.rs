use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use framefind_common::SurfaceId;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface_id: SurfaceId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_focused(false);

        // IPC bridge, focus forwarding and find entry points
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // IPC handler: JS -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), surface_id.clone());

        // Page load handler
        builder =
            Self::attach_page_load_handler(builder, Arc::clone(&self.events), surface_id.clone());

        // Set initial content
        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        // Build as child WebView
        let webview = builder.build_as_child(window)?;

        debug!(surface = %surface_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            surface_id,
        })
    }
}
