//! Window creation, host runtime startup, and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use framefind_common::WindowId;
use framefind_webview::{
    host_channel, EmbeddedSurface, HostDispatcher, HostService, SurfaceSettings, WebViewConfig,
    WebViewManager, WebViewRegistry,
};

use super::bounds::window_bounds;
use super::core::FrameFindApp;
use super::title::window_title;

/// Shown when no `--url` is given.
const SAMPLE_PAGE: &str = r#"<!doctype html>
<html>
  <head><meta charset="utf-8"><title>framefind</title></head>
  <body style="font-family: sans-serif; margin: 2em">
    <h1>framefind</h1>
    <p>Press F3 to find the next match, Shift+F3 for the previous one and
       Escape to stop. Start with <code>--find &lt;text&gt;</code>.</p>
    <p>The quick brown fox jumps over the lazy dog. The dog sleeps.</p>
    <p>A fox, a dog and another fox walk into a field.</p>
  </body>
</html>"#;

impl FrameFindApp {
    /// Create the window, the host runtime and the embedded page.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let base_title = self.config.window.title.clone();
        let attrs = WindowAttributes::default()
            .with_title(base_title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        let window_id = WindowId(u64::from(window.id()));

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("framefind-host")
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start tokio runtime: {e}");
                return false;
            }
        };

        // Host side: requests travel proxy -> channel -> HostService::poll
        // Both queues share the configured bound.
        let capacity = self.config.host.queue_capacity as usize;
        let (proxy, endpoint) = host_channel(capacity);
        let (dispatcher, pump) =
            HostDispatcher::spawn(runtime.handle(), Arc::new(proxy), capacity);

        let settings = SurfaceSettings {
            keep_selection_on_stop: self.config.find.keep_selection_on_stop,
            suppress_shortcuts: self.config.shortcuts.suppress_while_focused,
        };
        let surface =
            EmbeddedSurface::new(window_id, self.surface_id.clone(), dispatcher, settings);

        let title_window = Arc::clone(&window);
        let title_sub = surface.find().on_did_change_has_results(move |has| {
            title_window.set_title(&window_title(&base_title, has));
        });

        let mut registry = WebViewRegistry::new(window_id, WebViewManager::new());
        let webview_config = match &self.start_url {
            Some(url) => WebViewConfig::with_url(url),
            None => WebViewConfig::with_html(SAMPLE_PAGE),
        };
        let webview_config = WebViewConfig {
            devtools: self.config.window.devtools,
            ..webview_config
        };

        let size = window.inner_size();
        if let Err(e) = registry.create(
            self.surface_id.clone(),
            window.as_ref(),
            window_bounds(size.width, size.height),
            webview_config,
        ) {
            tracing::error!(surface = %self.surface_id, error = %e, "Failed to create webview");
            return false;
        }

        self.window_id = Some(window_id);
        self.window = Some(window);
        self.webviews = Some(registry);
        self.surface = Some(surface);
        self.title_sub = Some(title_sub);
        self.host = Some(HostService::new(endpoint));
        self.pump = Some(pump);
        self.tokio_runtime = Some(runtime);

        tracing::info!(window = %window_id, surface = %self.surface_id, "Window and webview created");
        true
    }
}
