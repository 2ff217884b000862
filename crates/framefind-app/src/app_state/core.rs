//! FrameFindApp struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use winit::window::Window;

use framefind_common::{Subscription, SurfaceId, WindowId};
use framefind_config::FrameFindConfig;
use framefind_webview::{EmbeddedSurface, HostService, WebViewRegistry};

use crate::cli::Args;

/// How often webview events and host requests are polled.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Top-level application state.
pub struct FrameFindApp {
    pub(super) config: FrameFindConfig,
    pub(super) start_url: Option<String>,
    /// Query from `--find`, also the fallback for F3 before any search.
    pub(super) initial_query: Option<String>,
    /// Run `initial_query` on the next finished page load.
    pub(super) find_on_load: bool,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) window_id: Option<WindowId>,

    // The embedded page and its find/shortcut wiring
    pub(super) surface_id: SurfaceId,
    pub(super) webviews: Option<WebViewRegistry>,
    pub(super) surface: Option<EmbeddedSurface>,
    pub(super) title_sub: Option<Subscription>,

    // Host side
    pub(super) host: Option<HostService>,
    pub(super) pump: Option<JoinHandle<()>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl FrameFindApp {
    pub fn new(config: FrameFindConfig, args: Args) -> Self {
        let find_on_load = args.find.as_deref().is_some_and(|q| !q.is_empty());
        Self {
            config,
            start_url: args.url,
            initial_query: args.find,
            find_on_load,
            window: None,
            window_id: None,
            surface_id: SurfaceId::new(),
            webviews: None,
            surface: None,
            title_sub: None,
            host: None,
            pump: None,
            tokio_runtime: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// The query F3 continues: the running one, else `--find`.
    pub(super) fn current_query(&self) -> Option<String> {
        let running = self
            .surface
            .as_ref()
            .map(|s| s.find().session().last_query())
            .filter(|q| !q.is_empty());
        running
            .map(str::to_string)
            .or_else(|| self.initial_query.clone())
            .filter(|q| !q.is_empty())
    }

    /// Whether the host currently skips menu accelerators for our window.
    pub(super) fn menu_shortcuts_ignored(&self) -> bool {
        match (&self.host, self.window_id) {
            (Some(host), Some(id)) => host.ignores_menu_shortcuts(id),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(find: Option<&str>) -> FrameFindApp {
        let args = Args {
            find: find.map(str::to_string),
            ..Args::default()
        };
        FrameFindApp::new(FrameFindConfig::default(), args)
    }

    #[test]
    fn fresh_app_has_no_window_or_host() {
        let app = app(None);
        assert!(app.window.is_none());
        assert!(app.host.is_none());
        assert!(app.surface.is_none());
        assert!(!app.menu_shortcuts_ignored());
    }

    #[test]
    fn find_flag_schedules_a_search() {
        let app = app(Some("needle"));
        assert!(app.find_on_load);
        assert_eq!(app.current_query().as_deref(), Some("needle"));
    }

    #[test]
    fn empty_find_flag_schedules_nothing() {
        let app = app(Some(""));
        assert!(!app.find_on_load);
        assert!(app.current_query().is_none());
    }
}
