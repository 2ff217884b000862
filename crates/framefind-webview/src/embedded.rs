//! One embedded surface with its find session and shortcut policy.

use tracing::debug;

use framefind_common::{SurfaceId, WindowId};

use crate::events::WebViewEvent;
use crate::find::FindSessionCoordinator;
use crate::host::HostDispatcher;
use crate::shortcuts::{ShortcutSuppressionManager, SuppressionState};
use crate::surface::SurfaceAdapter;

/// Per-surface behavior switches.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSettings {
    /// Selection handling for `stop_find(None)`.
    pub keep_selection_on_stop: bool,
    /// Suppress host menu accelerators while the surface has focus.
    pub suppress_shortcuts: bool,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            keep_selection_on_stop: false,
            suppress_shortcuts: true,
        }
    }
}

/// Wires a surface adapter to its find coordinator and suppression manager.
///
/// Events for the surface go through [`EmbeddedSurface::handle_event`]. A
/// `Closed` event, an explicit [`dispose`](EmbeddedSurface::dispose) or a
/// drop tears everything down.
pub struct EmbeddedSurface {
    surface: SurfaceAdapter,
    find: FindSessionCoordinator,
    shortcuts: ShortcutSuppressionManager,
    disposed: bool,
}

impl EmbeddedSurface {
    pub fn new(
        window_id: WindowId,
        surface_id: SurfaceId,
        dispatcher: HostDispatcher,
        settings: SurfaceSettings,
    ) -> Self {
        let surface = SurfaceAdapter::new(surface_id);
        let find = FindSessionCoordinator::new(
            window_id,
            &surface,
            dispatcher.clone(),
            settings.keep_selection_on_stop,
        );
        let shortcuts = ShortcutSuppressionManager::new(
            window_id,
            &surface,
            dispatcher,
            settings.suppress_shortcuts,
        );

        Self {
            surface,
            find,
            shortcuts,
            disposed: false,
        }
    }

    pub fn id(&self) -> &SurfaceId {
        self.surface.id()
    }

    pub fn surface(&self) -> &SurfaceAdapter {
        &self.surface
    }

    pub fn find(&self) -> &FindSessionCoordinator {
        &self.find
    }

    pub fn find_mut(&mut self) -> &mut FindSessionCoordinator {
        &mut self.find
    }

    pub fn suppression(&self) -> SuppressionState {
        self.shortcuts.state()
    }

    /// Route one webview event. Returns whether it belonged to this surface.
    pub fn handle_event(&mut self, event: &WebViewEvent) -> bool {
        if !self.surface.handle_event(event) {
            return false;
        }
        if matches!(event, WebViewEvent::Closed { .. }) {
            self.dispose();
        }
        true
    }

    /// Release every subscription and stop issuing host calls.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.shortcuts.dispose();
        self.find.dispose();
        self.surface.dispose();
        self.disposed = true;
        debug!(surface = %self.surface.id(), "embedded surface disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for EmbeddedSurface {
    fn drop(&mut self) {
        self.dispose();
    }
}
