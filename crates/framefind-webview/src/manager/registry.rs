use std::collections::HashMap;

use tracing::{debug, warn};
use wry::raw_window_handle;

use framefind_common::{SurfaceId, WindowId};

use crate::events::WebViewEvent;
use crate::host::{FrameLookup, FrameTarget, NativeFrame};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// The WebViews embedded in one host window, keyed by surface.
///
/// Lifecycle and focus changes are reported through the manager's event
/// sink so the event loop sees them in the same stream as page events.
pub struct WebViewRegistry {
    window_id: WindowId,
    manager: WebViewManager,
    handles: HashMap<SurfaceId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(window_id: WindowId, manager: WebViewManager) -> Self {
        Self {
            window_id,
            manager,
            handles: HashMap::new(),
        }
    }

    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// Create a WebView for a surface and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        surface_id: SurfaceId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self
            .manager
            .create(surface_id.clone(), window, bounds, config)?;
        self.handles.insert(surface_id.clone(), handle);
        self.manager.push_event(WebViewEvent::Attached { surface_id });
        Ok(())
    }

    pub fn get(&self, surface_id: &SurfaceId) -> Option<&WebViewHandle> {
        self.handles.get(surface_id)
    }

    /// Give keyboard focus to a surface.
    pub fn focus(&self, surface_id: &SurfaceId) -> Result<(), wry::Error> {
        if let Some(handle) = self.handles.get(surface_id) {
            handle.focus()?;
            self.manager.push_event(WebViewEvent::FocusChanged {
                surface_id: surface_id.clone(),
                focused: true,
            });
        }
        Ok(())
    }

    /// Hand keyboard focus back to the host window.
    pub fn focus_parent(&self, surface_id: &SurfaceId) -> Result<(), wry::Error> {
        if let Some(handle) = self.handles.get(surface_id) {
            handle.focus_parent()?;
            self.manager.push_event(WebViewEvent::FocusChanged {
                surface_id: surface_id.clone(),
                focused: false,
            });
        }
        Ok(())
    }

    /// Destroy a WebView by surface id.
    pub fn destroy(&mut self, surface_id: &SurfaceId) -> bool {
        if self.handles.remove(surface_id).is_some() {
            debug!(surface = %surface_id, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed {
                surface_id: surface_id.clone(),
            });
            true
        } else {
            warn!(surface = %surface_id, "destroy: unknown surface");
            false
        }
    }

    pub fn active_surfaces(&self) -> Vec<SurfaceId> {
        self.handles.keys().cloned().collect()
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for surface_id in self.active_surfaces() {
            self.destroy(&surface_id);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}

impl FrameLookup for WebViewRegistry {
    fn has_window(&self, window_id: WindowId) -> bool {
        window_id == self.window_id
    }

    fn frame(&self, target: &FrameTarget) -> Option<&dyn NativeFrame> {
        if target.window_id != self.window_id {
            return None;
        }
        self.handles
            .get(&target.surface_id)
            .map(|handle| handle as &dyn NativeFrame)
    }
}
