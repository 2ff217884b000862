//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances and collects their
//! events; `WebViewRegistry` tracks them per surface for one host window.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Creates WebViews and buffers their events.
pub struct WebViewManager {
    /// Event sink: events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue an event as if a WebView had emitted it.
    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
