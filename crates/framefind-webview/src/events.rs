//! WebView event types.

use serde::{Deserialize, Serialize};

use framefind_common::SurfaceId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// The native view exists; its search API can be used from now on.
    Attached { surface_id: SurfaceId },
    /// Page load state changed. Carries the URL.
    PageLoad {
        surface_id: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage { surface_id: SurfaceId, body: String },
    /// The enclosing chrome moved input focus into or out of the view.
    FocusChanged { surface_id: SurfaceId, focused: bool },
    /// WebView was closed / destroyed.
    Closed { surface_id: SurfaceId },
}

impl WebViewEvent {
    /// The surface this event belongs to.
    pub fn surface_id(&self) -> &SurfaceId {
        match self {
            WebViewEvent::Attached { surface_id }
            | WebViewEvent::PageLoad { surface_id, .. }
            | WebViewEvent::IpcMessage { surface_id, .. }
            | WebViewEvent::FocusChanged { surface_id, .. }
            | WebViewEvent::Closed { surface_id } => surface_id,
        }
    }
}
