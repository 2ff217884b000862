use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use framefind_common::SurfaceId;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface_id: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    surface = %surface_id,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(surface = %surface_id, body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage {
                    surface_id: surface_id.clone(),
                    body,
                });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface_id: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(surface = %surface_id, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    surface_id: surface_id.clone(),
                    state,
                    url,
                });
            }
        })
    }
}
