//! Surface adapter: the lifecycle hooks of one embedded webview.
//!
//! Raw `WebViewEvent`s go in through [`SurfaceAdapter::handle_event`]; typed
//! subscription points come out. Focus and blur can come from the enclosing
//! chrome (`FocusChanged`) or from inside the page (`did_focus` / `did_blur`
//! messages). The page's `found_in_page` message becomes a [`FindResult`].

mod types;

#[cfg(test)]
mod tests;

pub use types::{FindResult, SurfaceMessage};

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use framefind_common::{Emitter, SurfaceId, Subscription};

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::{IpcMessage, DID_BLUR, DID_FOCUS, FOUND_IN_PAGE};

struct SurfaceInner {
    id: SurfaceId,
    ready: Cell<bool>,
    focused: Cell<bool>,
    disposed: Cell<bool>,
    on_focus: Emitter<()>,
    on_blur: Emitter<()>,
    on_message: Emitter<SurfaceMessage>,
    on_found_in_page: Emitter<FindResult>,
}

/// Shared handle to one surface's hooks. Clones observe the same surface.
#[derive(Clone)]
pub struct SurfaceAdapter {
    inner: Rc<SurfaceInner>,
}

impl SurfaceAdapter {
    pub fn new(id: SurfaceId) -> Self {
        Self {
            inner: Rc::new(SurfaceInner {
                id,
                ready: Cell::new(false),
                focused: Cell::new(false),
                disposed: Cell::new(false),
                on_focus: Emitter::new(),
                on_blur: Emitter::new(),
                on_message: Emitter::new(),
                on_found_in_page: Emitter::new(),
            }),
        }
    }

    pub fn id(&self) -> &SurfaceId {
        &self.inner.id
    }

    /// True once the native view exists and until it closes.
    pub fn is_ready(&self) -> bool {
        self.inner.ready.get()
    }

    pub fn is_focused(&self) -> bool {
        self.inner.focused.get()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    #[must_use = "dropping the subscription removes the listener"]
    pub fn on_focus(&self, listener: impl Fn() + 'static) -> Subscription {
        self.inner.on_focus.subscribe(move |_| listener())
    }

    #[must_use = "dropping the subscription removes the listener"]
    pub fn on_blur(&self, listener: impl Fn() + 'static) -> Subscription {
        self.inner.on_blur.subscribe(move |_| listener())
    }

    #[must_use = "dropping the subscription removes the listener"]
    pub fn on_message(&self, listener: impl Fn(&SurfaceMessage) + 'static) -> Subscription {
        self.inner.on_message.subscribe(listener)
    }

    #[must_use = "dropping the subscription removes the listener"]
    pub fn on_found_in_page(&self, listener: impl Fn(&FindResult) + 'static) -> Subscription {
        self.inner.on_found_in_page.subscribe(listener)
    }

    /// Feed one raw webview event. Returns `false` if it was not for this
    /// surface or the surface is disposed.
    pub fn handle_event(&self, event: &WebViewEvent) -> bool {
        if self.is_disposed() || event.surface_id() != self.id() {
            return false;
        }

        match event {
            WebViewEvent::Attached { .. } => {
                debug!(surface = %self.id(), "surface ready");
                self.inner.ready.set(true);
            }
            WebViewEvent::PageLoad { state, url, .. } => {
                if *state == PageLoadState::Finished {
                    trace!(surface = %self.id(), url = %url, "page loaded");
                }
            }
            WebViewEvent::IpcMessage { body, .. } => self.handle_ipc(body),
            WebViewEvent::FocusChanged { focused, .. } => self.set_focused(*focused),
            WebViewEvent::Closed { .. } => {
                debug!(surface = %self.id(), "surface closed");
                self.inner.ready.set(false);
            }
        }
        true
    }

    /// Record a focus change and notify focus/blur listeners.
    ///
    /// Every call notifies, even when the state does not change; listeners
    /// that need edge semantics keep their own state.
    pub fn set_focused(&self, focused: bool) {
        if self.is_disposed() {
            return;
        }
        self.inner.focused.set(focused);
        if focused {
            self.inner.on_focus.fire(&());
        } else {
            self.inner.on_blur.fire(&());
        }
    }

    /// Stop delivering events. Listeners stay registered until their
    /// subscriptions are dropped, but nothing fires any more.
    pub fn dispose(&self) {
        self.inner.disposed.set(true);
        self.inner.ready.set(false);
    }

    fn handle_ipc(&self, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(
                surface = %self.id(),
                body_len = body.len(),
                "IPC message rejected: failed to parse"
            );
            return;
        };

        let message = SurfaceMessage {
            channel: msg.kind,
            payload: msg.payload.to_value(),
        };
        trace!(surface = %self.id(), channel = %message.channel, "surface message");
        self.inner.on_message.fire(&message);

        match message.channel.as_str() {
            DID_FOCUS => self.set_focused(true),
            DID_BLUR => self.set_focused(false),
            FOUND_IN_PAGE => match FindResult::from_payload(&message.payload) {
                Some(result) => {
                    debug!(surface = %self.id(), matches = result.matches, "found in page");
                    self.inner.on_found_in_page.fire(&result);
                }
                None => warn!(surface = %self.id(), "malformed found_in_page payload"),
            },
            _ => {}
        }
    }
}
