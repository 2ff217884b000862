//! Polling of webview events and host requests.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use framefind_webview::{FindOutcome, PageLoadState, WebViewEvent};

use super::core::{FrameFindApp, POLL_INTERVAL};

impl FrameFindApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_host_requests();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Feed buffered webview events to the embedded surface.
    pub(super) fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            let finished = matches!(
                event,
                WebViewEvent::PageLoad {
                    state: PageLoadState::Finished,
                    ..
                }
            );
            if let WebViewEvent::PageLoad { state, url, .. } = &event {
                tracing::debug!(?state, url = %url, "page load");
            }

            if let Some(surface) = self.surface.as_mut() {
                surface.handle_event(&event);
            }

            if finished && self.find_on_load {
                self.find_on_load = false;
                self.run_initial_query();
            }
        }
    }

    /// Perform every host request queued since the last poll.
    pub(super) fn poll_host_requests(&mut self) -> usize {
        match (self.host.as_mut(), self.webviews.as_ref()) {
            (Some(host), Some(registry)) => {
                let handled = host.poll(registry);
                if handled > 0 {
                    tracing::trace!(handled, "host requests handled");
                }
                handled
            }
            _ => 0,
        }
    }

    fn run_initial_query(&mut self) {
        let (Some(query), Some(surface)) = (self.initial_query.clone(), self.surface.as_mut())
        else {
            return;
        };
        let outcome = surface.find_mut().start_find(&query);
        if !matches!(outcome, FindOutcome::Dispatched(_)) {
            tracing::warn!(?outcome, "initial search not started");
        }
    }
}
