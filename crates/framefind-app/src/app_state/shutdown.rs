//! Graceful shutdown: release the page, drain the host queue, stop tokio.

use std::time::Duration;

use super::core::FrameFindApp;

/// Upper bound on host polls while waiting for the dispatcher to drain.
const DRAIN_ATTEMPTS: usize = 50;
const DRAIN_STEP: Duration = Duration::from_millis(10);

impl FrameFindApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Dispose the surface (a held suppression is released)
    /// 2. Answer host requests until the dispatcher pump exits
    /// 3. Destroy webviews
    /// 4. Shut down the tokio runtime
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Dropping the surface disposes it and its dispatcher handles
        self.title_sub = None;
        self.surface = None;

        // 2. The pump waits on replies that only the host poll produces
        if let Some(pump) = self.pump.take() {
            let mut attempts = 0;
            while !pump.is_finished() && attempts < DRAIN_ATTEMPTS {
                self.poll_host_requests();
                std::thread::sleep(DRAIN_STEP);
                attempts += 1;
            }
            if !pump.is_finished() {
                tracing::warn!("host dispatcher did not drain before shutdown");
                pump.abort();
            }
        }

        // 3. Destroy the webview
        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        if let (Some(host), Some(window_id)) = (self.host.as_mut(), self.window_id) {
            host.forget_window(window_id);
        }
        self.host = None;

        // 4. Shut down tokio runtime
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        tracing::info!("Graceful shutdown complete");
    }
}
