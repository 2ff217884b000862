//! Host-side request handling.
//!
//! Runs on the thread that owns the webviews. `HostService::poll` drains
//! pending requests, performs them against the addressed native frame and
//! answers each one.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use framefind_common::{HostError, WindowId};

use super::channel::{HostEndpoint, HostRequest};
use super::proxy::{FindOptions, FrameTarget, StopFindOptions};

/// The native search capability of one embedded frame.
pub trait NativeFrame {
    fn find(&self, query: &str, options: &FindOptions) -> Result<(), HostError>;
    fn stop_find(&self, options: &StopFindOptions) -> Result<(), HostError>;
}

/// Resolves request targets to frames and windows known to the host.
pub trait FrameLookup {
    fn has_window(&self, window_id: WindowId) -> bool;
    fn frame(&self, target: &FrameTarget) -> Option<&dyn NativeFrame>;
}

pub struct HostService {
    endpoint: HostEndpoint,
    /// Windows whose menu accelerators are currently ignored.
    ignoring_shortcuts: HashSet<WindowId>,
}

impl HostService {
    pub fn new(endpoint: HostEndpoint) -> Self {
        Self {
            endpoint,
            ignoring_shortcuts: HashSet::new(),
        }
    }

    /// Handle every request queued so far. Returns how many were handled.
    pub fn poll(&mut self, frames: &dyn FrameLookup) -> usize {
        let mut handled = 0;
        while let Some(envelope) = self.endpoint.try_next() {
            let result = self.handle(&envelope.request, frames);
            if let Err(ref e) = result {
                warn!(error = %e, "host request rejected");
            }
            envelope.reply(result);
            handled += 1;
        }
        handled
    }

    /// Perform one request.
    pub fn handle(
        &mut self,
        request: &HostRequest,
        frames: &dyn FrameLookup,
    ) -> Result<(), HostError> {
        match request {
            HostRequest::FindInFrame {
                target,
                query,
                options,
            } => {
                // The page-side search cannot make progress on "".
                if query.is_empty() {
                    return Err(HostError::EmptyQuery);
                }
                let frame = resolve(frames, target)?;
                debug!(
                    window = %target.window_id,
                    surface = %target.surface_id,
                    query_len = query.len(),
                    continuation = options.is_continuation(),
                    "findInFrame"
                );
                frame.find(query, options)
            }
            HostRequest::StopFindInFrame { target, options } => {
                let frame = resolve(frames, target)?;
                debug!(
                    window = %target.window_id,
                    surface = %target.surface_id,
                    keep_selection = options.keep_selection,
                    "stopFindInFrame"
                );
                frame.stop_find(options)
            }
            HostRequest::SetIgnoreMenuShortcuts { window_id, ignore } => {
                if !frames.has_window(*window_id) {
                    return Err(HostError::UnknownWindow(*window_id));
                }
                let changed = if *ignore {
                    self.ignoring_shortcuts.insert(*window_id)
                } else {
                    self.ignoring_shortcuts.remove(window_id)
                };
                if changed {
                    info!(window = %window_id, ignore, "menu shortcut suppression changed");
                }
                Ok(())
            }
        }
    }

    /// Whether `window_id` should currently skip its menu accelerators.
    pub fn ignores_menu_shortcuts(&self, window_id: WindowId) -> bool {
        self.ignoring_shortcuts.contains(&window_id)
    }

    /// Forget a closed window.
    pub fn forget_window(&mut self, window_id: WindowId) {
        self.ignoring_shortcuts.remove(&window_id);
    }
}

fn resolve<'a>(
    frames: &'a dyn FrameLookup,
    target: &FrameTarget,
) -> Result<&'a dyn NativeFrame, HostError> {
    if !frames.has_window(target.window_id) {
        return Err(HostError::UnknownWindow(target.window_id));
    }
    frames
        .frame(target)
        .ok_or_else(|| HostError::UnknownSurface(target.surface_id.clone()))
}
