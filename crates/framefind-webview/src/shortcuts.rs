//! Global shortcut suppression while a surface has focus.
//!
//! When the page gains focus the host window is registered as one whose
//! menu accelerators are ignored, so keys like copy/paste reach the page.
//! Losing focus unregisters it. The host stores a plain boolean per window,
//! so each state change issues exactly one call and repeated focus or blur
//! events issue none.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use framefind_common::{SubscriptionStore, WindowId};

use crate::host::{HostCommand, HostDispatcher};
use crate::surface::SurfaceAdapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionState {
    Unsuppressed,
    Suppressed,
}

/// Shared between the manager and its focus/blur listeners.
struct Toggle {
    window_id: WindowId,
    state: Cell<SuppressionState>,
    dispatcher: HostDispatcher,
}

impl Toggle {
    /// Move to `next`, issuing one host call if the state changes.
    fn transition(&self, next: SuppressionState) {
        if self.state.get() == next {
            return;
        }
        self.state.set(next);

        let ignore = next == SuppressionState::Suppressed;
        debug!(window = %self.window_id, ignore, "menu shortcut suppression");
        if let Err(e) = self.dispatcher.dispatch(HostCommand::SetIgnoreMenuShortcuts {
            window_id: self.window_id,
            ignore,
        }) {
            warn!(window = %self.window_id, error = %e, "suppression toggle dropped");
        }
    }
}

pub struct ShortcutSuppressionManager {
    toggle: Rc<Toggle>,
    subscriptions: SubscriptionStore,
    disposed: bool,
}

impl ShortcutSuppressionManager {
    /// Track `surface` focus for `window_id`. With `enabled = false` the
    /// manager never subscribes and never calls the host.
    pub fn new(
        window_id: WindowId,
        surface: &SurfaceAdapter,
        dispatcher: HostDispatcher,
        enabled: bool,
    ) -> Self {
        let toggle = Rc::new(Toggle {
            window_id,
            state: Cell::new(SuppressionState::Unsuppressed),
            dispatcher,
        });

        let mut subscriptions = SubscriptionStore::new();
        if enabled {
            let on_focus = Rc::clone(&toggle);
            subscriptions.add(
                surface.on_focus(move || on_focus.transition(SuppressionState::Suppressed)),
            );
            let on_blur = Rc::clone(&toggle);
            subscriptions.add(
                surface.on_blur(move || on_blur.transition(SuppressionState::Unsuppressed)),
            );
        }

        Self {
            toggle,
            subscriptions,
            disposed: false,
        }
    }

    pub fn state(&self) -> SuppressionState {
        self.toggle.state.get()
    }

    /// Stop tracking focus. An active suppression is released with one
    /// final unregister call; nothing is issued afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.subscriptions.clear();
        self.toggle.transition(SuppressionState::Unsuppressed);
        self.disposed = true;
    }
}

impl Drop for ShortcutSuppressionManager {
    fn drop(&mut self) {
        self.dispose();
    }
}
