use std::rc::Rc;

use tracing::{debug, warn};

use framefind_common::{Emitter, Subscription, SubscriptionStore, SurfaceId, WindowId};

use crate::host::{FindOptions, FrameTarget, HostCommand, HostDispatcher, StopFindOptions};
use crate::surface::SurfaceAdapter;

use super::session::FindSession;

/// What a find call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// A request was queued for the host.
    Dispatched(FindDispatch),
    /// The native view does not exist yet.
    NotReady,
    EmptyQuery,
    /// The coordinator has been torn down.
    Disposed,
}

/// Shape of a dispatched find request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindDispatch {
    /// New search from the top of the page, empty options.
    Fresh,
    /// Step of the running search.
    Continuation { forward: bool },
}

/// What a stop call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// A stop request was queued and the session ended.
    Stopped,
    NoActiveSession,
    NotReady,
    Disposed,
}

/// Drives the find session of one surface against the host.
///
/// Session state changes as soon as a request is queued; host results
/// arrive later through the surface and only update the "has results"
/// signal. Results are not correlated to requests, so a result may describe
/// an older query than the latest one.
pub struct FindSessionCoordinator {
    target: FrameTarget,
    surface: SurfaceAdapter,
    dispatcher: HostDispatcher,
    session: FindSession,
    has_results: Rc<Emitter<bool>>,
    keep_selection_on_stop: bool,
    subscriptions: SubscriptionStore,
    disposed: bool,
}

impl FindSessionCoordinator {
    pub fn new(
        window_id: WindowId,
        surface: &SurfaceAdapter,
        dispatcher: HostDispatcher,
        keep_selection_on_stop: bool,
    ) -> Self {
        let has_results = Rc::new(Emitter::new());
        let mut subscriptions = SubscriptionStore::new();

        let signal = Rc::clone(&has_results);
        let surface_id = surface.id().clone();
        subscriptions.add(surface.on_found_in_page(move |result| {
            debug!(surface = %surface_id, matches = result.matches, "find result");
            signal.fire(&result.has_matches());
        }));

        Self {
            target: FrameTarget::new(window_id, surface.id().clone()),
            surface: surface.clone(),
            dispatcher,
            session: FindSession::new(),
            has_results,
            keep_selection_on_stop,
            subscriptions,
            disposed: false,
        }
    }

    pub fn window_id(&self) -> WindowId {
        self.target.window_id
    }

    pub fn surface_id(&self) -> &SurfaceId {
        &self.target.surface_id
    }

    pub fn session(&self) -> &FindSession {
        &self.session
    }

    /// Listen for "has at least one match" changes. Listeners are called in
    /// subscription order; nothing is replayed to late subscribers.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn on_did_change_has_results(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        self.has_results.subscribe(move |has| listener(*has))
    }

    /// Start a new search for `query`.
    pub fn start_find(&mut self, query: &str) -> FindOutcome {
        if self.disposed {
            return FindOutcome::Disposed;
        }
        if query.is_empty() {
            return FindOutcome::EmptyQuery;
        }
        if !self.surface.is_ready() {
            debug!(surface = %self.target.surface_id, "find dropped: surface not ready");
            return FindOutcome::NotReady;
        }

        self.session.begin(query);
        self.send(HostCommand::FindInFrame {
            target: self.target.clone(),
            query: query.to_string(),
            options: FindOptions::default(),
        });
        FindOutcome::Dispatched(FindDispatch::Fresh)
    }

    /// Move to the next (or, with `previous`, the preceding) match of
    /// `query`. Starts a new search when none is running.
    pub fn find(&mut self, query: &str, previous: bool) -> FindOutcome {
        if self.disposed {
            return FindOutcome::Disposed;
        }
        if !self.surface.is_ready() {
            debug!(surface = %self.target.surface_id, "find dropped: surface not ready");
            return FindOutcome::NotReady;
        }
        if !self.session.is_started() {
            return self.start_find(query);
        }
        if query.is_empty() {
            return FindOutcome::EmptyQuery;
        }

        let forward = !previous;
        self.session.advance(query);
        self.send(HostCommand::FindInFrame {
            target: self.target.clone(),
            query: query.to_string(),
            options: FindOptions::continuation(forward),
        });
        FindOutcome::Dispatched(FindDispatch::Continuation { forward })
    }

    /// End the search.
    ///
    /// Listeners see `false` right away, before the host hears anything.
    /// `keep_selection` falls back to the configured default.
    pub fn stop_find(&mut self, keep_selection: Option<bool>) -> StopOutcome {
        if self.disposed {
            return StopOutcome::Disposed;
        }

        self.has_results.fire(&false);

        if !self.surface.is_ready() {
            // No native view to talk to, but the session still ends.
            self.session.stop();
            return StopOutcome::NotReady;
        }
        if !self.session.is_started() {
            return StopOutcome::NoActiveSession;
        }

        self.send(HostCommand::StopFindInFrame {
            target: self.target.clone(),
            options: StopFindOptions {
                keep_selection: keep_selection.unwrap_or(self.keep_selection_on_stop),
            },
        });
        self.session.stop();
        StopOutcome::Stopped
    }

    /// Release every subscription. Later calls return `Disposed`.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.subscriptions.clear();
        self.session.stop();
        self.disposed = true;
        debug!(surface = %self.target.surface_id, "find coordinator disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn send(&self, command: HostCommand) {
        if let Err(e) = self.dispatcher.dispatch(command) {
            warn!(
                surface = %self.target.surface_id,
                window = %self.target.window_id,
                error = %e,
                "find request dropped"
            );
        }
    }
}

impl Drop for FindSessionCoordinator {
    fn drop(&mut self) {
        self.dispose();
    }
}
