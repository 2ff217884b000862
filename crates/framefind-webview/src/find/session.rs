/// State of the find session owned by one coordinator.
///
/// `started` flips to true on the first dispatched search and back to
/// false on stop. Stopping is always allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindSession {
    started: bool,
    last_query: String,
}

impl FindSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Mark the session started with `query` as its current search.
    pub fn begin(&mut self, query: &str) {
        self.started = true;
        self.last_query.clear();
        self.last_query.push_str(query);
    }

    /// Record the query of a continuation step.
    pub fn advance(&mut self, query: &str) {
        debug_assert!(self.started, "advance on an idle find session");
        if self.last_query != query {
            self.last_query.clear();
            self.last_query.push_str(query);
        }
    }

    /// End the session. Returns whether it was active.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.started, false)
    }
}
