//! Find-in-page session coordination.
//!
//! `FindSessionCoordinator` owns the session state of one surface, sends
//! find/continue/stop requests to the host through a `HostDispatcher`, and
//! republishes the page's result events as a boolean "has results" signal.

mod coordinator;
mod session;


pub use coordinator::{FindDispatch, FindOutcome, FindSessionCoordinator, StopOutcome};
pub use session::FindSession;
