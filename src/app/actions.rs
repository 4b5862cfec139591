//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after a pure state transition. Actions bridge state
//! transformations and effectful operations: calling the remote service and
//! persisting the session token. The handler never performs I/O itself; it
//! only describes it.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The runtime
//! ([`crate::client::DirectoryClient`]) executes them in sequence.

use crate::remote::RemoteRequest;

/// Commands representing side effects to be executed by the runtime.
///
/// Produced by [`crate::app::handle_event`]; executed by the runtime that
/// owns the capabilities. They are the boundary between pure state
/// transitions and the remote-call and persistence capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues a tracked request to the remote-call capability.
    ///
    /// The corresponding completion re-enters the handler as
    /// [`crate::app::Event::Remote`].
    CallRemote(RemoteRequest),

    /// Persists the session token so it survives process restarts.
    ///
    /// Emitted once per successful login, after the token is already in
    /// state.
    PersistToken(String),

    /// Removes the persisted session token.
    ///
    /// Emitted on logout, after the in-memory session is already cleared.
    ClearToken,
}
