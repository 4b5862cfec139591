//! Mode and lifecycle enums for the application state.
//!
//! This module defines the small state machine types the rest of the app
//! layer is written against: how the collection is laid out for display,
//! where the authentication lifecycle currently stands, and which phase an
//! in-flight remote request is in.

use serde::{Deserialize, Serialize};

/// Display layout for the user collection.
///
/// Purely display metadata: toggling it never changes which records are
/// visible, only how the render layer is expected to arrange them. The state
/// container passes it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Rows in a column-aligned table.
    Table,
    /// One card per record.
    Card,
}

impl ViewMode {
    /// Returns the other layout.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Card,
            Self::Card => Self::Table,
        }
    }
}

/// Authentication lifecycle of the session.
///
/// Follows the async call shape of the login operation: `Idle` before any
/// attempt, `Loading` while one is in flight, then `Succeeded` or `Failed`.
/// The session error message is present only in the `Failed` state and is
/// cleared whenever a new attempt begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No login attempt has been made.
    Idle,
    /// A login request is in flight.
    Loading,
    /// The last login attempt succeeded; a token is held.
    Succeeded,
    /// The last login attempt failed; see the session error message.
    Failed,
}

/// Lifecycle phase of one tracked remote request.
///
/// Every request issued to the remote-call capability is recorded with a
/// phase so that retries and concurrent-request orderings are observable:
/// `Pending` from issue until its response arrives, then `Resolved` or
/// `Rejected`. Phases never regress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestPhase {
    /// Issued, response not yet arrived.
    Pending,
    /// Completed with a success payload.
    Resolved,
    /// Completed with a service failure.
    Rejected,
}
