//! Request and response protocol between the state core and the gateway.
//!
//! This module defines the explicit request objects the core issues to the
//! remote-call capability and the completion messages it receives back. Every
//! request carries a [`RequestId`] allocated by the state container, so each
//! completion can be matched to its issue record and the pending → resolved /
//! rejected lifecycle stays observable even when several calls are
//! outstanding at once.
//!
//! Both enums are serde-serializable: hosts that run the gateway on the far
//! side of a process or thread boundary can ship them as JSON, exactly as an
//! in-process host passes them by value.

use crate::domain::{PageEnvelope, User, UserDraft, UserFields};
use serde::{Deserialize, Serialize};

/// Identifier tying a response back to the request that caused it.
///
/// Allocated sequentially by the state container; unique for the lifetime of
/// the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A remote operation the core wants performed.
///
/// One variant per [`crate::remote::DirectoryApi`] method. Requests are
/// fire-and-forget from the core's perspective: cancellation is not
/// supported, and a new request may be issued while earlier ones are still
/// pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteRequest {
    /// Fetch one page of the collection. `page` is 1-based.
    FetchPage { request_id: RequestId, page: u32 },

    /// Create a user from a draft.
    CreateUser {
        request_id: RequestId,
        draft: UserDraft,
    },

    /// Replace the editable fields of an existing user.
    UpdateUser {
        request_id: RequestId,
        id: i64,
        fields: UserFields,
    },

    /// Delete the user with the given id.
    DeleteUser { request_id: RequestId, id: i64 },

    /// Exchange credentials for a session token.
    Login {
        request_id: RequestId,
        email: String,
        password: String,
    },
}

impl RemoteRequest {
    /// The id allocated when this request was issued.
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        match self {
            Self::FetchPage { request_id, .. }
            | Self::CreateUser { request_id, .. }
            | Self::UpdateUser { request_id, .. }
            | Self::DeleteUser { request_id, .. }
            | Self::Login { request_id, .. } => *request_id,
        }
    }
}

/// Completion of one remote request.
///
/// Success variants carry the payload the state transition needs; failure
/// variants carry a displayable message (the service's own, or the gateway's
/// operation-specific fallback). Exactly one response is produced per
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteResponse {
    /// A page arrived; its envelope overwrites the cache entry for its number.
    PageFetched {
        request_id: RequestId,
        envelope: PageEnvelope,
    },

    /// A page fetch was rejected; the cache entry for `page` is untouched.
    FetchFailed {
        request_id: RequestId,
        page: u32,
        message: String,
    },

    /// A create succeeded. `confirmed` is false when the id was synthesized
    /// locally because the service returned none.
    UserCreated {
        request_id: RequestId,
        user: User,
        confirmed: bool,
    },

    /// A create was rejected; nothing is applied locally.
    CreateFailed {
        request_id: RequestId,
        message: String,
    },

    /// An update succeeded; the caller-supplied fields are applied locally.
    UserUpdated {
        request_id: RequestId,
        id: i64,
        fields: UserFields,
    },

    /// An update was rejected; nothing is applied locally.
    UpdateFailed {
        request_id: RequestId,
        message: String,
    },

    /// A delete succeeded; the delete overlay rule is applied locally.
    UserDeleted { request_id: RequestId, id: i64 },

    /// A delete was rejected; nothing is applied locally.
    DeleteFailed {
        request_id: RequestId,
        message: String,
    },

    /// Login succeeded; the token becomes the session.
    LoggedIn {
        request_id: RequestId,
        token: String,
    },

    /// Login was rejected.
    LoginFailed {
        request_id: RequestId,
        message: String,
    },
}

impl RemoteResponse {
    /// The id of the request this response completes.
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        match self {
            Self::PageFetched { request_id, .. }
            | Self::FetchFailed { request_id, .. }
            | Self::UserCreated { request_id, .. }
            | Self::CreateFailed { request_id, .. }
            | Self::UserUpdated { request_id, .. }
            | Self::UpdateFailed { request_id, .. }
            | Self::UserDeleted { request_id, .. }
            | Self::DeleteFailed { request_id, .. }
            | Self::LoggedIn { request_id, .. }
            | Self::LoginFailed { request_id, .. } => *request_id,
        }
    }

    /// Whether this response reports a service failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed { .. }
                | Self::CreateFailed { .. }
                | Self::UpdateFailed { .. }
                | Self::DeleteFailed { .. }
                | Self::LoginFailed { .. }
        )
    }
}
