//! Remote-call capability abstraction.
//!
//! This module defines the [`DirectoryApi`] trait that abstracts over the
//! transport used to reach the remote user-directory service. The core never
//! owns a wire format; it only consumes typed payloads and typed failures
//! through this boundary. Timeouts, headers, and retries-on-the-wire are the
//! implementation's business.
//!
//! # Design Philosophy
//!
//! The trait is minimal and focused on the five operations the application
//! actually performs, not a generic REST client. Each method maps directly
//! to one request variant dispatched by the gateway.

use crate::domain::{PageEnvelope, UserDraft, UserFields};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typed failure reported by the remote-call capability.
///
/// Carries the service's human-readable message when one was provided. The
/// gateway substitutes an operation-specific fallback when it is absent, so
/// downstream state always holds a displayable string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("remote service error{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct RemoteError {
    /// Service-reported message, if any.
    pub message: Option<String>,
}

impl RemoteError {
    /// A failure with a service-reported message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A failure where the service reported nothing usable.
    #[must_use]
    pub const fn opaque() -> Self {
        Self { message: None }
    }
}

/// Result type for remote-call capability methods.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Create response payload from the service.
///
/// Some directory services echo back a durable id on create, some return
/// nothing beyond a timestamp. The id is therefore optional here; when it is
/// absent the gateway synthesizes a provisional local id (see
/// [`crate::remote::DirectoryGateway`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    /// Service-assigned id, when the service reported one.
    pub id: Option<i64>,

    /// Service-reported creation timestamp, when provided. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Successful login payload: the opaque session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginGrant {
    /// Opaque token; its presence means "authenticated".
    pub token: String,
}

/// Abstraction over the remote user-directory service.
///
/// Implementations perform the actual I/O (HTTP, a test script, a recording
/// proxy) and return either a typed payload or a [`RemoteError`]. The core
/// calls these methods only through [`crate::remote::DirectoryGateway`], one
/// call per tracked request, and never retries on its own.
///
/// # Examples
///
/// ```no_run
/// use rosterdeck::remote::{DirectoryApi, RemoteResult, LoginGrant};
///
/// fn check_login(api: &mut dyn DirectoryApi) -> RemoteResult<LoginGrant> {
///     api.login("eve.holt@reqres.in", "cityslicka")
/// }
/// ```
pub trait DirectoryApi: Send {
    /// Fetches one page of the user collection.
    ///
    /// `page` is 1-based; the returned envelope reports its own page number
    /// and pagination counters.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] when the service rejects the fetch.
    fn fetch_page(&mut self, page: u32) -> RemoteResult<PageEnvelope>;

    /// Creates a user from a draft.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] when the service rejects the create.
    fn create_user(&mut self, draft: &UserDraft) -> RemoteResult<CreatedUser>;

    /// Replaces the editable fields of an existing user.
    ///
    /// The response body is not consumed by the core; the caller-supplied
    /// fields are what get applied locally on success.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] when the service rejects the update.
    fn update_user(&mut self, id: i64, fields: &UserFields) -> RemoteResult<()>;

    /// Deletes the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] when the service rejects the delete.
    fn delete_user(&mut self, id: i64) -> RemoteResult<()>;

    /// Exchanges credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] when the credentials are rejected.
    fn login(&mut self, email: &str, password: &str) -> RemoteResult<LoginGrant>;
}
