//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes render-layer
//! intents and remote completions, translating them into state changes and
//! action sequences. Every write to [`AppState`] in the system funnels
//! through [`handle_event`]; there is no other mutation path.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//!
//! 1. Intents arrive from the render layer, completions from the gateway
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Remote work is split across two events: the intent (e.g.
//! [`Event::RequestDelete`]) records a pending request and emits the remote
//! call, and the completion ([`Event::Remote`]) applies the result. Several
//! completions may be outstanding at once; each applies its own transition
//! independently, so the final state is determined by arrival order alone.
//!
//! # Example
//!
//! ```
//! use rosterdeck::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (should_render, actions) = handle_event(&mut state, Event::ToggleViewMode)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), rosterdeck::domain::RosterdeckError>(())
//! ```

use crate::app::actions::Action;
use crate::app::modes::{RequestPhase, SessionStatus};
use crate::app::state::{AppState, RequestKind};
use crate::domain::error::Result;
use crate::domain::{PendingMutation, UserDraft, UserFields};
use crate::remote::{RemoteRequest, RemoteResponse};

/// Events triggered by render-layer intents or remote completions.
///
/// Each event represents one discrete occurrence that may change state and
/// emit actions. The handler processes them sequentially, ensuring
/// deterministic transitions for any given arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a login attempt with the given credentials.
    ///
    /// Empty credentials are rejected locally without issuing a request.
    RequestLogin { email: String, password: String },

    /// Clear the session token, in memory and persisted. Synchronous; does
    /// not contact the remote service.
    RequestLogout,

    /// Fetch page `n` of the collection (1-based).
    RequestPage(u32),

    /// Replace the search query and re-filter the visible list.
    SetSearch(String),

    /// Flip between table and card layout. Contents are unaffected.
    ToggleViewMode,

    /// Create a user from a draft.
    RequestCreate(UserDraft),

    /// Replace the editable fields of the user with the given id.
    RequestUpdate { id: i64, fields: UserFields },

    /// Delete the user with the given id.
    RequestDelete(i64),

    /// A remote request completed.
    ///
    /// Wraps the gateway's response; matched on the inner variant to apply
    /// the corresponding cache, overlay, or session transition.
    Remote(RemoteResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`: the flag tells the host whether the
/// derived view changed, and the actions are side effects to execute in
/// sequence (remote calls, token persistence).
///
/// # Errors
///
/// Currently infallible in practice; the `Result` return keeps the signature
/// stable for state mutations that may become fallible.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?std::mem::discriminant(&event)).entered();

    match event {
        Event::RequestLogin { email, password } => {
            if email.trim().is_empty() || password.is_empty() {
                tracing::debug!("login rejected locally: empty credentials");
                state.session.status = SessionStatus::Failed;
                state.session.error = Some("Email and password are required".to_string());
                return Ok((true, vec![]));
            }

            state.session.status = SessionStatus::Loading;
            state.session.error = None;

            let request_id = state.track_request(RequestKind::Login);
            Ok((
                true,
                vec![Action::CallRemote(RemoteRequest::Login {
                    request_id,
                    email,
                    password,
                })],
            ))
        }

        Event::RequestLogout => {
            tracing::debug!("logging out");
            state.clear_session();
            Ok((true, vec![Action::ClearToken]))
        }

        Event::RequestPage(page) => {
            if page == 0 {
                tracing::debug!("page fetch rejected locally: page numbers start at 1");
                state.error = Some("Page numbers start at 1".to_string());
                return Ok((true, vec![]));
            }

            state.loading = true;
            state.error = None;

            let request_id = state.track_request(RequestKind::FetchPage(page));
            Ok((
                true,
                vec![Action::CallRemote(RemoteRequest::FetchPage {
                    request_id,
                    page,
                })],
            ))
        }

        Event::SetSearch(query) => {
            tracing::trace!(query = %query, "search query updated");
            state.search_query = query;
            state.apply_search_filter();
            Ok((true, vec![]))
        }

        Event::ToggleViewMode => {
            state.view_mode = state.view_mode.toggled();
            tracing::debug!(view_mode = ?state.view_mode, "view mode toggled");
            Ok((true, vec![]))
        }

        Event::RequestCreate(draft) => {
            let request_id = state.track_request(RequestKind::Create);
            Ok((
                false,
                vec![Action::CallRemote(RemoteRequest::CreateUser {
                    request_id,
                    draft,
                })],
            ))
        }

        Event::RequestUpdate { id, fields } => {
            let request_id = state.track_request(RequestKind::Update(id));
            Ok((
                false,
                vec![Action::CallRemote(RemoteRequest::UpdateUser {
                    request_id,
                    id,
                    fields,
                })],
            ))
        }

        Event::RequestDelete(id) => {
            let request_id = state.track_request(RequestKind::Delete(id));
            Ok((
                false,
                vec![Action::CallRemote(RemoteRequest::DeleteUser {
                    request_id,
                    id,
                })],
            ))
        }

        Event::Remote(response) => handle_remote_response(state, response),
    }
}

/// Applies one remote completion to state.
///
/// Failures are terminal for their one operation: they surface a message and
/// change nothing else. A mutation failure never partially applies its
/// overlay effect, and never rolls back mutations that already succeeded.
fn handle_remote_response(
    state: &mut AppState,
    response: RemoteResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        RemoteResponse::LoggedIn { request_id, token } => {
            state.complete_request(request_id, RequestPhase::Resolved);
            state.session.status = SessionStatus::Succeeded;
            state.session.error = None;
            state.session.token = Some(token.clone());
            tracing::debug!("login succeeded");
            Ok((true, vec![Action::PersistToken(token)]))
        }

        RemoteResponse::LoginFailed {
            request_id,
            message,
        } => {
            state.complete_request(request_id, RequestPhase::Rejected);
            state.session.status = SessionStatus::Failed;
            tracing::debug!(error = %message, "login failed");
            state.session.error = Some(message);
            Ok((true, vec![]))
        }

        RemoteResponse::PageFetched {
            request_id,
            envelope,
        } => {
            state.complete_request(request_id, RequestPhase::Resolved);
            state.loading = false;
            state.store_page(envelope);
            state.apply_search_filter();
            Ok((true, vec![]))
        }

        RemoteResponse::FetchFailed {
            request_id,
            page,
            message,
        } => {
            state.complete_request(request_id, RequestPhase::Rejected);
            state.loading = false;
            tracing::debug!(page = page, error = %message, "page fetch failed");
            state.error = Some(message);
            // Any previously cached envelope for this page stays as-is.
            Ok((true, vec![]))
        }

        RemoteResponse::UserCreated {
            request_id,
            user,
            confirmed,
        } => {
            state.complete_request(request_id, RequestPhase::Resolved);
            state.push_mutation(PendingMutation::Create { user, confirmed });
            state.apply_search_filter();
            Ok((true, vec![]))
        }

        RemoteResponse::UserUpdated {
            request_id,
            id,
            fields,
        } => {
            state.complete_request(request_id, RequestPhase::Resolved);
            state.push_mutation(PendingMutation::Update { id, fields });
            state.apply_search_filter();
            Ok((true, vec![]))
        }

        RemoteResponse::UserDeleted { request_id, id } => {
            state.complete_request(request_id, RequestPhase::Resolved);
            state.push_mutation(PendingMutation::Delete { id });
            state.apply_search_filter();
            Ok((true, vec![]))
        }

        RemoteResponse::CreateFailed {
            request_id,
            message,
        }
        | RemoteResponse::UpdateFailed {
            request_id,
            message,
        }
        | RemoteResponse::DeleteFailed {
            request_id,
            message,
        } => {
            state.complete_request(request_id, RequestPhase::Rejected);
            tracing::debug!(error = %message, "mutation failed");
            state.error = Some(message);
            Ok((true, vec![]))
        }
    }
}
