//! Application state container and working-list derivation.
//!
//! This module defines [`AppState`], the single state container for the
//! client core: the authenticated session, the per-page cache of fetched
//! collections, the pending-mutation overlay, the search query and view
//! mode, and the request-lifecycle table. It is the sole owner of all of
//! this state; every write funnels through the event handler, and readers
//! (the view model, the render layer) only ever observe.
//!
//! # Derivation
//!
//! The working list is never stored. It is derived on demand:
//!
//! 1. Enumerate cached pages in ascending page-number order (the cache is a
//!    `BTreeMap`, so this ordering is structural, not re-sorted).
//! 2. Concatenate each page's records, preserving their internal order.
//! 3. Replay the pending-mutation log in issue order.
//!
//! Two observers deriving from identical cache and overlay contents see
//! identical output, regardless of the order the pages were fetched in.
//!
//! # Example
//!
//! ```
//! use rosterdeck::app::AppState;
//!
//! let mut state = AppState::new();
//! state.search_query = "ada".to_string();
//! state.apply_search_filter();
//! assert!(state.visible_users.is_empty());
//! ```

use crate::app::modes::{RequestPhase, SessionStatus, ViewMode};
use crate::domain::{overlay, PageEnvelope, PendingMutation, User};
use crate::remote::RequestId;
use crate::ui::viewmodel::{DirectoryViewModel, EmptyState, HeaderInfo, UserRow};
use std::collections::{BTreeMap, HashMap};

/// Authentication state of the session.
///
/// `token` present means authenticated. `error` is present only while
/// `status` is [`SessionStatus::Failed`] and is cleared whenever a new login
/// attempt begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Opaque session token; survives process restarts via the token store.
    pub token: Option<String>,

    /// Where the login lifecycle currently stands.
    pub status: SessionStatus,

    /// Service-reported failure message for the last attempt.
    pub error: Option<String>,
}

impl SessionState {
    const fn new() -> Self {
        Self {
            token: None,
            status: SessionStatus::Idle,
            error: None,
        }
    }

    /// Whether a token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// What kind of remote operation a tracked request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    FetchPage(u32),
    Create,
    Update(i64),
    Delete(i64),
    Login,
}

/// Issue record for one remote request.
///
/// Created when the request is issued and updated exactly once when its
/// response arrives, so concurrent-request orderings stay observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestRecord {
    /// Operation this request performs.
    pub kind: RequestKind,

    /// Unix timestamp of the moment the request was issued.
    pub issued_at: i64,

    /// Pending until the response arrives, then resolved or rejected.
    pub phase: RequestPhase,
}

/// Central application state container.
///
/// Holds the session, the page cache, the overlay log, display state, and
/// the request table. Mutated only by the event handler; the cached
/// `visible_users` list is recomputed by [`AppState::apply_search_filter`]
/// after every change that can affect it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authentication lifecycle and token.
    pub session: SessionState,

    /// Fetched pages keyed by page number. `BTreeMap` iteration order is the
    /// ascending-page contract the working list relies on.
    pub pages: BTreeMap<u32, PageEnvelope>,

    /// Pending local mutations, in issue order. Replayed over the flattened
    /// cache on every derivation; never written back into `pages`.
    pub overlay: Vec<PendingMutation>,

    /// Working list narrowed by the search query.
    ///
    /// Recomputed by [`AppState::apply_search_filter`]. This is what the
    /// view model renders.
    pub visible_users: Vec<User>,

    /// Current search text; empty means no filtering.
    pub search_query: String,

    /// Table or card layout; display metadata only.
    pub view_mode: ViewMode,

    /// Whether a page fetch is in flight.
    pub loading: bool,

    /// Failure message from the most recent fetch or mutation, if any.
    pub error: Option<String>,

    /// Mirrored from the most recently fetched page's metadata.
    pub total: u32,

    /// Mirrored from the most recently fetched page's metadata.
    pub total_pages: u32,

    /// Service-reported page size from the most recently fetched page.
    pub per_page: u32,

    /// Page number of the most recently fetched page.
    pub current_page: u32,

    /// Lifecycle records for every request issued this process.
    pub requests: HashMap<RequestId, RequestRecord>,

    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty state: idle session, empty cache, table layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            pages: BTreeMap::new(),
            overlay: Vec::new(),
            visible_users: Vec::new(),
            search_query: String::new(),
            view_mode: ViewMode::Table,
            loading: false,
            error: None,
            total: 0,
            total_pages: 1,
            per_page: 0,
            current_page: 1,
            requests: HashMap::new(),
            next_request_id: 1,
        }
    }

    /// Allocates a request id and records the request as pending.
    ///
    /// Called by the event handler immediately before emitting the
    /// corresponding remote call action.
    pub fn track_request(&mut self, kind: RequestKind) -> RequestId {
        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        self.requests.insert(
            id,
            RequestRecord {
                kind,
                issued_at: chrono::Utc::now().timestamp(),
                phase: RequestPhase::Pending,
            },
        );
        tracing::debug!(request_id = %id, kind = ?kind, "request issued");
        id
    }

    /// Marks a tracked request resolved or rejected.
    ///
    /// Completions for unknown ids are logged and ignored; phases never
    /// regress.
    pub fn complete_request(&mut self, id: RequestId, phase: RequestPhase) {
        match self.requests.get_mut(&id) {
            Some(record) if record.phase == RequestPhase::Pending => {
                record.phase = phase;
                tracing::debug!(request_id = %id, phase = ?phase, "request completed");
            }
            Some(_) => {
                tracing::debug!(request_id = %id, "duplicate completion ignored");
            }
            None => {
                tracing::debug!(request_id = %id, "completion for unknown request ignored");
            }
        }
    }

    /// Number of requests still awaiting a response.
    #[must_use]
    pub fn pending_request_count(&self) -> usize {
        self.requests
            .values()
            .filter(|r| r.phase == RequestPhase::Pending)
            .count()
    }

    /// Stores a fetched page, overwriting any previous entry for its number,
    /// and mirrors its pagination counters.
    ///
    /// A re-fetch replaces the cached data wholesale; the overlay is not
    /// touched and keeps replaying on the fresh base.
    pub fn store_page(&mut self, envelope: PageEnvelope) {
        tracing::debug!(
            page = envelope.page,
            records = envelope.data.len(),
            total = envelope.total,
            total_pages = envelope.total_pages,
            overwrite = self.pages.contains_key(&envelope.page),
            "page stored"
        );
        self.total = envelope.total;
        self.total_pages = envelope.total_pages;
        self.per_page = envelope.per_page;
        self.current_page = envelope.page;
        self.pages.insert(envelope.page, envelope);
    }

    /// Appends a locally successful mutation to the overlay log.
    pub fn push_mutation(&mut self, mutation: PendingMutation) {
        tracing::debug!(key = mutation.key(), mutation = ?std::mem::discriminant(&mutation), "overlay entry appended");
        self.overlay.push(mutation);
    }

    /// Derives the working list: flatten cached pages in ascending page
    /// order, then replay the overlay log.
    ///
    /// No two records in the result share an id.
    #[must_use]
    pub fn working_list(&self) -> Vec<User> {
        let _span = tracing::debug_span!(
            "working_list",
            cached_pages = self.pages.len(),
            overlay_len = self.overlay.len()
        )
        .entered();

        let base: Vec<User> = self
            .pages
            .values()
            .flat_map(|page| page.data.iter().cloned())
            .collect();
        overlay::replay(base, &self.overlay)
    }

    /// Recomputes `visible_users` from the working list and the search query.
    ///
    /// An empty query passes the working list through unchanged; otherwise
    /// records are kept when the lowercase `"first_name last_name"` contains
    /// the lowercase query as a substring. Order is preserved either way.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            query_len = self.search_query.len(),
            view_mode = ?self.view_mode
        )
        .entered();

        self.visible_users = self
            .working_list()
            .into_iter()
            .filter(|user| user.matches_search(&self.search_query))
            .collect();

        tracing::debug!(visible_count = self.visible_users.len(), "search filter applied");
    }

    /// Clears the session on logout.
    ///
    /// Only the session is touched: the page cache, overlay, and display
    /// state are left as they are, matching the synchronous token-only
    /// semantics of logout.
    pub fn clear_session(&mut self) {
        self.session = SessionState::new();
    }

    /// Computes the render-ready view model from current state.
    ///
    /// The view model is a snapshot: rows from `visible_users`, the session
    /// and list status flags, pagination counters, and an empty-state message
    /// when nothing is visible.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DirectoryViewModel {
        let rows: Vec<UserRow> = self
            .visible_users
            .iter()
            .map(|user| UserRow {
                id: user.id,
                full_name: user.full_name(),
                email: user.email.clone(),
                avatar: user.avatar.clone(),
            })
            .collect();

        let empty_state = if rows.is_empty() {
            Some(EmptyState {
                message: "No users found".to_string(),
                subtitle: if self.search_query.is_empty() {
                    "Fetch a page to get started".to_string()
                } else {
                    format!("No matches for \"{}\"", self.search_query)
                },
            })
        } else {
            None
        };

        DirectoryViewModel {
            header: HeaderInfo {
                title: format!(" Directory ({} of {}) ", rows.len(), self.total),
            },
            rows,
            view_mode: self.view_mode,
            loading: self.loading,
            error: self.error.clone(),
            authenticated: self.session.is_authenticated(),
            session_status: self.session.status,
            session_error: self.session.error.clone(),
            search_query: self.search_query.clone(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total: self.total,
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PendingMutation, UserFields};

    fn user(id: i64, first: &str, last: &str) -> User {
        User {
            id,
            email: format!("{}@example.com", first.to_lowercase()),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: format!("https://example.com/{id}.png"),
        }
    }

    fn envelope(page: u32, users: Vec<User>) -> PageEnvelope {
        PageEnvelope::new(page, 2, 6, 3, users)
    }

    #[test]
    fn working_list_orders_by_page_number_not_arrival() {
        let mut state = AppState::new();
        state.store_page(envelope(2, vec![user(3, "C", "Three"), user(4, "D", "Four")]));
        state.store_page(envelope(1, vec![user(1, "A", "One"), user(2, "B", "Two")]));
        state.store_page(envelope(3, vec![user(5, "E", "Five"), user(6, "F", "Six")]));

        let ids: Vec<i64> = state.working_list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn totals_mirror_most_recently_fetched_page() {
        let mut state = AppState::new();
        state.store_page(PageEnvelope::new(1, 6, 12, 2, vec![]));
        assert_eq!((state.total, state.total_pages, state.per_page), (12, 2, 6));
        assert_eq!(state.current_page, 1);

        state.store_page(PageEnvelope::new(2, 6, 13, 3, vec![]));
        assert_eq!((state.total, state.total_pages, state.per_page), (13, 3, 6));
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn refetch_overwrites_cache_but_local_delete_stays_applied() {
        let mut state = AppState::new();
        let page_one = envelope(1, vec![user(1, "Jon", "Snow"), user(2, "Arya", "Stark")]);
        state.store_page(page_one.clone());
        state.push_mutation(PendingMutation::Delete { id: 1 });

        // Local delete visible.
        let ids: Vec<i64> = state.working_list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);

        // Re-fetch brings the record back into the cache, but the overlay
        // replays after the flatten: the delete stays applied.
        state.store_page(page_one);
        let ids: Vec<i64> = state.working_list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn create_lands_at_index_zero_regardless_of_cache() {
        let mut state = AppState::new();
        state.store_page(envelope(1, vec![user(1, "Jon", "Snow")]));
        state.store_page(envelope(2, vec![user(2, "Arya", "Stark")]));
        state.push_mutation(PendingMutation::Create {
            user: user(-1, "Ada", "Lovelace"),
            confirmed: false,
        });

        let list = state.working_list();
        assert_eq!(list[0].id, -1);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn update_keeps_position_and_merges_fields() {
        let mut state = AppState::new();
        state.store_page(envelope(
            1,
            vec![user(1, "Jon", "Snow"), user(2, "Arya", "Stark")],
        ));
        state.push_mutation(PendingMutation::Update {
            id: 1,
            fields: UserFields {
                email: "e@x.com".to_string(),
                first_name: "John".to_string(),
                last_name: "Snow".to_string(),
                avatar: "a".to_string(),
            },
        });

        let list = state.working_list();
        assert_eq!(list[0].id, 1);
        assert_eq!(list[0].first_name, "John");
        assert_eq!(list[0].last_name, "Snow");
    }

    #[test]
    fn search_filters_by_case_insensitive_substring() {
        let mut state = AppState::new();
        state.store_page(envelope(
            1,
            vec![user(1, "Ada", "Lovelace"), user(2, "Bob", "Stone")],
        ));

        state.search_query = "ADA".to_string();
        state.apply_search_filter();
        assert_eq!(state.visible_users.len(), 1);
        assert_eq!(state.visible_users[0].id, 1);

        state.search_query = String::new();
        state.apply_search_filter();
        let ids: Vec<i64> = state.visible_users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn request_lifecycle_is_observable() {
        let mut state = AppState::new();
        let id = state.track_request(RequestKind::FetchPage(1));
        assert_eq!(state.pending_request_count(), 1);
        assert_eq!(state.requests[&id].phase, RequestPhase::Pending);

        state.complete_request(id, RequestPhase::Resolved);
        assert_eq!(state.pending_request_count(), 0);
        assert_eq!(state.requests[&id].phase, RequestPhase::Resolved);

        // A second completion never regresses the phase.
        state.complete_request(id, RequestPhase::Rejected);
        assert_eq!(state.requests[&id].phase, RequestPhase::Resolved);
    }

    #[test]
    fn viewmodel_reports_empty_state_and_counters() {
        let mut state = AppState::new();
        let vm = state.compute_viewmodel();
        assert!(vm.rows.is_empty());
        assert_eq!(
            vm.empty_state.as_ref().map(|e| e.message.as_str()),
            Some("No users found")
        );

        state.store_page(envelope(1, vec![user(1, "Ada", "Lovelace")]));
        state.apply_search_filter();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].full_name, "Ada Lovelace");
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.total, 6);
        assert_eq!(vm.current_page, 1);
    }

    #[test]
    fn clear_session_leaves_cache_untouched() {
        let mut state = AppState::new();
        state.session.token = Some("tok".to_string());
        state.session.status = SessionStatus::Succeeded;
        state.store_page(envelope(1, vec![user(1, "Ada", "Lovelace")]));

        state.clear_session();
        assert!(state.session.token.is_none());
        assert_eq!(state.session.status, SessionStatus::Idle);
        assert_eq!(state.pages.len(), 1);
    }
}
