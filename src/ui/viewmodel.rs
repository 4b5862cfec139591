//! View model types representing renderable UI state.
//!
//! This module defines the immutable view model computed from application
//! state. The view model is created via
//! [`crate::app::AppState::compute_viewmodel`] and consumed by the external
//! render layer; it contains no business logic, only display-ready data.
//! Whether the rows become a table or a grid of cards is the render layer's
//! decision, guided by [`ViewMode`].

use crate::app::modes::{SessionStatus, ViewMode};

/// Complete view model for one render pass.
///
/// A snapshot: the filtered rows, the session and list status flags, the
/// pagination counters mirrored from the most recent fetch, and optional
/// empty-state copy when nothing is visible.
#[derive(Debug, Clone)]
pub struct DirectoryViewModel {
    /// Records to display, already search-filtered, in working-list order.
    pub rows: Vec<UserRow>,

    /// Table or card layout; contents are identical either way.
    pub view_mode: ViewMode,

    /// Whether a page fetch is in flight.
    pub loading: bool,

    /// Failure message from the most recent fetch or mutation, if any.
    pub error: Option<String>,

    /// Whether a session token is held.
    pub authenticated: bool,

    /// Authentication lifecycle state.
    pub session_status: SessionStatus,

    /// Login failure message, present only when the last attempt failed.
    pub session_error: Option<String>,

    /// Current search text, echoed back for the search input.
    pub search_query: String,

    /// Page number of the most recently fetched page.
    pub current_page: u32,

    /// Total pages, as reported by the most recent fetch.
    pub total_pages: u32,

    /// Total records, as reported by the most recent fetch.
    pub total: u32,

    /// Header information (title with counts).
    pub header: HeaderInfo,

    /// Empty-state copy, present only when `rows` is empty.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// Identity key; render layers use it for edit/delete intents.
    pub id: i64,

    /// Pre-joined `"first_name last_name"`.
    pub full_name: String,

    /// Contact address column.
    pub email: String,

    /// Avatar image URL for the card layout.
    pub avatar: String,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, e.g. `" Directory (6 of 12) "`.
    pub title: String,
}

/// Empty state message, shown when no records are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g. "No users found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
