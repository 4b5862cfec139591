//! Fetched page envelope as reported by the remote directory service.
//!
//! A [`PageEnvelope`] is one batch of user records plus the pagination
//! counters the service reported alongside it. Envelopes are the values of
//! the page cache; they are stored exactly as received and only ever
//! replaced wholesale by a re-fetch of the same page number.

use crate::domain::User;
use serde::{Deserialize, Serialize};

/// One fetched page of the user collection.
///
/// The counters are service-reported and mirrored into application state when
/// the envelope is stored: `per_page` is carried explicitly rather than being
/// derived from `total / total_pages`, so a page-size change on the service
/// side cannot silently skew the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope {
    /// Page number this envelope belongs to; the cache key. Always ≥ 1.
    pub page: u32,

    /// Service-reported page size.
    pub per_page: u32,

    /// Total records in the collection across all pages.
    pub total: u32,

    /// Total number of pages in the collection.
    pub total_pages: u32,

    /// Records in this page, in the order the service returned them.
    pub data: Vec<User>,
}

impl PageEnvelope {
    /// Creates an envelope with counters derived from a fixed page size.
    ///
    /// Convenience for tests and fixtures; production envelopes come from
    /// the remote-call capability as-is.
    #[must_use]
    pub fn new(page: u32, per_page: u32, total: u32, total_pages: u32, data: Vec<User>) -> Self {
        Self {
            page,
            per_page,
            total,
            total_pages,
            data,
        }
    }
}
