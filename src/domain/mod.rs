//! Domain layer for the rosterdeck core.
//!
//! This module contains the core domain types and business logic of the
//! client, independent of any remote transport or persistence concerns. It
//! follows domain-driven design principles by keeping the working-list
//! derivation rules isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record and mutation payloads
//! - [`page`]: Fetched page envelope with pagination counters
//! - [`overlay`]: Pending-mutation log and replay algorithm
//!
//! # Examples
//!
//! ```
//! use rosterdeck::domain::{PendingMutation, User, replay};
//!
//! let base = vec![User {
//!     id: 1,
//!     email: "jon@example.com".to_string(),
//!     first_name: "Jon".to_string(),
//!     last_name: "Snow".to_string(),
//!     avatar: String::new(),
//! }];
//! let log = vec![PendingMutation::Delete { id: 1 }];
//! assert!(replay(base, &log).is_empty());
//! ```

pub mod error;
pub mod overlay;
pub mod page;
pub mod user;

pub use error::{Result, RosterdeckError};
pub use overlay::{replay, PendingMutation};
pub use page::PageEnvelope;
pub use user::{User, UserDraft, UserFields};
