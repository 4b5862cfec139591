//! Token persistence abstraction.
//!
//! This module defines the [`TokenStore`] trait that abstracts over where
//! the session token is kept between process runs. This allows switching
//! persistence backends (a JSON file on disk, browser-local storage behind a
//! host shim, plain memory in tests) without changing the session logic.
//!
//! # Design Philosophy
//!
//! The trait is deliberately tiny: the core persists exactly one value, the
//! session token, under one well-known key owned by the backend. There is no
//! generic key-value surface to misuse.

use crate::domain::error::Result;

/// Abstraction over session-token persistence backends.
///
/// # Implementations
///
/// - [`crate::storage::JsonTokenStore`]: JSON file with atomic writes
/// - [`crate::storage::MemoryTokenStore`]: process-local, for hosts without
///   a filesystem and for tests
pub trait TokenStore: Send {
    /// Returns the persisted token, or `None` if no login has been persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self) -> Result<Option<String>>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, token: &str) -> Result<()>;

    /// Removes the persisted token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self) -> Result<()>;
}
