//! Error types for the rosterdeck core.
//!
//! This module defines the centralized error type [`RosterdeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Operational failures (a rejected login, a failed page fetch, a refused
//! mutation) are normally surfaced as message strings attached to application
//! state rather than propagated as `Err` values; the variants here cover the
//! cases where a caller genuinely needs a typed error, such as storage I/O or
//! invalid configuration.

use thiserror::Error;

/// The main error type for rosterdeck operations.
///
/// This enum consolidates all error conditions that can occur in the core,
/// from token persistence failures to invalid configuration. The `Auth`,
/// `Fetch`, and `Mutation` variants mirror the three operational failure
/// classes the remote service can report.
///
/// # Examples
///
/// ```
/// use rosterdeck::domain::RosterdeckError;
///
/// fn validate_config() -> Result<(), RosterdeckError> {
///     Err(RosterdeckError::Config("missing storage path".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum RosterdeckError {
    /// Authentication was rejected or the session is invalid.
    ///
    /// The string contains the service-reported message, or a generic
    /// fallback when the service gave none.
    #[error("Auth error: {0}")]
    Auth(String),

    /// A page fetch was rejected by the remote service.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A create, update, or delete was rejected by the remote service.
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// Token persistence operation failed.
    ///
    /// Occurs when reading from or writing to the token store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for rosterdeck operations.
///
/// This is a type alias for `std::result::Result<T, RosterdeckError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, RosterdeckError>;
