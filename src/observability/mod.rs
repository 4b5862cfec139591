//! Structured logging setup.
//!
//! Every layer of the crate instruments itself with `tracing` spans and
//! events; this module owns the one place a subscriber gets installed.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`crate::Config`]
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
