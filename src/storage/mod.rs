//! Storage layer for persistent session data.
//!
//! This module provides the persistence abstraction for the session token,
//! the single value the core keeps across process restarts. A token written
//! on login survives until explicit logout removes it.
//!
//! # Modules
//!
//! - [`backend`]: Storage trait abstraction for backend implementations
//! - [`json`]: JSON file-based implementation with atomic writes
//! - [`memory`]: Process-local implementation for filesystem-less hosts

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::TokenStore;
pub use json::JsonTokenStore;
pub use memory::MemoryTokenStore;
