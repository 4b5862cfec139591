//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! host runtime and the domain/remote/storage layers. It implements the
//! event-driven architecture that keeps every state write on a single path.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Render Intents → Events → Event Handler → State Mutations → Actions → Side Effects
//!                     ↑                                           ↓
//!                     └──────────── Remote Completions ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View, session, and request lifecycle enums
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use rosterdeck::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (_render, actions) = handle_event(&mut state, Event::RequestPage(1))?;
//! // Execute actions...
//! # Ok::<(), rosterdeck::domain::RosterdeckError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{RequestPhase, SessionStatus, ViewMode};
pub use state::{AppState, RequestKind, RequestRecord, SessionState};
