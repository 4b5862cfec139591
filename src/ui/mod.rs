//! View model layer consumed by the external render capability.
//!
//! Rendering itself is out of scope for this crate; the state container only
//! projects its contents into the display-ready types defined here:
//!
//! ```text
//! AppState → compute_viewmodel → DirectoryViewModel → host render layer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state

pub mod viewmodel;

pub use viewmodel::{DirectoryViewModel, EmptyState, HeaderInfo, UserRow};
