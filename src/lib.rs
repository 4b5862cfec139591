//! Rosterdeck: a client-side state and cache core for a remote user directory.
//!
//! Rosterdeck gives a host application everything between "the user clicked
//! something" and "these are the rows to draw" for a paginated user
//! directory service:
//! - Token-based session lifecycle with persistent storage
//! - A page cache keyed by page number, enumerated in ascending order
//! - An optimistic mutation overlay replayed over the cached pages
//! - Case-insensitive full-name search filtering
//! - A request-response remote protocol with tracked lifecycles

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Client Runtime (client.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Remote Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (remote/)     │
//! │ - View models │   │ - Token store │   │ - Service API │
//! │ - Row shaping │   │ - JSON I/O    │   │ - Gateway     │
//! │ - Empty state │   │ - Backend API │   │ - Messages    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - User model and search matching                   │
//! │  - Page envelopes                                   │
//! │  - Mutation overlay replay                          │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured tracing                               │
//! │  - Subscriber setup                                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`client`]: Runtime funnel wiring state, gateway, and token store
//! - [`domain`]: Core domain types (User, pages, overlay, errors)
//! - [`remote`]: Directory service abstraction and request protocol
//! - [`storage`]: Token persistence (JSON file or in-memory)
//! - [`ui`]: Display-ready view models
//! - [`observability`]: Tracing subscriber setup
//!
//! # Data Flow
//!
//! 1. **Intent**: the host turns user input into an [`Event`] and hands it
//!    to [`client::DirectoryClient::dispatch`].
//! 2. **Transition**: [`handle_event`] mutates [`AppState`] and emits
//!    [`Action`]s; remote calls become tracked requests.
//! 3. **Execution**: the runtime routes [`Action::CallRemote`] through the
//!    [`remote::DirectoryGateway`] and feeds the [`remote::RemoteResponse`]
//!    back in as [`Event::Remote`].
//! 4. **Projection**: [`AppState::compute_viewmodel`] flattens the page
//!    cache in page order, replays the mutation overlay, applies the search
//!    filter, and shapes the result for rendering.
//!
//! # Examples
//!
//! ```no_run
//! use rosterdeck::{initialize, Config, Event};
//! # fn api() -> Box<dyn rosterdeck::remote::DirectoryApi> { unimplemented!() }
//!
//! let config = Config {
//!     initial_page: Some(1),
//!     ..Config::default()
//! };
//!
//! let mut client = initialize(&config, api())?;
//!
//! client.dispatch(Event::SetSearch("eve".to_string()))?;
//! let viewmodel = client.viewmodel();
//! for row in &viewmodel.rows {
//!     println!("{} <{}>", row.full_name, row.email);
//! }
//! # Ok::<(), rosterdeck::RosterdeckError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Page Cache as an Ordered Map
//!
//! Pages live in a `BTreeMap<u32, PageEnvelope>`, so the working list is
//! ordered by page number structurally, independent of fetch arrival order.
//! Re-fetching a page overwrites its cache entry wholesale.
//!
//! ## Optimistic Overlay Replay
//!
//! Local creates, updates, and deletes are kept as an append-only log and
//! replayed over the flattened cache on every derivation. The base cache is
//! never edited in place, so a re-fetch cannot resurrect a locally deleted
//! record.
//!
//! ## Immutable View Models
//!
//! Rendering consumes a computed snapshot rather than the live state:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes the filter and empty-state copy once per render

pub mod app;
pub mod client;
pub mod domain;
pub mod remote;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, SessionStatus, ViewMode};
pub use client::DirectoryClient;
pub use domain::{Result, RosterdeckError, User};

use remote::DirectoryApi;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{JsonTokenStore, MemoryTokenStore, TokenStore};

/// Runtime configuration for the client core.
///
/// All fields are optional; an all-default configuration yields an
/// in-memory token store, no startup prefetch, and `info`-level tracing.
///
/// # Example (TOML)
///
/// ```toml
/// storage_path = "/home/user/.local/share/rosterdeck/session.json"
/// initial_page = 1
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the JSON session file.
    ///
    /// When unset, the session token lives in memory only and is lost when
    /// the process exits.
    pub storage_path: Option<PathBuf>,

    /// Page to fetch during [`initialize`], before the first host event.
    ///
    /// When unset, nothing is fetched until the host requests a page.
    pub initial_page: Option<u32>,

    /// Tracing level for structured logging.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    /// `RUST_LOG` takes precedence when set.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Hosts that receive configuration as flat key-value pairs (environment
    /// blocks, plugin settings) can hand the map over directly. Unknown keys
    /// are ignored; values that fail to parse fall back to the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rosterdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("initial_page".to_string(), "1".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.initial_page, Some(1));
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let storage_path = config
            .get("storage_path")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let initial_page = config
            .get("initial_page")
            .and_then(|s| s.parse::<u32>().ok());

        Self {
            storage_path,
            initial_page,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterdeckError::Config`] if the file cannot be read or is
    /// not valid TOML for this structure.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            RosterdeckError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents).map_err(|e| {
            RosterdeckError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

/// Initializes the client core with configuration.
///
/// Installs the tracing subscriber, builds the token store selected by
/// [`Config::storage_path`], restores any persisted session token, and
/// prefetches [`Config::initial_page`] when set.
///
/// # Errors
///
/// Returns an error if the token store cannot be opened or the startup
/// prefetch fails at the persistence layer. A remote failure during the
/// prefetch is not an error; it lands in [`AppState::error`] like any
/// other fetch failure.
pub fn initialize(config: &Config, api: Box<dyn DirectoryApi>) -> Result<DirectoryClient> {
    observability::init_tracing(config);
    tracing::debug!("initializing rosterdeck client");

    let tokens: Box<dyn TokenStore> = match &config.storage_path {
        Some(path) => Box::new(JsonTokenStore::new(path.clone())?),
        None => Box::new(MemoryTokenStore::new()),
    };

    let mut client = DirectoryClient::new(api, tokens)?;

    if let Some(page) = config.initial_page {
        client.dispatch(Event::RequestPage(page))?;
    }

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_map_parses_typed_values() {
        let mut map = BTreeMap::new();
        map.insert("storage_path".to_string(), "/tmp/session.json".to_string());
        map.insert("initial_page".to_string(), "2".to_string());
        map.insert("trace_level".to_string(), "warn".to_string());

        let config = Config::from_map(&map);
        assert_eq!(
            config.storage_path,
            Some(PathBuf::from("/tmp/session.json"))
        );
        assert_eq!(config.initial_page, Some(2));
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn from_map_falls_back_on_unparseable_values() {
        let mut map = BTreeMap::new();
        map.insert("initial_page".to_string(), "first".to_string());
        map.insert("storage_path".to_string(), String::new());

        let config = Config::from_map(&map);
        assert_eq!(config.initial_page, None);
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn from_file_round_trips_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rosterdeck.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "initial_page = 1").expect("write");
        writeln!(file, "trace_level = \"debug\"").expect("write");

        let config = Config::from_file(&path).expect("config");
        assert_eq!(config.initial_page, Some(1));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rosterdeck.toml");
        std::fs::write(&path, "frobnicate = true\n").expect("write");

        let err = Config::from_file(&path).expect_err("should fail");
        assert!(matches!(err, RosterdeckError::Config(_)));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Config::from_file("/nonexistent/rosterdeck.toml").expect_err("should fail");
        assert!(matches!(err, RosterdeckError::Config(_)));
    }
}
