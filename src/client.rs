//! Client runtime tying state, gateway, and token persistence together.
//!
//! [`DirectoryClient`] is the single-writer funnel for the whole core: it
//! owns the [`AppState`], the [`DirectoryGateway`], and a [`TokenStore`],
//! and every mutation path runs through its [`DirectoryClient::dispatch`].
//! External code never writes the cache or the overlay directly; it hands
//! the client an [`Event`] and observes the resulting state.
//!
//! # Completion model
//!
//! All remote operations are non-blocking from the state machine's point of
//! view: an intent event records a pending request and emits a
//! [`Action::CallRemote`]; the completion re-enters the handler as
//! [`Event::Remote`]. `dispatch` drives that cycle to quiescence with a work
//! queue, so a host that wants cooperative interleaving (complete responses
//! in its own order, hold some back, inject failures) can instead run
//! [`crate::app::handle_event`] and the gateway by hand — the tests below do
//! exactly that where arrival order matters. Either way the resulting state
//! is a deterministic function of the event arrival order.

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::remote::{DirectoryApi, DirectoryGateway};
use crate::storage::TokenStore;
use crate::ui::DirectoryViewModel;
use std::collections::VecDeque;

/// Owns the application state and the two capabilities it depends on.
///
/// # Examples
///
/// ```no_run
/// use rosterdeck::client::DirectoryClient;
/// use rosterdeck::app::Event;
/// use rosterdeck::storage::MemoryTokenStore;
/// # fn api() -> Box<dyn rosterdeck::remote::DirectoryApi> { unimplemented!() }
///
/// let mut client = DirectoryClient::new(api(), Box::new(MemoryTokenStore::new()))?;
/// client.dispatch(Event::RequestPage(1))?;
/// let viewmodel = client.viewmodel();
/// # Ok::<(), rosterdeck::domain::RosterdeckError>(())
/// ```
pub struct DirectoryClient {
    state: AppState,
    gateway: DirectoryGateway,
    tokens: Box<dyn TokenStore>,
}

impl DirectoryClient {
    /// Builds a client over the given capabilities and restores the
    /// persisted session token, if any.
    ///
    /// Restoring a token makes the session authenticated without changing
    /// its status: no login attempt has happened in this process yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the token store cannot be read.
    pub fn new(api: Box<dyn DirectoryApi>, tokens: Box<dyn TokenStore>) -> Result<Self> {
        let mut state = AppState::new();

        let restored = tokens.get()?;
        if restored.is_some() {
            tracing::debug!("restored persisted session token");
        }
        state.session.token = restored;

        Ok(Self {
            state,
            gateway: DirectoryGateway::new(api),
            tokens,
        })
    }

    /// Read-only view of the application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Computes the render-ready view model from current state.
    #[must_use]
    pub fn viewmodel(&self) -> DirectoryViewModel {
        self.state.compute_viewmodel()
    }

    /// Processes one event and every completion it causes, to quiescence.
    ///
    /// Returns whether the derived view changed. Remote calls emitted by the
    /// transition are dispatched through the gateway and their responses fed
    /// back as events, in issue order.
    ///
    /// # Errors
    ///
    /// Returns an error if token persistence fails; remote failures are not
    /// errors here, they surface as state (see
    /// [`crate::domain::RosterdeckError`] policy in the crate docs).
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut should_render = false;

        while let Some(next) = queue.pop_front() {
            let (render, actions) = handle_event(&mut self.state, next)?;
            should_render |= render;

            for action in actions {
                match action {
                    Action::CallRemote(request) => {
                        let response = self.gateway.handle_request(request);
                        queue.push_back(Event::Remote(response));
                    }
                    Action::PersistToken(token) => {
                        self.tokens.set(&token)?;
                    }
                    Action::ClearToken => {
                        self.tokens.remove()?;
                    }
                }
            }
        }

        Ok(should_render)
    }
}
