//! Remote boundary: capability trait, request protocol, and gateway.
//!
//! Everything the core needs from the remote user-directory service crosses
//! this module. The shape is a strict request/response pipeline:
//!
//! - [`api`]: the [`DirectoryApi`] capability trait the host implements
//! - [`messages`]: explicit [`RemoteRequest`] / [`RemoteResponse`] objects
//!   with tracked request ids
//! - [`gateway`]: the [`DirectoryGateway`] dispatcher mapping one request to
//!   one capability call to one response

pub mod api;
pub mod gateway;
pub mod messages;

pub use api::{CreatedUser, DirectoryApi, LoginGrant, RemoteError, RemoteResult};
pub use gateway::DirectoryGateway;
pub use messages::{RemoteRequest, RemoteResponse, RequestId};
