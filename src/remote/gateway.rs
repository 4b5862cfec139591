//! Request dispatcher over the remote-call capability.
//!
//! The [`DirectoryGateway`] turns each [`RemoteRequest`] into exactly one
//! call on the wrapped [`DirectoryApi`] implementation and folds the result
//! into a [`RemoteResponse`]. It owns the two policies that sit at this
//! boundary: substituting an operation-specific fallback message when the
//! service fails without one, and synthesizing a provisional id when a create
//! succeeds without the service reporting one.
//!
//! The gateway performs no retries and keeps no request state; retryability
//! lives with the caller, and lifecycle tracking lives in the state
//! container.

use crate::domain::User;
use crate::remote::api::{DirectoryApi, RemoteResult};
use crate::remote::messages::{RemoteRequest, RemoteResponse, RequestId};

/// Fallback messages used when the service rejects an operation without
/// saying why. Taken verbatim from what the directory UI displays.
const FETCH_FALLBACK: &str = "Failed to load users";
const CREATE_FALLBACK: &str = "Create failed";
const UPDATE_FALLBACK: &str = "Update failed";
const DELETE_FALLBACK: &str = "Delete failed";
const LOGIN_FALLBACK: &str = "Invalid credentials";

/// Source of provisional ids for creates the service did not confirm.
///
/// Ids count down from -1, so a provisional id can never collide with a
/// service-assigned id (those are positive) nor with an earlier provisional
/// one.
#[derive(Debug, Clone)]
struct LocalIdSequence {
    next: i64,
}

impl LocalIdSequence {
    const fn new() -> Self {
        Self { next: -1 }
    }

    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next -= 1;
        id
    }
}

/// Dispatches requests to the remote-call capability, one response per request.
///
/// # Examples
///
/// ```no_run
/// use rosterdeck::remote::{DirectoryGateway, RemoteRequest, RequestId};
/// # fn api() -> Box<dyn rosterdeck::remote::DirectoryApi> { unimplemented!() }
///
/// let mut gateway = DirectoryGateway::new(api());
/// let response = gateway.handle_request(RemoteRequest::FetchPage {
///     request_id: RequestId(1),
///     page: 1,
/// });
/// ```
pub struct DirectoryGateway {
    api: Box<dyn DirectoryApi>,
    local_ids: LocalIdSequence,
}

impl DirectoryGateway {
    /// Wraps a remote-call capability implementation.
    #[must_use]
    pub fn new(api: Box<dyn DirectoryApi>) -> Self {
        Self {
            api,
            local_ids: LocalIdSequence::new(),
        }
    }

    /// Helper folding a capability result into a response with consistent logging.
    ///
    /// Success goes through `on_success`; failure goes through `on_failure`
    /// with the service message or the operation fallback.
    fn complete<T>(
        operation: &str,
        fallback: &str,
        result: RemoteResult<T>,
        on_success: impl FnOnce(T) -> RemoteResponse,
        on_failure: impl FnOnce(String) -> RemoteResponse,
    ) -> RemoteResponse {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "remote operation successful");
                on_success(value)
            }
            Err(e) => {
                let message = e.message.unwrap_or_else(|| fallback.to_string());
                tracing::debug!(operation = operation, error = %message, "remote operation failed");
                on_failure(message)
            }
        }
    }

    fn handle_fetch_page(&mut self, request_id: RequestId, page: u32) -> RemoteResponse {
        Self::complete(
            "fetch page",
            FETCH_FALLBACK,
            self.api.fetch_page(page),
            |envelope| RemoteResponse::PageFetched {
                request_id,
                envelope,
            },
            |message| RemoteResponse::FetchFailed {
                request_id,
                page,
                message,
            },
        )
    }

    fn handle_create_user(
        &mut self,
        request_id: RequestId,
        draft: crate::domain::UserDraft,
    ) -> RemoteResponse {
        let result = self.api.create_user(&draft);
        match result {
            Ok(created) => {
                let (id, confirmed) = match created.id {
                    Some(id) => (id, true),
                    None => {
                        let id = self.local_ids.next_id();
                        tracing::debug!(
                            provisional_id = id,
                            "service returned no id, assigning provisional"
                        );
                        (id, false)
                    }
                };
                tracing::debug!(user_id = id, confirmed = confirmed, "user created");
                RemoteResponse::UserCreated {
                    request_id,
                    user: User::from_draft(id, draft),
                    confirmed,
                }
            }
            Err(e) => {
                let message = e.message.unwrap_or_else(|| CREATE_FALLBACK.to_string());
                tracing::debug!(error = %message, "create failed");
                RemoteResponse::CreateFailed {
                    request_id,
                    message,
                }
            }
        }
    }

    fn handle_update_user(
        &mut self,
        request_id: RequestId,
        id: i64,
        fields: crate::domain::UserFields,
    ) -> RemoteResponse {
        Self::complete(
            "update user",
            UPDATE_FALLBACK,
            self.api.update_user(id, &fields),
            |()| RemoteResponse::UserUpdated {
                request_id,
                id,
                fields,
            },
            |message| RemoteResponse::UpdateFailed {
                request_id,
                message,
            },
        )
    }

    fn handle_delete_user(&mut self, request_id: RequestId, id: i64) -> RemoteResponse {
        Self::complete(
            "delete user",
            DELETE_FALLBACK,
            self.api.delete_user(id),
            |()| RemoteResponse::UserDeleted { request_id, id },
            |message| RemoteResponse::DeleteFailed {
                request_id,
                message,
            },
        )
    }

    fn handle_login(
        &mut self,
        request_id: RequestId,
        email: &str,
        password: &str,
    ) -> RemoteResponse {
        Self::complete(
            "login",
            LOGIN_FALLBACK,
            self.api.login(email, password),
            |grant| RemoteResponse::LoggedIn {
                request_id,
                token: grant.token,
            },
            |message| RemoteResponse::LoginFailed {
                request_id,
                message,
            },
        )
    }

    /// Processes one request and returns its response.
    ///
    /// This is the single entry point for remote work: every variant maps to
    /// exactly one capability call, and every call produces exactly one
    /// response carrying the originating request id.
    pub fn handle_request(&mut self, request: RemoteRequest) -> RemoteResponse {
        let span = tracing::debug_span!(
            "gateway_handle_request",
            request_id = %request.request_id(),
            request_type = ?std::mem::discriminant(&request)
        );
        let _guard = span.entered();

        match request {
            RemoteRequest::FetchPage { request_id, page } => {
                self.handle_fetch_page(request_id, page)
            }
            RemoteRequest::CreateUser { request_id, draft } => {
                self.handle_create_user(request_id, draft)
            }
            RemoteRequest::UpdateUser {
                request_id,
                id,
                fields,
            } => self.handle_update_user(request_id, id, fields),
            RemoteRequest::DeleteUser { request_id, id } => {
                self.handle_delete_user(request_id, id)
            }
            RemoteRequest::Login {
                request_id,
                email,
                password,
            } => self.handle_login(request_id, &email, &password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserDraft, UserFields};
    use crate::remote::api::{CreatedUser, LoginGrant, RemoteError, RemoteResult};

    /// Scripted capability: answers every call with a canned result.
    struct ScriptedApi {
        create_result: RemoteResult<CreatedUser>,
        login_result: RemoteResult<LoginGrant>,
        update_result: RemoteResult<()>,
    }

    impl Default for ScriptedApi {
        fn default() -> Self {
            Self {
                create_result: Ok(CreatedUser {
                    id: Some(7),
                    created_at: None,
                }),
                login_result: Ok(LoginGrant {
                    token: "tok".to_string(),
                }),
                update_result: Ok(()),
            }
        }
    }

    impl DirectoryApi for ScriptedApi {
        fn fetch_page(&mut self, _page: u32) -> RemoteResult<crate::domain::PageEnvelope> {
            Err(RemoteError::opaque())
        }

        fn create_user(&mut self, _draft: &UserDraft) -> RemoteResult<CreatedUser> {
            self.create_result.clone()
        }

        fn update_user(&mut self, _id: i64, _fields: &UserFields) -> RemoteResult<()> {
            self.update_result.clone()
        }

        fn delete_user(&mut self, _id: i64) -> RemoteResult<()> {
            Ok(())
        }

        fn login(&mut self, _email: &str, _password: &str) -> RemoteResult<LoginGrant> {
            self.login_result.clone()
        }
    }

    fn draft() -> UserDraft {
        UserDraft {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            avatar: String::new(),
        }
    }

    #[test]
    fn server_id_is_authoritative_on_create() {
        let mut gateway = DirectoryGateway::new(Box::new(ScriptedApi::default()));
        let response = gateway.handle_request(RemoteRequest::CreateUser {
            request_id: RequestId(1),
            draft: draft(),
        });
        match response {
            RemoteResponse::UserCreated {
                user, confirmed, ..
            } => {
                assert_eq!(user.id, 7);
                assert!(confirmed);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn missing_server_id_yields_unique_negative_provisionals() {
        let api = ScriptedApi {
            create_result: Ok(CreatedUser {
                id: None,
                created_at: Some("2026-01-01T00:00:00Z".to_string()),
            }),
            ..ScriptedApi::default()
        };
        let mut gateway = DirectoryGateway::new(Box::new(api));

        let mut ids = Vec::new();
        for n in 0..3 {
            let response = gateway.handle_request(RemoteRequest::CreateUser {
                request_id: RequestId(n),
                draft: draft(),
            });
            match response {
                RemoteResponse::UserCreated {
                    user, confirmed, ..
                } => {
                    assert!(user.id < 0);
                    assert!(!confirmed);
                    ids.push(user.id);
                }
                other => panic!("unexpected response: {other:?}"),
            }
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn fallback_message_applied_when_service_is_silent() {
        let mut gateway = DirectoryGateway::new(Box::new(ScriptedApi::default()));
        let response = gateway.handle_request(RemoteRequest::FetchPage {
            request_id: RequestId(9),
            page: 2,
        });
        assert_eq!(
            response,
            RemoteResponse::FetchFailed {
                request_id: RequestId(9),
                page: 2,
                message: "Failed to load users".to_string(),
            }
        );
    }

    #[test]
    fn service_message_wins_over_fallback() {
        let api = ScriptedApi {
            login_result: Err(RemoteError::with_message("account locked")),
            ..ScriptedApi::default()
        };
        let mut gateway = DirectoryGateway::new(Box::new(api));
        let response = gateway.handle_request(RemoteRequest::Login {
            request_id: RequestId(3),
            email: "e@x.com".to_string(),
            password: "pw".to_string(),
        });
        assert_eq!(
            response,
            RemoteResponse::LoginFailed {
                request_id: RequestId(3),
                message: "account locked".to_string(),
            }
        );
    }

    #[test]
    fn update_echoes_caller_supplied_fields() {
        let mut gateway = DirectoryGateway::new(Box::new(ScriptedApi::default()));
        let fields = UserFields {
            email: "e@x.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Snow".to_string(),
            avatar: "a".to_string(),
        };
        let response = gateway.handle_request(RemoteRequest::UpdateUser {
            request_id: RequestId(4),
            id: 1,
            fields: fields.clone(),
        });
        assert_eq!(
            response,
            RemoteResponse::UserUpdated {
                request_id: RequestId(4),
                id: 1,
                fields,
            }
        );
    }
}
