use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;
use study_core::model::{
    AuthToken, ContentShapeError, ContentType, Credentials, GeneratedContent, Topic,
};

use super::{ServerAck, StudyApi};
use crate::error::{ApiError, AuthOperation};

/// A call observed by `StubStudyApi`, with the bearer header it would have carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StubCall {
    Register {
        email: String,
    },
    Login {
        email: String,
    },
    Generate {
        topic: String,
        content_type: ContentType,
        bearer: Option<String>,
    },
    Chat {
        message: String,
        bearer: Option<String>,
    },
}

#[derive(Default)]
struct StubState {
    bearer: Option<String>,
    accounts: HashMap<String, String>,
    issued: u32,
    content: Option<GeneratedContent>,
    chat_reply: Option<String>,
    offline: bool,
    calls: Vec<StubCall>,
}

/// In-memory stand-in for the backend, for tests and offline prototyping.
///
/// Accounts registered through it can log in; logins issue `token-<n>`.
/// Generation returns the configured content (or an unrecognized shape when
/// none is set) and chat echoes the message unless a reply is configured.
#[derive(Default)]
pub struct StubStudyApi {
    state: Mutex<StubState>,
}

impl StubStudyApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.state()
            .accounts
            .insert(email.to_string(), password.to_string());
        self
    }

    #[must_use]
    pub fn with_content(self, content: GeneratedContent) -> Self {
        self.state().content = Some(content);
        self
    }

    #[must_use]
    pub fn with_chat_reply(self, reply: &str) -> Self {
        self.state().chat_reply = Some(reply.to_string());
        self
    }

    /// Every call fails as if no response arrived.
    #[must_use]
    pub fn offline(self) -> Self {
        self.state().offline = true;
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// Header value protected calls would currently carry.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.state().bearer.clone()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<StubCall> {
        self.state().calls.clone()
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn unreachable_backend() -> ApiError {
    ApiError::Network("backend unreachable".to_string())
}

#[async_trait]
impl StudyApi for StubStudyApi {
    fn set_auth_token(&self, token: Option<&AuthToken>) {
        self.state().bearer = token.map(AuthToken::bearer_header);
    }

    async fn register(&self, credentials: &Credentials) -> Result<ServerAck, ApiError> {
        let mut state = self.state();
        state.calls.push(StubCall::Register {
            email: credentials.email().to_string(),
        });
        if state.offline {
            return Err(unreachable_backend());
        }
        if state.accounts.contains_key(credentials.email()) {
            return Err(ApiError::Auth {
                operation: AuthOperation::Register,
                status: StatusCode::BAD_REQUEST,
                detail: "Email already registered".to_string(),
            });
        }
        state.accounts.insert(
            credentials.email().to_string(),
            credentials.password().to_string(),
        );
        let id = i64::try_from(state.accounts.len()).unwrap_or(i64::MAX);
        Ok(ServerAck {
            id: Some(id),
            email: Some(credentials.email().to_string()),
        })
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let mut state = self.state();
        state.calls.push(StubCall::Login {
            email: credentials.email().to_string(),
        });
        if state.offline {
            return Err(unreachable_backend());
        }
        let known = state
            .accounts
            .get(credentials.email())
            .is_some_and(|password| password == credentials.password());
        if !known {
            return Err(ApiError::Auth {
                operation: AuthOperation::Login,
                status: StatusCode::UNAUTHORIZED,
                detail: "Incorrect email or password".to_string(),
            });
        }
        state.issued += 1;
        AuthToken::new(format!("token-{}", state.issued))
            .ok_or_else(|| ApiError::Decode("empty token".to_string()))
    }

    async fn generate_content(
        &self,
        topic: &Topic,
        content_type: ContentType,
    ) -> Result<GeneratedContent, ApiError> {
        let mut state = self.state();
        let bearer = state.bearer.clone();
        state.calls.push(StubCall::Generate {
            topic: topic.as_str().to_string(),
            content_type,
            bearer,
        });
        if state.offline {
            return Err(unreachable_backend());
        }
        state
            .content
            .clone()
            .ok_or(ApiError::UnrecognizedContentShape(
                ContentShapeError::Unrecognized,
            ))
    }

    async fn chat(&self, message: &str) -> Result<String, ApiError> {
        let mut state = self.state();
        let bearer = state.bearer.clone();
        state.calls.push(StubCall::Chat {
            message: message.to_string(),
            bearer,
        });
        if state.offline {
            return Err(unreachable_backend());
        }
        Ok(state
            .chat_reply
            .clone()
            .unwrap_or_else(|| format!("You asked: {message}")))
    }
}
