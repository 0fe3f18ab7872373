//! The API gateway: the only component that talks to the backend.

mod config;
mod http;
mod stub;

use async_trait::async_trait;
use serde::Deserialize;
use study_core::model::{AuthToken, ContentType, Credentials, GeneratedContent, Topic};

use crate::error::ApiError;

pub use config::{ApiConfig, DEFAULT_TIMEOUT_SECS};
pub use http::HttpStudyApi;
pub use stub::{StubCall, StubStudyApi};

pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";
pub const GENERATE_PATH: &str = "/ai/generate-content";
pub const CHAT_PATH: &str = "/ai/chat";

/// Acknowledgement returned by `/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServerAck {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request/response contract of the backend.
///
/// Each call is one round trip with no retry. `generate_content` and `chat`
/// carry the bearer token last passed to `set_auth_token`; with no token they
/// are sent without an `Authorization` header.
#[async_trait]
pub trait StudyApi: Send + Sync {
    /// Replace (or remove) the bearer token attached to protected calls.
    fn set_auth_token(&self, token: Option<&AuthToken>);

    /// # Errors
    ///
    /// `ApiError::Auth` when the backend rejects the account, otherwise
    /// `ApiError::Network` / `ApiError::Server`.
    async fn register(&self, credentials: &Credentials) -> Result<ServerAck, ApiError>;

    /// # Errors
    ///
    /// `ApiError::Auth` on bad credentials, otherwise transport errors.
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    /// # Errors
    ///
    /// `ApiError::UnrecognizedContentShape` when the body has neither list,
    /// otherwise transport errors.
    async fn generate_content(
        &self,
        topic: &Topic,
        content_type: ContentType,
    ) -> Result<GeneratedContent, ApiError>;

    /// # Errors
    ///
    /// Transport errors only.
    async fn chat(&self, message: &str) -> Result<String, ApiError>;
}
