use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use study_core::model::{
    AuthToken, ContentType, Credentials, FlashcardItem, GeneratedContent, QuizItem, Topic,
};
use tracing::{debug, warn};

use super::{
    ApiConfig, CHAT_PATH, GENERATE_PATH, LOGIN_PATH, REGISTER_PATH, ServerAck, StudyApi,
};
use crate::error::{ApiError, AuthOperation};

/// `reqwest`-backed gateway to the StudyAI backend.
pub struct HttpStudyApi {
    client: Client,
    config: ApiConfig,
    bearer: RwLock<Option<String>>,
}

impl HttpStudyApi {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            bearer: RwLock::new(None),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.config.base_url.endpoint(path))
    }

    /// POST with the current bearer header, if any.
    fn protected_post(&self, path: &str) -> RequestBuilder {
        let builder = self.post(path);
        let bearer = self
            .bearer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match bearer {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    pub(crate) fn build_generate_request(
        &self,
        topic: &Topic,
        content_type: ContentType,
    ) -> Result<Request, ApiError> {
        Ok(self
            .protected_post(GENERATE_PATH)
            .json(&GenerateRequest {
                topic: topic.as_str(),
                content_type,
            })
            .build()?)
    }

    pub(crate) fn build_chat_request(&self, message: &str) -> Result<Request, ApiError> {
        Ok(self
            .protected_post(CHAT_PATH)
            .json(&ChatRequest { message })
            .build()?)
    }

    pub(crate) fn build_login_request(&self, credentials: &Credentials) -> Result<Request, ApiError> {
        Ok(self
            .post(LOGIN_PATH)
            .form(&[
                ("username", credentials.email()),
                ("password", credentials.password()),
            ])
            .build()?)
    }

    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let path = request.url().path().to_string();
        let response = self.client.execute(request).await.map_err(|err| {
            warn!(%path, error = %err, "request failed without response");
            ApiError::from(err)
        })?;
        debug!(%path, status = %response.status(), "response received");
        Ok(response)
    }
}

#[async_trait]
impl StudyApi for HttpStudyApi {
    fn set_auth_token(&self, token: Option<&AuthToken>) {
        let mut guard = self.bearer.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token.map(AuthToken::bearer_header);
    }

    async fn register(&self, credentials: &Credentials) -> Result<ServerAck, ApiError> {
        let request = self
            .post(REGISTER_PATH)
            .json(&RegisterRequest {
                email: credentials.email(),
                password: credentials.password(),
            })
            .build()?;
        let response = self.execute(request).await?;
        let response = check_auth_status(response, AuthOperation::Register).await?;

        // The ack body is informational; an unexpected body is not a failed registration.
        Ok(response.json::<ServerAck>().await.unwrap_or_default())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let request = self.build_login_request(credentials)?;
        let response = self.execute(request).await?;
        let response = check_auth_status(response, AuthOperation::Login).await?;

        let body: LoginResponse = response.json().await?;
        AuthToken::new(body.access_token)
            .ok_or_else(|| ApiError::Decode("login response carried an empty access token".into()))
    }

    async fn generate_content(
        &self,
        topic: &Topic,
        content_type: ContentType,
    ) -> Result<GeneratedContent, ApiError> {
        let request = self.build_generate_request(topic, content_type)?;
        let response = check_status(self.execute(request).await?).await?;

        let body: GenerateResponse = response.json().await?;
        Ok(GeneratedContent::from_parts(
            content_type,
            body.questions,
            body.flashcards,
        )?)
    }

    async fn chat(&self, message: &str) -> Result<String, ApiError> {
        let request = self.build_chat_request(message)?;
        let response = check_status(self.execute(request).await?).await?;

        let body: ChatResponse = response.json().await?;
        Ok(body.response)
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!(%status, "backend returned an error status");
    Err(ApiError::Server { status, body })
}

/// Like `check_status`, but client errors become `ApiError::Auth`.
async fn check_auth_status(
    response: Response,
    operation: AuthOperation,
) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_client_error() {
        return check_status(response).await;
    }
    let body = response.text().await.unwrap_or_default();
    warn!(%status, ?operation, "authentication rejected");
    Err(ApiError::Auth {
        operation,
        status,
        detail: error_detail(&body),
    })
}

/// Pull `detail` out of a FastAPI-style error body, falling back to the raw text.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        _ => body.to_string(),
    }
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
    content_type: ContentType,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    questions: Option<Vec<QuizItem>>,
    #[serde(default)]
    flashcards: Option<Vec<FlashcardItem>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}
