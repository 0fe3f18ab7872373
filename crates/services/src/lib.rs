#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod chat_session;
pub mod content_service;
pub mod error;
pub mod session_store;

pub use study_core::Clock;

pub use api::{
    ApiConfig, HttpStudyApi, ServerAck, StubCall, StubStudyApi, StudyApi, DEFAULT_TIMEOUT_SECS,
};
pub use app_services::AppServices;
pub use chat_session::{ChatSession, PendingMessage};
pub use content_service::ContentService;
pub use error::{ApiError, AppServicesError, AuthOperation};
pub use session_store::{SessionStore, TokenObserver};
