//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use storage::sqlite::SqliteInitError;
use study_core::model::{ContentShapeError, CredentialsError, TopicError};

/// Which authentication call was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Register,
}

/// Errors emitted by the API gateway and the services built on it.
///
/// The gateway never recovers from these; callers pick the user-facing message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error(transparent)]
    InvalidCredentials(#[from] CredentialsError),
    #[error(transparent)]
    InvalidTopic(#[from] TopicError),
    #[error("no response from server: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Server { status: StatusCode, body: String },
    #[error("{operation:?} rejected with status {status}: {detail}")]
    Auth {
        operation: AuthOperation,
        status: StatusCode,
        detail: String,
    },
    #[error(transparent)]
    UnrecognizedContentShape(#[from] ContentShapeError),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Local, pre-network failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCredentials(_) | Self::InvalidTopic(_))
    }

    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Message suitable for showing inline in a form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials(err) => capitalize(&err.to_string()),
            Self::InvalidTopic(_) => "Please enter a topic to begin.".to_string(),
            Self::Auth {
                operation: AuthOperation::Login,
                ..
            } => "Failed to log in. Please check your credentials.".to_string(),
            Self::Auth {
                operation: AuthOperation::Register,
                ..
            } => "Failed to create an account. The email may already be in use.".to_string(),
            Self::UnrecognizedContentShape(_) => {
                "The AI returned an unexpected data format. Please try again.".to_string()
            }
            Self::Network(_) | Self::Server { .. } | Self::Decode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
