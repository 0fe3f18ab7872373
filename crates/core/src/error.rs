use thiserror::Error;

use crate::model::{
    ApiBaseUrlError, ContentShapeError, CredentialsError, FlashcardError, QuizError, TopicError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    ContentShape(#[from] ContentShapeError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Flashcard(#[from] FlashcardError),
    #[error(transparent)]
    ApiBaseUrl(#[from] ApiBaseUrlError),
}
