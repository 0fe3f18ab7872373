use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::flashcard::FlashcardItem;
use super::quiz::QuizItem;

/// What the generator should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Quiz,
    Flashcards,
}

impl ContentType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Quiz => "quiz",
            ContentType::Flashcards => "flashcards",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ContentShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(Self::Quiz),
            "flashcards" => Ok(Self::Flashcards),
            other => Err(ContentShapeError::UnknownContentType(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("please enter a topic")]
    Blank,
}

/// Study topic as the user typed it; only the trimmed text must be non-blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// # Errors
    ///
    /// Returns `TopicError::Blank` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, TopicError> {
        if raw.trim().is_empty() {
            return Err(TopicError::Blank);
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentShapeError {
    #[error("response contains neither questions nor flashcards")]
    Unrecognized,

    #[error("unknown content type: {0}")]
    UnknownContentType(String),
}

/// Generator output, discriminated by which list the backend returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratedContent {
    Quiz { questions: Vec<QuizItem> },
    Flashcards { flashcards: Vec<FlashcardItem> },
}

impl GeneratedContent {
    /// Resolve the shape of a generator response.
    ///
    /// A body carrying only one of the lists is taken as that list, whatever was
    /// requested. A body carrying both is resolved in favour of `requested`.
    ///
    /// # Errors
    ///
    /// Returns `ContentShapeError::Unrecognized` when both lists are absent.
    pub fn from_parts(
        requested: ContentType,
        questions: Option<Vec<QuizItem>>,
        flashcards: Option<Vec<FlashcardItem>>,
    ) -> Result<Self, ContentShapeError> {
        match (questions, flashcards) {
            (Some(questions), Some(flashcards)) => Ok(match requested {
                ContentType::Quiz => Self::Quiz { questions },
                ContentType::Flashcards => Self::Flashcards { flashcards },
            }),
            (Some(questions), None) => Ok(Self::Quiz { questions }),
            (None, Some(flashcards)) => Ok(Self::Flashcards { flashcards }),
            (None, None) => Err(ContentShapeError::Unrecognized),
        }
    }

    #[must_use]
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Quiz { .. } => ContentType::Quiz,
            Self::Flashcards { .. } => ContentType::Flashcards,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Quiz { questions } => questions.len(),
            Self::Flashcards { flashcards } => flashcards.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
