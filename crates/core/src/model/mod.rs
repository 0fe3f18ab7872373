mod auth;
mod chat;
mod endpoint;
mod flashcard;
mod generated;
mod quiz;

pub use auth::{AuthToken, Credentials, CredentialsError, MIN_PASSWORD_LEN};
pub use chat::{ChatEntry, ChatRole, ChatTranscript, CHAT_FALLBACK_REPLY, CHAT_GREETING};
pub use endpoint::{ApiBaseUrl, ApiBaseUrlError, DEFAULT_API_BASE_URL};
pub use flashcard::{FlashcardError, FlashcardItem, FlashcardSession};
pub use generated::{ContentShapeError, ContentType, GeneratedContent, Topic, TopicError};
pub use quiz::{OptionFeedback, QuizError, QuizItem, QuizPhase, QuizResult, QuizSession, SelectOutcome};
