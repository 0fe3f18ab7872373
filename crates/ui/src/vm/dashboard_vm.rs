use services::ApiError;
use study_core::model::{ContentType, GeneratedContent};

use crate::routes::Route;

pub const GENERATION_FAILED_MESSAGE: &str = "Sorry, we couldn't generate content. Please try again.";

/// Inline message for a failed generate request.
#[must_use]
pub fn generation_error_message(err: &ApiError) -> String {
    match err {
        ApiError::InvalidTopic(_) | ApiError::UnrecognizedContentShape(_) => err.user_message(),
        _ => GENERATION_FAILED_MESSAGE.to_string(),
    }
}

/// The viewer for whatever the generator actually returned.
#[must_use]
pub fn route_for_content(content: &GeneratedContent) -> Route {
    match content.content_type() {
        ContentType::Quiz => Route::Quiz {},
        ContentType::Flashcards => Route::Flashcards {},
    }
}

#[must_use]
pub fn generate_button_label(kind: ContentType, busy: Option<ContentType>) -> &'static str {
    match (kind, busy) {
        (ContentType::Quiz, Some(ContentType::Quiz))
        | (ContentType::Flashcards, Some(ContentType::Flashcards)) => "Generating...",
        (ContentType::Quiz, _) => "Create Quiz",
        (ContentType::Flashcards, _) => "Create Flashcards",
    }
}
