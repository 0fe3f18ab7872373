use std::sync::Arc;

use study_core::model::{ContentType, GeneratedContent, Topic};
use tracing::{info, warn};

use crate::api::StudyApi;
use crate::error::ApiError;

/// Topic-to-study-material generation.
pub struct ContentService {
    api: Arc<dyn StudyApi>,
}

impl ContentService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>) -> Self {
        Self { api }
    }

    /// Generate a quiz or flashcard deck for `raw_topic`.
    ///
    /// A blank topic is rejected before any request is made; otherwise the
    /// topic is sent as typed.
    ///
    /// # Errors
    ///
    /// `ApiError::InvalidTopic` for a blank topic, `ApiError::UnrecognizedContentShape`
    /// when the backend sends neither list, and transport errors otherwise.
    pub async fn generate(
        &self,
        raw_topic: &str,
        content_type: ContentType,
    ) -> Result<GeneratedContent, ApiError> {
        let topic = Topic::parse(raw_topic)?;
        info!(%topic, %content_type, "generating study content");

        match self.api.generate_content(&topic, content_type).await {
            Ok(content) => {
                info!(
                    kind = %content.content_type(),
                    items = content.len(),
                    "study content generated"
                );
                Ok(content)
            }
            Err(err) => {
                warn!(%topic, error = %err, "content generation failed");
                Err(err)
            }
        }
    }
}
