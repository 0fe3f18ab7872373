use std::sync::Arc;

use storage::repository::Storage;

use crate::api::{ApiConfig, HttpStudyApi, StudyApi};
use crate::chat_session::ChatSession;
use crate::content_service::ContentService;
use crate::error::AppServicesError;
use crate::session_store::SessionStore;
use crate::Clock;

/// Assembles the gateway, session store and generator shared by every view.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    api: Arc<dyn StudyApi>,
    session: Arc<SessionStore>,
    content: Arc<ContentService>,
}

impl AppServices {
    /// Build services against the HTTP backend with `SQLite`-backed token storage,
    /// restoring any persisted session.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage cannot be opened or the HTTP
    /// client cannot be built.
    pub async fn new(
        api_config: ApiConfig,
        db_url: &str,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let api: Arc<dyn StudyApi> = Arc::new(HttpStudyApi::new(api_config)?);
        let services = Self::from_parts(api, &storage, clock);
        services.session.restore().await;
        Ok(services)
    }

    /// Wire services from already-built parts. Does not restore the session.
    #[must_use]
    pub fn from_parts(api: Arc<dyn StudyApi>, storage: &Storage, clock: Clock) -> Self {
        let session = Arc::new(SessionStore::new(
            Arc::clone(&api),
            Arc::clone(&storage.tokens),
            clock,
        ));
        let content = Arc::new(ContentService::new(Arc::clone(&api)));
        Self {
            clock,
            api,
            session,
            content,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn StudyApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }

    /// Fresh conversation for one visit to the assistant view.
    #[must_use]
    pub fn new_chat_session(&self) -> ChatSession {
        ChatSession::new(Arc::clone(&self.api), self.clock)
    }
}
