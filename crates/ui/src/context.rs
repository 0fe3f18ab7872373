use std::sync::{Arc, Mutex, PoisonError};

use dioxus::prelude::*;
use services::{AppServices, ChatSession, ContentService, SessionStore};
use study_core::model::{AuthToken, GeneratedContent};
use tokio::sync::watch;

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionStore>;
    fn content(&self) -> Arc<ContentService>;
    fn new_chat_session(&self) -> ChatSession;
}

impl UiApp for AppServices {
    fn session(&self) -> Arc<SessionStore> {
        AppServices::session(self)
    }

    fn content(&self) -> Arc<ContentService> {
        AppServices::content(self)
    }

    fn new_chat_session(&self) -> ChatSession {
        AppServices::new_chat_session(self)
    }
}

/// Generated content plus the topic it was generated for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyMaterial {
    pub topic: String,
    pub content: GeneratedContent,
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    session: Arc<SessionStore>,
    content: Arc<ContentService>,
    // Generated content travels from the dashboard to the quiz/flashcard view here.
    handoff: Arc<Mutex<Option<StudyMaterial>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            session: app.session(),
            content: app.content(),
            handoff: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn new_chat_session(&self) -> ChatSession {
        self.app.new_chat_session()
    }

    /// Replace whatever content is waiting to be opened.
    pub fn stash_content(&self, topic: &str, content: GeneratedContent) {
        let material = StudyMaterial {
            topic: topic.to_string(),
            content,
        };
        *self.handoff.lock().unwrap_or_else(PoisonError::into_inner) = Some(material);
    }

    /// Hand the stashed content to the first view that asks for it.
    #[must_use]
    pub fn take_content(&self) -> Option<StudyMaterial> {
        self.handoff
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive mirror of "is someone signed in" for chrome that must re-render on
/// login/logout. `SessionStore` stays the source of truth.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState(Signal<bool>);

impl AuthState {
    #[must_use]
    pub fn new(signed_in: bool) -> Self {
        Self(Signal::new(signed_in))
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        (self.0)()
    }

    fn set(self, signed_in: bool) {
        let mut signal = self.0;
        signal.set(signed_in);
    }
}

/// `AuthState` kept in step with the session store through a token observer.
///
/// The observer may run on any thread, so it only publishes into a `watch`
/// channel; a task owned by the calling component copies changes into the signal.
pub fn use_auth_state(ctx: &AppContext) -> AuthState {
    let session = ctx.session();
    let signed_in = session.is_authenticated();
    let auth = use_hook(|| AuthState::new(signed_in));

    use_hook(move || {
        let (tx, mut rx) = watch::channel(signed_in);
        session.subscribe(Box::new(move |token: Option<&AuthToken>| {
            tx.send_replace(token.is_some());
        }));
        spawn(async move {
            while rx.changed().await.is_ok() {
                let signed_in = *rx.borrow_and_update();
                auth.set(signed_in);
            }
        });
    });

    auth
}
