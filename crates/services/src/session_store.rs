use std::sync::{Arc, Mutex, PoisonError, RwLock};

use storage::repository::TokenRepository;
use study_core::model::{AuthToken, Credentials};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, warn};

use crate::api::{ServerAck, StudyApi};
use crate::error::ApiError;
use crate::Clock;

/// Called after every token change, once the gateway header is already updated.
pub type TokenObserver = Box<dyn Fn(Option<&AuthToken>) + Send + Sync>;

/// Holder of the single active login.
///
/// Every transition runs in the same order: gateway header, in-memory token,
/// persisted copy, then observers. Header and in-memory token change together
/// under one lock, so no request built after a transition returns can carry a
/// superseded token. Whole transitions are serialized, so a slow write from an
/// earlier transition can never land after a later one.
pub struct SessionStore {
    api: Arc<dyn StudyApi>,
    tokens: Arc<dyn TokenRepository>,
    clock: Clock,
    current: RwLock<Option<AuthToken>>,
    transition: AsyncMutex<()>,
    observers: Mutex<Vec<TokenObserver>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>, tokens: Arc<dyn TokenRepository>, clock: Clock) -> Self {
        Self {
            api,
            tokens,
            clock,
            current: RwLock::new(None),
            transition: AsyncMutex::new(()),
            observers: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn subscribe(&self, observer: TokenObserver) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Load the persisted token (if any) and make it the active session.
    ///
    /// A storage failure is logged and treated as signed out.
    pub async fn restore(&self) -> Option<AuthToken> {
        let _transition = self.transition.lock().await;
        let token = match self.tokens.load_token().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "could not read persisted token");
                None
            }
        };
        info!(authenticated = token.is_some(), "session restored");
        self.swap_in_memory(token.clone());
        self.notify(token.as_ref());
        token
    }

    /// Sign in and replace any existing session.
    ///
    /// # Errors
    ///
    /// `ApiError::InvalidCredentials` before any request; `ApiError::Auth` when
    /// the backend rejects the credentials; transport errors otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, ApiError> {
        let credentials = Credentials::for_login(email, password)?;
        let token = self.api.login(&credentials).await?;
        info!("login succeeded");
        self.set_token(Some(token.clone())).await;
        Ok(token)
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// `ApiError::InvalidCredentials` for a blank email or short password;
    /// `ApiError::Auth` for duplicate or rejected accounts.
    pub async fn register(&self, email: &str, password: &str) -> Result<ServerAck, ApiError> {
        let credentials = Credentials::for_registration(email, password)?;
        let ack = self.api.register(&credentials).await?;
        info!("registration accepted");
        Ok(ack)
    }

    /// Sign-up flow: create the account, then sign in with it.
    ///
    /// # Errors
    ///
    /// Propagates errors from `register` and then `login`.
    pub async fn register_and_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthToken, ApiError> {
        self.register(email, password).await?;
        self.login(email, password).await
    }

    /// Clear the session. Never fails; persistence errors are only logged.
    pub async fn logout(&self) {
        self.set_token(None).await;
        info!("logged out");
    }

    async fn set_token(&self, token: Option<AuthToken>) {
        let _transition = self.transition.lock().await;
        self.swap_in_memory(token.clone());

        let persisted = match token.as_ref() {
            Some(token) => self.tokens.save_token(token, self.clock.now()).await,
            None => self.tokens.clear_token().await,
        };
        if let Err(err) = persisted {
            warn!(error = %err, "could not persist token change");
        }

        self.notify(token.as_ref());
    }

    fn swap_in_memory(&self, token: Option<AuthToken>) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        self.api.set_auth_token(token.as_ref());
        *current = token;
    }

    fn notify(&self, token: Option<&AuthToken>) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for observer in observers.iter() {
            observer(token);
        }
    }
}
