use std::env;
use std::time::Duration;

use study_core::model::{ApiBaseUrl, ApiBaseUrlError};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: ApiBaseUrl,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ApiBaseUrl::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: ApiBaseUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `STUDYAI_API_BASE_URL` and `STUDYAI_HTTP_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApiBaseUrlError` if the base URL variable is set but invalid.
    pub fn from_env() -> Result<Self, ApiBaseUrlError> {
        let mut config = Self::default();
        if let Ok(raw) = env::var("STUDYAI_API_BASE_URL") {
            if !raw.trim().is_empty() {
                config.base_url = ApiBaseUrl::parse(&raw)?;
            }
        }
        if let Some(secs) = env::var("STUDYAI_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
