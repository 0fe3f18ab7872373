use std::fmt;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiBaseUrlError {
    #[error("invalid base URL: {raw}")]
    Invalid { raw: String },

    #[error("unsupported URL scheme: {scheme}")]
    UnsupportedScheme { scheme: String },
}

/// Root URL of the backend; endpoint paths are appended to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parse and validate an `http`/`https` base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiBaseUrlError` if the URL does not parse or is not http(s).
    pub fn parse(raw: &str) -> Result<Self, ApiBaseUrlError> {
        let url = Url::parse(raw.trim()).map_err(|_| ApiBaseUrlError::Invalid {
            raw: raw.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(ApiBaseUrlError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    /// Full URL for an endpoint path such as `/ai/chat`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"))
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str().trim_end_matches('/'))
    }
}
