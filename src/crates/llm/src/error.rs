//! Error types for language-model calls.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LlmError>;

/// Failures of a completion request.
///
/// The bridge reports these through the action callback as their display
/// text, so messages name the cause without provider internals.
#[derive(Debug, Error)]
pub enum LlmError {
    #[cfg(feature = "remote")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request or response body did not (de)serialize
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider rejected the credentials (HTTP 401)
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Named environment variable holds no API key
    #[error("API key not found in {0}")]
    ApiKeyNotFound(String),

    /// HTTP 429
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Completion was empty, or lacked the requested JSON object
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other non-success status
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LlmError {
    /// Whether fixing credentials could make the request succeed.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            LlmError::AuthenticationError(_) | LlmError::ApiKeyNotFound(_)
        )
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_classification() {
        assert!(LlmError::ApiKeyNotFound("OPENAI_API_KEY".into()).is_auth_error());
        assert!(LlmError::AuthenticationError("bad key".into()).is_auth_error());
        assert!(!LlmError::RateLimitExceeded("slow down".into()).is_auth_error());
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_reqwest_error_conversion() {
        let err: LlmError = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err()
            .into();
        assert!(matches!(err, LlmError::HttpError(_)));
        assert!(err.to_string().starts_with("HTTP request failed"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: LlmError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, LlmError::SerializationError(_)));
    }
}
