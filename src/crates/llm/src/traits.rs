//! Core trait for language-model integration.
//!
//! The bridge is provider-agnostic: it only needs a text completion and a
//! structured (object-shaped) completion, each on a chosen [`ModelTier`].
//! Implementations handle message conversion, API calls, and parsing for
//! their provider.
//!
//! # Example Implementation
//!
//! ```rust,ignore
//! use llm::{GenerationRequest, LanguageModel, Result};
//! use async_trait::async_trait;
//!
//! struct MyClient;
//!
//! #[async_trait]
//! impl LanguageModel for MyClient {
//!     async fn generate_text(&self, request: GenerationRequest) -> Result<String> {
//!         todo!("call your provider with request.context on request.tier")
//!     }
//!
//!     async fn generate_object(&self, request: GenerationRequest) -> Result<serde_json::Value> {
//!         let text = self.generate_text(request).await?;
//!         llm::parse_json_object(&text)
//!     }
//! }
//! ```

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality/speed class of the model serving a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    /// Fast, cheap model for narrow structured extraction.
    Small,

    /// Slower, higher-fidelity model for user-facing prose.
    Large,
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelTier::Small => write!(f, "small"),
            ModelTier::Large => write!(f, "large"),
        }
    }
}

/// A single completion request: a fully resolved prompt and a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Resolved prompt text.
    pub context: String,

    /// Which model class should serve the request.
    pub tier: ModelTier,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
}

impl GenerationRequest {
    pub fn new(context: impl Into<String>, tier: ModelTier) -> Self {
        Self {
            context: context.into(),
            tier,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Language-model service consumed by the bridge.
///
/// Implementations must be `Send + Sync`; share them as
/// `Arc<dyn LanguageModel>` across concurrently running handlers.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate free-form text for the request's context.
    async fn generate_text(&self, request: GenerationRequest) -> Result<String>;

    /// Generate a JSON object for the request's context.
    ///
    /// The returned value is always a JSON object; anything else is
    /// reported as [`LlmError::InvalidResponse`](crate::LlmError::InvalidResponse).
    /// No schema is enforced beyond that.
    async fn generate_object(&self, request: GenerationRequest) -> Result<serde_json::Value>;
}
