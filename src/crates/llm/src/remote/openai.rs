//! OpenAI client implementation.
//!
//! Serves both tiers from one endpoint, choosing the model per request
//! from [`TierModels`](crate::config::TierModels).
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::OpenAiClient;
//! use llm::config::{RemoteLlmConfig, TierModels};
//! use llm::{GenerationRequest, LanguageModel, ModelTier};
//!
//! let config = RemoteLlmConfig::from_env(
//!     "OPENAI_API_KEY",
//!     "https://api.openai.com/v1",
//!     TierModels::new("gpt-4o-mini", "gpt-4o"),
//! )?;
//! let client = OpenAiClient::new(config)?;
//!
//! let reply = client
//!     .generate_text(GenerationRequest::new("Say hello", ModelTier::Large))
//!     .await?;
//! ```

use crate::config::RemoteLlmConfig;
use crate::error::{LlmError, Result};
use crate::object::parse_json_object;
use crate::traits::{GenerationRequest, LanguageModel};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// OpenAI API client.
#[derive(Clone)]
pub struct OpenAiClient {
    config: RemoteLlmConfig,
    client: Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.config.base_url)
            .field("models", &self.config.models)
            .finish()
    }
}

impl OpenAiClient {
    /// Create a new OpenAI client with the given configuration.
    pub fn new(config: RemoteLlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::ConfigError(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Build the wire request. The whole context goes out as one user message.
    fn build_request(&self, request: &GenerationRequest, json_mode: bool) -> OpenAiRequest {
        OpenAiRequest {
            model: self.config.models.for_tier(request.tier).to_string(),
            messages: vec![OpenAiMessage {
                role: "user".to_string(),
                content: Some(request.context.clone()),
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: json_mode.then(|| ResponseFormat {
                kind: "json_object".to_string(),
            }),
            stream: false,
        }
    }

    async fn complete(&self, body: OpenAiRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        debug!(model = %body.model, url = %url, "Sending completion request");

        let mut req = self
            .client
            .post(&url)
            .json(&body)
            .header("Authorization", format!("Bearer {}", self.config.api_key));

        if let Some(org) = &self.config.organization {
            req = req.header("OpenAI-Organization", org);
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, error_text));
        }

        let openai_resp: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        extract_text(openai_resp)
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    async fn generate_text(&self, request: GenerationRequest) -> Result<String> {
        let body = self.build_request(&request, false);
        self.complete(body).await
    }

    async fn generate_object(&self, request: GenerationRequest) -> Result<Value> {
        let body = self.build_request(&request, true);
        let text = self.complete(body).await?;
        parse_json_object(&text)
    }
}

fn classify_status(status: u16, error_text: String) -> LlmError {
    match status {
        401 => LlmError::AuthenticationError(error_text),
        429 => LlmError::RateLimitExceeded(error_text),
        _ => LlmError::ProviderError(format!("OpenAI API error {}: {}", status, error_text)),
    }
}

fn extract_text(response: OpenAiResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("completion has no content".to_string()))
}

// OpenAI API types
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}
