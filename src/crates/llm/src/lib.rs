//! Tiered language-model service for the action bridge.
//!
//! The bridge makes two kinds of model calls per invocation:
//!
//! - **Structured extraction** of call parameters, on the fast
//!   [`ModelTier::Small`] tier, via [`LanguageModel::generate_object`]
//! - **Prose synthesis** of the user-facing reply, on the high-quality
//!   [`ModelTier::Large`] tier, via [`LanguageModel::generate_text`]
//!
//! This crate provides the [`LanguageModel`] trait, the request types, a
//! JSON-object recovery helper for completions, and an OpenAI-compatible
//! remote client.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use llm::remote::OpenAiClient;
//! use llm::config::{RemoteLlmConfig, TierModels};
//! use llm::{GenerationRequest, LanguageModel, ModelTier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RemoteLlmConfig::from_env(
//!         "OPENAI_API_KEY",
//!         "https://api.openai.com/v1",
//!         TierModels::new("gpt-4o-mini", "gpt-4o"),
//!     )?;
//!     let client = OpenAiClient::new(config)?;
//!
//!     let params = client
//!         .generate_object(GenerationRequest::new(
//!             "Extract {\"amount\": ...} from: stake 10",
//!             ModelTier::Small,
//!         ))
//!         .await?;
//!     println!("{}", params);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod object;
pub mod traits;

#[cfg(feature = "remote")]
pub mod remote;

// Re-export commonly used types
pub use config::{RemoteLlmConfig, TierModels};
pub use error::{LlmError, Result};
pub use object::parse_json_object;
pub use traits::{GenerationRequest, LanguageModel, ModelTier};
