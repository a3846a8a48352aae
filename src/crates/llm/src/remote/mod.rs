//! Remote LLM provider implementations.
//!
//! # Providers
//!
//! - **OpenAI** - OpenAI and any endpoint speaking the OpenAI chat
//!   completions protocol (OpenRouter, vLLM, LM Studio, ...)

pub mod openai;

pub use openai::OpenAiClient;
