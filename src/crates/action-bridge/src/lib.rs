//! Action bridge: DeFi capabilities as conversational agent actions.
//!
//! A capability provider exposes an open-ended list of operations
//! ("supply", "withdraw", "stake", ...). This crate turns each of them
//! into a [`ConversationalAction`] the host agent runtime can register.
//! Invoking an action:
//!
//! - composes or refreshes the conversation state
//! - extracts call parameters from it with a small-tier model call
//! - executes the capability against a live provider client
//! - narrates the outcome with a large-tier model call
//!
//! The result, or a uniform error report, goes to the runtime's callback.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use action_bridge::{discover_actions, BridgeCollaborators, BridgeConfig, ConfiguredSource};
//! use llm::remote::OpenAiClient;
//! use llm::{RemoteLlmConfig, TierModels};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     tooling::logging::init_logging("info")?;
//!
//!     let source = ConfiguredSource::new(BridgeConfig::load()?, Arc::new(EdwinFactory));
//!     let model = OpenAiClient::new(RemoteLlmConfig::from_env(
//!         "OPENAI_API_KEY",
//!         "https://api.openai.com/v1",
//!         TierModels::new("gpt-4o-mini", "gpt-4o"),
//!     )?)?;
//!
//!     let collaborators = BridgeCollaborators::new(Arc::new(source), Arc::new(model));
//!     for action in discover_actions(&collaborators).await? {
//!         registry.register(action);
//!     }
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod bridge;
pub mod capability;
pub mod config;
pub mod error;
pub mod executor;
pub mod extractor;
pub mod observe;
pub mod provider;
pub mod runtime;
pub mod synthesizer;
pub mod template;

// Re-export commonly used types
pub use action::{
    ActionExample, ActionHandler, ActionResponse, ConversationalAction, HandlerCallback,
    HandlerOptions,
};
pub use bridge::{build_action, discover_actions, BridgeCollaborators, CapabilityHandler};
pub use capability::{
    Capability, CapabilityClient, CapabilitySource, ClientFactory, ConfiguredSource,
};
pub use config::{BridgeConfig, DEFAULT_CAPABILITIES};
pub use error::{BridgeError, CapabilityError, Result, StageFailure};
pub use executor::Executor;
pub use extractor::ParameterExtractor;
pub use observe::{InvocationObserver, Outcome, Stage, StageEvent, TracingObserver};
pub use provider::{WalletAddressProvider, DEFAULT_WALLET_LABEL};
pub use runtime::{AgentRuntime, ConversationState, Memory, MessageContent, Provider};
pub use synthesizer::{compose_response_context, ResponseSynthesizer, RESPONSE_TEMPLATE};
pub use template::{compose_context, unresolved_placeholders};
