//! Parameter extraction: conversation state in, call arguments out.

use crate::runtime::{AgentRuntime, ConversationState};
use llm::{GenerationRequest, LanguageModel, ModelTier};
use serde_json::Value;
use std::sync::Arc;
use tooling::logging::sanitize_for_logging;
use tracing::debug;

/// Resolves a capability's template against state and asks the model for
/// the parameter object.
///
/// The object is not validated against the capability; a malformed one
/// surfaces as an execution failure.
#[derive(Clone)]
pub struct ParameterExtractor {
    model: Arc<dyn LanguageModel>,
    tier: ModelTier,
}

impl ParameterExtractor {
    /// Extractor on the small tier.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            tier: ModelTier::Small,
        }
    }

    pub fn with_tier(mut self, tier: ModelTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn tier(&self) -> ModelTier {
        self.tier
    }

    pub async fn extract(
        &self,
        runtime: &dyn AgentRuntime,
        state: &ConversationState,
        template: &str,
    ) -> llm::Result<Value> {
        let context = runtime.compose_context(state, template);
        debug!(context = %sanitize_for_logging(&context), "Parameter context composed");

        let parameters = self
            .model
            .generate_object(GenerationRequest::new(context, self.tier))
            .await?;

        debug!(parameters = %sanitize_for_logging(&parameters.to_string()), "Parameters generated");
        Ok(parameters)
    }
}
