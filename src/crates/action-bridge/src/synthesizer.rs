//! Narration of an executed capability's outcome.

use crate::runtime::{AgentRuntime, ConversationState};
use llm::{GenerationRequest, LanguageModel, ModelTier};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// State key holding the executed capability's name.
pub const ACTION_NAME_KEY: &str = "actionName";

/// State key holding the JSON-serialized execution result.
pub const ACTION_RESULT_KEY: &str = "actionResult";

/// Prompt for the reply after a capability has run.
pub const RESPONSE_TEMPLATE: &str = r#"
# Action Examples
{{actionExamples}}

# Knowledge
{{knowledge}}

# Task: Generate dialog and actions for the character {{agentName}}.
About {{agentName}}:
{{bio}}
{{lore}}

{{providers}}

{{attachments}}

# Capabilities
Note that {{agentName}} is capable of reading/seeing/hearing various forms of media, including images, videos, audio, plaintext and PDFs. Recent attachments have been included above under the "Attachments" section.

The action "{{actionName}}" was executed successfully.
Here is the result:
{{actionResult}}

{{actions}}

Respond to the message knowing that the action was successful and these were the previous messages:
{{recentMessages}}
"#;

/// Resolve [`RESPONSE_TEMPLATE`] for `capability_name` and `result`.
///
/// The caller's state is left untouched. The result is substituted as a
/// value, so braces inside it are never treated as placeholders.
pub fn compose_response_context(
    runtime: &dyn AgentRuntime,
    capability_name: &str,
    result: &Value,
    state: &ConversationState,
) -> String {
    let state = state
        .clone()
        .with(ACTION_NAME_KEY, capability_name)
        .with(ACTION_RESULT_KEY, result.to_string());
    runtime.compose_context(&state, RESPONSE_TEMPLATE)
}

/// Produces the user-facing reply on the large tier.
#[derive(Clone)]
pub struct ResponseSynthesizer {
    model: Arc<dyn LanguageModel>,
    tier: ModelTier,
}

impl ResponseSynthesizer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            tier: ModelTier::Large,
        }
    }

    pub fn with_tier(mut self, tier: ModelTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn tier(&self) -> ModelTier {
        self.tier
    }

    pub async fn synthesize(
        &self,
        runtime: &dyn AgentRuntime,
        capability_name: &str,
        result: &Value,
        state: &ConversationState,
    ) -> llm::Result<String> {
        let context = compose_response_context(runtime, capability_name, result, state);
        debug!(
            capability = capability_name,
            context_len = context.len(),
            "Response context composed"
        );

        self.model
            .generate_text(GenerationRequest::new(context, self.tier))
            .await
    }
}
