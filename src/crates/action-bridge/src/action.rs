//! Runtime-facing action descriptors.

use crate::runtime::{AgentRuntime, ConversationState, Memory, MessageContent};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// What an action reports back to the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// User-facing text
    pub text: String,

    /// Structured payload: the execution result, or `{"error": ...}`
    pub content: Value,
}

/// Result sink of a handler invocation. `FnOnce`, so it fires at most once.
pub type HandlerCallback = Box<dyn FnOnce(ActionResponse) + Send>;

/// Free-form options the runtime passes through to handlers.
pub type HandlerOptions = Map<String, Value>;

/// One turn of an example conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionExample {
    pub user: String,
    pub content: MessageContent,
}

/// Executes an action for one incoming message.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Returns `true` on success. Failures are reported through `callback`,
    /// never returned as errors.
    async fn handle(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<ConversationState>,
        options: Option<&HandlerOptions>,
        callback: Option<HandlerCallback>,
    ) -> bool;
}

/// An action registrable into the host runtime's action registry.
#[derive(Clone)]
pub struct ConversationalAction {
    pub name: String,
    pub description: String,
    pub similes: Vec<String>,
    pub examples: Vec<Vec<ActionExample>>,
    handler: Arc<dyn ActionHandler>,
}

impl fmt::Debug for ConversationalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationalAction")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("similes", &self.similes)
            .field("examples", &self.examples.len())
            .finish()
    }
}

impl ConversationalAction {
    /// An action with no similes and no examples.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn ActionHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            similes: Vec::new(),
            examples: Vec::new(),
            handler,
        }
    }

    /// Applicability check. Every message qualifies.
    pub async fn validate(
        &self,
        _runtime: &dyn AgentRuntime,
        _message: &Memory,
        _state: Option<&ConversationState>,
    ) -> bool {
        true
    }

    pub async fn handle(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<ConversationState>,
        options: Option<&HandlerOptions>,
        callback: Option<HandlerCallback>,
    ) -> bool {
        self.handler
            .handle(runtime, message, state, options, callback)
            .await
    }
}
