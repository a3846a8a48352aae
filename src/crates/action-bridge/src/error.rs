//! Error types for the action bridge.
//!
//! Two layers: [`BridgeError`] and [`CapabilityError`] are what
//! collaborators return; [`StageFailure`] is what a handler invocation
//! normalizes every failure into before reporting it.

use crate::action::ActionResponse;
use crate::observe::Stage;
use serde_json::{json, Value};
use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors raised by the bridge's collaborators.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The capability set could not be enumerated
    #[error("Capability discovery failed: {0}")]
    Discovery(String),

    /// No usable client could be constructed
    #[error("Client unavailable: {0}")]
    Client(String),

    /// The runtime could not compose or refresh conversation state
    #[error("State composition failed: {0}")]
    State(String),

    /// Language-model call failed
    #[error(transparent)]
    Llm(#[from] llm::LlmError),

    /// Capability rejected the call
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] tooling::ToolingError),
}

/// Errors returned by a capability's `execute`.
///
/// `Failed` displays the provider's message verbatim so that it reaches
/// the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The operation failed in the external system
    #[error("{0}")]
    Failed(String),

    /// The extracted parameters did not fit the capability
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl CapabilityError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A handler invocation that stopped at `stage`.
#[derive(Debug, Clone, PartialEq)]
pub struct StageFailure {
    pub stage: Stage,

    /// Error message, already coerced to a string
    pub message: String,

    /// Execution result, present when the capability ran before a later
    /// stage failed
    pub result: Option<Value>,
}

impl StageFailure {
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            result: None,
        }
    }

    /// Attach the result of an execution that already happened
    pub fn with_result(mut self, result: Value) -> Self {
        self.result = Some(result);
        self
    }

    /// Whether the external side effect took place
    pub fn executed(&self) -> bool {
        self.result.is_some()
    }

    /// Uniform failure report for the callback
    pub fn into_response(self, capability_name: &str) -> ActionResponse {
        let mut content = json!({ "error": self.message });
        if let Some(result) = self.result {
            content["result"] = result;
        }

        ActionResponse {
            text: format!("Error executing action {}: {}", capability_name, self.message),
            content,
        }
    }
}
