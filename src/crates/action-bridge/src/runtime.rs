//! Contracts of the host agent runtime.
//!
//! The bridge borrows conversation state per invocation and never owns
//! it; the runtime composes it from an incoming [`Memory`] or refreshes
//! one it handed out earlier.

use crate::error::Result;
use crate::template;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

/// Placeholder keys the runtime is expected to fill.
pub mod state_keys {
    pub const AGENT_NAME: &str = "agentName";
    pub const BIO: &str = "bio";
    pub const LORE: &str = "lore";
    pub const KNOWLEDGE: &str = "knowledge";
    pub const PROVIDERS: &str = "providers";
    pub const ATTACHMENTS: &str = "attachments";
    pub const ACTIONS: &str = "actions";
    pub const ACTION_EXAMPLES: &str = "actionExamples";
    pub const RECENT_MESSAGES: &str = "recentMessages";
}

/// Body of a conversation message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContent {
    pub text: String,

    /// Runtime-specific fields (source, attachments, action, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: Map::new(),
        }
    }
}

/// An incoming conversation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub agent_id: Uuid,
    pub room_id: Uuid,
    pub content: MessageContent,
}

impl Memory {
    /// A message with fresh ids.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            agent_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            content: MessageContent::text(text),
        }
    }
}

/// Conversation context as resolved by the runtime.
///
/// Values are already rendered to text, keyed by the placeholder names
/// templates refer to (see [`state_keys`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    pub room_id: Option<Uuid>,
    values: HashMap<String, String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for the room a message arrived in.
    pub fn for_message(message: &Memory) -> Self {
        Self {
            room_id: Some(message.room_id),
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// State service of the host runtime.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Compose fresh state for an incoming message.
    async fn compose_state(&self, message: &Memory) -> Result<ConversationState>;

    /// Refresh the recent-message portion of an existing state.
    async fn update_recent_message_state(
        &self,
        state: ConversationState,
    ) -> Result<ConversationState>;

    /// Resolve `{{placeholder}}`s in `template` against `state`.
    fn compose_context(&self, state: &ConversationState, template: &str) -> String {
        template::compose_context(state, template)
    }
}

/// Context provider registered with the runtime; `None` means "nothing to add".
#[async_trait]
pub trait Provider: Send + Sync {
    async fn get(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<&ConversationState>,
    ) -> Option<String>;
}
