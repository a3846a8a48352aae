//! Common test doubles for the bridge integration tests

#![allow(dead_code)]

use action_bridge::{
    ActionResponse, AgentRuntime, BridgeError, Capability, CapabilityClient, CapabilityError,
    CapabilitySource, ConversationState, HandlerCallback, InvocationObserver, Memory, Outcome,
    Result, StageEvent,
};
use action_bridge::runtime::state_keys;
use async_trait::async_trait;
use llm::{GenerationRequest, LanguageModel, LlmError, ModelTier};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// State with every key the bridge's templates refer to
pub fn complete_state() -> ConversationState {
    ConversationState::new()
        .with(state_keys::AGENT_NAME, "Ada")
        .with(state_keys::BIO, "A careful DeFi assistant.")
        .with(state_keys::LORE, "Has never lost a private key.")
        .with(state_keys::KNOWLEDGE, "Staking locks tokens for rewards.")
        .with(state_keys::PROVIDERS, "EVM Wallet Address: 0x1234")
        .with(state_keys::ATTACHMENTS, "")
        .with(state_keys::ACTIONS, "STAKE, SUPPLY, WITHDRAW")
        .with(state_keys::ACTION_EXAMPLES, "")
        .with(state_keys::RECENT_MESSAGES, "user: please stake 10 tokens")
        .with("amount", "10")
}

/// Runtime whose state service returns [`complete_state`]
#[derive(Default)]
pub struct MockRuntime {
    pub composed: AtomicUsize,
    pub refreshed: AtomicUsize,
    pub fail_state: bool,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_state: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl AgentRuntime for MockRuntime {
    async fn compose_state(&self, message: &Memory) -> Result<ConversationState> {
        self.composed.fetch_add(1, Ordering::SeqCst);
        if self.fail_state {
            return Err(BridgeError::State("memory store unavailable".into()));
        }

        let mut state = complete_state();
        state.room_id = Some(message.room_id);
        Ok(state)
    }

    async fn update_recent_message_state(
        &self,
        mut state: ConversationState,
    ) -> Result<ConversationState> {
        self.refreshed.fetch_add(1, Ordering::SeqCst);
        if self.fail_state {
            return Err(BridgeError::State("memory store unavailable".into()));
        }

        state.set(state_keys::RECENT_MESSAGES, "user: please stake 10 tokens (refreshed)");
        Ok(state)
    }
}

/// Model with scripted replies that records every request
pub struct MockModel {
    object: std::result::Result<Value, String>,
    text: std::result::Result<String, String>,
    pub requests: Mutex<Vec<(&'static str, GenerationRequest)>>,
}

impl MockModel {
    pub fn new(object: Value, text: impl Into<String>) -> Self {
        Self {
            object: Ok(object),
            text: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_extraction(message: impl Into<String>) -> Self {
        Self {
            object: Err(message.into()),
            ..Self::new(Value::Null, "")
        }
    }

    pub fn failing_synthesis(object: Value, message: impl Into<String>) -> Self {
        Self {
            text: Err(message.into()),
            ..Self::new(object, "")
        }
    }

    pub fn calls(&self, kind: &str) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn tiers(&self) -> Vec<ModelTier> {
        self.requests.lock().unwrap().iter().map(|(_, r)| r.tier).collect()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn generate_text(&self, request: GenerationRequest) -> llm::Result<String> {
        self.requests.lock().unwrap().push(("text", request));
        self.text.clone().map_err(LlmError::ProviderError)
    }

    async fn generate_object(&self, request: GenerationRequest) -> llm::Result<Value> {
        self.requests.lock().unwrap().push(("object", request));
        self.object.clone().map_err(LlmError::ProviderError)
    }
}

/// Capability with a scripted outcome that records its parameters
pub struct MockCapability {
    name: String,
    template: String,
    outcome: std::result::Result<Value, String>,
    delay: Duration,
    pub executions: Mutex<Vec<Value>>,
}

impl MockCapability {
    pub fn succeeding(name: &str, template: &str, result: Value) -> Self {
        Self {
            name: name.to_string(),
            template: template.to_string(),
            outcome: Ok(result),
            delay: Duration::ZERO,
            executions: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(name: &str, template: &str, message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            ..Self::succeeding(name, template, Value::Null)
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn execution_count(&self) -> usize {
        self.executions.lock().unwrap().len()
    }
}

#[async_trait]
impl Capability for MockCapability {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Mock DeFi operation"
    }

    fn template(&self) -> &str {
        &self.template
    }

    async fn execute(
        &self,
        _client: &dyn CapabilityClient,
        parameters: Value,
    ) -> std::result::Result<Value, CapabilityError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.executions.lock().unwrap().push(parameters);
        self.outcome.clone().map_err(CapabilityError::Failed)
    }
}

pub struct MockClient {
    capabilities: Vec<Arc<dyn Capability>>,
}

#[async_trait]
impl CapabilityClient for MockClient {
    async fn capabilities(&self) -> Result<Vec<Arc<dyn Capability>>> {
        Ok(self.capabilities.clone())
    }

    fn wallet_address(&self, chain: &str) -> Option<String> {
        (chain == "evm").then(|| "0x1234".to_string())
    }
}

/// Source handing out a fresh [`MockClient`] per call
pub struct MockSource {
    capabilities: Vec<Arc<dyn Capability>>,
    fail_client: bool,
    pub clients: AtomicUsize,
}

impl MockSource {
    pub fn new(capabilities: Vec<Arc<dyn Capability>>) -> Self {
        Self {
            capabilities,
            fail_client: false,
            clients: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_client: true,
            ..Self::new(Vec::new())
        }
    }
}

#[async_trait]
impl CapabilitySource for MockSource {
    async fn client(&self) -> Result<Arc<dyn CapabilityClient>> {
        self.clients.fetch_add(1, Ordering::SeqCst);
        if self.fail_client {
            return Err(BridgeError::Client("EVM_PRIVATE_KEY is not set".into()));
        }

        Ok(Arc::new(MockClient {
            capabilities: self.capabilities.clone(),
        }))
    }
}

/// Observer that keeps every event for later assertions
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<StageEvent>>,
    pub completions: Mutex<Vec<(String, Uuid, Outcome)>>,
}

impl RecordingObserver {
    pub fn stages_for(&self, invocation_id: Uuid) -> Vec<StageEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.invocation_id == invocation_id)
            .cloned()
            .collect()
    }
}

impl InvocationObserver for RecordingObserver {
    fn on_stage(&self, event: &StageEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn on_complete(
        &self,
        capability: &str,
        invocation_id: Uuid,
        outcome: Outcome,
        _duration: Duration,
    ) {
        self.completions
            .lock()
            .unwrap()
            .push((capability.to_string(), invocation_id, outcome));
    }
}

/// Callback that stores every response it receives
pub fn capture() -> (Arc<Mutex<Vec<ActionResponse>>>, HandlerCallback) {
    let responses = Arc::new(Mutex::new(Vec::new()));
    let sink = responses.clone();
    let callback: HandlerCallback = Box::new(move |response| sink.lock().unwrap().push(response));
    (responses, callback)
}
