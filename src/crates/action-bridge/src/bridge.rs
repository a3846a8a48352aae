//! Capability-to-action bridge.
//!
//! [`discover_actions`] enumerates the source's capabilities once and
//! wraps each in a [`ConversationalAction`] via [`build_action`]. Every
//! action is backed by a [`CapabilityHandler`], which runs one invocation
//! through these stages in strict order:
//!
//! 1. acquire state (refresh the one passed in, else compose a fresh one)
//! 2. extract parameters on the small tier
//! 3. acquire a client from the source
//! 4. execute the capability
//! 5. synthesize the reply on the large tier
//!
//! The first failing stage ends the invocation. Whatever the stage, the
//! failure is reported through the callback as
//! `Error executing action <name>: <message>` and `handle` returns `false`.
//! Nothing is retried.

use crate::action::{
    ActionHandler, ActionResponse, ConversationalAction, HandlerCallback, HandlerOptions,
};
use crate::capability::{Capability, CapabilitySource};
use crate::error::{BridgeError, Result, StageFailure};
use crate::executor::Executor;
use crate::extractor::ParameterExtractor;
use crate::observe::{InvocationObserver, Outcome, Stage, StageEvent, TracingObserver};
use crate::runtime::{AgentRuntime, ConversationState, Memory};
use crate::synthesizer::ResponseSynthesizer;
use async_trait::async_trait;
use llm::LanguageModel;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tooling::logging::timed;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// Shared handles every generated action captures.
#[derive(Clone)]
pub struct BridgeCollaborators {
    pub source: Arc<dyn CapabilitySource>,
    pub model: Arc<dyn LanguageModel>,
    pub observer: Arc<dyn InvocationObserver>,
}

impl BridgeCollaborators {
    /// Collaborators reporting to a [`TracingObserver`].
    pub fn new(source: Arc<dyn CapabilitySource>, model: Arc<dyn LanguageModel>) -> Self {
        Self {
            source,
            model,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn InvocationObserver>) -> Self {
        self.observer = observer;
        self
    }
}

impl fmt::Debug for BridgeCollaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeCollaborators").finish_non_exhaustive()
    }
}

/// Wrap one capability as a conversational action.
///
/// The action name is the capability name uppercased; similes and
/// examples are empty.
pub fn build_action(
    capability: Arc<dyn Capability>,
    collaborators: &BridgeCollaborators,
) -> ConversationalAction {
    let name = capability.name().to_uppercase();
    let description = capability.description().to_string();
    let handler = CapabilityHandler::new(capability, collaborators.clone());

    ConversationalAction::new(name, description, Arc::new(handler))
}

/// Discover the source's capabilities and build one action per capability.
///
/// Names are not deduplicated. A discovery failure fails the whole pass.
pub async fn discover_actions(
    collaborators: &BridgeCollaborators,
) -> Result<Vec<ConversationalAction>> {
    let capabilities = timed("capability discovery", collaborators.source.discover())
        .await
        .map_err(|e| match e {
            BridgeError::Discovery(_) => e,
            other => BridgeError::Discovery(other.to_string()),
        })?;

    let actions: Vec<ConversationalAction> = capabilities
        .into_iter()
        .map(|capability| build_action(capability, collaborators))
        .collect();

    info!(
        count = actions.len(),
        actions = ?actions.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        "Capabilities bridged into actions"
    );
    Ok(actions)
}

/// Handler of a single capability's action.
pub struct CapabilityHandler {
    capability: Arc<dyn Capability>,
    collaborators: BridgeCollaborators,
    extractor: ParameterExtractor,
    executor: Executor,
    synthesizer: ResponseSynthesizer,
}

impl fmt::Debug for CapabilityHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityHandler")
            .field("capability", &self.capability.name())
            .field("extraction_tier", &self.extractor.tier())
            .field("synthesis_tier", &self.synthesizer.tier())
            .finish()
    }
}

impl CapabilityHandler {
    pub fn new(capability: Arc<dyn Capability>, collaborators: BridgeCollaborators) -> Self {
        let extractor = ParameterExtractor::new(collaborators.model.clone());
        let synthesizer = ResponseSynthesizer::new(collaborators.model.clone());

        Self {
            capability,
            collaborators,
            extractor,
            executor: Executor::new(),
            synthesizer,
        }
    }

    /// One invocation: the synthesized text and the raw execution result.
    async fn run(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<ConversationState>,
        invocation_id: Uuid,
    ) -> std::result::Result<(String, Value), StageFailure> {
        let state = self
            .observe(invocation_id, Stage::State, async move {
                match state {
                    Some(state) => runtime.update_recent_message_state(state).await,
                    None => runtime.compose_state(message).await,
                }
            })
            .await?;

        let parameters = self
            .observe(
                invocation_id,
                Stage::Extraction,
                self.extractor
                    .extract(runtime, &state, self.capability.template()),
            )
            .await?;

        let client = self
            .observe(invocation_id, Stage::Client, self.collaborators.source.client())
            .await?;

        let result = self
            .observe(
                invocation_id,
                Stage::Execution,
                self.executor
                    .execute(self.capability.as_ref(), client.as_ref(), parameters),
            )
            .await?;

        let synthesized = self
            .observe(
                invocation_id,
                Stage::Synthesis,
                self.synthesizer
                    .synthesize(runtime, self.capability.name(), &result, &state),
            )
            .await;

        match synthesized {
            Ok(text) => Ok((text, result)),
            Err(failure) => Err(failure.with_result(result)),
        }
    }

    /// Await one stage and report it to the observer.
    async fn observe<T, E, F>(
        &self,
        invocation_id: Uuid,
        stage: Stage,
        future: F,
    ) -> std::result::Result<T, StageFailure>
    where
        F: Future<Output = std::result::Result<T, E>>,
        E: fmt::Display,
    {
        let started = Instant::now();
        let result = future.await;

        let (outcome, error) = match &result {
            Ok(_) => (Outcome::Success, None),
            Err(e) => (Outcome::Failure, Some(e.to_string())),
        };

        self.collaborators.observer.on_stage(&StageEvent {
            capability: self.capability.name().to_string(),
            invocation_id,
            stage,
            duration: started.elapsed(),
            outcome,
            error: error.clone(),
        });

        result.map_err(|_| StageFailure::new(stage, error.unwrap_or_default()))
    }
}

#[async_trait]
impl ActionHandler for CapabilityHandler {
    async fn handle(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<ConversationState>,
        _options: Option<&HandlerOptions>,
        callback: Option<HandlerCallback>,
    ) -> bool {
        let name = self.capability.name();
        let invocation_id = Uuid::new_v4();
        let span = info_span!(
            "action_invocation",
            capability = name,
            invocation_id = %invocation_id
        );

        let started = Instant::now();
        let outcome = self
            .run(runtime, message, state, invocation_id)
            .instrument(span.clone())
            .await;

        span.in_scope(|| {
            let (response, outcome) = match outcome {
                Ok((text, result)) => (
                    ActionResponse {
                        text,
                        content: result,
                    },
                    Outcome::Success,
                ),
                Err(failure) => {
                    debug!(
                        stage = %failure.stage,
                        executed = failure.executed(),
                        "Reporting failed invocation"
                    );
                    (failure.into_response(name), Outcome::Failure)
                }
            };

            match callback {
                Some(callback) => callback(response),
                None => debug!("No callback supplied; response dropped"),
            }

            self.collaborators
                .observer
                .on_complete(name, invocation_id, outcome, started.elapsed());

            outcome == Outcome::Success
        })
    }
}
