//! Observability hook for handler invocations.
//!
//! The bridge reports one [`StageEvent`] per stage it attempts and one
//! completion per invocation. [`TracingObserver`] turns them into
//! `tracing` events; inject another [`InvocationObserver`] to collect
//! metrics or assert on stage order.

use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tooling::logging::format_duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Pipeline stage of a handler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Compose or refresh conversation state
    State,
    /// Parameter extraction (small tier)
    Extraction,
    /// Client acquisition from the capability source
    Client,
    /// Capability execution
    Execution,
    /// Response synthesis (large tier)
    Synthesis,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::State => "state",
            Stage::Extraction => "extraction",
            Stage::Client => "client",
            Stage::Execution => "execution",
            Stage::Synthesis => "synthesis",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("success"),
            Outcome::Failure => f.write_str("failure"),
        }
    }
}

/// One attempted stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageEvent {
    pub capability: String,
    pub invocation_id: Uuid,
    pub stage: Stage,
    pub duration: Duration,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub trait InvocationObserver: Send + Sync {
    fn on_stage(&self, event: &StageEvent);

    fn on_complete(
        &self,
        _capability: &str,
        _invocation_id: Uuid,
        _outcome: Outcome,
        _duration: Duration,
    ) {
    }
}

/// Default observer: stage events at debug/warn, completions at info.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl InvocationObserver for TracingObserver {
    fn on_stage(&self, event: &StageEvent) {
        match event.outcome {
            Outcome::Success => debug!(
                capability = %event.capability,
                invocation_id = %event.invocation_id,
                stage = %event.stage,
                duration = %format_duration(event.duration),
                "Stage completed"
            ),
            Outcome::Failure => warn!(
                capability = %event.capability,
                invocation_id = %event.invocation_id,
                stage = %event.stage,
                duration = %format_duration(event.duration),
                error = event.error.as_deref().unwrap_or_default(),
                "Stage failed"
            ),
        }
    }

    fn on_complete(
        &self,
        capability: &str,
        invocation_id: Uuid,
        outcome: Outcome,
        duration: Duration,
    ) {
        info!(
            capability,
            invocation_id = %invocation_id,
            outcome = %outcome,
            duration = %format_duration(duration),
            "Action invocation finished"
        );
    }
}
