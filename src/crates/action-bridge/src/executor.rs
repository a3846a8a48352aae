//! Capability execution boundary.

use crate::capability::{Capability, CapabilityClient};
use crate::error::CapabilityError;
use serde_json::Value;
use tracing::debug;

/// Calls `execute` exactly once and passes the outcome through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        capability: &dyn Capability,
        client: &dyn CapabilityClient,
        parameters: Value,
    ) -> Result<Value, CapabilityError> {
        debug!(capability = capability.name(), "Executing capability");

        let result = capability.execute(client, parameters).await;

        match &result {
            Ok(_) => debug!(
                capability = capability.name(),
                "Capability executed successfully"
            ),
            Err(e) => debug!(
                capability = capability.name(),
                error = %e,
                "Capability execution failed"
            ),
        }
        result
    }
}
