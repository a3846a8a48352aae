//! Capability provider contracts.
//!
//! A [`Capability`] is an opaque named operation exposed by the provider's
//! client. The bridge only reads its name, description, and parameter
//! template, and calls `execute` once per invocation.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, CapabilityError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// An operation offered by the capability provider.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Unique, case-insensitive identity
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Prompt template with `{{placeholder}}`s resolved against conversation
    /// state; it tells the model which parameter object to produce.
    fn template(&self) -> &str;

    /// Run the operation against the live client.
    async fn execute(
        &self,
        client: &dyn CapabilityClient,
        parameters: Value,
    ) -> std::result::Result<Value, CapabilityError>;
}

impl fmt::Debug for dyn Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name())
            .finish()
    }
}

/// Authenticated client of the capability provider.
#[async_trait]
pub trait CapabilityClient: Send + Sync {
    /// Enumerate the operations this client exposes.
    async fn capabilities(&self) -> Result<Vec<Arc<dyn Capability>>>;

    /// Wallet address the client signs with on `chain`, if it has one.
    fn wallet_address(&self, _chain: &str) -> Option<String> {
        None
    }
}

/// Supplies clients and the capability list.
///
/// `client()` may be called several times per invocation and from
/// concurrent invocations; each call must yield a client usable
/// immediately.
#[async_trait]
pub trait CapabilitySource: Send + Sync {
    async fn client(&self) -> Result<Arc<dyn CapabilityClient>>;

    async fn discover(&self) -> Result<Vec<Arc<dyn Capability>>> {
        let client = self.client().await?;
        client.capabilities().await
    }
}

/// Builds a provider client from configuration.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn connect(&self, config: &BridgeConfig) -> Result<Arc<dyn CapabilityClient>>;
}

/// Capability source that constructs a fresh client from [`BridgeConfig`]
/// on every request.
pub struct ConfiguredSource {
    config: BridgeConfig,
    factory: Arc<dyn ClientFactory>,
}

impl fmt::Debug for ConfiguredSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredSource")
            .field("config", &self.config)
            .finish()
    }
}

impl ConfiguredSource {
    pub fn new(config: BridgeConfig, factory: Arc<dyn ClientFactory>) -> Self {
        Self { config, factory }
    }
}

#[async_trait]
impl CapabilitySource for ConfiguredSource {
    async fn client(&self) -> Result<Arc<dyn CapabilityClient>> {
        debug!(
            capabilities = ?self.config.enabled_capabilities,
            "Constructing capability client"
        );
        self.factory.connect(&self.config).await.map_err(|e| match e {
            BridgeError::Client(_) => e,
            other => BridgeError::Client(other.to_string()),
        })
    }
}
