//! Wallet address context provider.

use crate::capability::CapabilitySource;
use crate::runtime::{AgentRuntime, ConversationState, Memory, Provider};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

/// Label the provider reports under unless overridden.
pub const DEFAULT_WALLET_LABEL: &str = "Edwin";

/// Reports the provider client's wallet address for one chain, as
/// `"<label> Wallet Address: <address>"`.
///
/// Any failure yields `None`, so the runtime simply omits the line.
pub struct WalletAddressProvider {
    source: Arc<dyn CapabilitySource>,
    chain: String,
    label: String,
}

impl WalletAddressProvider {
    /// Labelled with [`DEFAULT_WALLET_LABEL`].
    pub fn new(source: Arc<dyn CapabilitySource>, chain: impl Into<String>) -> Self {
        Self {
            source,
            chain: chain.into(),
            label: DEFAULT_WALLET_LABEL.to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[async_trait]
impl Provider for WalletAddressProvider {
    async fn get(
        &self,
        _runtime: &dyn AgentRuntime,
        _message: &Memory,
        _state: Option<&ConversationState>,
    ) -> Option<String> {
        let client = match self.source.client().await {
            Ok(client) => client,
            Err(e) => {
                error!(chain = %self.chain, error = %e, "Error in wallet provider");
                return None;
            }
        };

        match client.wallet_address(&self.chain) {
            Some(address) => Some(format!("{} Wallet Address: {}", self.label, address)),
            None => {
                debug!(chain = %self.chain, "Client has no wallet for chain");
                None
            }
        }
    }
}
