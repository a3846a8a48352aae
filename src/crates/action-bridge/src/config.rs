//! Configuration handed to the capability provider at client construction.
//!
//! Loaded from the environment:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `EVM_PRIVATE_KEY` | key material for the EVM backend |
//! | `SOLANA_PRIVATE_KEY` | key material for the Solana backend |
//! | `ENABLED_CAPABILITIES` | optional comma-separated allow-list override |
//!
//! The bridge never interprets the keys; they are passed through opaquely.

use crate::error::Result;
use std::fmt;
use tooling::config::{build_env_key, get_env, get_env_list, ConfigBuilder};
use tooling::ToolingError;

/// Operations enabled when no allow-list is configured.
pub const DEFAULT_CAPABILITIES: [&str; 3] = ["supply", "withdraw", "stake"];

#[derive(Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub evm_private_key: Option<String>,
    pub solana_private_key: Option<String>,
    pub enabled_capabilities: Vec<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            evm_private_key: None,
            solana_private_key: None,
            enabled_capabilities: DEFAULT_CAPABILITIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("BridgeConfig")
            .field("evm_private_key", &redact(&self.evm_private_key))
            .field("solana_private_key", &redact(&self.solana_private_key))
            .field("enabled_capabilities", &self.enabled_capabilities)
            .finish()
    }
}

impl BridgeConfig {
    /// Load from unprefixed environment variables over defaults, validated.
    pub fn load() -> Result<Self> {
        Ok(Self::from_env_with_defaults("")?)
    }

    pub fn with_evm_private_key(mut self, key: impl Into<String>) -> Self {
        self.evm_private_key = Some(key.into());
        self
    }

    pub fn with_solana_private_key(mut self, key: impl Into<String>) -> Self {
        self.solana_private_key = Some(key.into());
        self
    }

    pub fn with_capabilities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_capabilities = names.into_iter().map(Into::into).collect();
        self
    }
}

impl ConfigBuilder for BridgeConfig {
    fn validate(&self) -> tooling::Result<()> {
        if self.enabled_capabilities.is_empty() {
            return Err(ToolingError::InvalidConfig(
                "enabled capability list is empty".into(),
            ));
        }
        if self.enabled_capabilities.iter().any(|name| name.trim().is_empty()) {
            return Err(ToolingError::InvalidConfig(
                "enabled capability list contains a blank entry".into(),
            ));
        }
        for (field, key) in [
            ("evm_private_key", &self.evm_private_key),
            ("solana_private_key", &self.solana_private_key),
        ] {
            if matches!(key, Some(value) if value.trim().is_empty()) {
                return Err(ToolingError::InvalidConfig(format!("{} is blank", field)));
            }
        }
        Ok(())
    }

    fn from_env(prefix: &str) -> tooling::Result<Self> {
        Ok(Self {
            evm_private_key: get_env(&build_env_key(prefix, "evm_private_key"))?,
            solana_private_key: get_env(&build_env_key(prefix, "solana_private_key"))?,
            enabled_capabilities: get_env_list(&build_env_key(prefix, "enabled_capabilities"))?
                .unwrap_or_default(),
        })
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        if other.evm_private_key.is_some() {
            self.evm_private_key = other.evm_private_key;
        }
        if other.solana_private_key.is_some() {
            self.solana_private_key = other.solana_private_key;
        }
        if !other.enabled_capabilities.is_empty() {
            self.enabled_capabilities = other.enabled_capabilities;
        }
        self
    }
}
