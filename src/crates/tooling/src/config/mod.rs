//! Configuration management utilities
//!
//! - `ConfigBuilder` trait for consistent configuration APIs
//! - Environment variable loading with proper error handling
//!
//! # Example
//!
//! ```rust,ignore
//! use tooling::config::{ConfigBuilder, get_env, get_env_list};
//!
//! #[derive(Clone, Default)]
//! struct WalletConfig {
//!     pub private_key: Option<String>,
//!     pub actions: Vec<String>,
//! }
//!
//! impl ConfigBuilder for WalletConfig {
//!     fn from_env(prefix: &str) -> tooling::Result<Self> {
//!         Ok(Self {
//!             private_key: get_env(&format!("{}PRIVATE_KEY", prefix))?,
//!             actions: get_env_list(&format!("{}ACTIONS", prefix))?.unwrap_or_default(),
//!         })
//!     }
//!
//!     fn merge(&mut self, other: Self) -> &mut Self {
//!         if other.private_key.is_some() {
//!             self.private_key = other.private_key;
//!         }
//!         if !other.actions.is_empty() {
//!             self.actions = other.actions;
//!         }
//!         self
//!     }
//! }
//!
//! let config = WalletConfig::from_env_with_defaults("WALLET_")?;
//! ```

mod builder;
mod env;

pub use builder::ConfigBuilder;
pub use env::{build_env_key, get_env, get_env_list};
