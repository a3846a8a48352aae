//! Environment variable readers
//!
//! Key material and allow-lists reach the bridge through the process
//! environment; these helpers keep "missing" distinct from "malformed".

use crate::{Result, ToolingError};
use std::env;

/// Read `key`; `Ok(None)` when unset, an error when set to non-UTF-8
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ToolingError::InvalidConfig(format!(
            "environment variable {} contains invalid UTF-8",
            key
        ))),
    }
}

/// Load a comma-separated list
///
/// Entries are trimmed and empty entries dropped, so `"supply, ,stake"`
/// yields `["supply", "stake"]`.
pub fn get_env_list(key: &str) -> Result<Option<Vec<String>>> {
    Ok(get_env(key)?.map(|val| {
        val.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }))
}

/// `prefix` followed by the uppercased field name
///
/// ```rust,ignore
/// let key = build_env_key("BRIDGE_", "evm_private_key"); // "BRIDGE_EVM_PRIVATE_KEY"
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
