//! Configuration builder trait
//!
//! One trait for validation, environment loading, and layering of
//! configuration sources.

use crate::Result;

/// Trait for configuration structures that support building, validation, and merging
///
/// ```rust,ignore
/// use tooling::config::ConfigBuilder;
///
/// let config = BridgeConfig::from_env_with_defaults("")?;
/// ```
pub trait ConfigBuilder: Default + Clone {
    /// Validate the configuration
    ///
    /// Default implementation: always valid.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// Variables follow `{PREFIX}{FIELD_NAME}`. Fields whose variable is
    /// absent must be left empty (`None` / empty `Vec`) so that `merge`
    /// can tell them apart from explicit values.
    fn from_env(prefix: &str) -> Result<Self>;

    /// Merge another configuration into this one
    ///
    /// Values present in `other` win:
    /// - Option fields: overwritten if `other` is `Some`
    /// - Vec fields: replaced if `other` is non-empty
    /// - Scalar fields: overwritten
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Layer environment values over defaults, then validate
    fn from_env_with_defaults(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::from_env(prefix)?);
        config.validate()?;
        Ok(config)
    }
}
