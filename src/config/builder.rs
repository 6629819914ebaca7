//! Fluent builder for `MirrorConfig`
//!
//! Every field has a default, so the builder carries no typestate; `build`
//! only rejects values that would make every fetch fail.

use anyhow::{Result, bail};
use std::time::Duration;

use super::types::MirrorConfig;

#[derive(Debug, Clone, Default)]
pub struct MirrorConfigBuilder {
    config: MirrorConfig,
}

impl MirrorConfig {
    /// Create a builder for configuring a `MirrorConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> MirrorConfigBuilder {
        MirrorConfigBuilder::default()
    }
}

impl MirrorConfigBuilder {
    #[must_use]
    pub fn text_timeout(mut self, timeout: Duration) -> Self {
        self.config.text_timeout = timeout;
        self
    }

    #[must_use]
    pub fn binary_timeout(mut self, timeout: Duration) -> Self {
        self.config.binary_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn max_resource_bytes(mut self, limit: Option<usize>) -> Self {
        self.config.max_resource_bytes = limit;
        self
    }

    /// Validate and produce the final config
    ///
    /// # Errors
    ///
    /// Returns an error if either timeout is zero, the user agent is blank,
    /// or the size limit is zero.
    pub fn build(self) -> Result<MirrorConfig> {
        if self.config.text_timeout.is_zero() {
            bail!("text_timeout must be greater than zero");
        }
        if self.config.binary_timeout.is_zero() {
            bail!("binary_timeout must be greater than zero");
        }
        if self.config.user_agent.trim().is_empty() {
            bail!("user_agent must not be empty");
        }
        if self.config.max_resource_bytes == Some(0) {
            bail!("max_resource_bytes must be greater than zero when set");
        }
        Ok(self.config)
    }
}
