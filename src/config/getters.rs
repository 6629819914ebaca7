//! Getter methods for `MirrorConfig`

use std::time::Duration;

use super::types::MirrorConfig;

impl MirrorConfig {
    #[must_use]
    pub fn text_timeout(&self) -> Duration {
        self.text_timeout
    }

    #[must_use]
    pub fn binary_timeout(&self) -> Duration {
        self.binary_timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn max_resource_bytes(&self) -> Option<usize> {
        self.max_resource_bytes
    }
}
