//! Core configuration types for page mirroring

use std::time::Duration;

use crate::utils::{CHROME_USER_AGENT, DEFAULT_BINARY_TIMEOUT, DEFAULT_TEXT_TIMEOUT};

/// Settings shared by every fetch made during one mirror run
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Timeout for the page, stylesheets and scripts
    pub(crate) text_timeout: Duration,
    /// Timeout for images and CSS-referenced assets
    pub(crate) binary_timeout: Duration,
    pub(crate) user_agent: String,
    /// Upper bound on any single response body. `None` means unlimited.
    pub(crate) max_resource_bytes: Option<usize>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            text_timeout: DEFAULT_TEXT_TIMEOUT,
            binary_timeout: DEFAULT_BINARY_TIMEOUT,
            user_agent: CHROME_USER_AGENT.to_string(),
            max_resource_bytes: None,
        }
    }
}
