//! Type definitions for resource inlining

/// Resource type for error tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Stylesheet,
    Script,
    Image,
    CssUrl,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Stylesheet => write!(f, "stylesheet"),
            ResourceType::Script => write!(f, "script"),
            ResourceType::Image => write!(f, "image"),
            ResourceType::CssUrl => write!(f, "CSS url()"),
        }
    }
}

/// Error information for a resource that was left as an external reference
#[derive(Debug, Clone)]
pub struct InliningError {
    pub url: String,
    pub resource_type: ResourceType,
    pub error: String,
}

impl InliningError {
    pub fn new(url: impl Into<String>, resource_type: ResourceType, error: impl ToString) -> Self {
        Self {
            url: url.into(),
            resource_type,
            error: error.to_string(),
        }
    }
}

impl std::fmt::Display for InliningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.resource_type, self.url, self.error)
    }
}

/// Success and failure tally across all inlining passes
#[derive(Debug, Clone, Default)]
pub struct InliningReport {
    pub successes: usize,
    pub failures: Vec<InliningError>,
}

impl InliningReport {
    pub(crate) fn record_success(&mut self, resource_type: ResourceType, url: &str) {
        log::debug!("Inlined {resource_type}: {url}");
        self.successes += 1;
    }

    pub(crate) fn record_failure(&mut self, failure: InliningError) {
        log::warn!(
            "Keeping external {} {}: {}",
            failure.resource_type,
            failure.url,
            failure.error
        );
        self.failures.push(failure);
    }

    /// Total number of resources processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.successes + self.failures.len()
    }

    /// Check if any failures occurred
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Get failure rate as a ratio between 0.0 and 1.0
    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.failures.len() as f64 / total as f64
        }
    }

    /// Failures of one resource type
    pub fn failures_of(&self, resource_type: ResourceType) -> impl Iterator<Item = &InliningError> {
        self.failures
            .iter()
            .filter(move |f| f.resource_type == resource_type)
    }
}

/// Result of inlining a document: the rendered HTML plus its report
#[derive(Debug, Clone)]
pub struct InliningResult {
    pub html: String,
    pub report: InliningReport,
}
