//! Per-resource fetch helpers shared by the inlining passes
//!
//! Each helper resolves one reference against the page URL and fetches it,
//! returning either the replacement content or an [`InliningError`]. Callers
//! decide what "keep the original" means for their context.

use super::types::{InliningError, ResourceType};
use crate::fetcher::Fetcher;
use crate::utils::resolve_url;

/// Resolve and fetch a text resource (stylesheet or script body)
pub(crate) async fn fetch_text_resource(
    fetcher: &Fetcher,
    base_url: &str,
    reference: &str,
    resource_type: ResourceType,
) -> Result<String, InliningError> {
    let url = resolve_url(base_url, reference)
        .map_err(|e| InliningError::new(reference, resource_type, format!("{e:#}")))?;

    log::debug!("Processing {resource_type}: {reference} -> {url}");
    fetcher
        .fetch_text(&url)
        .await
        .map_err(|e| InliningError::new(url, resource_type, e))
}

/// Resolve and fetch a binary resource, encoded as a base64 data URI
pub(crate) async fn fetch_data_uri(
    fetcher: &Fetcher,
    base_url: &str,
    reference: &str,
    resource_type: ResourceType,
) -> Result<String, InliningError> {
    let url = resolve_url(base_url, reference)
        .map_err(|e| InliningError::new(reference, resource_type, format!("{e:#}")))?;

    log::debug!("Processing {resource_type}: {reference} -> {url}");
    let resource = fetcher
        .fetch_binary(&url)
        .await
        .map_err(|e| InliningError::new(url, resource_type, e))?;

    Ok(resource.to_data_uri())
}
