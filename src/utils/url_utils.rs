//! URL helpers shared by the fetcher and the inliners.

use anyhow::{Context, Result};
use url::Url;

/// Resolve a potentially relative reference against the page URL
///
/// Resolution always happens against the page that was mirrored, never
/// against the stylesheet or script a reference was found in.
pub fn resolve_url(base_url: &str, reference: &str) -> Result<String> {
    let base = Url::parse(base_url).context("Invalid base URL")?;
    let resolved = base
        .join(reference)
        .with_context(|| format!("Failed to resolve '{reference}' against '{base_url}'"))?;
    Ok(resolved.to_string())
}

/// Check whether a reference is already an inline `data:` URI
#[must_use]
pub fn is_data_url(reference: &str) -> bool {
    reference.starts_with("data:")
}

/// Path component of a URL with query and fragment removed
///
/// Falls back to manual trimming when the input does not parse as an
/// absolute URL, so relative references can be inspected too.
#[must_use]
pub fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
