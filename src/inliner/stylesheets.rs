//! Replace `<link rel="stylesheet">` elements with inline `<style>` blocks

use anyhow::Result;

use super::types::{InliningReport, ResourceType};
use super::utils::fetch_text_resource;
use crate::document::{Document, attr, replace_with_text_element};
use crate::fetcher::Fetcher;

/// Whether a `rel` attribute lists the `stylesheet` link type
#[must_use]
pub fn is_stylesheet_rel(rel: &str) -> bool {
    rel.split_ascii_whitespace()
        .any(|token| token.eq_ignore_ascii_case("stylesheet"))
}

/// Inline every stylesheet link that has a non-empty `href`
///
/// A link whose fetch fails stays in the document untouched.
pub async fn inline_stylesheets(
    document: &Document,
    base_url: &str,
    fetcher: &Fetcher,
    report: &mut InliningReport,
) -> Result<()> {
    for link in document.select("link[rel]")? {
        let is_stylesheet = attr(&link, "rel").is_some_and(|rel| is_stylesheet_rel(&rel));
        if !is_stylesheet {
            continue;
        }
        let Some(href) = attr(&link, "href").filter(|href| !href.is_empty()) else {
            continue;
        };

        match fetch_text_resource(fetcher, base_url, &href, ResourceType::Stylesheet).await {
            Ok(css) => {
                replace_with_text_element(&link, "style", &css);
                report.record_success(ResourceType::Stylesheet, &href);
            }
            Err(failure) => report.record_failure(failure),
        }
    }

    Ok(())
}
