//! Replace external `<script src>` elements with inline scripts

use anyhow::Result;

use super::types::{InliningReport, ResourceType};
use super::utils::fetch_text_resource;
use crate::document::{Document, attr, replace_with_text_element};
use crate::fetcher::Fetcher;

/// Inline every script element carrying a `src` attribute
///
/// The replacement `<script>` has no attributes, so `type`, `defer` and
/// `async` on the original are dropped along with `src`.
pub async fn inline_scripts(
    document: &Document,
    base_url: &str,
    fetcher: &Fetcher,
    report: &mut InliningReport,
) -> Result<()> {
    for script in document.select("script[src]")? {
        let Some(src) = attr(&script, "src") else {
            continue;
        };

        match fetch_text_resource(fetcher, base_url, &src, ResourceType::Script).await {
            Ok(body) => {
                replace_with_text_element(&script, "script", &body);
                report.record_success(ResourceType::Script, &src);
            }
            Err(failure) => report.record_failure(failure),
        }
    }

    Ok(())
}
