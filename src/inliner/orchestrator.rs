//! Resource inlining orchestration
//!
//! Runs the inlining passes in a fixed order against one parsed document,
//! then serializes it. Every fetch is awaited before the next one starts.

use anyhow::{Context, Result};
use std::path::Path;

use super::css_urls::{inline_style_attributes, inline_style_tags};
use super::images::inline_images;
use super::scripts::inline_scripts;
use super::stylesheets::inline_stylesheets;
use super::types::{InliningReport, InliningResult};
use crate::config::MirrorConfig;
use crate::document::Document;
use crate::fetcher::Fetcher;

/// Inline every external resource of an already-fetched page
///
/// Order: stylesheets, scripts, images, `url()` in `<style>` text (including
/// stylesheets inlined by the first pass), then `url()` in `style` attributes.
/// All references resolve against `base_url`. Sub-resource failures are
/// recorded in the report and never abort the run.
pub async fn inline_document(
    html: &str,
    base_url: &str,
    fetcher: &Fetcher,
) -> Result<InliningResult> {
    let document = Document::parse(html);
    let mut report = InliningReport::default();

    log::debug!("Starting to inline resources for base_url: {base_url}");

    inline_stylesheets(&document, base_url, fetcher, &mut report).await?;
    inline_scripts(&document, base_url, fetcher, &mut report).await?;
    inline_images(&document, base_url, fetcher, &mut report).await?;
    inline_style_tags(&document, base_url, fetcher, &mut report).await?;
    inline_style_attributes(&document, base_url, fetcher, &mut report).await?;

    log::info!(
        "Inlined {} of {} resources for {base_url}",
        report.successes,
        report.total()
    );

    let html = document.serialize()?;
    Ok(InliningResult { html, report })
}

/// Fetch `url`, inline its resources and write the result to `output_path`
///
/// An existing file at `output_path` is overwritten.
///
/// # Errors
///
/// Fails if the page itself cannot be fetched, or the output cannot be
/// serialized or written. Sub-resource failures only show up in the report.
pub async fn mirror_page(
    url: &str,
    output_path: impl AsRef<Path>,
    config: MirrorConfig,
) -> Result<InliningReport> {
    let output_path = output_path.as_ref();
    let fetcher = Fetcher::new(config)?;

    let html = fetcher
        .fetch_text(url)
        .await
        .with_context(|| format!("Failed to fetch page {url}"))?;

    let result = inline_document(&html, url, &fetcher).await?;

    tokio::fs::write(output_path, result.html.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    log::debug!(
        "Wrote {} bytes to {}",
        result.html.len(),
        output_path.display()
    );

    Ok(result.report)
}
