//! Rewrite CSS `url(...)` references to base64 data URIs
//!
//! Applies to the text of `<style>` elements and to `style="..."` attributes.
//! Matching is a regex heuristic, not a CSS parser: `url(` inside comments or
//! strings is rewritten too, and a `)` inside a quoted argument ends the match.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

use super::types::{InliningReport, ResourceType};
use super::utils::fetch_data_uri;
use crate::document::{Document, attr, set_attr, set_text_content};
use crate::fetcher::Fetcher;
use crate::utils::is_data_url;

lazy_static! {
    // Hardcoded and syntactically valid; a parse failure is a compile-time bug.
    static ref CSS_URL_PATTERN: Regex = Regex::new(r"(?i)url\(([^)]+)\)")
        .expect("BUG: hardcoded CSS url() pattern is invalid");
}

/// One `url(...)` occurrence found in a CSS string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssUrl {
    /// Byte range of the whole `url(...)` token
    pub start: usize,
    pub end: usize,
    /// Argument with surrounding whitespace and quote characters removed
    pub reference: String,
}

/// Strip surrounding whitespace, then any run of `"` and `'` at either end
#[must_use]
pub fn strip_url_quotes(argument: &str) -> &str {
    argument.trim().trim_matches(['"', '\''])
}

/// Find every `url(...)` token in `css`, in order
#[must_use]
pub fn find_css_urls(css: &str) -> Vec<CssUrl> {
    CSS_URL_PATTERN
        .captures_iter(css)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let argument = captures.get(1)?;
            Some(CssUrl {
                start: whole.start(),
                end: whole.end(),
                reference: strip_url_quotes(argument.as_str()).to_string(),
            })
        })
        .collect()
}

/// Rewrite every `url(...)` in `css`
///
/// Data URIs are re-emitted without quotes. Fetchable references become
/// `url(data:...)`. A failed fetch re-emits the original unresolved reference.
/// Text between matches is copied verbatim.
pub async fn inline_css_urls(
    css: &str,
    base_url: &str,
    fetcher: &Fetcher,
    report: &mut InliningReport,
) -> String {
    let matches = find_css_urls(css);
    if matches.is_empty() {
        return css.to_string();
    }

    let mut output = String::with_capacity(css.len());
    let mut last_end = 0;

    for found in matches {
        output.push_str(&css[last_end..found.start]);

        let replacement = if is_data_url(&found.reference) {
            found.reference
        } else {
            match fetch_data_uri(fetcher, base_url, &found.reference, ResourceType::CssUrl).await {
                Ok(data_uri) => {
                    report.record_success(ResourceType::CssUrl, &found.reference);
                    data_uri
                }
                Err(failure) => {
                    report.record_failure(failure);
                    found.reference
                }
            }
        };

        output.push_str("url(");
        output.push_str(&replacement);
        output.push(')');
        last_end = found.end;
    }

    output.push_str(&css[last_end..]);
    output
}

/// Rewrite `url(...)` references inside every non-empty `<style>` element
pub async fn inline_style_tags(
    document: &Document,
    base_url: &str,
    fetcher: &Fetcher,
    report: &mut InliningReport,
) -> Result<()> {
    for style in document.select("style")? {
        let node = style.as_node();
        let css = node.text_contents();
        if css.is_empty() {
            continue;
        }

        let rewritten = inline_css_urls(&css, base_url, fetcher, report).await;
        if rewritten != css {
            set_text_content(node, &rewritten);
        }
    }

    Ok(())
}

/// Rewrite `url(...)` references inside every non-empty `style` attribute
pub async fn inline_style_attributes(
    document: &Document,
    base_url: &str,
    fetcher: &Fetcher,
    report: &mut InliningReport,
) -> Result<()> {
    for element in document.select("[style]")? {
        let Some(css) = attr(&element, "style").filter(|css| !css.is_empty()) else {
            continue;
        };

        let rewritten = inline_css_urls(&css, base_url, fetcher, report).await;
        if rewritten != css {
            set_attr(&element, "style", rewritten);
        }
    }

    Ok(())
}
