//! Rewrite `<img src>` attributes to base64 data URIs

use anyhow::Result;

use super::types::{InliningReport, ResourceType};
use super::utils::fetch_data_uri;
use crate::document::{Document, attr, set_attr};
use crate::fetcher::Fetcher;
use crate::utils::is_data_url;

pub async fn inline_images(
    document: &Document,
    base_url: &str,
    fetcher: &Fetcher,
    report: &mut InliningReport,
) -> Result<()> {
    for img in document.select("img[src]")? {
        let Some(src) = attr(&img, "src") else {
            continue;
        };
        // Skip data URLs that are already inlined
        if src.is_empty() || is_data_url(&src) {
            continue;
        }

        match fetch_data_uri(fetcher, base_url, &src, ResourceType::Image).await {
            Ok(data_uri) => {
                set_attr(&img, "src", data_uri);
                report.record_success(ResourceType::Image, &src);
            }
            // src keeps its original, possibly relative, value
            Err(failure) => report.record_failure(failure),
        }
    }

    Ok(())
}
