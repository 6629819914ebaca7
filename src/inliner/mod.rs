//! Resource inlining functionality
//!
//! This module turns a fetched page into a self-contained document by
//! embedding its stylesheets and scripts as inline text and its images and
//! CSS-referenced assets as base64 data URIs.

// Sub-modules
pub mod css_urls;
pub mod images;
pub mod orchestrator;
pub mod scripts;
pub mod stylesheets;
pub mod types;
mod utils;

// Re-exports for public API
pub use css_urls::{inline_css_urls, inline_style_attributes, inline_style_tags};
pub use images::inline_images;
pub use orchestrator::{inline_document, mirror_page};
pub use scripts::inline_scripts;
pub use stylesheets::inline_stylesheets;
pub use types::{InliningError, InliningReport, InliningResult, ResourceType};
