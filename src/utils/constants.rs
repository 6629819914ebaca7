//! Shared configuration constants for mirror_page
//!
//! Default values used by `MirrorConfig` and the fetcher, kept in one place
//! to avoid magic numbers scattered through the inliners.

use std::time::Duration;

/// Timeout for text resources: the page itself, stylesheets and scripts
pub const DEFAULT_TEXT_TIMEOUT: Duration = Duration::from_secs(20);

/// Timeout for binary resources: images and anything referenced by CSS `url()`
pub const DEFAULT_BINARY_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type used when neither the response nor the file extension tells us
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Accept header sent for pages, stylesheets and scripts
pub const TEXT_ACCEPT: &str = "text/html,text/css,application/javascript,*/*;q=0.8";

/// Accept header sent for images and CSS-referenced assets
pub const BINARY_ACCEPT: &str = "image/avif,image/webp,image/apng,image/*,*/*;q=0.8";

/// Chrome user agent string
///
/// Some servers refuse or degrade responses for unknown clients, so every
/// request identifies as a current stable Chrome.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
