//! HTTP fetching for the page and its sub-resources
//!
//! Two entry points share one client: `fetch_text` for the page, stylesheets
//! and scripts, and `fetch_binary` for images and CSS-referenced assets.
//! Both fail with [`FetchError`] on transport errors and non-2xx statuses.

pub mod client;
pub mod content_type;
pub mod error;

pub use client::{BinaryResource, Fetcher};
pub use content_type::{charset_param, guess_content_type, to_data_uri};
pub use error::{FetchError, FetchResult};
