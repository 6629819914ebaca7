//! Test utilities and helper functions for the mirror_page test suite

use base64::Engine;
use mirror_page::{Fetcher, MirrorConfig};
use mockito::{Mock, ServerGuard};
use std::time::Duration;

/// Fetcher with short timeouts so a broken mock fails fast
#[allow(dead_code)]
pub fn test_fetcher() -> Fetcher {
    let config = MirrorConfig::builder()
        .text_timeout(Duration::from_secs(5))
        .binary_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create test config");
    Fetcher::new(config).expect("Failed to create test fetcher")
}

/// Creates a test HTML document with the given head and body markup
#[allow(dead_code)]
pub fn create_test_html(head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Mirror Test</title>
    {head}
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// URL of a path on the mock server
#[allow(dead_code)]
pub fn test_url(server: &ServerGuard, path: &str) -> String {
    format!("{}{path}", server.url())
}

/// Creates a mock endpoint that returns a body with the given content type
#[allow(dead_code)]
pub async fn create_body_mock(
    server: &mut ServerGuard,
    path: &str,
    content_type: &str,
    body: impl AsRef<[u8]>,
) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", content_type)
        .with_body(body)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error status
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Split a `data:<type>;base64,<payload>` URI into its type and decoded bytes
#[allow(dead_code)]
pub fn decode_data_uri(uri: &str) -> (String, Vec<u8>) {
    let rest = uri.strip_prefix("data:").expect("not a data URI");
    let (content_type, payload) = rest.split_once(";base64,").expect("not base64");
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("invalid base64 payload");
    (content_type.to_string(), bytes)
}

/// Small but valid PNG header bytes, enough to check exact round trips
#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
];
