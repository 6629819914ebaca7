//! Content type detection and data URI encoding

use base64::Engine;

use crate::utils::url_path;

/// Guess a content type from the file extension of a URL
///
/// Query strings and fragments are ignored and matching is case-insensitive.
/// Returns `None` for unknown or missing extensions.
#[must_use]
pub fn guess_content_type(url: &str) -> Option<&'static str> {
    let path = url_path(url);
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let (_, extension) = file_name.rsplit_once('.')?;

    let content_type = match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        _ => return None,
    };

    Some(content_type)
}

/// Charset parameter of a `Content-Type` header value, if present
///
/// `text/css; charset="ISO-8859-1"` yields `ISO-8859-1`.
#[must_use]
pub fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
            .filter(|value| !value.is_empty())
    })
}

/// Encode bytes as a `data:<type>;base64,<payload>` URI
#[must_use]
pub fn to_data_uri(content_type: &str, bytes: &[u8]) -> String {
    let encoded_capacity = base64::encoded_len(bytes.len(), true).unwrap_or(0);
    let mut encoded = String::with_capacity(encoded_capacity + 13 + content_type.len());

    encoded.push_str("data:");
    encoded.push_str(content_type);
    encoded.push_str(";base64,");

    base64::engine::general_purpose::STANDARD.encode_string(bytes, &mut encoded);

    encoded
}
