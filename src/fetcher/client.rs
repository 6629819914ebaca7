//! Sequential HTTP client used for every request in a mirror run

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};
use futures::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

use super::content_type::{charset_param, guess_content_type, to_data_uri};
use super::error::{FetchError, FetchResult};
use crate::config::MirrorConfig;
use crate::utils::{BINARY_ACCEPT, FALLBACK_CONTENT_TYPE, TEXT_ACCEPT};

/// Raw bytes of a fetched resource plus the type they should be labelled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryResource {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl BinaryResource {
    /// Encode this resource as a base64 `data:` URI
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        to_data_uri(&self.content_type, &self.bytes)
    }
}

/// HTTP GET wrapper with per-kind timeouts and an optional size cap
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: MirrorConfig,
}

impl Fetcher {
    /// Build a fetcher whose requests identify with `config.user_agent()`
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: MirrorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Fetch a text resource (page, stylesheet, script)
    ///
    /// The body is decoded with the `charset` named in `Content-Type`,
    /// falling back to UTF-8 for a missing or unknown label. A byte order
    /// mark overrides both. Malformed sequences are replaced, not rejected.
    pub async fn fetch_text(&self, url: &str) -> FetchResult<String> {
        let response = self
            .get(url, self.config.text_timeout(), TEXT_ACCEPT)
            .await?;

        let encoding = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(charset_param)
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);

        let body = self.read_body(url, response).await?;
        let (text, used, had_errors) = encoding.decode(&body);
        if had_errors {
            log::debug!("Malformed {} sequences in {url} were replaced", used.name());
        }

        log::debug!("Fetched {} bytes of {} text from {url}", body.len(), used.name());
        Ok(text.into_owned())
    }

    /// Fetch a binary resource (image, font, anything behind CSS `url()`)
    ///
    /// The content type is the response's `Content-Type` header verbatim,
    /// else a guess from the URL extension, else `application/octet-stream`.
    pub async fn fetch_binary(&self, url: &str) -> FetchResult<BinaryResource> {
        let response = self
            .get(url, self.config.binary_timeout(), BINARY_ACCEPT)
            .await?;

        let declared = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string);

        let bytes = self.read_body(url, response).await?;

        let content_type = declared.unwrap_or_else(|| {
            guess_content_type(url)
                .unwrap_or(FALLBACK_CONTENT_TYPE)
                .to_string()
        });

        log::debug!("Fetched {} bytes of {content_type} from {url}", bytes.len());
        Ok(BinaryResource {
            bytes,
            content_type,
        })
    }

    async fn get(&self, url: &str, timeout: Duration, accept: &str) -> FetchResult<Response> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .timeout(timeout)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }

    /// Stream the body into memory, enforcing `max_resource_bytes` if set
    async fn read_body(&self, url: &str, response: Response) -> FetchResult<Vec<u8>> {
        let limit = self.config.max_resource_bytes();

        // Reject before downloading when the server announces the size
        if let Some(limit) = limit
            && response.content_length().unwrap_or(0) > limit as u64
        {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                limit,
            });
        }

        let mut buffer = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|source| FetchError::Body {
                url: url.to_string(),
                source,
            })?;

            if let Some(limit) = limit
                && buffer.len() + chunk.len() > limit
            {
                return Err(FetchError::TooLarge {
                    url: url.to_string(),
                    limit,
                });
            }

            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer)
    }
}
