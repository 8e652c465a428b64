//! HTTP request gateway for the keyword API.
//!
//! One GET per call, a hard per-request deadline that aborts the transfer,
//! and typed error mapping. No retries: retry policy, if any, belongs to
//! the caller. Transport errors are classified so the source layer can
//! distinguish a timeout from a refused connection or a bad payload.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::SuggestConfig;
use crate::error::SuggestError;

/// A configured HTTP gateway bound to one keyword-API base URL.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base: String,
    timeout_ms: u64,
}

impl Gateway {
    /// Build a gateway from the pipeline configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Config`] if `base_url` is not an absolute
    /// URL, or [`SuggestError::Network`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &SuggestConfig) -> Result<Self, SuggestError> {
        if Url::parse(&config.base_url).is_err() {
            return Err(SuggestError::Config(format!(
                "base_url is not an absolute URL: {}",
                config.base_url
            )));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SuggestError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        })
    }

    /// Issue a single GET against `path` and decode the JSON response.
    ///
    /// Query parameters with a `None` value are omitted from the URL.
    ///
    /// # Errors
    ///
    /// - [`SuggestError::Timeout`] when the deadline elapses; the
    ///   underlying transfer is aborted, not merely ignored.
    /// - [`SuggestError::HttpStatus`] for any non-2xx response.
    /// - [`SuggestError::Network`] for transport-level failures.
    /// - [`SuggestError::Decode`] when the body is not the expected JSON.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<T, SuggestError> {
        let url = build_url(&self.base, path, params)?;
        tracing::trace!(%url, "keyword API GET");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport_error(e))?;
        tracing::trace!(bytes = body.len(), "keyword API response received");

        serde_json::from_str(&body).map_err(|e| SuggestError::Decode(e.to_string()))
    }

    fn classify_transport_error(&self, err: reqwest::Error) -> SuggestError {
        if err.is_timeout() {
            SuggestError::Timeout(self.timeout_ms)
        } else {
            SuggestError::Network(err.to_string())
        }
    }
}

/// Build the request URL: base + path, with non-`None` query parameters
/// appended in order.
///
/// Extracted as a separate function for testability.
fn build_url(
    base: &str,
    path: &str,
    params: &[(&str, Option<String>)],
) -> Result<Url, SuggestError> {
    let mut url = Url::parse(&format!("{base}{path}"))
        .map_err(|e| SuggestError::Config(format!("invalid request URL: {e}")))?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            if let Some(value) = value {
                pairs.append_pair(key, value);
            }
        }
    }
    Ok(url)
}
