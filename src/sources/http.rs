//! HTTP-backed keyword source — the fail-soft boundary.
//!
//! Calls the keyword API through [`Gateway`] and converts every gateway
//! error into an empty page. A broken suggestion backend must never block
//! the input field or surface an error to the end user; the panel simply
//! shows no suggestions.

use crate::config::{SuggestConfig, AUTOCOMPLETE_PATH, DIRECT_PATH};
use crate::error::SuggestError;
use crate::gateway::Gateway;
use crate::source::SuggestSource;
use crate::types::{DirectEntry, PagedResult, SuggestionKeyword};

/// Keyword source backed by the real autocomplete API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    gateway: Gateway,
}

impl HttpSource {
    /// Build an HTTP source from the pipeline configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Config`] for a malformed base URL — the
    /// one failure that is surfaced loudly, since it is a configuration
    /// defect rather than a transient network condition.
    pub fn new(config: &SuggestConfig) -> Result<Self, SuggestError> {
        Ok(Self {
            gateway: Gateway::new(config)?,
        })
    }

    /// Build an HTTP source around an existing gateway.
    pub fn with_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

impl SuggestSource for HttpSource {
    async fn fetch_suggestions(
        &self,
        query: &str,
        max_count: usize,
    ) -> PagedResult<SuggestionKeyword> {
        let params = [
            ("keyword", Some(query.to_string())),
            ("maxCount", Some(max_count.to_string())),
        ];
        match self.gateway.get(AUTOCOMPLETE_PATH, &params).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(error = %err, "autocomplete fetch failed, degrading to empty");
                PagedResult::empty()
            }
        }
    }

    async fn fetch_direct(&self, query: &str) -> PagedResult<DirectEntry> {
        let params = [("keyword", Some(query.to_string()))];
        match self.gateway.get(DIRECT_PATH, &params).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(error = %err, "direct-shortcut fetch failed, degrading to empty");
                PagedResult::empty()
            }
        }
    }
}
