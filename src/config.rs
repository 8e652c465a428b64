//! Pipeline configuration with sensible defaults.
//!
//! [`SuggestConfig`] controls which source backs the pipeline, where the
//! keyword API lives, request limits, and the two debounce windows. The
//! defaults mirror the production widget's behaviour.

use crate::error::SuggestError;

/// Path of the suggestion-keyword endpoint, relative to the base URL.
pub const AUTOCOMPLETE_PATH: &str = "/v1/keywords/autocompletes";

/// Path of the direct-shortcut endpoint, relative to the base URL.
pub const DIRECT_PATH: &str = "/v1/keywords/directs";

/// Which implementation backs the two keyword fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The real keyword API, reached over HTTP.
    Http,
    /// Built-in fixture data; used when no backend is reachable or wanted.
    Fixture,
}

/// Configuration for the autocomplete pipeline.
///
/// Use [`Default::default()`] for production-equivalent values, or
/// construct with field overrides.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Which source implementation to use.
    pub source: SourceKind,
    /// Absolute URL prefix of the keyword API, up to but not including
    /// the `/v1/...` endpoint paths.
    pub base_url: String,
    /// Maximum suggestions returned per query, after ranking and dedup.
    pub max_count: usize,
    /// Per-request deadline in milliseconds. The transfer is aborted when
    /// it elapses, not merely ignored.
    pub timeout_ms: u64,
    /// Quiet window after the last keystroke before a search fires.
    pub debounce_ms: u64,
    /// Delay before the suggestion panel hides after focus loss; long
    /// enough for a mouse-down selection inside the panel to land first.
    pub hide_delay_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Http,
            base_url: "https://www.example.com/Search/api/display".into(),
            max_count: 10,
            timeout_ms: 10_000,
            debounce_ms: 100,
            hide_delay_ms: 150,
        }
    }
}

impl SuggestConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `max_count` must be greater than 0
    /// - `timeout_ms` must be greater than 0
    /// - `base_url` must parse as an absolute URL
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.max_count == 0 {
            return Err(SuggestError::Config(
                "max_count must be greater than 0".into(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(SuggestError::Config(
                "timeout_ms must be greater than 0".into(),
            ));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(SuggestError::Config(format!(
                "base_url is not an absolute URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
