//! Core types for the autocomplete wire contract and merged results.

use serde::{Deserialize, Serialize};

/// One autocomplete candidate returned by the suggestion backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionKeyword {
    /// The suggested query text.
    pub keyword: String,
    /// Classifies the suggestion's origin (e.g. a job-category code).
    pub feature_code: String,
    /// Human-readable label for the feature code, when the backend sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

/// A hard navigational shortcut tied to a destination URL, distinct from
/// a text suggestion. Direct entries come pre-ranked by the backend and
/// are never re-ordered or truncated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectEntry {
    /// Backend identifier for the shortcut.
    pub id: String,
    /// Display text, e.g. a campaign or company name.
    pub content: String,
    /// Destination URL raised on selection.
    pub link_url: String,
}

/// Paginated response envelope used by both keyword endpoints.
///
/// Only `content` is consumed downstream; the pagination counters are
/// carried for completeness of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// The page's items.
    pub content: Vec<T>,
    /// Requested page size.
    pub page_size: u32,
    /// Zero-based page index.
    pub page_number: u32,
    /// Total matching items across all pages.
    pub total_elements: u64,
    /// Total page count.
    pub total_pages: u32,
}

impl<T> PagedResult<T> {
    /// An empty page with all counters zeroed. The fail-soft fallback
    /// shape used when a fetch cannot be completed.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            page_size: 0,
            page_number: 0,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

/// The merged output of one orchestrated search: ranked suggestions plus
/// pass-through direct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedResult {
    /// Tier-ranked, deduplicated, truncated suggestion keywords.
    pub suggestions: Vec<SuggestionKeyword>,
    /// Direct entries exactly as the backend returned them.
    pub direct: Vec<DirectEntry>,
}

impl CombinedResult {
    /// The safe fallback: no suggestions, no direct entries.
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            direct: Vec::new(),
        }
    }

    /// True when both halves are empty.
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty() && self.direct.is_empty()
    }
}

/// Opaque handle identifying one in-flight orchestrated search.
///
/// Minted from a monotonic counter by the session controller; a response
/// is applied only while its token is still the latest one issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(pub(crate) u64);
