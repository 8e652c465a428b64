//! Trait definition for pluggable keyword sources.
//!
//! A source provides the two logical fetch operations the orchestrator
//! fans out to: suggestion keywords and direct shortcuts. Implementations
//! are fail-soft by contract — both operations return a page, never an
//! error, so a broken backend can never block the search box.

use std::future::Future;

use crate::config::{SourceKind, SuggestConfig};
use crate::error::SuggestError;
use crate::sources::{FixtureSource, HttpSource};
use crate::types::{DirectEntry, PagedResult, SuggestionKeyword};

/// A pluggable backend for autocomplete keyword data.
///
/// Implementors own their error handling: any internal failure degrades
/// to [`PagedResult::empty`] (fail-soft), logged rather than propagated.
/// All implementations must be `Send + Sync` so both fetches can run
/// concurrently from spawned tasks.
pub trait SuggestSource: Send + Sync {
    /// Fetch up to `max_count` suggestion keywords for `query`.
    fn fetch_suggestions(
        &self,
        query: &str,
        max_count: usize,
    ) -> impl Future<Output = PagedResult<SuggestionKeyword>> + Send;

    /// Fetch the direct navigational shortcuts for `query`.
    fn fetch_direct(&self, query: &str) -> impl Future<Output = PagedResult<DirectEntry>> + Send;
}

/// A source selected at runtime from [`SuggestConfig::source`].
///
/// One enum dispatching to the concrete implementations, so callers can
/// switch backends by configuration without generics at the boundary.
#[derive(Debug, Clone)]
pub enum AnySource {
    /// The real keyword API over HTTP.
    Http(HttpSource),
    /// Built-in fixture data.
    Fixture(FixtureSource),
}

/// Build the configured source.
///
/// # Errors
///
/// Returns [`SuggestError::Config`] when the HTTP source is selected but
/// the base URL is malformed.
pub fn source_from_config(config: &SuggestConfig) -> Result<AnySource, SuggestError> {
    match config.source {
        SourceKind::Http => Ok(AnySource::Http(HttpSource::new(config)?)),
        SourceKind::Fixture => Ok(AnySource::Fixture(FixtureSource::new())),
    }
}

impl SuggestSource for AnySource {
    async fn fetch_suggestions(
        &self,
        query: &str,
        max_count: usize,
    ) -> PagedResult<SuggestionKeyword> {
        match self {
            Self::Http(source) => source.fetch_suggestions(query, max_count).await,
            Self::Fixture(source) => source.fetch_suggestions(query, max_count).await,
        }
    }

    async fn fetch_direct(&self, query: &str) -> PagedResult<DirectEntry> {
        match self {
            Self::Http(source) => source.fetch_direct(query).await,
            Self::Fixture(source) => source.fetch_direct(query).await,
        }
    }
}
