//! # portal-suggest
//!
//! Autocomplete search pipeline for a job-portal site header.
//!
//! This crate implements the non-presentational core of the header's
//! search box: it validates typed keywords, debounces the keystroke
//! stream, fans one query out to two keyword sources concurrently
//! (suggestion keywords and direct navigational shortcuts), merges and
//! ranks the results deterministically, and publishes state through
//! typed channels. Rendering, routing, and the rest of the header chrome
//! live elsewhere and consume those channels.
//!
//! ## Design
//!
//! - Two-tier ranking: substring matches first, backend-provided related
//!   terms after, stable within each tier, first-wins dedup
//! - Fail-soft fetches: a broken suggestion backend degrades to an empty
//!   panel, never an error in the search box
//! - Monotonic result application: a stale response belonging to a
//!   superseded keystroke is dropped, never published
//! - Cancellable debounce windows for searching (100 ms) and for hiding
//!   the panel after focus loss (150 ms)
//! - Bounded recent-search history (five unique entries, newest first)
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> portal_suggest::Result<()> {
//! let config = portal_suggest::SuggestConfig::default();
//! let combined = portal_suggest::search("개발자", &config).await?;
//! for suggestion in &combined.suggestions {
//!     println!("{}", suggestion.keyword);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod gateway;
pub mod orchestrator;
pub mod recent;
pub mod session;
pub mod source;
pub mod sources;
pub mod types;
pub mod validate;

pub use config::{SourceKind, SuggestConfig};
pub use error::{Result, SuggestError};
pub use recent::RecentSearchStore;
pub use session::{SearchSession, SessionEvent, SessionState};
pub use source::{source_from_config, AnySource, SuggestSource};
pub use types::{CombinedResult, DirectEntry, PagedResult, SuggestionKeyword};
pub use validate::is_valid_keyword;

/// Run one orchestrated search with the source selected by `config`.
///
/// Convenience wrapper for one-shot callers that do not need the full
/// debounced session. An invalid keyword short-circuits to an empty
/// result without touching the network, matching the session
/// controller's validation gate.
///
/// # Errors
///
/// Returns [`SuggestError::Config`] for an invalid configuration.
/// Transport failures never surface here — the sources are fail-soft.
pub async fn search(query: &str, config: &SuggestConfig) -> Result<CombinedResult> {
    config.validate()?;
    if !is_valid_keyword(query) {
        return Ok(CombinedResult::empty());
    }
    let source = source_from_config(config)?;
    Ok(orchestrator::orchestrate(&source, query, config.max_count).await)
}
