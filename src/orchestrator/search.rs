//! Concurrent two-source orchestration.

use crate::source::SuggestSource;
use crate::types::CombinedResult;

use super::rank::rank_suggestions;

/// Run both keyword fetches concurrently and merge the outcome.
///
/// This is a join, not a race: both fetches complete (or fail-soft to an
/// empty page) before the combined result is produced. Suggestions are
/// tier-ranked, deduplicated, and truncated to `max_count`; direct
/// entries pass through untouched — they come pre-ranked and pre-limited
/// by their own backend contract.
///
/// Never errors and never panics; with both sources down the result is
/// [`CombinedResult::empty`].
pub async fn orchestrate<S: SuggestSource>(
    source: &S,
    query: &str,
    max_count: usize,
) -> CombinedResult {
    let (suggestion_page, direct_page) = futures::future::join(
        source.fetch_suggestions(query, max_count),
        source.fetch_direct(query),
    )
    .await;

    tracing::debug!(
        suggestions = suggestion_page.content.len(),
        directs = direct_page.content.len(),
        "keyword sources joined"
    );

    CombinedResult {
        suggestions: rank_suggestions(suggestion_page.content, query, max_count),
        direct: direct_page.content,
    }
}
