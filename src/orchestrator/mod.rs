//! Search orchestration: concurrent two-source join, ranking, dedup.
//!
//! Fans out one query to both keyword fetches concurrently, tier-ranks
//! and deduplicates the suggestions, and returns one combined result.
//! Infallible by construction: both sources are fail-soft, so the worst
//! case is an empty result, never an error.

pub mod rank;
pub mod search;

pub use search::orchestrate;
