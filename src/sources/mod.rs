//! Keyword source implementations.
//!
//! Each module provides a struct implementing [`crate::source::SuggestSource`]:
//! the HTTP-backed production source and a static fixture fallback.

pub mod fixture;
pub mod http;

pub use fixture::FixtureSource;
pub use http::HttpSource;
