//! Static fixture source — the offline fallback behind the same trait.
//!
//! Serves a built-in keyword list filtered by case-insensitive substring
//! match, and a small set of direct shortcuts. Useful for demos, tests,
//! and environments without a reachable keyword API. Selected via
//! [`crate::config::SourceKind::Fixture`].

use crate::source::SuggestSource;
use crate::types::{DirectEntry, PagedResult, SuggestionKeyword};

/// `(keyword, feature_code, feature_name)` rows backing the fixture.
const FIXTURE_KEYWORDS: &[(&str, &str, &str)] = &[
    ("개발자", "DUTY", "직무"),
    ("개발자 채용", "DUTY", "직무"),
    ("신입 개발자", "DUTY", "직무"),
    ("디자이너", "DUTY", "직무"),
    ("마케팅", "DUTY", "직무"),
    ("영업", "DUTY", "직무"),
    ("기획", "DUTY", "직무"),
    ("서울", "AREA", "지역"),
    ("경기", "AREA", "지역"),
    ("부산", "AREA", "지역"),
    ("대구", "AREA", "지역"),
    ("신입", "CAREER", "경력"),
    ("경력", "CAREER", "경력"),
    ("인턴", "WORKTYPE", "근무형태"),
    ("정규직", "WORKTYPE", "근무형태"),
    ("계약직", "WORKTYPE", "근무형태"),
];

/// `(id, content, link_url)` rows backing the fixture shortcuts.
const FIXTURE_DIRECTS: &[(&str, &str, &str)] = &[
    ("1", "개발자 공고 바로가기", "/recruit/dev"),
    ("2", "신입 공채 캘린더", "/starter/calendar"),
];

/// Keyword source backed by built-in data; no network, never fails.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource;

impl FixtureSource {
    /// Create the fixture source.
    pub fn new() -> Self {
        Self
    }
}

impl SuggestSource for FixtureSource {
    async fn fetch_suggestions(
        &self,
        query: &str,
        max_count: usize,
    ) -> PagedResult<SuggestionKeyword> {
        let needle = query.trim().to_lowercase();
        let matched: Vec<SuggestionKeyword> = FIXTURE_KEYWORDS
            .iter()
            .filter(|(keyword, _, _)| keyword.to_lowercase().contains(&needle))
            .map(|(keyword, code, name)| SuggestionKeyword {
                keyword: (*keyword).to_string(),
                feature_code: (*code).to_string(),
                feature_name: Some((*name).to_string()),
            })
            .collect();
        page_of(matched, max_count)
    }

    async fn fetch_direct(&self, query: &str) -> PagedResult<DirectEntry> {
        let needle = query.trim().to_lowercase();
        let matched: Vec<DirectEntry> = FIXTURE_DIRECTS
            .iter()
            .filter(|(_, content, _)| content.to_lowercase().contains(&needle))
            .map(|(id, content, link_url)| DirectEntry {
                id: (*id).to_string(),
                content: (*content).to_string(),
                link_url: (*link_url).to_string(),
            })
            .collect();
        let total = matched.len();
        page_of(matched, total)
    }
}

fn page_of<T>(mut matched: Vec<T>, max_count: usize) -> PagedResult<T> {
    let total = matched.len() as u64;
    matched.truncate(max_count);
    PagedResult {
        content: matched,
        page_size: max_count as u32,
        page_number: 0,
        total_elements: total,
        total_pages: u32::from(total > 0),
    }
}
