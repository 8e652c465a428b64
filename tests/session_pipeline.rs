//! End-to-end session controller tests with a scriptable source.
//!
//! No network: the source echoes the query it was asked about, records
//! every call, and can delay individual queries to force out-of-order
//! completion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use portal_suggest::source::SuggestSource;
use portal_suggest::types::{DirectEntry, PagedResult, SuggestionKeyword};
use portal_suggest::{SearchSession, SessionEvent, SessionState, SuggestConfig};
use tokio::time::sleep;

/// Source that answers every query with one echoing suggestion, records
/// the queries it saw, and sleeps per-query configured delays.
#[derive(Debug, Clone, Default)]
struct ScriptedSource {
    delays: HashMap<String, Duration>,
    directs: Vec<DirectEntry>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SuggestSource for ScriptedSource {
    async fn fetch_suggestions(
        &self,
        query: &str,
        _max_count: usize,
    ) -> PagedResult<SuggestionKeyword> {
        self.calls.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            sleep(*delay).await;
        }
        PagedResult {
            content: vec![SuggestionKeyword {
                keyword: format!("{query} 채용"),
                feature_code: "DUTY".into(),
                feature_name: None,
            }],
            ..PagedResult::empty()
        }
    }

    async fn fetch_direct(&self, query: &str) -> PagedResult<DirectEntry> {
        if let Some(delay) = self.delays.get(query) {
            sleep(*delay).await;
        }
        PagedResult {
            content: self.directs.clone(),
            ..PagedResult::empty()
        }
    }
}

fn test_config() -> SuggestConfig {
    SuggestConfig {
        debounce_ms: 30,
        hide_delay_ms: 40,
        ..Default::default()
    }
}

#[tokio::test]
async fn keystroke_burst_triggers_exactly_one_search() {
    let source = ScriptedSource::default();
    let (session, _events) = SearchSession::new(test_config(), source.clone());

    for text in ["j", "ja", "jav"] {
        session.input(text);
        sleep(Duration::from_millis(5)).await;
    }
    sleep(Duration::from_millis(150)).await;

    assert_eq!(source.recorded_calls(), vec!["jav"]);
}

#[tokio::test]
async fn stale_response_never_overwrites_a_newer_query() {
    let mut source = ScriptedSource::default();
    // "ja" resolves long after "java" despite being requested first.
    source.delays.insert("ja".into(), Duration::from_millis(300));
    source.delays.insert("java".into(), Duration::from_millis(10));
    let (session, _events) = SearchSession::new(test_config(), source.clone());
    let rx = session.subscribe();

    session.input("ja");
    // Let the debounce fire so the slow request is actually in flight.
    sleep(Duration::from_millis(60)).await;
    session.input("java");
    sleep(Duration::from_millis(100)).await;

    match &*rx.borrow() {
        SessionState::Ready { query, results } => {
            assert_eq!(query, "java");
            assert_eq!(results.suggestions[0].keyword, "java 채용");
        }
        other => panic!("expected Ready for java, got {other:?}"),
    }

    // The slow "ja" response lands now; it must be dropped silently.
    sleep(Duration::from_millis(300)).await;
    match &*rx.borrow() {
        SessionState::Ready { query, .. } => assert_eq!(query, "java"),
        other => panic!("stale response overwrote state: {other:?}"),
    }
    assert_eq!(source.recorded_calls(), vec!["ja", "java"]);
}

#[tokio::test]
async fn clearing_input_invalidates_the_in_flight_search() {
    let mut source = ScriptedSource::default();
    source.delays.insert("java".into(), Duration::from_millis(100));
    let (session, _events) = SearchSession::new(test_config(), source.clone());
    let rx = session.subscribe();

    session.input("java");
    sleep(Duration::from_millis(60)).await;
    session.input("");
    sleep(Duration::from_millis(200)).await;

    assert!(matches!(*rx.borrow(), SessionState::Idle { .. }));
}

#[tokio::test]
async fn recent_history_is_bounded_and_deduplicated() {
    let source = ScriptedSource::default();
    let (session, _events) = SearchSession::new(test_config(), source);

    for query in ["a", "b", "c", "d", "e", "f"] {
        session.input(query);
        session.submit();
    }
    assert_eq!(session.recent_searches(), vec!["f", "e", "d", "c", "b"]);

    session.input("d");
    session.submit();
    assert_eq!(session.recent_searches(), vec!["f", "e", "d", "c", "b"]);
}

#[tokio::test]
async fn typed_query_direct_selection_end_to_end() {
    let mut source = ScriptedSource::default();
    source.directs = vec![DirectEntry {
        id: "1".into(),
        content: "개발자 공고 바로가기".into(),
        link_url: "/recruit/dev".into(),
    }];
    let (session, mut events) = SearchSession::new(test_config(), source);
    let rx = session.subscribe();

    session.input("개발자");
    sleep(Duration::from_millis(100)).await;

    let entry = match &*rx.borrow() {
        SessionState::Ready { results, .. } => {
            assert_eq!(results.suggestions[0].keyword, "개발자 채용");
            assert_eq!(results.direct.len(), 1);
            results.direct[0].clone()
        }
        other => panic!("expected Ready, got {other:?}"),
    };

    session.select_direct(&entry);
    assert_eq!(
        events.recv().await,
        Some(SessionEvent::Navigate {
            link_url: "/recruit/dev".into()
        })
    );
    assert_eq!(session.recent_searches(), vec!["개발자"]);
    assert!(matches!(*rx.borrow(), SessionState::Idle { .. }));
}

#[tokio::test]
async fn submitting_after_selection_emits_search_events_in_order() {
    let source = ScriptedSource::default();
    let (session, mut events) = SearchSession::new(test_config(), source);

    session.input("백엔드");
    session.select_suggestion("백엔드 개발자");
    session.input("프론트엔드");
    session.submit();

    assert_eq!(
        events.recv().await,
        Some(SessionEvent::Search {
            query: "백엔드 개발자".into()
        })
    );
    assert_eq!(
        events.recv().await,
        Some(SessionEvent::Search {
            query: "프론트엔드".into()
        })
    );
}
