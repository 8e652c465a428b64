//! Search session controller.
//!
//! Glues the keystroke stream to the pipeline: debounce, validation gate,
//! orchestrated fetch, and monotonic publication of results. State goes
//! out on a `watch` channel, selection/submit signals on an `mpsc`
//! channel — explicit message passing, owned by whatever renders the
//! panel.
//!
//! Result application is monotonic in request order: every accepted
//! keystroke advances a generation counter, a search captures the counter
//! as its [`RequestToken`] when it starts, and a finished search is
//! published only while its token is still the latest. A response to an
//! older query can therefore never overwrite state produced by a newer
//! one, no matter how the network reorders completions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::config::SuggestConfig;
use crate::debounce::Debouncer;
use crate::error::SuggestError;
use crate::orchestrator::orchestrate;
use crate::recent::RecentSearchStore;
use crate::source::{source_from_config, AnySource, SuggestSource};
use crate::types::{CombinedResult, DirectEntry, RequestToken};
use crate::validate::is_valid_keyword;

/// Externally visible pipeline state, published on every transition.
///
/// There is no error state: transport failures are absorbed upstream and
/// surface as `Ready` with empty content.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No active query; `recent` holds the history to show instead.
    Idle {
        /// Recent searches, most recent first, possibly empty.
        recent: Vec<String>,
    },
    /// A keystroke is pending inside the debounce window.
    Debouncing {
        /// The raw input text that armed the timer.
        query: String,
    },
    /// Both fetches are in flight for `query`.
    Loading {
        /// The query being searched.
        query: String,
    },
    /// A combined result is available.
    Ready {
        /// The query the results belong to.
        query: String,
        /// Ranked suggestions and pass-through direct entries.
        results: CombinedResult,
    },
}

/// Selection and submit signals raised to the embedding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A query was committed (form submit or suggestion click).
    Search {
        /// The committed query text.
        query: String,
    },
    /// A direct entry was chosen; navigate to its destination.
    Navigate {
        /// Destination URL of the chosen entry.
        link_url: String,
    },
}

/// One search-box session: owns the debounce timers, the token counter,
/// the recent-search history, and the published state.
///
/// Cheap to clone; clones share the same session.
#[derive(Debug, Clone)]
pub struct SearchSession<S> {
    inner: Arc<Inner<S>>,
}

#[derive(Debug)]
struct Inner<S> {
    config: SuggestConfig,
    source: S,
    /// Current raw input text, as last passed to [`SearchSession::input`].
    query: Mutex<String>,
    recent: Mutex<RecentSearchStore>,
    /// Advances on every accepted keystroke, clear, and selection.
    generation: AtomicU64,
    search_debounce: Debouncer,
    hide_debounce: Debouncer,
    state_tx: watch::Sender<SessionState>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl SearchSession<AnySource> {
    /// Build a session with the source selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Config`] for an invalid configuration.
    pub fn from_config(
        config: SuggestConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), SuggestError> {
        config.validate()?;
        let source = source_from_config(&config)?;
        Ok(Self::new(config, source))
    }
}

impl<S: SuggestSource + 'static> SearchSession<S> {
    /// Build a session around an explicit source.
    ///
    /// Returns the session handle and the receiving end of the selection
    /// event channel. Observe state with [`SearchSession::subscribe`].
    pub fn new(
        config: SuggestConfig,
        source: S,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(SessionState::Idle { recent: Vec::new() });
        let inner = Arc::new(Inner {
            search_debounce: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            hide_debounce: Debouncer::new(Duration::from_millis(config.hide_delay_ms)),
            config,
            source,
            query: Mutex::new(String::new()),
            recent: Mutex::new(RecentSearchStore::new()),
            generation: AtomicU64::new(0),
            state_tx,
            events_tx,
        });
        (Self { inner }, events_rx)
    }

    /// A receiver observing every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state_tx.subscribe()
    }

    /// Feed the current input text after a keystroke.
    ///
    /// Empty (after trimming) text cancels pending work, invalidates any
    /// in-flight search, and goes `Idle` with the recent list. Non-empty
    /// text advances the generation counter, publishes `Debouncing`, and
    /// (re)arms the search debouncer.
    pub fn input(&self, text: &str) {
        *lock(&self.inner.query) = text.to_string();
        if text.trim().is_empty() {
            self.inner.search_debounce.cancel();
            self.inner.invalidate();
            self.inner.publish_idle();
            return;
        }
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.state_tx.send_replace(SessionState::Debouncing {
            query: text.to_string(),
        });
        let inner = Arc::clone(&self.inner);
        let query = text.to_string();
        self.inner
            .search_debounce
            .schedule(async move { Inner::run_search(inner, query).await });
    }

    /// The input field lost focus: hide the panel after the grace window,
    /// leaving time for a mouse-down selection inside it to land first.
    pub fn focus_lost(&self) {
        let inner = Arc::clone(&self.inner);
        self.inner.hide_debounce.schedule(async move {
            inner.invalidate();
            inner.publish_idle();
        });
    }

    /// The input field regained focus; with empty text the recent list
    /// reappears.
    pub fn focus_gained(&self) {
        self.inner.hide_debounce.cancel();
        if lock(&self.inner.query).trim().is_empty() {
            self.inner.publish_idle();
        }
    }

    /// A suggestion keyword was chosen from the panel.
    pub fn select_suggestion(&self, keyword: &str) {
        self.inner.hide_debounce.cancel();
        *lock(&self.inner.query) = keyword.to_string();
        lock(&self.inner.recent).add(keyword);
        let _ = self.inner.events_tx.send(SessionEvent::Search {
            query: keyword.to_string(),
        });
        self.finish_interaction();
    }

    /// A direct entry was chosen: the typed query is remembered, and a
    /// navigation signal carries the entry's destination.
    pub fn select_direct(&self, entry: &DirectEntry) {
        self.inner.hide_debounce.cancel();
        let typed = lock(&self.inner.query).trim().to_string();
        if !typed.is_empty() {
            lock(&self.inner.recent).add(&typed);
        }
        let _ = self.inner.events_tx.send(SessionEvent::Navigate {
            link_url: entry.link_url.clone(),
        });
        self.finish_interaction();
    }

    /// The search form was submitted. A no-op with empty input.
    pub fn submit(&self) {
        let typed = lock(&self.inner.query).trim().to_string();
        if typed.is_empty() {
            return;
        }
        self.inner.hide_debounce.cancel();
        lock(&self.inner.recent).add(&typed);
        let _ = self
            .inner
            .events_tx
            .send(SessionEvent::Search { query: typed });
        self.finish_interaction();
    }

    /// Forget the recent-search history.
    pub fn clear_recent(&self) {
        lock(&self.inner.recent).clear();
        if matches!(&*self.inner.state_tx.borrow(), SessionState::Idle { .. }) {
            self.inner.publish_idle();
        }
    }

    /// The remembered queries, most recent first.
    pub fn recent_searches(&self) -> Vec<String> {
        lock(&self.inner.recent).list()
    }

    fn finish_interaction(&self) {
        self.inner.search_debounce.cancel();
        self.inner.invalidate();
        self.inner.publish_idle();
    }
}

impl<S: SuggestSource + 'static> Inner<S> {
    /// Debounce fire: validate, then run one token-guarded search.
    async fn run_search(inner: Arc<Self>, query: String) {
        if !is_valid_keyword(&query) {
            tracing::trace!("keyword rejected by validator, clearing suggestions");
            inner.invalidate();
            inner.publish_idle();
            return;
        }

        let token = RequestToken(inner.generation.load(Ordering::SeqCst));
        inner
            .state_tx
            .send_replace(SessionState::Loading {
                query: query.clone(),
            });

        let results = orchestrate(&inner.source, &query, inner.config.max_count).await;

        if inner.generation.load(Ordering::SeqCst) == token.0 {
            inner
                .state_tx
                .send_replace(SessionState::Ready { query, results });
        } else {
            tracing::debug!("stale search response dropped");
        }
    }

    /// Make any in-flight search stale.
    fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn publish_idle(&self) {
        let recent = lock(&self.recent).list();
        self.state_tx.send_replace(SessionState::Idle { recent });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
