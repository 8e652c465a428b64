//! Bounded, deduplicated recent-search history.

/// Maximum number of remembered queries.
const CAPACITY: usize = 5;

/// Most-recent-first history of accepted queries, capped at five unique
/// entries. In-memory only; lives as long as the owning session.
#[derive(Debug, Clone, Default)]
pub struct RecentSearchStore {
    entries: Vec<String>,
}

impl RecentSearchStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `query` as the most recent search.
    ///
    /// A duplicate of an existing entry is a no-op: the entry keeps its
    /// current position. A genuinely new query is prepended; the oldest
    /// entry is evicted from the tail past capacity.
    pub fn add(&mut self, query: &str) {
        if self.entries.iter().any(|entry| entry == query) {
            return;
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(CAPACITY);
    }

    /// Forget all remembered queries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The remembered queries, most recent first.
    pub fn list(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// True when nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let mut store = RecentSearchStore::new();
        store.add("a");
        store.add("b");
        assert_eq!(store.list(), vec!["b", "a"]);
    }

    #[test]
    fn overflow_evicts_the_oldest() {
        let mut store = RecentSearchStore::new();
        for query in ["a", "b", "c", "d", "e", "f"] {
            store.add(query);
        }
        assert_eq!(store.list(), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let mut store = RecentSearchStore::new();
        for query in ["a", "b", "c", "d", "e", "f"] {
            store.add(query);
        }
        store.add("d");
        assert_eq!(store.list(), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn clear_empties_immediately() {
        let mut store = RecentSearchStore::new();
        store.add("a");
        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn new_store_is_empty() {
        assert!(RecentSearchStore::new().is_empty());
    }
}
