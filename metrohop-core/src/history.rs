//! Recent route searches, newest first

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MAX_RECENT_SEARCHES;

/// One remembered source to destination lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub source: String,
    pub destination: String,
    pub timestamp: DateTime<Utc>,
}

/// A short most-recent-first log of searched station pairs.
///
/// Repeating a pair moves it to the front instead of adding a second
/// entry; the log never grows past [`MAX_RECENT_SEARCHES`].
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Vec<SearchEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, source: &str, destination: &str) {
        self.entries
            .retain(|entry| !(entry.source == source && entry.destination == destination));
        self.entries.insert(
            0,
            SearchEntry {
                source: source.to_string(),
                destination: destination.to_string(),
                timestamp: Utc::now(),
            },
        );
        self.entries.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(history: &SearchHistory) -> Vec<(&str, &str)> {
        history
            .entries()
            .iter()
            .map(|entry| (entry.source.as_str(), entry.destination.as_str()))
            .collect()
    }

    #[test]
    fn newest_search_comes_first() {
        let mut history = SearchHistory::new();
        history.record("a", "b");
        history.record("c", "d");
        assert_eq!(pairs(&history), vec![("c", "d"), ("a", "b")]);
    }

    #[test]
    fn repeating_a_pair_moves_it_to_the_front() {
        let mut history = SearchHistory::new();
        history.record("a", "b");
        history.record("c", "d");
        history.record("a", "b");
        assert_eq!(pairs(&history), vec![("a", "b"), ("c", "d")]);
    }

    #[test]
    fn reversed_pair_is_a_distinct_search() {
        let mut history = SearchHistory::new();
        history.record("a", "b");
        history.record("b", "a");
        assert_eq!(pairs(&history), vec![("b", "a"), ("a", "b")]);
    }

    #[test]
    fn log_is_capped() {
        let mut history = SearchHistory::new();
        for index in 0..8 {
            let source = format!("s{index}");
            history.record(&source, "dest");
        }
        assert_eq!(history.entries().len(), MAX_RECENT_SEARCHES);
        assert_eq!(history.entries()[0].source, "s7");
        assert_eq!(
            history.entries()[MAX_RECENT_SEARCHES - 1].source,
            format!("s{}", 8 - MAX_RECENT_SEARCHES)
        );
    }

    #[test]
    fn clear_empties_the_log() {
        let mut history = SearchHistory::new();
        history.record("a", "b");
        history.clear();
        assert!(history.entries().is_empty());
    }
}
