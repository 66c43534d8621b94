// src/crawl/state.rs
// =============================================================================
// Traversal state for a single crawl.
//
// - frontier: URLs waiting to be fetched, first in first out
// - queued: the same URLs as a set, so "is it already queued?" is O(1)
// - attempted: every concrete URL a request was sent for, success or not
// - found: every URL that answered with 2xx (BTreeSet keeps it sorted)
//
// Nothing outside the crawler owns or mutates this. A new crawl starts with
// a fresh CrawlState, so several crawls can run side by side.
// =============================================================================

use std::collections::{BTreeSet, HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct CrawlState {
    frontier: VecDeque<String>,
    queued: HashSet<String>,
    attempted: HashSet<String>,
    found: BTreeSet<String>,
}

impl CrawlState {
    pub fn new(start_url: &str) -> Self {
        let mut state = Self::default();
        state.enqueue(start_url.to_string());
        state
    }

    /// Takes the oldest queued URL.
    pub fn pop(&mut self) -> Option<String> {
        let url = self.frontier.pop_front()?;
        self.queued.remove(&url);
        Some(url)
    }

    /// Queues `url` unless it was already attempted or is already queued.
    ///
    /// Returns whether it was added.
    pub fn enqueue(&mut self, url: String) -> bool {
        if self.attempted.contains(&url) || self.queued.contains(&url) {
            return false;
        }
        self.queued.insert(url.clone());
        self.frontier.push_back(url);
        true
    }

    /// Records that a request for `url` is about to be sent.
    ///
    /// Returns false if one was already sent, in which case the caller must
    /// not send another.
    pub fn mark_attempted(&mut self, url: &str) -> bool {
        self.attempted.insert(url.to_string())
    }

    pub fn is_attempted(&self, url: &str) -> bool {
        self.attempted.contains(url)
    }

    pub fn record_found(&mut self, url: String) {
        self.found.insert(url);
    }

    pub fn attempted_count(&self) -> usize {
        self.attempted.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Consumes the state and returns the found URLs, sorted.
    pub fn into_found(self) -> Vec<String> {
        self.found.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_holds_start_url() {
        let mut state = CrawlState::new("https://x.test/");
        assert_eq!(state.frontier_len(), 1);
        assert_eq!(state.pop(), Some("https://x.test/".to_string()));
        assert_eq!(state.pop(), None);
    }

    #[test]
    fn test_frontier_is_fifo() {
        let mut state = CrawlState::default();
        state.enqueue("a".to_string());
        state.enqueue("b".to_string());
        state.enqueue("c".to_string());
        assert_eq!(state.pop().as_deref(), Some("a"));
        assert_eq!(state.pop().as_deref(), Some("b"));
        assert_eq!(state.pop().as_deref(), Some("c"));
    }

    #[test]
    fn test_enqueue_rejects_queued_and_attempted() {
        let mut state = CrawlState::default();
        assert!(state.enqueue("a".to_string()));
        assert!(!state.enqueue("a".to_string()));

        state.mark_attempted("b");
        assert!(!state.enqueue("b".to_string()));
        assert_eq!(state.frontier_len(), 1);
    }

    #[test]
    fn test_popped_url_can_be_queued_again_if_never_attempted() {
        // Attempts are keyed by the concrete candidate URL, not the queued one
        let mut state = CrawlState::default();
        state.enqueue("a".to_string());
        state.pop();
        assert!(state.enqueue("a".to_string()));
    }

    #[test]
    fn test_mark_attempted_only_once() {
        let mut state = CrawlState::default();
        assert!(state.mark_attempted("a"));
        assert!(!state.mark_attempted("a"));
        assert!(state.is_attempted("a"));
        assert_eq!(state.attempted_count(), 1);
    }

    #[test]
    fn test_found_is_sorted_and_unique() {
        let mut state = CrawlState::default();
        state.record_found("c".to_string());
        state.record_found("a".to_string());
        state.record_found("b".to_string());
        state.record_found("a".to_string());
        assert_eq!(state.into_found(), vec!["a", "b", "c"]);
    }
}
