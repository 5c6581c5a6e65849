use super::action::FetchTicket;
use super::fixed_actions::fixed_actions;
use super::keymap::KeyMap;
use crate::config::PaletteConfig;
use crate::domain::models::{ActionItem, Mode, ScoredActionItem};
use crate::domain::ranking::Ranker;
use crate::domain::similarity::{NucleoSimilarity, Similarity};
use std::sync::Arc;
use std::time::Duration;

/// Everything the rendering side reads. Mutated only by the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaletteSession {
    pub open: bool,
    pub query: String,
    pub selected_index: usize,
    pub mode: Mode,
    pub results: Vec<ScoredActionItem>,
    pub loading: bool,
    pub raw_items: Vec<ActionItem>,
}

impl PaletteSession {
    pub fn selected(&self) -> Option<&ScoredActionItem> {
        self.results.get(self.selected_index)
    }

    /// Footer counts as `(shown, total)`.
    pub fn counts(&self) -> (usize, usize) {
        let total = self.raw_items.len();
        (self.results.len().min(total), total)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    // --- Session (the only thing renderers see) ---
    pub session: PaletteSession,
    pub should_quit: bool,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub ranker: Ranker,
    pub debounce: Duration,
    pub fixed_actions: Vec<ActionItem>,

    // --- Async bookkeeping ---
    // Sequences survive close so replies from a previous opening are stale too.
    pub(crate) fetch_seq: u64,
    pub(crate) pending_fetch: Option<FetchTicket>,
    pub(crate) rerank_seq: u64,
    pub(crate) pending_rerank: Option<u64>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &PaletteConfig) -> Self {
        Self::with_similarity(config, Arc::new(NucleoSimilarity))
    }

    #[must_use]
    pub fn with_similarity(config: &PaletteConfig, similarity: Arc<dyn Similarity>) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            ranker: Ranker::new(config.min_match, similarity),
            debounce: Duration::from_millis(config.debounce_ms),
            ..Default::default()
        }
    }

    pub fn pending_fetch(&self) -> Option<FetchTicket> {
        self.pending_fetch
    }

    pub fn pending_rerank(&self) -> Option<u64> {
        self.pending_rerank
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = PaletteConfig::default();
        Self {
            session: PaletteSession::default(),
            should_quit: false,
            keymap: Arc::new(KeyMap::default()),
            ranker: Ranker::default(),
            debounce: Duration::from_millis(config.debounce_ms),
            fixed_actions: fixed_actions(),
            fetch_seq: 0,
            pending_fetch: None,
            rerank_seq: 0,
            pending_rerank: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_clamp_to_total() {
        let mut session = PaletteSession::default();
        assert_eq!(session.counts(), (0, 0));

        session.raw_items = vec![ActionItem::new("a"), ActionItem::new("b")];
        session.results = vec![ScoredActionItem::unscored(ActionItem::new("a"))];
        assert_eq!(session.counts(), (1, 2));
    }

    #[test]
    fn test_new_reads_config() {
        let config = PaletteConfig {
            min_match: 3,
            debounce_ms: 50,
            ..Default::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.ranker.min_match, 3);
        assert_eq!(state.debounce, Duration::from_millis(50));
        assert!(!state.session.open);
    }
}
