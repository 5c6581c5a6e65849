use crate::domain::models::{Mode, SourceOperation};

/// How the palette sources and re-ranks candidates while a mode is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModePolicy {
    pub source: SourceOperation,
    /// Append the fixed browser actions to the fetched list.
    pub merge_fixed_actions: bool,
    /// The fetch is slow enough that the list shows a loading state.
    pub shows_loading: bool,
    /// Query changes re-rank after the debounce window instead of per keystroke.
    pub debounce_queries: bool,
}

#[must_use]
pub fn policy(mode: Mode) -> ModePolicy {
    match mode {
        Mode::Default => ModePolicy {
            source: SourceOperation::ListOpenTabs,
            merge_fixed_actions: true,
            shows_loading: false,
            debounce_queries: false,
        },
        Mode::Bookmarks => ModePolicy {
            source: SourceOperation::ListBookmarks,
            merge_fixed_actions: false,
            shows_loading: false,
            debounce_queries: true,
        },
        Mode::History => ModePolicy {
            source: SourceOperation::ListHistory,
            merge_fixed_actions: false,
            shows_loading: true,
            debounce_queries: true,
        },
    }
}

#[must_use]
pub fn resolve_source(mode: Mode) -> SourceOperation {
    policy(mode).source
}

/// Resolves a raw mode identifier; unknown or empty ids list open tabs.
#[must_use]
pub fn resolve_source_id(id: &str) -> SourceOperation {
    resolve_source(Mode::from_id(id))
}
