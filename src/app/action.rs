use crate::domain::models::{ActionItem, Mode};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Tags a fetch with the mode it was issued for and a sequence number, so a
/// response that arrives after the session moved on can be recognised.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- Runtime ---
    Quit,

    // --- Palette lifecycle ---
    Toggle,  // Host shortcut or extension icon
    Dismiss, // Esc

    // --- Query & navigation ---
    QueryChanged(String),
    Navigate(Direction),   // ArrowUp / ArrowDown
    SelectIndex(usize),    // Pointer hover
    Execute,               // Enter
    SetMode(Mode),         // Tab, trigger key, or a mode-trigger item
    ClearMode,             // Leave a command mode
    BackspaceAtEmptyQuery, // Steps back out of a mode

    // --- Async results ---
    ItemsFetched(FetchTicket, Vec<ActionItem>),
    RerankDue(u64),
}
