use super::{
    action::{Action, Direction, FetchTicket},
    command::Command,
    fixed_actions::{merge_fixed_actions, OPEN_TAB},
    modes::policy,
    state::{AppState, PaletteSession},
};
use crate::domain::models::{ActionItem, ExecuteRequest, Mode, Target};
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            Vec::new()
        }

        // --- Lifecycle ---
        Action::Toggle => {
            if state.session.open {
                close(state)
            } else {
                state.session = PaletteSession {
                    open: true,
                    ..Default::default()
                };
                enter_mode(state, Mode::Default)
            }
        }
        Action::Dismiss => {
            if state.session.open {
                close(state)
            } else {
                Vec::new()
            }
        }

        // --- Query ---
        Action::QueryChanged(text) => {
            if !state.session.open {
                return Vec::new();
            }
            state.session.query = text;
            state.session.selected_index = 0;
            if policy(state.session.mode).debounce_queries {
                state.rerank_seq += 1;
                let token = state.rerank_seq;
                state.pending_rerank = Some(token);
                debug!(token, query_len = state.session.query.len(), "Rerank scheduled");
                vec![Command::ScheduleRerank {
                    token,
                    delay: state.debounce,
                }]
            } else {
                rerank(state);
                Vec::new()
            }
        }
        Action::RerankDue(token) => {
            if state.session.open && state.pending_rerank == Some(token) {
                state.pending_rerank = None;
                debug!(token, "Rerank fired");
                rerank(state);
            } else {
                debug!(token, "Ignoring superseded rerank");
            }
            Vec::new()
        }

        // --- Navigation ---
        Action::Navigate(direction) => {
            let len = state.session.results.len();
            if len > 0 {
                let delta = match direction {
                    Direction::Next => 1,
                    Direction::Prev => -1,
                };
                state.session.selected_index =
                    (state.session.selected_index as isize + delta).rem_euclid(len as isize)
                        as usize;
            }
            Vec::new()
        }
        Action::SelectIndex(idx) => {
            if idx != state.session.selected_index && idx < state.session.results.len() {
                state.session.selected_index = idx;
            }
            Vec::new()
        }

        // --- Execution ---
        Action::Execute => {
            if !state.session.open {
                return Vec::new();
            }
            let Some(item) = state.session.selected().map(|r| r.item.clone()) else {
                return Vec::new();
            };
            if let Some(mode) = item.mode_trigger {
                return enter_mode(state, mode);
            }
            let request = execute_request(&item);
            info!(operation = %request.operation, "Dispatching execute");
            // Close first so a repeated Enter finds nothing to run.
            let mut commands = close(state);
            commands.insert(0, Command::Execute(request));
            commands
        }

        // --- Modes ---
        Action::SetMode(mode) => {
            if state.session.open {
                enter_mode(state, mode)
            } else {
                Vec::new()
            }
        }
        Action::ClearMode => {
            if state.session.open && !state.session.mode.is_default() {
                enter_mode(state, Mode::Default)
            } else {
                Vec::new()
            }
        }
        Action::BackspaceAtEmptyQuery => {
            if state.session.open
                && state.session.query.is_empty()
                && !state.session.mode.is_default()
            {
                enter_mode(state, Mode::Default)
            } else {
                Vec::new()
            }
        }

        // --- Async results ---
        Action::ItemsFetched(ticket, mut items) => {
            if !state.session.open || state.pending_fetch != Some(ticket) {
                debug!(seq = ticket.seq, mode = %ticket.mode, "Discarding stale fetch");
                return Vec::new();
            }
            if policy(ticket.mode).merge_fixed_actions {
                merge_fixed_actions(&mut items, &state.fixed_actions);
            }
            info!(seq = ticket.seq, mode = %ticket.mode, count = items.len(), "Fetch applied");
            let session = &mut state.session;
            session.results = state.ranker.rank(&items, &session.query);
            session.raw_items = items;
            session.loading = false;
            if session.selected_index >= session.results.len() {
                session.selected_index = 0;
            }
            state.pending_fetch = None;
            Vec::new()
        }
    }
}

fn rerank(state: &mut AppState) {
    let session = &mut state.session;
    session.results = state.ranker.rank(&session.raw_items, &session.query);
    session.selected_index = 0;
}

/// Resets query, selection and the cached list for `mode`, then issues a
/// tagged fetch for its source.
fn enter_mode(state: &mut AppState, mode: Mode) -> Vec<Command> {
    let mut commands = cancel_rerank(state);
    let session = &mut state.session;
    session.mode = mode;
    session.query.clear();
    session.selected_index = 0;
    session.results.clear();
    session.raw_items.clear();
    session.loading = policy(mode).shows_loading;

    state.fetch_seq += 1;
    let ticket = FetchTicket {
        seq: state.fetch_seq,
        mode,
    };
    state.pending_fetch = Some(ticket);
    info!(seq = ticket.seq, %mode, "Fetch issued");
    commands.push(Command::Fetch(ticket));
    commands
}

fn close(state: &mut AppState) -> Vec<Command> {
    let commands = cancel_rerank(state);
    state.session = PaletteSession::default();
    state.pending_fetch = None;
    debug!("Palette closed");
    commands
}

fn cancel_rerank(state: &mut AppState) -> Vec<Command> {
    match state.pending_rerank.take() {
        Some(token) => {
            debug!(token, "Rerank cancelled");
            vec![Command::CancelRerank]
        }
        None => Vec::new(),
    }
}

fn execute_request(item: &ActionItem) -> ExecuteRequest {
    let target = match (&item.id, &item.url) {
        (Some(id), _) => Target::Tab(id.clone()),
        (None, Some(url)) => Target::Url(url.clone()),
        (None, None) => Target::None,
    };
    ExecuteRequest {
        operation: item.action.clone().unwrap_or_else(|| OPEN_TAB.to_string()),
        target,
    }
}
