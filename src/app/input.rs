use crate::app::{
    action::{Action, Direction},
    keymap::key_matches,
    state::AppState,
};
use crate::domain::models::Mode;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event, app_state: &AppState) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let keymap = &app_state.keymap;
    if key_matches(&keymap.quit, &key) {
        return Some(Action::Quit);
    }
    if key_matches(&keymap.toggle, &key) {
        return Some(Action::Toggle);
    }

    let session = &app_state.session;
    if !session.open {
        return None;
    }
    if key_matches(&keymap.bookmarks, &key) {
        return Some(toggle_mode(session.mode, Mode::Bookmarks));
    }
    if key_matches(&keymap.history, &key) {
        return Some(toggle_mode(session.mode, Mode::History));
    }

    match key.code {
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::Enter => Some(Action::Execute),
        KeyCode::Up => Some(Action::Navigate(Direction::Prev)),
        KeyCode::Down => Some(Action::Navigate(Direction::Next)),
        KeyCode::Backspace => {
            if session.query.is_empty() {
                (!session.mode.is_default()).then_some(Action::BackspaceAtEmptyQuery)
            } else {
                let mut query = session.query.clone();
                query.pop();
                Some(Action::QueryChanged(query))
            }
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut query = session.query.clone();
            query.push(c);
            Some(Action::QueryChanged(query))
        }
        _ => None,
    }
}

fn toggle_mode(current: Mode, target: Mode) -> Action {
    if current == target {
        Action::ClearMode
    } else {
        Action::SetMode(target)
    }
}
