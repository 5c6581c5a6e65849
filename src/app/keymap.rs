use crate::config::{parse_key, KeyConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// Configurable bindings. Navigation keys (arrows, Enter, Esc, Backspace)
/// are fixed and handled by the input mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub toggle: KeyEvent,
    pub history: KeyEvent,
    pub bookmarks: KeyEvent,
    pub quit: KeyEvent,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let defaults = KeyConfig::default();
        let bind = |spec: &str, fallback: &str| {
            parse_key(spec).unwrap_or_else(|e| {
                warn!(error = %e, fallback, "Falling back to default key binding");
                parse_key(fallback).unwrap_or_else(|_| KeyEvent::from(KeyCode::Null))
            })
        };
        Self {
            toggle: bind(&config.toggle, &defaults.toggle),
            history: bind(&config.history, &defaults.history),
            bookmarks: bind(&config.bookmarks, &defaults.bookmarks),
            quit: bind(&config.quit, &defaults.quit),
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

/// Compares a binding with an incoming key. Terminals disagree about
/// reporting SHIFT on symbols like `!`, so SHIFT is ignored for characters.
pub fn key_matches(binding: &KeyEvent, event: &KeyEvent) -> bool {
    if binding.code != event.code {
        return false;
    }
    match binding.code {
        KeyCode::Char(_) => {
            let strip = |m: KeyModifiers| m - KeyModifiers::SHIFT;
            strip(binding.modifiers) == strip(event.modifiers)
        }
        _ => binding.modifiers == event.modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.toggle,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)
        );
        assert_eq!(keymap.bookmarks.code, KeyCode::Tab);
        assert_eq!(keymap.history.code, KeyCode::Char('!'));
    }

    #[test]
    fn test_invalid_binding_falls_back() {
        let config = KeyConfig {
            history: "not-a-key".to_string(),
            ..Default::default()
        };
        assert_eq!(KeyMap::from_config(&config).history.code, KeyCode::Char('!'));
    }

    #[test]
    fn test_shift_ignored_for_symbols() {
        let keymap = KeyMap::default();
        let shifted = KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT);
        assert!(key_matches(&keymap.history, &shifted));
        let ctrl = KeyEvent::new(KeyCode::Char('!'), KeyModifiers::CONTROL);
        assert!(!key_matches(&keymap.history, &ctrl));
    }
}
