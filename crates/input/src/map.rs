//! Key mapping from terminal events to single characters.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::INTERRUPT_KEY;

/// Map a key event to the character the game sees.
///
/// Only presses count; releases and auto-repeats are dropped. Ctrl-C becomes
/// ETX, the byte a raw-mode terminal would deliver for it.
pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(INTERRUPT_KEY)
        }
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_jump_key() {
        assert_eq!(key_to_char(press(KeyCode::Char(' '))), Some(' '));
        assert_eq!(
            key_to_char(press(KeyCode::Char(' '))).and_then(GameAction::from_key),
            Some(GameAction::Jump)
        );
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Char('Q')),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(
                key_to_char(key).and_then(GameAction::from_key),
                Some(GameAction::Quit)
            );
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(key_to_char(press(KeyCode::Char('x'))).and_then(GameAction::from_key), None);
        assert_eq!(key_to_char(press(KeyCode::Up)), None);
        assert_eq!(key_to_char(press(KeyCode::Esc)), None);
    }

    #[test]
    fn test_release_is_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_to_char(release), None);
    }
}
