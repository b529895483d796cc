//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(GameAction::Rotate),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::Drop),
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::HardDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Char('A')), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Char('l')), Some(GameAction::MoveRight));
    }

    #[test]
    fn test_rotate_and_drop_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(key(KeyCode::Char('w')), Some(GameAction::Rotate));
        assert_eq!(key(KeyCode::Down), Some(GameAction::Drop));
        assert_eq!(key(KeyCode::Char('J')), Some(GameAction::Drop));
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(key(KeyCode::Enter), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Tab), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
