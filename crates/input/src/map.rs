//! Key mapping from terminal events to player intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to a gameplay intent. Quit keys are handled by [`should_quit`].
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Intent::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::MoveDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::MoveRight)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Pause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Intent::MoveUp));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Intent::MoveDown));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Intent::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Intent::MoveRight));
    }

    #[test]
    fn test_alternate_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('K'))), Some(Intent::MoveUp));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s'))), Some(Intent::MoveDown));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('h'))), Some(Intent::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('D'))), Some(Intent::MoveRight));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('r'))), Some(Intent::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('R'))), Some(Intent::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(Intent::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('r'))));
    }
}
