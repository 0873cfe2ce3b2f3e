//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key reference shown next to the board.
pub const HELP_TEXT: &[&str] = &[
    "HJKL/Arrows   move",
    "Space         reveal the tile",
    "U/Z           flag the tile",
    "I/X           reveal surrounding tiles",
    "              (all surrounding mines flagged)",
    "g/G           top / bottom row",
    "0,^/$         leftmost / rightmost column",
    "R             restart the game",
    "Q             quit the game",
];

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::MoveDown),

        // Jumps (case matters: g/G are distinct)
        KeyCode::Char('g') | KeyCode::Home => Some(GameAction::Top),
        KeyCode::Char('G') | KeyCode::End => Some(GameAction::Bottom),
        KeyCode::Char('0') | KeyCode::Char('^') => Some(GameAction::LineStart),
        KeyCode::Char('$') => Some(GameAction::LineEnd),

        // Board actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Reveal),
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(GameAction::Flag)
        }
        KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::GroupReveal)
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::MoveUp)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(GameAction::MoveUp)
        );
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(GameAction::Top)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('G'))),
            Some(GameAction::Bottom)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(GameAction::LineStart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('^'))),
            Some(GameAction::LineStart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('$'))),
            Some(GameAction::LineEnd)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Reveal)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(GameAction::Flag)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('z'))),
            Some(GameAction::Flag)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('i'))),
            Some(GameAction::GroupReveal)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(GameAction::GroupReveal)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('p'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
