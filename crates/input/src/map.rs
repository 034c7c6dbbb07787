//! Key mapping from terminal events to game intents.

use crate::types::{Direction, SnakeIntent, TetrisIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to tetris intents.
pub fn tetris_intent(key: KeyEvent) -> Option<TetrisIntent> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(TetrisIntent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(TetrisIntent::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(TetrisIntent::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(TetrisIntent::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(TetrisIntent::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(TetrisIntent::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TetrisIntent::Restart),

        _ => None,
    }
}

/// Map keyboard input to snake intents (arrows or WASD).
pub fn snake_intent(key: KeyEvent) -> Option<SnakeIntent> {
    let dir = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(SnakeIntent::Restart),
        _ => return None,
    };
    Some(SnakeIntent::Turn(dir))
}

/// Check if key should quit the game.
///
/// While typing a guess, letters belong to the guess, so only Esc and Ctrl-C quit.
pub fn should_quit(key: KeyEvent, text_mode: bool) -> bool {
    let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl_c || key.code == KeyCode::Esc {
        return true;
    }
    !text_mode && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_tetris_movement_keys() {
        assert_eq!(
            tetris_intent(KeyEvent::from(KeyCode::Left)),
            Some(TetrisIntent::MoveLeft)
        );
        assert_eq!(
            tetris_intent(KeyEvent::from(KeyCode::Char('D'))),
            Some(TetrisIntent::MoveRight)
        );
        assert_eq!(
            tetris_intent(KeyEvent::from(KeyCode::Down)),
            Some(TetrisIntent::SoftDrop)
        );
        assert_eq!(
            tetris_intent(KeyEvent::from(KeyCode::Char('w'))),
            Some(TetrisIntent::Rotate)
        );
    }

    #[test]
    fn test_tetris_action_keys() {
        assert_eq!(
            tetris_intent(KeyEvent::from(KeyCode::Char(' '))),
            Some(TetrisIntent::HardDrop)
        );
        assert_eq!(
            tetris_intent(KeyEvent::from(KeyCode::Char('p'))),
            Some(TetrisIntent::Pause)
        );
        assert_eq!(
            tetris_intent(KeyEvent::from(KeyCode::Char('R'))),
            Some(TetrisIntent::Restart)
        );
        assert_eq!(tetris_intent(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_snake_keys() {
        assert_eq!(
            snake_intent(KeyEvent::from(KeyCode::Up)),
            Some(SnakeIntent::Turn(Direction::Up))
        );
        assert_eq!(
            snake_intent(KeyEvent::from(KeyCode::Char('a'))),
            Some(SnakeIntent::Turn(Direction::Left))
        );
        assert_eq!(
            snake_intent(KeyEvent::from(KeyCode::Char('r'))),
            Some(SnakeIntent::Restart)
        );
        assert_eq!(snake_intent(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q')), false));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), true));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc), true));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true
        ));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x')), false));
    }
}
