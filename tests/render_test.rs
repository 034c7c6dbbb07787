//! Views and frame encoding through the facade

use arcade::core::{SimpleRng, SnakeEngine, TetrisEngine};
use arcade::term::{changed_lines, encode_diff_into, encode_full_into, snake_view, tetris_view};
use arcade::types::{Direction, SnakeIntent, BOARD_HEIGHT};

#[test]
fn test_snake_tick_redraws_few_lines() {
    let mut snake = SnakeEngine::new(SimpleRng::new(11));
    let before = snake_view(&snake.snapshot());
    snake.apply_intent(SnakeIntent::Turn(Direction::Up)).unwrap();
    snake.tick();
    let after = snake_view(&snake.snapshot());

    let changed = changed_lines(&before, &after);
    assert!(!changed.is_empty());
    // Head moved between two grid rows; food may have moved too.
    assert!(changed.len() <= 5, "changed: {changed:?}");
}

#[test]
fn test_tetris_frame_encodes() {
    let game = TetrisEngine::new(SimpleRng::new(9));
    let frame = tetris_view(&game.snapshot());
    assert!(frame.len() > BOARD_HEIGHT as usize);

    let mut full = Vec::new();
    encode_full_into(&frame, &mut full).unwrap();
    assert!(String::from_utf8_lossy(&full).contains("TETRIS"));

    let mut diff = Vec::new();
    encode_diff_into(&frame, &frame, &mut diff).unwrap();
    assert!(diff.len() < full.len());
    assert!(!String::from_utf8_lossy(&diff).contains("TETRIS"));
}
