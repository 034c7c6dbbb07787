//! Tetris line clears and scoring through a session

use arcade::core::{Board, SimpleRng, TetrisEngine, Tetromino};
use arcade::engine::Session;
use arcade::types::{
    IntentError, PieceKind, TetrisIntent, TetrisOutcome, BOARD_HEIGHT, BOARD_WIDTH,
};

/// Bottom `rows` rows full except for `gaps`.
fn well(rows: i8, gaps: &[i8]) -> Board {
    let mut board = Board::new();
    for y in (BOARD_HEIGHT as i8 - rows)..BOARD_HEIGHT as i8 {
        board.fill_row_except(y, gaps, PieceKind::Z);
    }
    board
}

fn session_with(board: Board, kind: PieceKind) -> Session<TetrisEngine> {
    Session::new(TetrisEngine::from_parts(
        board,
        Tetromino::spawn(kind),
        SimpleRng::new(42),
    ))
}

#[test]
fn test_single_line_with_flat_i() {
    // A flat I spawns over columns 3..=6.
    let mut session = session_with(well(1, &[3, 4, 5, 6]), PieceKind::I);
    session.push(TetrisIntent::HardDrop);
    let report = session.advance(1000);
    assert_eq!(report.intents_applied, 1);
    assert_eq!(report.ticks, 1);

    let engine = session.engine();
    assert_eq!(engine.score(), 100);
    assert_eq!(engine.lines(), 1);
    assert_eq!(engine.pieces_locked(), 1);
    assert!(engine.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_tetris_with_upright_i() {
    let mut session = session_with(well(4, &[0]), PieceKind::I);
    session.push(TetrisIntent::Rotate);
    for _ in 0..3 {
        session.push(TetrisIntent::MoveLeft);
    }
    // One move too many bumps the wall and is ignored.
    session.push(TetrisIntent::MoveLeft);
    session.push(TetrisIntent::HardDrop);
    let report = session.advance(1000);
    assert_eq!(report.intents_applied, 5);
    assert_eq!(report.ignored, 1);

    let snap = session.snapshot();
    assert_eq!(snap.lines, 4);
    assert_eq!(snap.score, 800);
    assert_eq!(snap.level, 1);
    assert!(snap.board.iter().flatten().all(|&c| c == 0));
}

#[test]
fn test_no_full_rows_after_random_play() {
    let mut session = Session::new(TetrisEngine::new(SimpleRng::new(2024)));
    let intents = [
        TetrisIntent::MoveLeft,
        TetrisIntent::Rotate,
        TetrisIntent::MoveRight,
        TetrisIntent::MoveRight,
        TetrisIntent::HardDrop,
    ];
    for step in 0..400 {
        session.push(intents[step % intents.len()]);
        session.advance(1000);
        let board = session.engine().board();
        assert_eq!(board.height(), BOARD_HEIGHT);
        for y in 0..BOARD_HEIGHT as usize {
            assert!(!board.is_row_full(y), "full row {y} left at step {step}");
        }
        if session.engine().is_terminal() {
            break;
        }
    }
}

#[test]
fn test_pause_blocks_moves_and_time() {
    let mut session = Session::new(TetrisEngine::new(SimpleRng::new(5)));
    session.push(TetrisIntent::Pause);
    session.push(TetrisIntent::MoveLeft);
    let report = session.advance(5000);
    assert_eq!(report.rejected, vec![IntentError::Paused]);
    assert_eq!(report.ticks, 0);
    assert_eq!(session.engine().outcome(), TetrisOutcome::Paused);
    assert_eq!(session.engine().active().y, 0);

    session.push(TetrisIntent::Pause);
    let report = session.advance(1000);
    assert_eq!(report.ticks, 1);
    assert_eq!(session.engine().active().y, 1);
}

#[test]
fn test_blocked_spawn_is_game_over() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 0, Some(PieceKind::O));
    }
    let mut session = session_with(board, PieceKind::T);
    assert_eq!(session.engine().outcome(), TetrisOutcome::GameOver);

    session.push(TetrisIntent::HardDrop);
    let report = session.advance(1000);
    assert_eq!(report.rejected, vec![IntentError::AlreadyTerminal]);
    assert_eq!(report.ticks, 0);

    session.push(TetrisIntent::Restart);
    session.advance(0);
    assert_eq!(session.engine().outcome(), TetrisOutcome::InProgress);
    assert_eq!(session.engine().score(), 0);
}
