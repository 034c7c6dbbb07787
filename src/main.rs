//! Terminal arcade runner (default binary).
//!
//! Picks a game from the command line, builds its engine from `HostConfig`
//! and drives it through a `Session`, drawing with the frame renderer.

mod cli;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;
use tracing_subscriber::EnvFilter;

use arcade::core::{CreatureEngine, SnakeEngine, TetrisEngine, WordEngine};
use arcade::engine::{HostConfig, Session, TimedEngine};
use arcade::input::{should_quit, snake_intent, tetris_intent, EntryEvent, TextEntry};
use arcade::term::{creature_view, snake_view, tetris_view, word_view, Frame, TerminalRenderer};
use arcade::types::{CreatureIntent, WordIntent, WORD_LENGTH};
use cli::{Cli, Command};

/// Poll timeout when no timer is pending (guessing games, paused tetris).
const IDLE_POLL_MS: u64 = 250;
const SUGGESTION_LIMIT: usize = 5;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(HostConfig::from_env());
    init_logging(config.log_path.as_deref())?;
    info!(?config, command = ?cli.command, "starting arcade");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, cli.command, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file so tracing output never lands on the game screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("installing log subscriber")
}

fn run(term: &mut TerminalRenderer, command: Command, config: &HostConfig) -> Result<()> {
    match command {
        Command::Word => {
            let words = config.load_words().context("loading word list")?;
            let engine = WordEngine::new(words, config.word_policy(), config.rng())?;
            run_word(term, Session::new(engine))
        }
        Command::Creature => {
            let dex = config.load_creatures().context("loading creature dex")?;
            let engine = CreatureEngine::new(dex, config.rng())?;
            run_creature(term, Session::new(engine))
        }
        Command::Snake { size } => run_timed(
            term,
            Session::new(SnakeEngine::with_size(size, config.rng())),
            snake_intent,
            snake_view,
        ),
        Command::Tetris => run_timed(
            term,
            Session::new(TetrisEngine::new(config.rng())),
            tetris_intent,
            tetris_view,
        ),
    }
}

/// Wait up to `timeout_ms` for a key press. Resizes force a full redraw.
fn next_key(term: &mut TerminalRenderer, timeout_ms: u64) -> Result<Option<KeyEvent>> {
    if !event::poll(Duration::from_millis(timeout_ms))? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
        Event::Resize(_, _) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.code == KeyCode::Char(ch) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Loop for games that advance on a timer (snake, tetris).
fn run_timed<E>(
    term: &mut TerminalRenderer,
    mut session: Session<E>,
    map_key: fn(KeyEvent) -> Option<E::Intent>,
    view: fn(&E::Snapshot) -> Frame,
) -> Result<()>
where
    E: TimedEngine,
{
    let mut last = Instant::now();
    loop {
        term.draw(&view(&session.snapshot()))?;

        let timeout = session.until_next_tick_ms().unwrap_or(IDLE_POLL_MS);
        if let Some(key) = next_key(term, timeout)? {
            if should_quit(key, false) {
                session.stop();
                return Ok(());
            }
            if let Some(intent) = map_key(key) {
                session.push(intent);
            }
        }

        // Whole milliseconds only; the remainder stays in `last`.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        session.advance(elapsed_ms);
    }
}

fn run_word(term: &mut TerminalRenderer, mut session: Session<WordEngine>) -> Result<()> {
    let mut entry = TextEntry::letters(WORD_LENGTH);
    let mut message: Option<String> = None;
    loop {
        let suggestions = if entry.is_empty() {
            Vec::new()
        } else {
            session.engine().suggestions(entry.as_str(), SUGGESTION_LIMIT)
        };
        let frame = word_view(
            &session.snapshot(),
            entry.as_str(),
            &suggestions,
            message.as_deref(),
        );
        term.draw(&frame)?;

        let Some(key) = next_key(term, IDLE_POLL_MS)? else {
            continue;
        };
        if should_quit(key, true) {
            session.stop();
            return Ok(());
        }

        let finished = session.engine().is_terminal();
        if is_ctrl(&key, 'r') || (finished && matches!(key.code, KeyCode::Char('r' | 'R'))) {
            entry.clear();
            session.push(WordIntent::Restart);
        } else if key.code == KeyCode::Char('?') {
            session.push(WordIntent::Hint);
        } else {
            match entry.handle_key(key) {
                EntryEvent::Submitted(text) => session.push(WordIntent::Guess(text)),
                EntryEvent::Complete => {
                    let first = session
                        .engine()
                        .suggestions(entry.as_str(), 1)
                        .first()
                        .map(|s| s.to_string());
                    if let Some(word) = first {
                        entry.set(&word);
                    }
                }
                EntryEvent::Edited | EntryEvent::Unhandled => {}
            }
        }

        let report = session.drain();
        if report.changed() || !report.rejected.is_empty() {
            message = report.last_rejection().map(ToString::to_string);
        }
    }
}

fn run_creature(term: &mut TerminalRenderer, mut session: Session<CreatureEngine>) -> Result<()> {
    let mut entry = TextEntry::names();
    let mut message: Option<String> = None;
    loop {
        let suggestions = if entry.is_empty() {
            Vec::new()
        } else {
            session.engine().suggestions(entry.as_str(), SUGGESTION_LIMIT)
        };
        let frame = creature_view(
            &session.snapshot(),
            entry.as_str(),
            &suggestions,
            message.as_deref(),
        );
        term.draw(&frame)?;

        let Some(key) = next_key(term, IDLE_POLL_MS)? else {
            continue;
        };
        if should_quit(key, true) {
            session.stop();
            return Ok(());
        }

        if is_ctrl(&key, 'r') {
            entry.clear();
            session.push(CreatureIntent::Restart);
        } else {
            match entry.handle_key(key) {
                EntryEvent::Submitted(text) => session.push(CreatureIntent::Guess(text)),
                EntryEvent::Complete => {
                    let first = session
                        .engine()
                        .suggestions(entry.as_str(), 1)
                        .first()
                        .map(|s| s.to_string());
                    if let Some(name) = first {
                        entry.set(&name);
                    }
                }
                EntryEvent::Edited | EntryEvent::Unhandled => {}
            }
        }

        let report = session.drain();
        if report.changed() || !report.rejected.is_empty() {
            message = report.last_rejection().map(ToString::to_string);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_is_optional() {
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let err = init_logging(Some(Path::new("/nonexistent-arcade-dir/arcade.log"))).unwrap_err();
        assert!(err.to_string().contains("creating log file"));
    }
}
