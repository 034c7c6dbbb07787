//! Snapshot to frame conversion, one view per game.
//!
//! Views never look at engines, only at snapshots plus whatever the host is
//! holding outside the engine (the line being typed, suggestions, the last
//! rejection message).

use crate::core::snapshot::{CreatureSnapshot, SnakeSnapshot, TetrisSnapshot, WordSnapshot};
use crate::core::{GuessResult, NumericVerdict};
use crate::frame::{Frame, Line, Rgb, Span, Style};
use crate::types::{
    Closeness, CreatureOutcome, LetterFeedback, PieceKind, SnakeOutcome, TetrisOutcome, Trend,
    WordOutcome, BOARD_HEIGHT, BOARD_WIDTH, MAX_ATTEMPTS, WORD_LENGTH,
};

const GREEN: Rgb = Rgb::new(100, 220, 120);
const YELLOW: Rgb = Rgb::new(240, 220, 80);
const GREY: Rgb = Rgb::new(90, 90, 100);
const RED: Rgb = Rgb::new(220, 80, 80);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const FRAME: Rgb = Rgb::new(140, 140, 140);
const WELL: Rgb = Rgb::new(30, 30, 40);

fn title(text: &str) -> Line {
    vec![Span::new(text, Style::fg(WHITE).bold())]
}

fn dim(text: impl Into<String>) -> Line {
    vec![Span::new(text, Style::fg(FRAME).dim())]
}

fn alert(text: impl Into<String>) -> Line {
    vec![Span::new(text, Style::fg(RED).bold())]
}

fn letter_style(feedback: LetterFeedback) -> Style {
    match feedback {
        LetterFeedback::Correct => Style::on(BLACK, GREEN).bold(),
        LetterFeedback::Present => Style::on(BLACK, YELLOW).bold(),
        LetterFeedback::Absent => Style::on(WHITE, GREY),
    }
}

fn closeness_style(closeness: Closeness) -> Style {
    match closeness {
        Closeness::Correct => Style::on(BLACK, GREEN),
        Closeness::Close => Style::on(BLACK, YELLOW),
        Closeness::Far => Style::on(WHITE, GREY),
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// Word game: attempt grid, the line being typed, hint and suggestions.
pub fn word_view(
    snap: &WordSnapshot,
    entry: &str,
    suggestions: &[&str],
    message: Option<&str>,
) -> Frame {
    let mut frame = Frame::new();
    frame.push(title(" WORD "));
    frame.push(dim(format!(" {} attempts left", snap.remaining_attempts)));
    frame.blank();

    for attempt in &snap.attempts {
        let mut line = vec![Span::plain(" ")];
        for (ch, fb) in attempt.word.chars().zip(attempt.feedback.iter()) {
            line.push(Span::new(format!(" {ch} "), letter_style(*fb)));
            line.push(Span::plain(" "));
        }
        frame.push(line);
    }

    let mut rows = snap.attempts.len();
    if snap.outcome == WordOutcome::InProgress && rows < MAX_ATTEMPTS {
        let mut line = vec![Span::plain(" ")];
        let typed: Vec<char> = entry.chars().collect();
        for i in 0..WORD_LENGTH {
            let ch = typed.get(i).copied().unwrap_or('_');
            line.push(Span::new(format!(" {ch} "), Style::fg(WHITE).bold()));
            line.push(Span::plain(" "));
        }
        frame.push(line);
        rows += 1;
    }
    for _ in rows..MAX_ATTEMPTS {
        frame.push(dim(format!(" {}", " .  ".repeat(WORD_LENGTH))));
    }
    frame.blank();

    match (snap.hint, snap.hint_available) {
        (Some(hint), _) => frame.push_plain(format!(
            " Hint: letter {} is {}",
            hint.position + 1,
            hint.letter
        )),
        (None, true) => frame.push(dim(" Press ? for a hint")),
        (None, false) => frame.blank(),
    }

    if !suggestions.is_empty() {
        frame.push(dim(format!(" Suggestions: {}", suggestions.join(" "))));
    }

    match snap.outcome {
        WordOutcome::InProgress => {}
        WordOutcome::Won => frame.push(vec![Span::new(
            format!(
                " Solved in {}! Score {}",
                snap.attempts.len(),
                snap.score.unwrap_or(0)
            ),
            Style::fg(GREEN).bold(),
        )]),
        WordOutcome::Lost => frame.push(alert(format!(
            " Out of attempts. The word was {}",
            snap.revealed_target.as_deref().unwrap_or("?")
        ))),
    }

    if let Some(msg) = message {
        frame.push(alert(format!(" {msg}")));
    }
    frame.blank();
    frame.push(dim(" Enter: guess  ?: hint  Ctrl-R: restart  Esc: quit"));
    frame
}

const CREATURE_COLUMNS: [(&str, usize); 8] = [
    ("Name", 11),
    ("Type 1", 9),
    ("Type 2", 9),
    ("Species", 18),
    ("Colour", 8),
    ("Stage", 6),
    ("Height", 9),
    ("Weight", 10),
];

fn cell(text: &str, width: usize, style: Style) -> Span {
    let mut t: String = text.chars().take(width).collect();
    while t.chars().count() < width {
        t.push(' ');
    }
    Span::new(format!("{t} "), style)
}

fn arrow(verdict: NumericVerdict) -> &'static str {
    match verdict.trend {
        Trend::Higher => "↑",
        Trend::Lower => "↓",
        Trend::Equal => "",
    }
}

fn guess_row(result: &GuessResult) -> Line {
    let g = &result.guessed;
    let widths: Vec<usize> = CREATURE_COLUMNS.iter().map(|(_, w)| *w).collect();
    let all_correct = [
        result.type1,
        result.type2,
        result.species,
        result.colour,
        result.evolution_stage,
        result.height.closeness,
        result.weight.closeness,
    ]
    .iter()
    .all(|c| *c == Closeness::Correct);
    let name_style = if all_correct {
        closeness_style(Closeness::Correct)
    } else {
        Style::fg(WHITE).bold()
    };
    vec![
        Span::plain(" "),
        cell(&result.name, widths[0], name_style),
        cell(&g.type1, widths[1], closeness_style(result.type1)),
        cell(g.type2.as_deref().unwrap_or("-"), widths[2], closeness_style(result.type2)),
        cell(&g.species, widths[3], closeness_style(result.species)),
        cell(&g.colour, widths[4], closeness_style(result.colour)),
        cell(
            &g.evolution_stage().to_string(),
            widths[5],
            closeness_style(result.evolution_stage),
        ),
        cell(
            &format!("{:.1}m{}", g.height_m, arrow(result.height)),
            widths[6],
            closeness_style(result.height.closeness),
        ),
        cell(
            &format!("{:.1}kg{}", g.weight_kg, arrow(result.weight)),
            widths[7],
            closeness_style(result.weight.closeness),
        ),
    ]
}

/// Creature game: one row per guess, each attribute coloured by closeness.
pub fn creature_view(
    snap: &CreatureSnapshot,
    entry: &str,
    suggestions: &[&str],
    message: Option<&str>,
) -> Frame {
    let mut frame = Frame::new();
    frame.push(title(" CREATURE "));
    frame.push(dim(format!(" {} guesses", snap.guesses.len())));
    frame.blank();

    let mut header = vec![Span::plain(" ")];
    for (name, width) in CREATURE_COLUMNS {
        header.push(cell(name, width, Style::fg(FRAME).bold()));
    }
    frame.push(header);

    // Newest guess first.
    for result in snap.guesses.iter().rev() {
        frame.push(guess_row(result));
    }
    frame.blank();

    match snap.outcome {
        CreatureOutcome::InProgress => {
            frame.push(vec![
                Span::plain(" Guess: "),
                Span::new(format!("{entry}_"), Style::fg(WHITE).bold()),
            ]);
            if !suggestions.is_empty() {
                frame.push(dim(format!(" Tab: {}", suggestions.join(", "))));
            }
        }
        CreatureOutcome::Won => frame.push(vec![Span::new(
            format!(
                " It was {}! Found in {} guesses",
                snap.revealed_target.as_deref().unwrap_or("?"),
                snap.score.unwrap_or(0)
            ),
            Style::fg(GREEN).bold(),
        )]),
    }

    if let Some(msg) = message {
        frame.push(alert(format!(" {msg}")));
    }
    frame.blank();
    frame.push(dim(" Enter: guess  Tab: complete  Ctrl-R: restart  Esc: quit"));
    frame
}

/// Snake game: bordered grid, two characters per cell.
pub fn snake_view(snap: &SnakeSnapshot) -> Frame {
    let mut frame = Frame::new();
    let border = Style::fg(FRAME);
    let width = snap.size as usize * 2;

    frame.push(title(" SNAKE "));
    frame.push_plain(format!(" Score: {}", snap.score));
    frame.push(vec![Span::new(format!(" +{}+", "-".repeat(width)), border)]);
    for row in snap.grid() {
        let mut line = vec![Span::new(" |", border)];
        for ch in row.chars() {
            line.push(match ch {
                '@' => Span::new("██", Style::on(GREEN, WELL).bold()),
                'o' => Span::new("▓▓", Style::on(GREEN, WELL)),
                '*' => Span::new("<>", Style::on(RED, WELL).bold()),
                _ => Span::new(" .", Style::on(GREY, WELL)),
            });
        }
        line.push(Span::new("|", border));
        frame.push(line);
    }
    frame.push(vec![Span::new(format!(" +{}+", "-".repeat(width)), border)]);

    match snap.outcome {
        SnakeOutcome::InProgress => frame.blank(),
        SnakeOutcome::GameOver => frame.push(alert(format!(" Game over! Score {}", snap.score))),
        SnakeOutcome::Won => frame.push(vec![Span::new(
            format!(" Board filled! Score {}", snap.score),
            Style::fg(GREEN).bold(),
        )]),
    }
    frame.push(dim(" Arrows/WASD: steer  R: restart  Q: quit"));
    frame
}

/// Tetris game: well with active piece and landing preview, stats on the side.
pub fn tetris_view(snap: &TetrisSnapshot) -> Frame {
    let mut frame = Frame::new();
    let border = Style::fg(FRAME);
    let grid = snap.composite();
    let ghost = snap.ghost_cells();
    let width = BOARD_WIDTH as usize * 2;

    let side: [String; 6] = [
        format!("Score  {}", snap.score),
        format!("Level  {}", snap.level),
        format!("Lines  {}", snap.lines),
        format!("Speed  {}ms", snap.drop_interval_ms),
        String::new(),
        match snap.outcome {
            TetrisOutcome::InProgress => String::new(),
            TetrisOutcome::Paused => "PAUSED".to_string(),
            TetrisOutcome::GameOver => "GAME OVER".to_string(),
        },
    ];

    frame.push(title(" TETRIS "));
    frame.push(vec![Span::new(format!(" +{}+", "-".repeat(width)), border)]);
    for y in 0..BOARD_HEIGHT as usize {
        let mut line = vec![Span::new(" |", border)];
        for x in 0..BOARD_WIDTH as usize {
            let tag = grid[y][x];
            line.push(match PieceKind::from_color_index(tag) {
                Some(kind) => Span::new("[]", Style::on(BLACK, piece_color(kind))),
                None if ghost.contains(&(x as i8, y as i8)) => {
                    Span::new("::", Style::on(piece_color(snap.active.kind), WELL).dim())
                }
                None => Span::new(" .", Style::on(GREY, WELL)),
            });
        }
        line.push(Span::new("|", border));
        if let Some(text) = side.get(y).filter(|t| !t.is_empty()) {
            let style = if y == side.len() - 1 {
                Style::fg(RED).bold()
            } else {
                Style::default()
            };
            line.push(Span::new(format!("  {text}"), style));
        }
        frame.push(line);
    }
    frame.push(vec![Span::new(format!(" +{}+", "-".repeat(width)), border)]);
    frame.push(dim(" ←/→ move  ↑ rotate  ↓ soft  Space hard  P pause  R restart  Q quit"));
    frame
}
