//! Word game end to end, through a session

use arcade::core::{DictionaryPolicy, ScriptedRng, WordEngine, WordList};
use arcade::engine::Session;
use arcade::types::{IntentError, LetterFeedback, WordIntent, WordOutcome, MAX_ATTEMPTS};

fn session(policy: DictionaryPolicy) -> Session<WordEngine<ScriptedRng>> {
    let words = WordList::new(["CRANE", "SPEED", "PLANE"]);
    // Index 1 of 3 selects SPEED.
    let engine = WordEngine::new(words, policy, ScriptedRng::picking(&[1], 3)).unwrap();
    Session::new(engine)
}

#[test]
fn test_scripted_game_is_won_on_third_guess() {
    let mut session = session(DictionaryPolicy::Permissive);
    for word in ["CRANE", "PLANE", "SPEED"] {
        session.push(WordIntent::Guess(word.to_string()));
    }
    let report = session.drain();
    assert_eq!(report.intents_applied, 3);
    assert!(report.rejected.is_empty());

    let snap = session.snapshot();
    assert_eq!(snap.outcome, WordOutcome::Won);
    assert_eq!(snap.attempts.len(), 3);
    assert_eq!(snap.score, Some(4));
    assert_eq!(snap.revealed_target.as_deref(), Some("SPEED"));
    assert!(snap.attempts[2]
        .feedback
        .iter()
        .all(|f| *f == LetterFeedback::Correct));
}

#[test]
fn test_six_misses_lose_with_zero_score() {
    let mut session = session(DictionaryPolicy::Permissive);
    for _ in 0..MAX_ATTEMPTS {
        session.push(WordIntent::Guess("crane".to_string()));
    }
    session.push(WordIntent::Guess("speed".to_string()));
    let report = session.drain();

    assert_eq!(report.intents_applied, MAX_ATTEMPTS as u32);
    assert_eq!(report.last_rejection(), Some(&IntentError::AlreadyTerminal));
    let snap = session.snapshot();
    assert_eq!(snap.outcome, WordOutcome::Lost);
    assert_eq!(snap.score, Some(0));
    assert_eq!(snap.remaining_attempts, 0);
}

#[test]
fn test_rejections_leave_attempts_untouched() {
    let mut session = session(DictionaryPolicy::Strict);
    session.push(WordIntent::Guess("CRAN".to_string()));
    session.push(WordIntent::Guess("ZZZZZ".to_string()));
    let report = session.drain();

    assert_eq!(
        report.rejected,
        vec![
            IntentError::InvalidLength {
                expected: 5,
                actual: 4
            },
            IntentError::NotInDictionary("ZZZZZ".to_string()),
        ]
    );
    let snap = session.snapshot();
    assert!(snap.attempts.is_empty());
    assert_eq!(snap.remaining_attempts, MAX_ATTEMPTS);
    assert_eq!(snap.revealed_target, None);
}

#[test]
fn test_hint_once_per_game() {
    let mut session = session(DictionaryPolicy::Permissive);
    session.push(WordIntent::Hint);
    session.push(WordIntent::Hint);
    let report = session.drain();
    assert_eq!(report.intents_applied, 1);
    assert_eq!(report.rejected, vec![IntentError::HintExhausted]);

    let hint = session.snapshot().hint.unwrap();
    assert_eq!("SPEED".chars().nth(hint.position), Some(hint.letter));
    assert!(!session.snapshot().hint_available);

    session.push(WordIntent::Restart);
    session.drain();
    assert!(session.snapshot().hint_available);
}

#[test]
fn test_suggestions_hide_the_target() {
    let session = session(DictionaryPolicy::Permissive);
    assert_eq!(session.engine().suggestions("s", 5), Vec::<&str>::new());
    assert_eq!(session.engine().suggestions("pl", 5), vec!["PLANE"]);
}
