//! Word module - five-letter guessing game with per-letter feedback
//!
//! The target is drawn once from a [`WordList`]. Each guess is scored with the
//! two-pass rule: exact positions first, then remaining letters left to right
//! against target letters not yet consumed. A repeated guess letter is never
//! credited more often than it occurs in the target.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::corpus::{CorpusError, WordList};
use crate::rng::{pick_index, RandomSource, SimpleRng};
use crate::snapshot::WordSnapshot;
use crate::types::{IntentError, LetterFeedback, WordIntent, WordOutcome, MAX_ATTEMPTS, WORD_LENGTH};

/// Feedback for one guess, position by position.
pub type Feedback = [LetterFeedback; WORD_LENGTH];

/// Whether guesses must come from the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryPolicy {
    /// Any five letters are accepted.
    #[default]
    Permissive,
    /// Guesses outside the corpus are rejected with `NotInDictionary`.
    Strict,
}

/// A submitted word and its feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub word: String,
    pub feedback: Feedback,
}

impl Attempt {
    pub fn is_solved(&self) -> bool {
        self.feedback.iter().all(|f| *f == LetterFeedback::Correct)
    }
}

/// A revealed target letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// 0-based position in the target.
    pub position: usize,
    pub letter: char,
}

fn letters(word: &str) -> Result<[char; WORD_LENGTH], IntentError> {
    let chars: ArrayVec<char, WORD_LENGTH> = word.chars().take(WORD_LENGTH).collect();
    let actual = word.chars().count();
    if actual != WORD_LENGTH {
        return Err(IntentError::InvalidLength {
            expected: WORD_LENGTH,
            actual,
        });
    }
    chars.into_inner().map_err(|_| IntentError::InvalidLength {
        expected: WORD_LENGTH,
        actual,
    })
}

/// Score `guess` against `target`.
///
/// Both words are compared exactly as given (callers normalise case). Fails
/// with `InvalidLength` unless both have five characters.
pub fn evaluate_guess(target: &str, guess: &str) -> Result<Feedback, IntentError> {
    let target = letters(target)?;
    let guess = letters(guess)?;

    let mut result = [LetterFeedback::Absent; WORD_LENGTH];
    let mut used = [false; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            result[i] = LetterFeedback::Correct;
            used[i] = true;
        }
    }

    for i in 0..WORD_LENGTH {
        if result[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(j) = (0..WORD_LENGTH).find(|&j| !used[j] && target[j] == guess[i]) {
            result[i] = LetterFeedback::Present;
            used[j] = true;
        }
    }

    Ok(result)
}

/// Word guessing session.
#[derive(Debug, Clone)]
pub struct WordEngine<R = SimpleRng> {
    words: WordList,
    policy: DictionaryPolicy,
    target: String,
    attempts: Vec<Attempt>,
    outcome: WordOutcome,
    hint: Option<Hint>,
    rng: R,
}

impl<R: RandomSource> WordEngine<R> {
    /// Start a session with a target drawn from `words`.
    #[instrument(skip(words, rng), fields(words = words.len()))]
    pub fn new(words: WordList, policy: DictionaryPolicy, mut rng: R) -> Result<Self, CorpusError> {
        let target = draw_target(&words, &mut rng)?;
        debug!("word game created");
        Ok(Self {
            words,
            policy,
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: WordOutcome::InProgress,
            hint: None,
            rng,
        })
    }

    pub fn outcome(&self) -> WordOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != WordOutcome::InProgress
    }

    pub fn policy(&self) -> DictionaryPolicy {
        self.policy
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// The secret word. Hosts should only show it once the game is over.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Score reported to the host: `remaining + 1` on a win, 0 on a loss.
    pub fn reported_score(&self) -> Option<u32> {
        match self.outcome {
            WordOutcome::InProgress => None,
            WordOutcome::Won => Some((self.remaining_attempts() + 1) as u32),
            WordOutcome::Lost => Some(0),
        }
    }

    /// Submit a guess. On success the new attempt is returned.
    pub fn submit_guess(&mut self, word: &str) -> Result<&Attempt, IntentError> {
        if self.is_terminal() {
            return Err(IntentError::AlreadyTerminal);
        }

        let guess = word.trim().to_uppercase();
        let feedback = evaluate_guess(&self.target, &guess)?;

        if self.policy == DictionaryPolicy::Strict && !self.words.contains(&guess) {
            return Err(IntentError::NotInDictionary(guess));
        }

        let solved = guess == self.target;
        self.attempts.push(Attempt {
            word: guess,
            feedback,
        });
        debug!(attempt = self.attempts.len(), solved, "word guess evaluated");

        if solved {
            self.outcome = WordOutcome::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.outcome = WordOutcome::Lost;
        }
        if self.is_terminal() {
            info!(outcome = ?self.outcome, attempts = self.attempts.len(), "word game finished");
        }

        // Just pushed above.
        Ok(&self.attempts[self.attempts.len() - 1])
    }

    /// Reveal one target letter not yet shown as `correct`. Once per session.
    pub fn request_hint(&mut self) -> Result<Hint, IntentError> {
        if self.is_terminal() {
            return Err(IntentError::AlreadyTerminal);
        }
        if self.hint.is_some() {
            return Err(IntentError::HintExhausted);
        }

        let mut hidden: ArrayVec<usize, WORD_LENGTH> = (0..WORD_LENGTH)
            .filter(|&i| {
                !self
                    .attempts
                    .iter()
                    .any(|a| a.feedback[i] == LetterFeedback::Correct)
            })
            .collect();
        // Every position was solved in some attempt but never all at once.
        if hidden.is_empty() {
            hidden.extend(0..WORD_LENGTH);
        }

        let position = hidden[pick_index(&mut self.rng, hidden.len())];
        let letter = self.target.chars().nth(position).unwrap_or('?');
        let hint = Hint { position, letter };
        self.hint = Some(hint);
        debug!(position, "hint revealed");
        Ok(hint)
    }

    /// Corpus words starting with `prefix`, excluding the target.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = prefix.trim().to_uppercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| w.starts_with(&prefix) && *w != self.target)
            .take(limit)
            .collect()
    }

    /// Fresh target, no attempts, hint available again.
    pub fn restart(&mut self) {
        // The corpus was validated non-empty at construction.
        if let Ok(target) = draw_target(&self.words, &mut self.rng) {
            self.target = target;
        }
        self.attempts.clear();
        self.outcome = WordOutcome::InProgress;
        self.hint = None;
        debug!("word game restarted");
    }

    pub fn apply_intent(&mut self, intent: WordIntent) -> Result<(), IntentError> {
        match intent {
            WordIntent::Guess(word) => self.submit_guess(&word).map(|_| ()),
            WordIntent::Hint => self.request_hint().map(|_| ()),
            WordIntent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    pub fn snapshot(&self) -> WordSnapshot {
        WordSnapshot {
            attempts: self.attempts.clone(),
            outcome: self.outcome,
            remaining_attempts: self.remaining_attempts(),
            hint: self.hint,
            hint_available: self.hint.is_none() && !self.is_terminal(),
            score: self.reported_score(),
            revealed_target: self.is_terminal().then(|| self.target.clone()),
        }
    }
}

fn draw_target<R: RandomSource + ?Sized>(words: &WordList, rng: &mut R) -> Result<String, CorpusError> {
    if words.is_empty() {
        return Err(CorpusError::Empty { what: "words" });
    }
    let idx = pick_index(rng, words.len());
    words
        .get(idx)
        .map(str::to_string)
        .ok_or(CorpusError::Empty { what: "words" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use LetterFeedback::{Absent as A, Correct as C, Present as P};

    fn engine_with_target(target: &str) -> WordEngine<ScriptedRng> {
        let words = WordList::new(["CRANE", "SPEED", "PLANE", target]);
        let idx = words.iter().position(|w| w == target).unwrap();
        WordEngine::new(
            words.clone(),
            DictionaryPolicy::Permissive,
            ScriptedRng::picking(&[idx], words.len()),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_letters_hand_worked() {
        assert_eq!(evaluate_guess("SPEED", "ERASE").unwrap(), [P, A, A, P, P]);
        assert_eq!(evaluate_guess("ROBOT", "FLOOR").unwrap(), [A, A, P, C, P]);
        assert_eq!(evaluate_guess("CRANE", "EERIE").unwrap(), [A, A, P, A, C]);
        assert_eq!(evaluate_guess("LLAMA", "ALLAY").unwrap(), [P, C, P, P, A]);
    }

    #[test]
    fn test_correct_takes_priority_over_present() {
        // The only target E is at index 4; guess index 0 must not steal it.
        assert_eq!(evaluate_guess("CRANE", "EXXXE").unwrap(), [A, A, A, A, C]);
    }

    #[test]
    fn test_evaluate_rejects_wrong_length() {
        assert_eq!(
            evaluate_guess("CRANE", "CRAN"),
            Err(IntentError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn test_letter_credit_never_exceeds_target_count() {
        let alphabet: Vec<char> = "AEIRST".chars().collect();
        let mut rng = SimpleRng::new(7);
        let word = |rng: &mut SimpleRng| -> String {
            (0..WORD_LENGTH)
                .map(|_| alphabet[pick_index(rng, alphabet.len())])
                .collect()
        };
        for _ in 0..2_000 {
            let target = word(&mut rng);
            let guess = word(&mut rng);
            let feedback = evaluate_guess(&target, &guess).unwrap();
            for letter in alphabet.iter() {
                let in_target = target.chars().filter(|c| c == letter).count();
                let credited = guess
                    .chars()
                    .zip(feedback.iter())
                    .filter(|(c, f)| c == letter && **f != LetterFeedback::Absent)
                    .count();
                assert!(
                    credited <= in_target,
                    "{guess} vs {target}: {letter} credited {credited}x"
                );
            }
        }
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut game = engine_with_target("SPEED");
        let attempt = game.submit_guess(" speed ").unwrap();
        assert!(attempt.is_solved());
        assert_eq!(game.outcome(), WordOutcome::Won);
        assert_eq!(game.reported_score(), Some(6));
    }

    #[test]
    fn test_invalid_length_leaves_state_untouched() {
        let mut game = engine_with_target("SPEED");
        assert!(matches!(
            game.submit_guess("SPEEDY"),
            Err(IntentError::InvalidLength { actual: 6, .. })
        ));
        assert!(game.attempts().is_empty());
        assert_eq!(game.remaining_attempts(), 6);
    }

    #[test]
    fn test_strict_policy_rejects_unknown_words() {
        let words = WordList::new(["CRANE", "SPEED"]);
        let mut game =
            WordEngine::new(words, DictionaryPolicy::Strict, ScriptedRng::picking(&[1], 2))
                .unwrap();
        assert_eq!(
            game.submit_guess("ZZZZZ"),
            Err(IntentError::NotInDictionary("ZZZZZ".into()))
        );
        assert!(game.submit_guess("crane").is_ok());
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn test_six_misses_lose_and_further_guesses_rejected() {
        let mut game = engine_with_target("SPEED");
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess("CRANE").unwrap();
        }
        assert_eq!(game.outcome(), WordOutcome::Lost);
        assert_eq!(game.reported_score(), Some(0));
        assert_eq!(game.submit_guess("SPEED"), Err(IntentError::AlreadyTerminal));
        assert_eq!(game.attempts().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_win_on_last_attempt_scores_one() {
        let mut game = engine_with_target("SPEED");
        for _ in 0..MAX_ATTEMPTS - 1 {
            game.submit_guess("PLANE").unwrap();
        }
        game.submit_guess("SPEED").unwrap();
        assert_eq!(game.outcome(), WordOutcome::Won);
        assert_eq!(game.reported_score(), Some(1));
    }

    #[test]
    fn test_hint_skips_solved_positions_and_is_single_use() {
        let mut game = engine_with_target("SPEED");
        // S, P, E, E correct; only D hidden.
        game.submit_guess("SPEEX").unwrap();
        let hint = game.request_hint().unwrap();
        assert_eq!(hint, Hint { position: 4, letter: 'D' });
        assert_eq!(game.request_hint(), Err(IntentError::HintExhausted));
        assert_eq!(game.hint(), Some(hint));
    }

    #[test]
    fn test_hint_after_game_over_is_rejected() {
        let mut game = engine_with_target("SPEED");
        game.submit_guess("SPEED").unwrap();
        assert_eq!(game.request_hint(), Err(IntentError::AlreadyTerminal));
    }

    #[test]
    fn test_suggestions_exclude_target() {
        let words = WordList::new(["PLANE", "PLANT", "PIANO", "SPEED"]);
        let game =
            WordEngine::new(words, DictionaryPolicy::Permissive, ScriptedRng::picking(&[1], 4))
                .unwrap();
        assert_eq!(game.target(), "PLANT");
        assert_eq!(game.suggestions("pl", 6), vec!["PLANE"]);
        assert_eq!(game.suggestions("p", 1), vec!["PLANE"]);
        assert!(game.suggestions("", 6).is_empty());
    }

    #[test]
    fn test_restart_clears_attempts_and_hint() {
        let mut game = engine_with_target("SPEED");
        game.submit_guess("CRANE").unwrap();
        game.request_hint().unwrap();
        game.restart();
        assert!(game.attempts().is_empty());
        assert!(game.hint().is_none());
        assert_eq!(game.outcome(), WordOutcome::InProgress);
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let err = WordEngine::new(WordList::default(), DictionaryPolicy::Permissive, SimpleRng::new(1))
            .unwrap_err();
        assert!(matches!(err, CorpusError::Empty { what: "words" }));
    }

    #[test]
    fn test_snapshot_hides_target_until_finished() {
        let mut game = engine_with_target("SPEED");
        assert_eq!(game.snapshot().revealed_target, None);
        game.submit_guess("SPEED").unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.revealed_target.as_deref(), Some("SPEED"));
        assert!(!snap.hint_available);
    }
}
