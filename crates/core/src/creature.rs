//! Creature module - guess the hidden creature from attribute closeness
//!
//! Every guess is compared attribute by attribute with the target:
//!
//! - categorical (types, species, colour): equal, substring, or unrelated
//! - evolution stage: equal, one step apart, or further
//! - numeric (height, weight): equal, within 10% of the target, or further,
//!   plus the direction of the target relative to the guess
//!
//! There is no attempt cap; the game ends only on the exact name.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::corpus::{Creature, CreatureDex, CorpusError};
use crate::rng::{pick_index, RandomSource, SimpleRng};
use crate::snapshot::CreatureSnapshot;
use crate::types::{Closeness, CreatureIntent, CreatureOutcome, IntentError, Trend, NUMERIC_CLOSE_RATIO};

/// Closeness of a numeric attribute plus where the target lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumericVerdict {
    pub closeness: Closeness,
    pub trend: Trend,
}

/// Per-attribute comparison of one guess against the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessResult {
    /// Guessed creature, as spelled in the dataset.
    pub name: String,
    pub type1: Closeness,
    pub type2: Closeness,
    pub species: Closeness,
    pub colour: Closeness,
    pub evolution_stage: Closeness,
    pub height: NumericVerdict,
    pub weight: NumericVerdict,
    /// Guessed creature's own values, for hosts that show them beside the verdicts.
    pub guessed: Creature,
}

impl GuessResult {
    /// Exact name match.
    pub fn is_exact(&self, target: &Creature) -> bool {
        self.name.eq_ignore_ascii_case(&target.name)
    }
}

/// Case-insensitive equality, then substring containment in either direction.
///
/// A blank value is contained in every string, so it is close to anything
/// but another blank.
pub fn classify_category(target: &str, guess: &str) -> Closeness {
    let target = target.trim().to_lowercase();
    let guess = guess.trim().to_lowercase();
    if target == guess {
        return Closeness::Correct;
    }
    if target.contains(&guess) || guess.contains(&target) {
        Closeness::Close
    } else {
        Closeness::Far
    }
}

/// Like [`classify_category`] for optional attributes; a missing value
/// compares as blank.
pub fn classify_optional_category(target: Option<&str>, guess: Option<&str>) -> Closeness {
    classify_category(target.unwrap_or(""), guess.unwrap_or(""))
}

pub fn classify_stage(target: u32, guess: u32) -> Closeness {
    match target.abs_diff(guess) {
        0 => Closeness::Correct,
        1 => Closeness::Close,
        _ => Closeness::Far,
    }
}

/// Compare a numeric attribute. The 10% boundary is inclusive.
pub fn classify_numeric(target: f64, guess: f64) -> NumericVerdict {
    let trend = if target > guess {
        Trend::Higher
    } else if target < guess {
        Trend::Lower
    } else {
        Trend::Equal
    };

    let diff = (target - guess).abs();
    // Slack absorbs representation error, e.g. 110.0 - 100.0 vs 100.0 * 0.1.
    let tolerance = target.abs() * NUMERIC_CLOSE_RATIO + 1e-9 * target.abs().max(1.0);
    let closeness = if diff == 0.0 {
        Closeness::Correct
    } else if diff <= tolerance {
        Closeness::Close
    } else {
        Closeness::Far
    };

    NumericVerdict { closeness, trend }
}

/// Full attribute comparison.
pub fn evaluate(target: &Creature, guess: &Creature) -> GuessResult {
    GuessResult {
        name: guess.name.clone(),
        type1: classify_category(&target.type1, &guess.type1),
        type2: classify_optional_category(target.type2.as_deref(), guess.type2.as_deref()),
        species: classify_category(&target.species, &guess.species),
        colour: classify_category(&target.colour, &guess.colour),
        evolution_stage: classify_stage(target.evolution_stage(), guess.evolution_stage()),
        height: classify_numeric(target.height_m, guess.height_m),
        weight: classify_numeric(target.weight_kg, guess.weight_kg),
        guessed: guess.clone(),
    }
}

/// Creature guessing session.
#[derive(Debug, Clone)]
pub struct CreatureEngine<R = SimpleRng> {
    dex: CreatureDex,
    target: Creature,
    guesses: Vec<GuessResult>,
    outcome: CreatureOutcome,
    rng: R,
}

impl<R: RandomSource> CreatureEngine<R> {
    #[instrument(skip(dex, rng), fields(creatures = dex.len()))]
    pub fn new(dex: CreatureDex, mut rng: R) -> Result<Self, CorpusError> {
        let target = draw_target(&dex, &mut rng)?;
        debug!("creature game created");
        Ok(Self {
            dex,
            target,
            guesses: Vec::new(),
            outcome: CreatureOutcome::InProgress,
            rng,
        })
    }

    pub fn outcome(&self) -> CreatureOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome == CreatureOutcome::Won
    }

    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }

    pub fn dex(&self) -> &CreatureDex {
        &self.dex
    }

    /// The hidden creature. Hosts should only show it once the game is won.
    pub fn target(&self) -> &Creature {
        &self.target
    }

    /// Number of guesses used, once won.
    pub fn reported_score(&self) -> Option<u32> {
        self.is_terminal().then(|| self.guesses.len() as u32)
    }

    pub fn submit_guess(&mut self, name: &str) -> Result<&GuessResult, IntentError> {
        if self.is_terminal() {
            return Err(IntentError::AlreadyTerminal);
        }
        let guess = self
            .dex
            .find(name)
            .ok_or_else(|| IntentError::UnknownCreature(name.trim().to_string()))?;

        let result = evaluate(&self.target, guess);
        let won = result.is_exact(&self.target);
        self.guesses.push(result);
        debug!(guesses = self.guesses.len(), won, "creature guess evaluated");

        if won {
            self.outcome = CreatureOutcome::Won;
            info!(guesses = self.guesses.len(), "creature game won");
        }

        Ok(&self.guesses[self.guesses.len() - 1])
    }

    /// Dex names starting with `prefix` (case-insensitive), in dex order.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.dex
            .iter()
            .filter(|c| c.name.to_lowercase().starts_with(&prefix))
            .map(|c| c.name.as_str())
            .take(limit)
            .collect()
    }

    pub fn restart(&mut self) {
        // The dex was validated non-empty at construction.
        if let Ok(target) = draw_target(&self.dex, &mut self.rng) {
            self.target = target;
        }
        self.guesses.clear();
        self.outcome = CreatureOutcome::InProgress;
        debug!("creature game restarted");
    }

    pub fn apply_intent(&mut self, intent: CreatureIntent) -> Result<(), IntentError> {
        match intent {
            CreatureIntent::Guess(name) => self.submit_guess(&name).map(|_| ()),
            CreatureIntent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    pub fn snapshot(&self) -> CreatureSnapshot {
        CreatureSnapshot {
            guesses: self.guesses.clone(),
            outcome: self.outcome,
            score: self.reported_score(),
            revealed_target: self.is_terminal().then(|| self.target.name.clone()),
        }
    }
}

fn draw_target<R: RandomSource + ?Sized>(dex: &CreatureDex, rng: &mut R) -> Result<Creature, CorpusError> {
    if dex.is_empty() {
        return Err(CorpusError::Empty { what: "creatures" });
    }
    dex.get(pick_index(rng, dex.len()))
        .cloned()
        .ok_or(CorpusError::Empty { what: "creatures" })
}
