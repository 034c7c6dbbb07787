//! Corpus module - the static datasets the guessing games draw from
//!
//! Hosts load these before a session starts, either from JSON files or from
//! the small built-in sets compiled into the crate:
//!
//! - word list: flat JSON array of strings (`["CRANE", "SPEED", ...]`)
//! - creature dex: JSON array of [`Creature`] records
//!
//! Words are normalised on load (trimmed, uppercased, deduplicated) and only
//! alphabetic words of [`WORD_LENGTH`] letters are kept.

use std::fs;
use std::path::Path;

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::WORD_LENGTH;

const BUILTIN_WORDS: &str = include_str!("../data/words.json");
const BUILTIN_CREATURES: &str = include_str!("../data/creatures.json");

/// Failure while loading a dataset.
#[derive(Debug, Display, Error, From)]
pub enum CorpusError {
    #[display("failed to read corpus: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),

    #[display("failed to parse corpus: {_0}")]
    #[from]
    Json(#[error(source)] serde_json::Error),

    /// Nothing playable survived loading.
    #[display("corpus contains no usable {what}")]
    Empty { what: &'static str },
}

/// Valid target/guess words, uppercase, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build from raw words. Entries that are not five ASCII letters are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for raw in words {
            let word = raw.as_ref().trim().to_ascii_uppercase();
            if word.len() != WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
                continue;
            }
            if !out.contains(&word) {
                out.push(word);
            }
        }
        Self { words: out }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let raw: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(raw))
    }

    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let list = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!(words = list.len(), "loaded word list");
        Ok(list)
    }

    /// The word list compiled into the crate.
    pub fn builtin() -> Self {
        // The embedded file is part of the crate and always parses.
        Self::from_json_str(BUILTIN_WORDS).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// One record of the creature dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub type1: String,
    #[serde(default)]
    pub type2: Option<String>,
    pub species: String,
    #[serde(default)]
    pub abilities: Vec<String>,
    pub colour: String,
    pub height_m: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub evolution_line: Vec<String>,
}

impl Creature {
    /// 1-based position of this creature in its own evolution line (1 if absent).
    pub fn evolution_stage(&self) -> u32 {
        self.evolution_line
            .iter()
            .position(|n| n.eq_ignore_ascii_case(&self.name))
            .map(|i| i as u32 + 1)
            .unwrap_or(1)
    }
}

/// Reference set of creatures, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatureDex {
    creatures: Vec<Creature>,
}

impl CreatureDex {
    /// Build from records. Blank second types become `None`; records without a
    /// name or repeating an earlier name are dropped.
    pub fn new(records: Vec<Creature>) -> Self {
        let mut creatures: Vec<Creature> = Vec::with_capacity(records.len());
        for mut c in records {
            c.name = c.name.trim().to_string();
            if c.name.is_empty() || creatures.iter().any(|e| e.name.eq_ignore_ascii_case(&c.name)) {
                continue;
            }
            if c.type2.as_deref().is_some_and(|t| t.trim().is_empty()) {
                c.type2 = None;
            }
            creatures.push(c);
        }
        Self { creatures }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let records: Vec<Creature> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let dex = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!(creatures = dex.len(), "loaded creature dex");
        Ok(dex)
    }

    /// The creature set compiled into the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_CREATURES).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Creature> {
        let name = name.trim();
        self.creatures
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.creatures
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_normalises_and_filters() {
        let list = WordList::new(["crane", " Speed ", "CRANE", "toolong", "ab1de", "plane"]);
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, vec!["CRANE", "SPEED", "PLANE"]);
        assert!(list.contains("speed"));
        assert!(!list.contains("TOOLONG"));
    }

    #[test]
    fn test_word_list_from_json() {
        let list = WordList::from_json_str(r#"["CRANE","SPEED","PLANE"]"#).unwrap();
        assert_eq!(list.len(), 3);
        assert!(matches!(
            WordList::from_json_str("{not json"),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn test_builtin_sets_are_non_empty() {
        assert!(!WordList::builtin().is_empty());
        let dex = CreatureDex::builtin();
        assert!(!dex.is_empty());
        assert!(dex.find("pikachu").is_some());
    }

    #[test]
    fn test_creature_json_fields() {
        let json = r#"[{"name":"Shinx","type1":"Electric","type2":"","species":"Flash Pokémon",
            "colour":"Blue","height_m":0.5,"weight_kg":9.5,"evolution_line":["Shinx","Luxio","Luxray"]}]"#;
        let dex = CreatureDex::from_json_str(json).unwrap();
        let shinx = dex.find("SHINX").unwrap();
        assert_eq!(shinx.type2, None);
        assert!(shinx.abilities.is_empty());
        assert_eq!(shinx.evolution_stage(), 1);
    }

    #[test]
    fn test_evolution_stage_defaults_to_one() {
        let dex = CreatureDex::builtin();
        assert_eq!(dex.find("Torterra").unwrap().evolution_stage(), 3);
        let mut loner = dex.find("Pikachu").unwrap().clone();
        loner.evolution_line.clear();
        assert_eq!(loner.evolution_stage(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WordList::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_underlying_errors_convert_into_corpus_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CorpusError = io.into();
        assert!(matches!(err, CorpusError::Io(_)));
        assert_eq!(err.to_string(), "failed to read corpus: gone");

        let json = serde_json::from_str::<Vec<String>>("[1]").unwrap_err();
        let err: CorpusError = json.into();
        assert!(matches!(err, CorpusError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());

        let empty = CorpusError::Empty { what: "words" };
        assert!(std::error::Error::source(&empty).is_none());
    }
}
