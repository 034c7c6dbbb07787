//! Host configuration
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `ARCADE_SEED` | RNG seed (u32); unset means seeded from the clock |
//! | `ARCADE_WORDS_PATH` | JSON word list; unset means the built-in list |
//! | `ARCADE_CREATURES_PATH` | JSON creature dex; unset means the built-in dex |
//! | `ARCADE_STRICT_WORDS` | `1`/`true`/`yes`/`on` rejects guesses outside the word list |
//! | `ARCADE_LOG_PATH` | file receiving tracing output; unset disables logging |

use std::path::PathBuf;

use tracing::{debug, instrument};

use arcade_core::{CorpusError, CreatureDex, DictionaryPolicy, SimpleRng, WordList};

/// Settings a host needs to create engines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub seed: Option<u32>,
    pub words_path: Option<PathBuf>,
    pub creatures_path: Option<PathBuf>,
    pub strict_words: bool,
    pub log_path: Option<PathBuf>,
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, test maps).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        Self {
            seed: non_empty("ARCADE_SEED").and_then(|s| s.parse().ok()),
            words_path: non_empty("ARCADE_WORDS_PATH").map(PathBuf::from),
            creatures_path: non_empty("ARCADE_CREATURES_PATH").map(PathBuf::from),
            strict_words: non_empty("ARCADE_STRICT_WORDS").is_some_and(|s| parse_flag(&s)),
            log_path: non_empty("ARCADE_LOG_PATH").map(PathBuf::from),
        }
    }

    /// Seeded generator, or clock-seeded when no seed is configured.
    pub fn rng(&self) -> SimpleRng {
        match self.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_entropy(),
        }
    }

    pub fn word_policy(&self) -> DictionaryPolicy {
        if self.strict_words {
            DictionaryPolicy::Strict
        } else {
            DictionaryPolicy::Permissive
        }
    }

    #[instrument(skip(self))]
    pub fn load_words(&self) -> Result<WordList, CorpusError> {
        match &self.words_path {
            Some(path) => WordList::from_path(path),
            None => {
                debug!("using built-in word list");
                Ok(WordList::builtin())
            }
        }
    }

    #[instrument(skip(self))]
    pub fn load_creatures(&self) -> Result<CreatureDex, CorpusError> {
        match &self.creatures_path {
            Some(path) => CreatureDex::from_path(path),
            None => {
                debug!("using built-in creature dex");
                Ok(CreatureDex::builtin())
            }
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = HostConfig::from_lookup(|_| None);
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.word_policy(), DictionaryPolicy::Permissive);
        assert!(!config.load_words().unwrap().is_empty());
        assert!(!config.load_creatures().unwrap().is_empty());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = HostConfig::from_lookup(lookup(&[
            ("ARCADE_SEED", " 42 "),
            ("ARCADE_WORDS_PATH", "/tmp/words.json"),
            ("ARCADE_CREATURES_PATH", "/tmp/dex.json"),
            ("ARCADE_STRICT_WORDS", "Yes"),
            ("ARCADE_LOG_PATH", "/tmp/arcade.log"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.words_path, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.creatures_path, Some(PathBuf::from("/tmp/dex.json")));
        assert!(config.strict_words);
        assert_eq!(config.word_policy(), DictionaryPolicy::Strict);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/arcade.log")));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = HostConfig::from_lookup(lookup(&[
            ("ARCADE_SEED", "not-a-number"),
            ("ARCADE_STRICT_WORDS", "maybe"),
            ("ARCADE_LOG_PATH", "   "),
        ]));
        assert_eq!(config.seed, None);
        assert!(!config.strict_words);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = HostConfig {
            seed: Some(7),
            ..HostConfig::default()
        };
        assert_eq!(config.rng().next_u32(), SimpleRng::new(7).next_u32());
    }

    #[test]
    fn test_missing_word_file_is_an_error() {
        let config = HostConfig {
            words_path: Some(PathBuf::from("/nonexistent/arcade/words.json")),
            ..HostConfig::default()
        };
        assert!(matches!(config.load_words(), Err(CorpusError::Io(_))));
    }
}
