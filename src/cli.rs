//! Command-line interface for the arcade host.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arcade::engine::HostConfig;

/// Terminal arcade: word, creature, snake and tetris
#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Play word, creature, snake or tetris in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[command(subcommand)]
    pub command: Command,

    /// RNG seed (overrides ARCADE_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// JSON word list (overrides ARCADE_WORDS_PATH)
    #[arg(long, global = true)]
    pub words: Option<PathBuf>,

    /// JSON creature dex (overrides ARCADE_CREATURES_PATH)
    #[arg(long, global = true)]
    pub creatures: Option<PathBuf>,

    /// Reject word guesses that are not in the word list
    #[arg(long, global = true)]
    pub strict_words: bool,
}

/// Available games
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess the five-letter word in six attempts
    Word,

    /// Guess the creature from attribute feedback
    Creature,

    /// Classic snake
    Snake {
        /// Board side length in cells
        #[arg(long, default_value = "8")]
        size: u8,
    },

    /// Classic tetris
    Tetris,
}

impl Cli {
    /// Layer command-line flags over environment configuration.
    pub fn apply(&self, mut config: HostConfig) -> HostConfig {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(path) = &self.words {
            config.words_path = Some(path.clone());
        }
        if let Some(path) = &self.creatures {
            config.creatures_path = Some(path.clone());
        }
        config.strict_words |= self.strict_words;
        config
    }
}
