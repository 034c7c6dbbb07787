//! Rejected-transition taxonomy shared by every engine.

/// Why an engine refused an intent.
///
/// None of these are fatal: the engine state is left exactly as it was and the
/// host may show the message and keep playing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IntentError {
    /// Submitted word is not exactly the required length.
    #[display("Word must be {expected} letters long (got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// Word is not in the corpus and the dictionary policy is strict.
    #[display("{_0} is not a valid word")]
    NotInDictionary(#[error(not(source))] String),

    /// Guessed name is not part of the reference dataset.
    #[display("{_0} is not a known creature")]
    UnknownCreature(#[error(not(source))] String),

    /// Move, rotation or turn that would break board geometry.
    #[display("Move not allowed")]
    IllegalIntent,

    /// The game already ended.
    #[display("Game is already over")]
    AlreadyTerminal,

    /// The single hint of this session was already used.
    #[display("Hint already used")]
    HintExhausted,

    /// The game is paused; only pause and restart are accepted.
    #[display("Game is paused")]
    Paused,
}

impl IntentError {
    /// Whether hosts should swallow this rejection instead of showing it.
    ///
    /// Geometry rejections behave like a key press that simply did nothing.
    pub fn is_silent(&self) -> bool {
        matches!(self, IntentError::IllegalIntent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let err = IntentError::InvalidLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Word must be 5 letters long (got 3)");
        assert_eq!(
            IntentError::UnknownCreature("MISSINGNO".into()).to_string(),
            "MISSINGNO is not a known creature"
        );
    }

    #[test]
    fn is_a_std_error_without_source() {
        let err: Box<dyn std::error::Error> = Box::new(IntentError::NotInDictionary("ZZZZZ".into()));
        assert_eq!(err.to_string(), "ZZZZZ is not a valid word");
        assert!(std::error::Error::source(err.as_ref()).is_none());
    }

    #[test]
    fn only_geometry_rejections_are_silent() {
        assert!(IntentError::IllegalIntent.is_silent());
        assert!(!IntentError::AlreadyTerminal.is_silent());
        assert!(!IntentError::HintExhausted.is_silent());
        assert!(!IntentError::Paused.is_silent());
    }
}
