//! Error type shared by the core crate.

use thiserror::Error;

/// Errors surfaced while loading data or building an engine.
///
/// Input problems during typing (empty words, short touch lists) are never
/// reported through this type; they degrade to smaller results instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A letter was looked up that the script table does not define.
    #[error("letter {0:?} is missing from the script table")]
    UnknownLetter(char),

    /// A letter reachable from the lexicon or a keyboard layout has no
    /// script table entry.
    #[error("letter {letter:?} used by {origin} is missing from the script table")]
    Uncovered { letter: char, origin: String },

    /// Lexicon frequencies must be finite and strictly positive.
    #[error("invalid frequency {frequency} for word {word:?}")]
    InvalidFrequency { word: String, frequency: f64 },

    #[error("lexicon json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lexicon bincode: {0}")]
    Bincode(#[from] bincode::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config write: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
