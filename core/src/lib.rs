//! matnsaz-core
//!
//! Script-agnostic core of a cursive-script keyboard: contextual shaping,
//! hamza fusion, and typo-tolerant word suggestions. Language crates
//! (liburdu) supply the letter table, lexicon and keyboard geometry.
//!
//! Public API:
//! - `ScriptTable` - Base letters and their four presentation forms
//! - `ShapingEngine` - Next-letter variant, key previews, full re-shaping
//! - `Lexicon` - Word-frequency table bucketed by normalized length
//! - `KeyAdjacency` / `KeyboardLayout` - Physical neighbors and key centers
//! - `PhoneticMap` - Sound-alike letter groups
//! - `MatchEngine` - Ranked suggestions for a typed word
//! - `Engine` - Facade combining all of the above
//! - `Config` - Configuration and scoring constants
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod script;
pub use script::{GlyphVariant, HamzaRules, LetterForms, ScriptTable, TATWEEL, ZWNJ};

pub mod normalize;
pub use normalize::Normalizer;

pub mod context;
pub use context::Edit;

pub mod shaping;
pub use shaping::ShapingEngine;

pub mod lexicon;
pub use lexicon::{Lexicon, WordEntry};

pub mod adjacency;
pub use adjacency::{KeyAdjacency, Point};

pub mod layout;
pub use layout::{KeySpec, KeyboardLayout};

pub mod phonetic;
pub use phonetic::PhoneticMap;

pub mod suggestion;
pub use suggestion::Suggestion;

pub mod matcher;
pub use matcher::{LetterMatch, MatchEngine, WordMatch};

pub mod engine;
pub use engine::{Engine, KeyOutcome};

/// Generic configuration for the keyboard core.
///
/// Only script-agnostic fields live here. Language crates wrap it (see
/// `UrduConfig` in liburdu) and populate the phonetic groups.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Phonetic confusion groups (e.g., "س=ص=ث")
    /// Language crates should populate this with appropriate defaults
    pub phonetic: Vec<String>,

    // Suggestion limits
    /// Total suggestions returned, including the literal typed word
    pub max_suggestions: usize,
    /// Dictionary words returned besides the literal typed word
    pub max_dictionary_suggestions: usize,

    // Scoring
    /// Divisor applied to the nudge distance: `frequency / (factor * nudge)`
    pub distance_factor: f64,
    /// Floor for the nudge distance so exact touches stay finite
    pub min_nudge_distance: f64,

    // Layout
    /// Maximum gap in points between keys considered neighbors, for
    /// layouts without explicit neighbor lists
    pub neighbor_gap: f64,

    /// Show contextual forms (tatweel previews) on key labels
    pub contextual_forms: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Empty phonetic rules by default - language crates will populate
            phonetic: vec![],
            max_suggestions: 3,
            max_dictionary_suggestions: 2,
            distance_factor: 2.0,
            min_nudge_distance: 1e-3,
            // Rows of the bundled layouts sit 11pt apart, columns 6pt
            neighbor_gap: 12.0,
            contextual_forms: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
