//! Suggestion types returned to the host.
//!
//! This module provides:
//! - `Suggestion`: one entry of the suggestion bar
//! - `default_suggestion`: the entry committed on an implicit accept

use serde::{Deserialize, Serialize};

/// A single suggestion shown above the keyboard.
///
/// Exactly one suggestion in a non-empty list is the default; it is what a
/// space press commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub is_default: bool,
    pub is_user_typed: bool,
}

impl Suggestion {
    /// The literal word the user typed. Default until a dictionary word
    /// replaces it.
    pub fn user_typed<T: Into<String>>(text: T) -> Self {
        Suggestion {
            text: text.into(),
            is_default: true,
            is_user_typed: true,
        }
    }

    /// A word taken from the lexicon.
    pub fn dictionary<T: Into<String>>(text: T) -> Self {
        Suggestion {
            text: text.into(),
            is_default: false,
            is_user_typed: false,
        }
    }
}

/// The default entry of a suggestion list, if any.
pub fn default_suggestion(suggestions: &[Suggestion]) -> Option<&Suggestion> {
    suggestions.iter().find(|s| s.is_default)
}
