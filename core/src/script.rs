//! Script table: base letters and their four presentation forms.
//!
//! The table is plain data. A language crate fills it once at startup and
//! everything else (shaping, coverage checks, key previews) reads from it.
//! Whether a letter joins the following letter is never stored; it is
//! derived from the table by comparing the initial and isolated forms.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{Error, Result};

/// Elongation joiner used to preview connection points.
pub const TATWEEL: char = '\u{0640}';

/// Zero-width non-joiner; ends joining without inserting a space.
pub const ZWNJ: char = '\u{200C}';

/// The four visually distinct forms a cursive letter may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphVariant {
    Isolated,
    Initial,
    Medial,
    Final,
}

impl GlyphVariant {
    pub const ALL: [GlyphVariant; 4] = [
        GlyphVariant::Isolated,
        GlyphVariant::Initial,
        GlyphVariant::Medial,
        GlyphVariant::Final,
    ];

    /// Variant for a letter given whether it connects on each side.
    pub fn from_joins(joins_previous: bool, joins_next: bool) -> Self {
        match (joins_previous, joins_next) {
            (false, false) => GlyphVariant::Isolated,
            (false, true) => GlyphVariant::Initial,
            (true, true) => GlyphVariant::Medial,
            (true, false) => GlyphVariant::Final,
        }
    }
}

/// Presentation forms of one base letter.
///
/// A form is a string rather than a single code point because some letters
/// synthesize a form from a base glyph plus a combining mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterForms {
    pub isolated: String,
    pub initial: String,
    pub medial: String,
    pub final_form: String,
}

impl LetterForms {
    pub fn new(isolated: &str, initial: &str, medial: &str, final_form: &str) -> Self {
        Self {
            isolated: isolated.to_string(),
            initial: initial.to_string(),
            medial: medial.to_string(),
            final_form: final_form.to_string(),
        }
    }

    pub fn get(&self, variant: GlyphVariant) -> &str {
        match variant {
            GlyphVariant::Isolated => &self.isolated,
            GlyphVariant::Initial => &self.initial,
            GlyphVariant::Medial => &self.medial,
            GlyphVariant::Final => &self.final_form,
        }
    }

    pub fn is_forward_joining(&self) -> bool {
        self.initial != self.isolated
    }
}

/// Mapping from base letter to its presentation forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptTable {
    letters: HashMap<char, LetterForms>,
}

impl ScriptTable {
    pub fn new() -> Self {
        Self {
            letters: HashMap::new(),
        }
    }

    /// Build a table from `(letter, [isolated, initial, medial, final])` rows.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (char, [&'a str; 4])>,
    {
        let mut table = Self::new();
        for (letter, [isolated, initial, medial, final_form]) in rows {
            table.insert(letter, LetterForms::new(isolated, initial, medial, final_form));
        }
        table
    }

    pub fn insert(&mut self, letter: char, forms: LetterForms) {
        self.letters.insert(letter, forms);
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains_key(&letter)
    }

    pub fn forms(&self, letter: char) -> Result<&LetterForms> {
        self.letters.get(&letter).ok_or(Error::UnknownLetter(letter))
    }

    /// Presentation form of `letter` in the given position.
    pub fn shape(&self, letter: char, variant: GlyphVariant) -> Result<&str> {
        Ok(self.forms(letter)?.get(variant))
    }

    /// `shape(L, Initial) != shape(L, Isolated)`.
    pub fn is_forward_joining(&self, letter: char) -> Result<bool> {
        Ok(self.forms(letter)?.is_forward_joining())
    }

    /// Like `is_forward_joining`, but anything outside the table counts as
    /// non-joining. Used when inspecting arbitrary host text.
    pub fn joins_forward(&self, c: char) -> bool {
        self.letters
            .get(&c)
            .map(LetterForms::is_forward_joining)
            .unwrap_or(false)
    }

    /// Fail with `Uncovered` on the first letter of `text` missing from the
    /// table. Marks, tatweel and word boundaries are ignored.
    pub fn ensure_covers(&self, text: &str, origin: &str) -> Result<()> {
        for c in text.chars() {
            if is_diacritic(c) || c == TATWEEL || is_word_boundary(c) {
                continue;
            }
            if !self.contains(c) {
                return Err(Error::Uncovered {
                    letter: c,
                    origin: origin.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Hamza placement rules for scripts that seat hamza on a carrier letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HamzaRules {
    /// The standalone hamza letter.
    pub bare: char,
    /// Hamza on a medial seat; replaces `bare` once the word continues.
    pub seated: char,
    /// `(carrier, fused)` pairs: typing hamza after `carrier` yields `fused`.
    pub fused: Vec<(char, char)>,
}

impl HamzaRules {
    /// Fused letter for hamza typed right after `carrier`.
    pub fn fuse_with(&self, carrier: char) -> Option<char> {
        self.fused
            .iter()
            .find(|(c, _)| *c == carrier)
            .map(|(_, fused)| *fused)
    }

    /// Every seated-hamza letter, which all fold back to `bare` for matching.
    pub fn seated_forms(&self) -> impl Iterator<Item = char> + '_ {
        std::iter::once(self.seated).chain(self.fused.iter().map(|(_, f)| *f))
    }
}

/// Combining marks layered on a base letter.
pub fn is_diacritic(c: char) -> bool {
    unicode_normalization::char::is_combining_mark(c)
}

pub fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Characters after which the next letter starts a new word.
pub fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c == ZWNJ || is_punctuation(c)
}

/// Letters in the Arabic blocks; these must be in the table to be shaped.
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}')
        && c.is_alphabetic()
        && !is_diacritic(c)
        && c != TATWEEL
}

/// Strip combining marks, keeping base letters and everything else.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|c| !is_diacritic(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScriptTable {
        ScriptTable::from_rows([
            ('ا', ["ا", "ا", "ﺎ", "ﺎ"]),
            ('ب', ["ﺏ", "ﺑ", "ﺒ", "ﺐ"]),
            ('ں', ["ں", "ﻧ٘", "ﻨ٘", "ﮟ"]),
        ])
    }

    #[test]
    fn forward_joining_is_derived_from_forms() {
        let t = sample();
        assert!(!t.is_forward_joining('ا').unwrap());
        assert!(t.is_forward_joining('ب').unwrap());
        assert!(t.is_forward_joining('ں').unwrap());
    }

    #[test]
    fn synthesized_form_keeps_its_mark() {
        let t = sample();
        let initial = t.shape('ں', GlyphVariant::Initial).unwrap();
        assert_eq!(initial.chars().count(), 2);
        assert!(is_diacritic(initial.chars().last().unwrap()));
    }

    #[test]
    fn unknown_letter_is_an_error() {
        let t = sample();
        assert!(matches!(
            t.shape('ج', GlyphVariant::Final),
            Err(Error::UnknownLetter('ج'))
        ));
        assert!(!t.joins_forward('ج'));
    }

    #[test]
    fn coverage_skips_marks_and_boundaries() {
        let t = sample();
        assert!(t.ensure_covers("بَا با", "test").is_ok());
        let err = t.ensure_covers("باج", "word").unwrap_err();
        assert!(matches!(err, Error::Uncovered { letter: 'ج', .. }));
    }

    #[test]
    fn boundaries_and_punctuation() {
        assert!(is_word_boundary(' '));
        assert!(is_word_boundary(ZWNJ));
        assert!(is_word_boundary('۔'));
        assert!(is_word_boundary('،'));
        assert!(is_word_boundary('?'));
        assert!(!is_word_boundary('ب'));
        assert!(!is_word_boundary(TATWEEL));
    }

    #[test]
    fn diacritics_are_removed() {
        assert_eq!(remove_diacritics("بَابِ"), "باب");
        assert!(is_arabic_letter('ب'));
        assert!(!is_arabic_letter(TATWEEL));
        assert!(!is_arabic_letter('a'));
        assert!(!is_arabic_letter('\u{064E}'));
    }

    #[test]
    fn variant_from_joins() {
        assert_eq!(GlyphVariant::from_joins(false, false), GlyphVariant::Isolated);
        assert_eq!(GlyphVariant::from_joins(false, true), GlyphVariant::Initial);
        assert_eq!(GlyphVariant::from_joins(true, true), GlyphVariant::Medial);
        assert_eq!(GlyphVariant::from_joins(true, false), GlyphVariant::Final);
    }
}
