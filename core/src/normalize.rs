//! Word normalization for dictionary keys and typed input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::script::{is_diacritic, HamzaRules, TATWEEL};
use crate::utils;

/// Produces the skeleton string used for lookups and length comparisons.
///
/// Steps: NFC + trim, fold letter variants (seated hamza to bare hamza),
/// drop combining marks and tatweel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalizer {
    folds: BTreeMap<char, char>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer folding every seated hamza onto the bare letter.
    pub fn from_hamza(rules: &HamzaRules) -> Self {
        let mut n = Self::new();
        for seated in rules.seated_forms() {
            n.add_fold(seated, rules.bare);
        }
        n
    }

    pub fn add_fold(&mut self, from: char, to: char) {
        self.folds.insert(from, to);
    }

    pub fn with_fold(mut self, from: char, to: char) -> Self {
        self.add_fold(from, to);
        self
    }

    pub fn fold(&self, c: char) -> char {
        self.folds.get(&c).copied().unwrap_or(c)
    }

    pub fn clean(&self, word: &str) -> String {
        utils::normalize(word)
            .chars()
            .filter(|c| !is_diacritic(*c) && *c != TATWEEL)
            .map(|c| self.fold(c))
            .collect()
    }
}
