//! Word-frequency lexicon for matnsaz-core
//!
//! The lexicon maps a normalized word (see `Normalizer`) to a relative
//! frequency score. It is built once, either from the JSON word-frequency
//! table produced by the offline corpus counter or from the compiled bincode
//! artifact, and is read-only afterwards.
//!
//! Entries are bucketed by the character length of their normalized key so
//! the matcher only ever scans words of the typed length.
//!
//! Public API:
//! - `WordEntry`: display surface, normalized key and frequency
//! - `Lexicon`: insert/lookup API, JSON and bincode loaders

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::normalize::Normalizer;
use crate::utils;

/// A single lexicon word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Text shown to the user when the word is suggested.
    pub word: String,
    /// Normalized skeleton used for matching.
    pub key: String,
    /// Relative frequency. Always finite and positive.
    pub frequency: f64,
}

/// On-disk form of a compiled lexicon.
#[derive(Serialize, Deserialize)]
struct LexiconFile {
    normalizer: Normalizer,
    entries: Vec<WordEntry>,
}

/// In-memory lexicon bucketed by normalized length.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    normalizer: Normalizer,
    buckets: BTreeMap<usize, Vec<WordEntry>>,
    // key -> (bucket length, index within bucket)
    index: AHashMap<String, (usize, usize)>,
}

impl Lexicon {
    /// Create an empty lexicon that normalizes with `normalizer`.
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            buckets: BTreeMap::new(),
            index: AHashMap::new(),
        }
    }

    /// Add a word.
    ///
    /// Words whose normalized keys collide are merged: frequencies add up and
    /// the first surface form is kept. Words that normalize to nothing are
    /// skipped.
    pub fn insert(&mut self, word: &str, frequency: f64) -> Result<()> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(Error::InvalidFrequency {
                word: word.to_string(),
                frequency,
            });
        }
        let key = self.normalizer.clean(word);
        if key.is_empty() {
            warn!(word, "skipping lexicon word that is empty after normalization");
            return Ok(());
        }

        if let Some(&(len, i)) = self.index.get(&key) {
            if let Some(entry) = self.buckets.get_mut(&len).and_then(|b| b.get_mut(i)) {
                entry.frequency += frequency;
            }
            return Ok(());
        }

        let len = key.chars().count();
        let bucket = self.buckets.entry(len).or_default();
        self.index.insert(key.clone(), (len, bucket.len()));
        bucket.push(WordEntry {
            word: utils::normalize(word),
            key,
            frequency,
        });
        Ok(())
    }

    /// Build from `(word, frequency)` pairs, in order.
    pub fn from_entries<'a, I>(normalizer: Normalizer, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut lx = Self::new(normalizer);
        for (word, freq) in entries {
            lx.insert(word, freq)?;
        }
        Ok(lx)
    }

    /// Parse a JSON object mapping words to frequencies.
    ///
    /// Keys are visited in sorted order, which fixes the tie-break order of
    /// equally scored suggestions.
    pub fn from_json_str(json: &str, normalizer: Normalizer) -> Result<Self> {
        let table: BTreeMap<String, f64> = serde_json::from_str(json)?;
        let mut lx = Self::new(normalizer);
        for (word, freq) in &table {
            lx.insert(word, *freq)?;
        }
        Ok(lx)
    }

    /// Load a JSON word-frequency file.
    pub fn load_json<P: AsRef<Path>>(path: P, normalizer: Normalizer) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let lx = Self::from_json_str(&content, normalizer)?;
        info!(path = %path.display(), words = lx.len(), "loaded lexicon json");
        Ok(lx)
    }

    /// Save the lexicon (entries and normalizer) using bincode.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let out = LexiconFile {
            normalizer: self.normalizer.clone(),
            entries: self.iter().cloned().collect(),
        };
        bincode::serialize_into(writer, &out)?;
        info!(path = %path.display(), words = self.len(), "saved lexicon");
        Ok(())
    }

    /// Load a lexicon produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let stored: LexiconFile = bincode::deserialize_from(reader)?;
        let mut lx = Self::new(stored.normalizer);
        for e in stored.entries {
            lx.insert(&e.word, e.frequency)?;
        }
        info!(path = %path.display(), words = lx.len(), "loaded lexicon");
        Ok(lx)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalize a word the way lexicon keys are normalized.
    pub fn clean(&self, word: &str) -> String {
        self.normalizer.clean(word)
    }

    /// Entry for an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&WordEntry> {
        let &(len, i) = self.index.get(key)?;
        self.buckets.get(&len)?.get(i)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Whether `word` (in any surface form) is a known word.
    pub fn contains(&self, word: &str) -> bool {
        self.contains_key(&self.clean(word))
    }

    pub fn frequency(&self, word: &str) -> Option<f64> {
        self.get(&self.clean(word)).map(|e| e.frequency)
    }

    /// All words whose normalized key has `len` characters.
    pub fn words_of_length(&self, len: usize) -> &[WordEntry] {
        self.buckets.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.buckets.values().flatten()
    }

    /// Every distinct character used by a normalized key.
    pub fn letters(&self) -> BTreeSet<char> {
        self.iter().flat_map(|e| e.key.chars()).collect()
    }

    /// Return the number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Return true if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
