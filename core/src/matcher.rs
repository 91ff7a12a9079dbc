//! Typo-tolerant suggestion matching.
//!
//! A typed word is compared against every lexicon word of the same
//! normalized length, letter by letter. Each position must be explained by
//! one of four relations, tried in order:
//!
//! 1. the same letter;
//! 2. a physically adjacent key;
//! 3. a letter that sounds alike;
//! 4. a letter that sounds like one of the adjacent keys.
//!
//! Any unexplained position rejects the word. Survivors are scored by
//! frequency, divided by how far the touches landed from the keys that
//! explain them when touch geometry is available.
//!
//! Insertions and deletions are never considered.

use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::adjacency::{KeyAdjacency, Point};
use crate::lexicon::{Lexicon, WordEntry};
use crate::phonetic::PhoneticMap;
use crate::suggestion::Suggestion;
use crate::Config;

/// How one candidate letter relates to the typed letter at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMatch {
    Exact,
    PhysicalNeighbor,
    AuralNeighbor,
    /// The candidate letter sounds like `via`, a key next to the typed one.
    AuralNeighborOfPhysicalNeighbor { via: char },
    NoMatch,
}

impl LetterMatch {
    /// Key whose center a touch is measured against.
    pub fn explaining_key(&self, typed: char, candidate: char) -> Option<char> {
        match *self {
            LetterMatch::Exact | LetterMatch::PhysicalNeighbor => Some(candidate),
            LetterMatch::AuralNeighbor => Some(typed),
            LetterMatch::AuralNeighborOfPhysicalNeighbor { via } => Some(via),
            LetterMatch::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, LetterMatch::NoMatch)
    }
}

/// A lexicon word that survived letter-by-letter comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct WordMatch {
    pub word: String,
    pub key: String,
    pub frequency: f64,
    pub letters: Vec<LetterMatch>,
    /// Summed touch distance; `None` when geometry was not used.
    pub nudge_distance: Option<f64>,
    pub score: f64,
}

/// Ranks lexicon words against typed input.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    lexicon: Arc<Lexicon>,
    phonetic: Arc<PhoneticMap>,
    max_suggestions: usize,
    max_dictionary_suggestions: usize,
    distance_factor: f64,
    min_nudge_distance: f64,
}

impl MatchEngine {
    /// Matcher with the default limits and scoring constants.
    pub fn new(lexicon: Arc<Lexicon>, phonetic: Arc<PhoneticMap>) -> Self {
        let config = Config::default();
        Self {
            lexicon,
            phonetic,
            max_suggestions: config.max_suggestions,
            max_dictionary_suggestions: config.max_dictionary_suggestions,
            distance_factor: config.distance_factor,
            min_nudge_distance: config.min_nudge_distance,
        }
    }

    /// Matcher whose phonetic groups, limits and constants come from `config`.
    pub fn from_config(lexicon: Arc<Lexicon>, config: &Config) -> Self {
        Self {
            lexicon,
            phonetic: Arc::new(PhoneticMap::from_rules(&config.phonetic)),
            max_suggestions: config.max_suggestions,
            max_dictionary_suggestions: config.max_dictionary_suggestions,
            distance_factor: config.distance_factor,
            min_nudge_distance: config.min_nudge_distance,
        }
    }

    pub fn with_limits(mut self, max_suggestions: usize, max_dictionary_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self.max_dictionary_suggestions = max_dictionary_suggestions;
        self
    }

    pub fn with_scoring(mut self, distance_factor: f64, min_nudge_distance: f64) -> Self {
        self.distance_factor = distance_factor;
        self.min_nudge_distance = min_nudge_distance;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn phonetic(&self) -> &PhoneticMap {
        &self.phonetic
    }

    /// Relation between a typed letter and a candidate letter.
    pub fn classify(&self, typed: char, candidate: char, adjacency: &KeyAdjacency) -> LetterMatch {
        if typed == candidate {
            return LetterMatch::Exact;
        }
        if adjacency.is_neighbor(typed, candidate) {
            return LetterMatch::PhysicalNeighbor;
        }
        if self.phonetic.is_neighbor(typed, candidate) {
            return LetterMatch::AuralNeighbor;
        }
        match adjacency
            .neighbors(typed)
            .iter()
            .find(|&&n| self.phonetic.is_neighbor(n, candidate))
        {
            Some(&via) => LetterMatch::AuralNeighborOfPhysicalNeighbor { via },
            None => LetterMatch::NoMatch,
        }
    }

    /// Every matching lexicon word, best first.
    ///
    /// `touches` holds one point per letter of the normalized typed word.
    /// Geometry is ignored unless there are enough points and every typed
    /// letter has a key center; ranking then falls back to frequency.
    pub fn rank(
        &self,
        typed: &str,
        adjacency: &KeyAdjacency,
        touches: Option<&[Point]>,
    ) -> Vec<WordMatch> {
        let cleaned = self.lexicon.clean(typed);
        self.rank_cleaned(&cleaned, adjacency, touches).0
    }

    fn rank_cleaned(
        &self,
        cleaned: &str,
        adjacency: &KeyAdjacency,
        touches: Option<&[Point]>,
    ) -> (Vec<WordMatch>, bool) {
        let typed: Vec<char> = cleaned.chars().collect();
        if typed.is_empty() {
            return (Vec::new(), false);
        }

        let touches = touches.filter(|t| !t.is_empty());
        let geometry = touches.filter(|t| {
            t.len() >= typed.len() && typed.iter().all(|&c| adjacency.center(c).is_some())
        });
        if touches.is_some() && geometry.is_none() {
            warn!(
                word = cleaned,
                touches = touches.map_or(0, <[Point]>::len),
                "touch geometry unusable, ranking by frequency"
            );
        }

        let mut matches: Vec<WordMatch> = self
            .lexicon
            .words_of_length(typed.len())
            .iter()
            .filter_map(|entry| self.match_entry(&typed, entry, adjacency, geometry))
            .collect();
        // stable: equal scores keep lexicon order
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        (matches, geometry.is_some())
    }

    fn match_entry(
        &self,
        typed: &[char],
        entry: &WordEntry,
        adjacency: &KeyAdjacency,
        touches: Option<&[Point]>,
    ) -> Option<WordMatch> {
        let mut letters = Vec::with_capacity(typed.len());
        let mut nudge = 0.0;
        for (i, (&c, d)) in typed.iter().zip(entry.key.chars()).enumerate() {
            let m = self.classify(c, d, adjacency);
            if !m.is_match() {
                return None;
            }
            if let Some(points) = touches {
                let center = m.explaining_key(c, d).and_then(|k| adjacency.center(k));
                if let (Some(center), Some(touch)) = (center, points.get(i)) {
                    nudge += touch.distance(&center);
                }
            }
            letters.push(m);
        }

        let nudge_distance = touches.map(|_| nudge);
        let score = match nudge_distance {
            Some(d) => entry.frequency / (self.distance_factor * d.max(self.min_nudge_distance)),
            None => entry.frequency,
        };
        trace!(word = %entry.word, score, ?nudge_distance, "candidate");
        Some(WordMatch {
            word: entry.word.clone(),
            key: entry.key.clone(),
            frequency: entry.frequency,
            letters,
            nudge_distance,
            score,
        })
    }

    /// Suggestion bar contents for `typed`.
    ///
    /// The literal typed word comes first, followed by the best dictionary
    /// words that differ from it. When the typed word is not itself in the
    /// lexicon, the top dictionary word becomes the default. Returns an
    /// empty list for input that normalizes to nothing.
    pub fn get_suggestions(
        &self,
        typed: &str,
        adjacency: &KeyAdjacency,
        touches: Option<&[Point]>,
    ) -> Vec<Suggestion> {
        let cleaned = self.lexicon.clean(typed);
        if cleaned.is_empty() {
            return Vec::new();
        }
        let (matches, geometry) = self.rank_cleaned(&cleaned, adjacency, touches);

        let limit = self.max_suggestions.max(1);
        let dictionary_limit = self.max_dictionary_suggestions.min(limit - 1);

        let mut out = Vec::with_capacity(limit);
        out.push(Suggestion::user_typed(typed));
        out.extend(
            matches
                .iter()
                .filter(|m| m.key != cleaned)
                .take(dictionary_limit)
                .map(|m| Suggestion::dictionary(m.word.as_str())),
        );

        if !self.lexicon.contains_key(&cleaned) && out.len() > 1 {
            out[0].is_default = false;
            out[1].is_default = true;
        }
        out.truncate(limit);

        debug!(
            word = typed,
            candidates = matches.len(),
            geometry,
            suggestions = out.len(),
            "suggestions"
        );
        out
    }
}
