// core/src/engine.rs
//
// Engine facade tying shaping and matching to one keyboard session.
// Language crates build the pieces and hand them over here.

use std::sync::Arc;
use tracing::info;

use crate::adjacency::{KeyAdjacency, Point};
use crate::context::{current_word, Edit};
use crate::error::{Error, Result};
use crate::layout::KeyboardLayout;
use crate::lexicon::Lexicon;
use crate::matcher::MatchEngine;
use crate::script::{GlyphVariant, HamzaRules, ScriptTable};
use crate::shaping::ShapingEngine;
use crate::suggestion::Suggestion;
use crate::Config;

/// Result of a letter key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Edit the host applies to its buffer.
    pub edit: Edit,
    /// Form the following letter will take once `edit` is applied.
    pub next_variant: GlyphVariant,
}

/// Shaping plus suggestions over an immutable lexicon.
///
/// Construction checks that every letter the lexicon or the layout can
/// produce is in the script table, so lookups during typing cannot fail on
/// missing letters.
#[derive(Debug, Clone)]
pub struct Engine {
    shaper: ShapingEngine,
    matcher: MatchEngine,
    adjacency: KeyAdjacency,
    config: Config,
}

impl Engine {
    pub fn new(
        table: Arc<ScriptTable>,
        hamza: Option<HamzaRules>,
        lexicon: Arc<Lexicon>,
        adjacency: KeyAdjacency,
        config: Config,
    ) -> Result<Self> {
        if let Some(h) = &hamza {
            for c in std::iter::once(h.bare).chain(h.seated_forms()) {
                if !table.contains(c) {
                    return Err(Error::Uncovered {
                        letter: c,
                        origin: "hamza rules".to_string(),
                    });
                }
            }
        }
        for entry in lexicon.iter() {
            table.ensure_covers(&entry.key, &format!("lexicon word {:?}", entry.word))?;
        }
        check_adjacency(&table, &adjacency)?;

        info!(
            letters = table.len(),
            words = lexicon.len(),
            geometry = adjacency.has_geometry(),
            "engine ready"
        );
        Ok(Self {
            shaper: ShapingEngine::new(table, hamza),
            matcher: MatchEngine::from_config(lexicon, &config),
            adjacency,
            config,
        })
    }

    /// Type `letter` after `context`.
    pub fn type_letter(&self, context: &str, letter: char) -> KeyOutcome {
        let edit = self.shaper.edit_for_insert(context, letter);
        let next_variant = self.shaper.next_variant(&edit.applied_to(context));
        KeyOutcome { edit, next_variant }
    }

    pub fn next_variant(&self, context: &str) -> GlyphVariant {
        self.shaper.next_variant(context)
    }

    /// Label for `letter`'s key given the text before the cursor.
    pub fn key_label(&self, letter: char, context: &str) -> Result<String> {
        if !self.config.contextual_forms {
            // still reject letters the table does not know
            self.shaper.table().forms(letter)?;
            return Ok(letter.to_string());
        }
        self.shaper.key_label(letter, self.shaper.next_variant(context))
    }

    pub fn space_label(&self, context: &str) -> Option<String> {
        if !self.config.contextual_forms {
            return None;
        }
        self.shaper.space_label(context)
    }

    pub fn shape(&self, text: &str) -> Result<String> {
        self.shaper.shape(text)
    }

    /// Suggestions for the word in progress at the end of `context`.
    pub fn suggest(&self, context: &str, touches: Option<&[Point]>) -> Vec<Suggestion> {
        self.suggest_word(current_word(context), touches)
    }

    pub fn suggest_word(&self, word: &str, touches: Option<&[Point]>) -> Vec<Suggestion> {
        self.matcher.get_suggestions(word, &self.adjacency, touches)
    }

    /// Swap the key adjacency, e.g. after a layout change.
    pub fn set_adjacency(&mut self, adjacency: KeyAdjacency) -> Result<()> {
        check_adjacency(self.shaper.table(), &adjacency)?;
        self.adjacency = adjacency;
        Ok(())
    }

    /// Use `layout`, deriving neighbors with the configured gap.
    pub fn set_layout(&mut self, layout: &KeyboardLayout) -> Result<()> {
        info!(layout = %layout.name, keys = layout.keys.len(), "switching layout");
        self.set_adjacency(layout.adjacency(self.config.neighbor_gap))
    }

    pub fn shaper(&self) -> &ShapingEngine {
        &self.shaper
    }

    pub fn matcher(&self) -> &MatchEngine {
        &self.matcher
    }

    pub fn adjacency(&self) -> &KeyAdjacency {
        &self.adjacency
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn check_adjacency(table: &ScriptTable, adjacency: &KeyAdjacency) -> Result<()> {
    for c in adjacency.letters() {
        if !table.contains(c) {
            return Err(Error::Uncovered {
                letter: c,
                origin: "keyboard layout".to_string(),
            });
        }
    }
    Ok(())
}
