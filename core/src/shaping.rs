//! Contextual shaping: which form a letter takes given its neighbours.
//!
//! Two entry points serve the keyboard:
//! - `next_variant` looks at the text before the cursor and tells the host
//!   which form the next typed letter will take, so key labels can preview
//!   it (`key_label`, `space_label`).
//! - `edit_for_insert` applies the hamza fusion rules at commit time and
//!   returns the buffer edit the host should perform. Hosts apply it before
//!   asking for the next variant.
//!
//! `shape` re-renders a whole string into presentation forms using both
//! neighbours of every letter.

use std::sync::Arc;

use crate::context::{last_base_char, second_last_base_char, Edit};
use crate::error::{Error, Result};
use crate::script::{is_arabic_letter, is_diacritic, GlyphVariant, HamzaRules, ScriptTable, TATWEEL};

/// How a character takes part in joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Letter(char),
    Joiner,
    Other,
}

/// Shaping over a script table, with optional hamza fusion.
#[derive(Debug, Clone)]
pub struct ShapingEngine {
    table: Arc<ScriptTable>,
    hamza: Option<HamzaRules>,
}

impl ShapingEngine {
    pub fn new(table: Arc<ScriptTable>, hamza: Option<HamzaRules>) -> Self {
        Self { table, hamza }
    }

    pub fn table(&self) -> &ScriptTable {
        &self.table
    }

    pub fn hamza(&self) -> Option<&HamzaRules> {
        self.hamza.as_ref()
    }

    /// Whether the next letter connects to `c`. Tatweel always does; anything
    /// outside the table never does.
    fn connects_after(&self, c: char) -> bool {
        c == TATWEEL || self.table.joins_forward(c)
    }

    /// Variant of the next letter given the single preceding base character.
    pub fn variant_after(&self, preceding: Option<char>) -> GlyphVariant {
        match preceding {
            Some(c) if self.connects_after(c) => GlyphVariant::Medial,
            _ => GlyphVariant::Initial,
        }
    }

    /// Variant of the next letter to be typed after `context`.
    ///
    /// Start of text, spaces, ZWNJ and punctuation give `Initial`; so does
    /// any character outside the table. After a forward-joining letter the
    /// next letter is `Medial`.
    ///
    /// The variant applies to the whole keyboard, so it is never `Isolated`.
    /// A non-joining letter in `Initial` position still renders isolated,
    /// because `add_tatweel` adds no trailing tatweel to it.
    pub fn next_variant(&self, context: &str) -> GlyphVariant {
        self.variant_after(last_base_char(context))
    }

    /// Decorate `label` with tatweel so a lone key glyph shows its joins.
    pub fn add_tatweel(&self, label: &str, variant: GlyphVariant) -> Result<String> {
        let Some(last) = last_base_char(label) else {
            return Ok(label.to_string());
        };
        let suffix = if self.table.is_forward_joining(last)? {
            TATWEEL.to_string()
        } else {
            String::new()
        };
        Ok(match variant {
            GlyphVariant::Isolated => label.to_string(),
            GlyphVariant::Initial => format!("{label}{suffix}"),
            GlyphVariant::Medial => format!("{TATWEEL}{label}{suffix}"),
            GlyphVariant::Final => format!("{TATWEEL}{label}"),
        })
    }

    /// Label of a letter key when the next letter will take `variant`.
    ///
    /// The hamza key shows its seated form in medial position, since that is
    /// what it becomes once the word continues.
    pub fn key_label(&self, letter: char, variant: GlyphVariant) -> Result<String> {
        let shown = match &self.hamza {
            Some(h) if letter == h.bare && variant == GlyphVariant::Medial => h.seated,
            _ => letter,
        };
        self.add_tatweel(&shown.to_string(), variant)
    }

    /// Label for the space and ZWNJ keys: how the last letter will settle if
    /// the word ends here. `None` when the last letter would not change.
    pub fn space_label(&self, context: &str) -> Option<String> {
        let last = last_base_char(context)?;
        if !self.table.joins_forward(last) {
            return None;
        }
        let form = match second_last_base_char(context) {
            Some(prev) if self.connects_after(prev) => GlyphVariant::Final,
            _ => GlyphVariant::Isolated,
        };
        self.add_tatweel(&last.to_string(), form).ok()
    }

    /// Buffer edit for typing `letter` after `context`.
    ///
    /// - hamza after a carrier letter replaces the carrier with the fused
    ///   letter;
    /// - a letter after a bare hamza seats the hamza first. Marks already on
    ///   the hamza are kept on the seated letter.
    pub fn edit_for_insert(&self, context: &str, letter: char) -> Edit {
        let Some(h) = &self.hamza else {
            return Edit::insert(letter);
        };
        if letter == h.bare {
            if let Some(fused) = context.chars().last().and_then(|c| h.fuse_with(c)) {
                return Edit::replace(1, fused);
            }
        }
        let base = context.trim_end_matches(is_diacritic);
        if base.ends_with(h.bare) && self.table.contains(letter) {
            let marks = &context[base.len()..];
            return Edit::replace(
                1 + marks.chars().count(),
                format!("{}{marks}{letter}", h.seated),
            );
        }
        Edit::insert(letter)
    }

    fn unit(&self, c: char) -> Result<Unit> {
        if self.table.contains(c) {
            Ok(Unit::Letter(c))
        } else if c == TATWEEL {
            Ok(Unit::Joiner)
        } else if is_arabic_letter(c) {
            Err(Error::UnknownLetter(c))
        } else {
            Ok(Unit::Other)
        }
    }

    /// Presentation glyph for every cluster (base character plus marks).
    pub fn shape_glyphs(&self, text: &str) -> Result<Vec<String>> {
        let clusters = clusters(text);
        let units = clusters
            .iter()
            .map(|(base, _)| self.unit(*base))
            .collect::<Result<Vec<_>>>()?;

        let mut out = Vec::with_capacity(clusters.len());
        for (i, (_, cluster)) in clusters.iter().enumerate() {
            let Unit::Letter(c) = units[i] else {
                out.push(cluster.to_string());
                continue;
            };
            let joins_previous = i > 0
                && match units[i - 1] {
                    Unit::Letter(p) => self.table.joins_forward(p),
                    Unit::Joiner => true,
                    Unit::Other => false,
                };
            let joins_next = self.table.joins_forward(c)
                && matches!(units.get(i + 1), Some(Unit::Letter(_)) | Some(Unit::Joiner));
            let variant = GlyphVariant::from_joins(joins_previous, joins_next);

            let mut glyph = self.table.shape(c, variant)?.to_string();
            glyph.extend(cluster.chars().skip(1));
            out.push(glyph);
        }
        Ok(out)
    }

    /// `text` rendered with explicit presentation forms.
    pub fn shape(&self, text: &str) -> Result<String> {
        Ok(self.shape_glyphs(text)?.concat())
    }
}

/// Split into (base, cluster) pairs; marks attach to the preceding base.
fn clusters(text: &str) -> Vec<(char, &str)> {
    let mut out: Vec<(char, &str)> = Vec::new();
    let mut start = 0;
    let mut base = None;
    for (i, c) in text.char_indices() {
        if is_diacritic(c) && base.is_some() {
            continue;
        }
        if let Some(b) = base {
            out.push((b, &text[start..i]));
        }
        start = i;
        base = Some(c);
    }
    if let Some(b) = base {
        out.push((b, &text[start..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ShapingEngine {
        let table = ScriptTable::from_rows([
            ('ا', ["ا", "ا", "ﺎ", "ﺎ"]),
            ('ب', ["ﺏ", "ﺑ", "ﺒ", "ﺐ"]),
            ('و', ["و", "و", "ﻮ", "ﻮ"]),
            ('ء', ["ء", "ﺋ", "ﺌ", "ء"]),
            ('ئ', ["ئ", "ﺋ", "ﺌ", "ﺊ"]),
            ('ؤ', ["ؤ", "ؤ", "ﺆ", "ﺆ"]),
        ]);
        ShapingEngine::new(
            Arc::new(table),
            Some(HamzaRules {
                bare: 'ء',
                seated: 'ئ',
                fused: vec![('و', 'ؤ')],
            }),
        )
    }

    #[test]
    fn next_variant_rules() {
        let e = engine();
        assert_eq!(e.next_variant(""), GlyphVariant::Initial);
        assert_eq!(e.next_variant("ب "), GlyphVariant::Initial);
        assert_eq!(e.next_variant("ب\u{200C}"), GlyphVariant::Initial);
        assert_eq!(e.next_variant("ب۔"), GlyphVariant::Initial);
        assert_eq!(e.next_variant("ب"), GlyphVariant::Medial);
        assert_eq!(e.next_variant("بَ"), GlyphVariant::Medial);
        assert_eq!(e.next_variant("با"), GlyphVariant::Initial);
        assert_eq!(e.next_variant("b"), GlyphVariant::Initial);
        assert_eq!(e.next_variant("ـ"), GlyphVariant::Medial);
    }

    #[test]
    fn tatweel_placement() {
        let e = engine();
        assert_eq!(e.add_tatweel("ب", GlyphVariant::Isolated).unwrap(), "ب");
        assert_eq!(e.add_tatweel("ب", GlyphVariant::Initial).unwrap(), "بـ");
        assert_eq!(e.add_tatweel("ب", GlyphVariant::Medial).unwrap(), "ـبـ");
        assert_eq!(e.add_tatweel("ب", GlyphVariant::Final).unwrap(), "ـب");
        assert_eq!(e.add_tatweel("ا", GlyphVariant::Initial).unwrap(), "ا");
        assert_eq!(e.add_tatweel("ا", GlyphVariant::Medial).unwrap(), "ـا");
        assert!(e.add_tatweel("ج", GlyphVariant::Initial).is_err());
    }

    #[test]
    fn hamza_key_previews_seated_form_in_medial_position() {
        let e = engine();
        assert_eq!(e.key_label('ء', GlyphVariant::Medial).unwrap(), "ـئـ");
        assert_eq!(e.key_label('ء', GlyphVariant::Initial).unwrap(), "ءـ");
        assert_eq!(e.key_label('ب', GlyphVariant::Medial).unwrap(), "ـبـ");
    }

    #[test]
    fn space_label_previews_word_end() {
        let e = engine();
        assert_eq!(e.space_label(""), None);
        assert_eq!(e.space_label("ب"), Some("ب".to_string()));
        assert_eq!(e.space_label("بب"), Some("ـب".to_string()));
        assert_eq!(e.space_label("اب"), Some("ب".to_string()));
        assert_eq!(e.space_label(" ب"), Some("ب".to_string()));
        assert_eq!(e.space_label("با"), None);
    }

    #[test]
    fn fusion_edits() {
        let e = engine();
        assert_eq!(e.edit_for_insert("سو", 'ء'), Edit::replace(1, "ؤ"));
        assert_eq!(e.edit_for_insert("بء", 'ب'), Edit::replace(1, "ئب"));
        assert_eq!(e.edit_for_insert("ب", 'ء'), Edit::insert("ء"));
        assert_eq!(e.edit_for_insert("بء", '\u{064E}'), Edit::insert("\u{064E}"));
        assert_eq!(e.edit_for_insert("بء", ' '), Edit::insert(" "));
    }

    #[test]
    fn seating_keeps_marks_on_the_hamza() {
        let e = engine();
        let edit = e.edit_for_insert("بء\u{064E}", 'ا');
        assert_eq!(edit, Edit::replace(2, "ئ\u{064E}ا"));
        assert_eq!(edit.applied_to("بء\u{064E}"), "بئ\u{064E}ا");

        let edit = e.edit_for_insert("بء\u{064E}\u{0651}", 'ب');
        assert_eq!(edit, Edit::replace(3, "ئ\u{064E}\u{0651}ب"));

        // a mark after some other letter is left alone
        assert_eq!(e.edit_for_insert("ب\u{064E}", 'ا'), Edit::insert("ا"));
    }

    #[test]
    fn non_joining_letter_at_word_start_renders_isolated() {
        let e = engine();
        let variant = e.next_variant("");
        assert_eq!(variant, GlyphVariant::Initial);
        assert_eq!(
            e.add_tatweel("ا", variant).unwrap(),
            e.add_tatweel("ا", GlyphVariant::Isolated).unwrap()
        );
    }

    #[test]
    fn shape_uses_both_neighbours() {
        let e = engine();
        assert_eq!(e.shape_glyphs("ببب").unwrap(), vec!["ﺑ", "ﺒ", "ﺐ"]);
        assert_eq!(e.shape("باب").unwrap(), "ﺑﺎﺏ");
        assert_eq!(e.shape("ب ب").unwrap(), "ﺏ ﺏ");
        assert_eq!(e.shape("بَب").unwrap(), "ﺑَﺐ");
        assert_eq!(e.shape("بـ").unwrap(), "ﺑـ");
        assert!(matches!(e.shape("بج"), Err(Error::UnknownLetter('ج'))));
    }
}
