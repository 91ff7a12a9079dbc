//! Urdu keyboard engine constructors.
//!
//! Wires the Urdu letter table, hamza rules and built-in layout into the
//! generic `matnsaz_core::Engine`. All typing logic lives in core.

use std::path::Path;
use std::sync::Arc;

use matnsaz_core::{Engine, Lexicon, Result};
use tracing::warn;

use crate::config::UrduConfig;
use crate::layout::{alphabetical_layout, layout_by_name};
use crate::letters::{hamza_rules, normalizer, script_table};

/// A handful of common words, enough to try the engine without a corpus.
const DEMO_WORDS: &[(&str, f64)] = &[
    ("ہے", 120.0),
    ("میں", 110.0),
    ("کی", 100.0),
    ("کے", 95.0),
    ("اور", 90.0),
    ("سے", 85.0),
    ("کا", 80.0),
    ("یہ", 70.0),
    ("وہ", 65.0),
    ("نہیں", 60.0),
    ("بات", 30.0),
    ("کام", 28.0),
    ("لوگ", 26.0),
    ("پاکستان", 25.0),
    ("دن", 22.0),
    ("کتاب", 20.0),
    ("اردو", 18.0),
    ("سچی", 15.0),
    ("گئے", 12.0),
    ("سوال", 10.0),
];

/// Lexicon built from the bundled demo words.
pub fn demo_lexicon() -> Result<Lexicon> {
    Lexicon::from_entries(normalizer(), DEMO_WORDS.iter().copied())
}

/// Engine with the default Urdu configuration.
pub fn create_engine(lexicon: Lexicon) -> Result<Engine> {
    create_engine_with_config(lexicon, UrduConfig::default())
}

/// Engine using `config`'s layout and scoring settings.
///
/// An unknown layout name falls back to the alphabetical layout.
pub fn create_engine_with_config(lexicon: Lexicon, config: UrduConfig) -> Result<Engine> {
    let layout = layout_by_name(&config.layout).unwrap_or_else(|| {
        warn!(layout = %config.layout, "unknown layout, using alphabetical");
        alphabetical_layout()
    });
    let adjacency = layout.adjacency(config.base().neighbor_gap);
    Engine::new(
        script_table(),
        Some(hamza_rules()),
        Arc::new(lexicon),
        adjacency,
        config.into_base(),
    )
}

/// Load a JSON word-frequency file and build an engine over it.
pub fn load_engine<P: AsRef<Path>>(json_path: P, config: UrduConfig) -> Result<Engine> {
    let lexicon = Lexicon::load_json(json_path, normalizer())?;
    create_engine_with_config(lexicon, config)
}

/// Build an engine from a lexicon compiled by `matnsaz-lexicon convert`.
pub fn load_compiled_engine<P: AsRef<Path>>(bincode_path: P, config: UrduConfig) -> Result<Engine> {
    let lexicon = Lexicon::load_bincode(bincode_path)?;
    create_engine_with_config(lexicon, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_engine_builds() {
        let engine = create_engine(demo_lexicon().unwrap()).unwrap();
        assert_eq!(engine.matcher().lexicon().len(), DEMO_WORDS.len());
        assert!(engine.adjacency().has_geometry());
    }

    #[test]
    fn unknown_layout_falls_back() {
        let config = UrduConfig {
            layout: "dvorak".to_string(),
            ..UrduConfig::default()
        };
        let engine = create_engine_with_config(demo_lexicon().unwrap(), config).unwrap();
        assert!(engine.adjacency().is_neighbor('س', 'چ'));
    }

    #[test]
    fn rasm_layout_from_config() {
        let config = UrduConfig::from_toml_str("layout = \"rasm\"\n").unwrap();
        let engine = create_engine_with_config(demo_lexicon().unwrap(), config).unwrap();
        assert!(engine.adjacency().is_neighbor('ٮ', 'ح'));
        assert!(engine.adjacency().center('ب').is_none());
        assert_eq!(engine.key_label('ٮ', "").unwrap(), "ٮـ");
    }

    #[test]
    fn foreign_words_fail_fast() {
        let lexicon = Lexicon::from_entries(normalizer(), [("kitab", 1.0)]).unwrap();
        assert!(matches!(
            create_engine(lexicon),
            Err(matnsaz_core::Error::Uncovered { letter: 'k', .. })
        ));
    }
}
