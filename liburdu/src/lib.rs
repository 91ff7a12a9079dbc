//! liburdu crate root
//!
//! Urdu data for the matnsaz keyboard core: the letter forms table, hamza
//! fusion rules, phonetic confusion groups and the built-in layouts,
//! plus constructors that assemble a ready `Engine`.
//!
//! Public API exported here:
//! - `script_table`, `hamza_rules`, `normalizer` from `letters`
//! - `alphabetical_layout`, `rasm_layout`, `layout_by_name` from `layout`
//! - `UrduConfig` from `config`
//! - `create_engine`, `load_engine` and friends from `engine`

pub mod config;
pub mod engine;
pub mod layout;
pub mod letters;

// Re-export the core types callers need alongside the constructors.
pub use matnsaz_core::{
    Edit, Engine, GlyphVariant, KeyOutcome, Lexicon, Point, Suggestion,
};

pub use config::{urdu_default_phonetic_rules, UrduConfig};
pub use engine::{
    create_engine, create_engine_with_config, demo_lexicon, load_compiled_engine, load_engine,
};
pub use layout::{alphabetical_layout, layout_by_name, rasm_layout, ALPHABETICAL, RASM};
pub use letters::{hamza_rules, letter_forms, normalizer, script_table};
