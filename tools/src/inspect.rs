use anyhow::{Context, Result};
use matnsaz_core::{Lexicon, WordEntry};
use std::path::Path;

pub fn load(path: &Path) -> Result<Lexicon> {
    Lexicon::load_bincode(path).with_context(|| format!("loading {}", path.display()))
}

/// The `n` most frequent words, highest first.
pub fn top_words(lexicon: &Lexicon, n: usize) -> Vec<&WordEntry> {
    let mut entries: Vec<&WordEntry> = lexicon.iter().collect();
    entries.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
    entries.truncate(n);
    entries
}

pub fn run(path: &Path, word: Option<&str>, top: usize) -> Result<()> {
    let lexicon = load(path)?;
    println!("{}: {} words", path.display(), lexicon.len());

    if let Some(word) = word {
        let key = lexicon.clean(word);
        match lexicon.get(&key) {
            Some(e) => println!("{} (key {}) frequency {}", e.word, e.key, e.frequency),
            None => println!("{word} not found (key {key})"),
        }
        return Ok(());
    }

    for (i, e) in top_words(&lexicon, top).iter().enumerate() {
        println!("{:>4}. {}\t{}", i + 1, e.word, e.frequency);
    }
    Ok(())
}
