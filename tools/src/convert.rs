use anyhow::{Context, Result};
use matnsaz_core::Lexicon;
use std::collections::BTreeMap;
use std::path::Path;

/// Counts reported after a conversion.
#[derive(Debug, Default, PartialEq)]
pub struct ConvertStats {
    pub read: usize,
    pub below_min: usize,
    pub uncovered: usize,
    pub written: usize,
}

/// Read a JSON word-frequency table and write the compiled bincode lexicon.
///
/// Words under `min_frequency` are dropped. With `skip_uncovered`, words
/// using letters outside the Urdu table are dropped instead of making the
/// engine refuse the lexicon at startup.
pub fn run(input: &Path, output: &Path, min_frequency: f64, skip_uncovered: bool) -> Result<ConvertStats> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let table: BTreeMap<String, f64> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", input.display()))?;

    let (lexicon, stats) = build(&table, min_frequency, skip_uncovered)?;
    lexicon
        .save_bincode(output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(stats)
}

pub fn build(
    table: &BTreeMap<String, f64>,
    min_frequency: f64,
    skip_uncovered: bool,
) -> Result<(Lexicon, ConvertStats)> {
    let script = liburdu::script_table();
    let mut lexicon = Lexicon::new(liburdu::normalizer());
    let mut stats = ConvertStats {
        read: table.len(),
        ..ConvertStats::default()
    };

    for (word, &freq) in table {
        if freq < min_frequency {
            stats.below_min += 1;
            continue;
        }
        if skip_uncovered && script.ensure_covers(&lexicon.clean(word), word).is_err() {
            stats.uncovered += 1;
            continue;
        }
        lexicon
            .insert(word, freq)
            .with_context(|| format!("adding {word:?}"))?;
    }
    stats.written = lexicon.len();
    Ok((lexicon, stats))
}
