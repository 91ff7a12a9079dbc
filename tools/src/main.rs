mod convert;
mod inspect;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matnsaz-lexicon", about = "Build and inspect matnsaz lexicon files")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON word-frequency table into a bincode lexicon
    Convert {
        #[arg(long)]
        input: PathBuf,

        #[arg(long, default_value = "lexicon.bin")]
        output: PathBuf,

        /// Drop words less frequent than this
        #[arg(long, default_value_t = 0.0)]
        min_frequency: f64,

        /// Drop words with letters outside the Urdu table instead of failing
        #[arg(long)]
        skip_uncovered: bool,
    },
    /// Print a word's entry or the most frequent words
    Inspect {
        #[arg(long, default_value = "lexicon.bin")]
        lexicon: PathBuf,

        #[arg(long)]
        word: Option<String>,

        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Show the suggestions the keyboard would offer for a word
    Suggest {
        #[arg(long, default_value = "lexicon.bin")]
        lexicon: PathBuf,

        word: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Convert {
            input,
            output,
            min_frequency,
            skip_uncovered,
        } => {
            let stats = convert::run(&input, &output, min_frequency, skip_uncovered)?;
            println!(
                "Read {} words, dropped {} rare and {} uncovered, wrote {} to {}",
                stats.read,
                stats.below_min,
                stats.uncovered,
                stats.written,
                output.display()
            );
        }
        Command::Inspect { lexicon, word, top } => {
            inspect::run(&lexicon, word.as_deref(), top)?;
        }
        Command::Suggest { lexicon, word } => {
            let lexicon = inspect::load(&lexicon)?;
            let engine = liburdu::create_engine(lexicon).context("building engine")?;
            for s in engine.suggest_word(&word, None) {
                let marker = if s.is_default { "*" } else { " " };
                let origin = if s.is_user_typed { "typed" } else { "dictionary" };
                println!("{marker} {}\t({origin})", s.text);
            }
        }
    }
    Ok(())
}
