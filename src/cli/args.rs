//! Command line argument parsing for the synomorph CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// synomorph - morphology-aware synonym substitution for text
#[derive(Parser, Debug, Clone)]
#[command(name = "synomorph")]
#[command(about = "Probabilistically rewrite words with morphologically-agreeing synonyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynomorphArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynomorphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Substitute synonyms in a document
    Apply(ApplyArgs),

    /// Reduce a dictionary to the entries relevant to a document
    Reduce(ReduceArgs),
}

/// Arguments for the apply command
#[derive(Parser, Debug, Clone)]
pub struct ApplyArgs {
    /// Source synonym dictionary
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: PathBuf,

    /// Input file (default stdin)
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default stdout)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Lexicon file for the table analyzer (default: identity analyzer)
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub morphology: Option<PathBuf>,

    /// Default probability for entries that carry none
    #[arg(long, value_name = "PROBABILITY", default_value_t = 1.0)]
    pub default_probability: f64,

    /// Probability for word shaking (reserved, currently ignored)
    #[arg(long, value_name = "PROBABILITY", default_value_t = 0.0)]
    pub shake_probability: f64,

    /// Seed for the random generator (default: entropy)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Arguments for the reduce command
#[derive(Parser, Debug, Clone)]
pub struct ReduceArgs {
    /// Source synonym dictionary
    #[arg(
        short,
        long,
        value_name = "DICTIONARY_FILE",
        default_value = "./syn-dict.txt"
    )]
    pub dictionary: PathBuf,

    /// Input file (default stdin)
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default stdout)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Lexicon file for the table analyzer (default: identity analyzer)
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub morphology: Option<PathBuf>,
}
