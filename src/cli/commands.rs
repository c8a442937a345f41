//! Command implementations for the synomorph CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::analysis::tokenizer::CharClassTokenizer;
use crate::cli::args::*;
use crate::dictionary::entry::{DictionaryParser, write_dictionary};
use crate::dictionary::reducer::DictionaryReducer;
use crate::error::Result;
use crate::morphology::{MorphAnalyzer, load_analyzer};
use crate::substitution::SubstitutionEngine;

/// Execute a CLI command.
pub fn execute_command(args: SynomorphArgs) -> Result<()> {
    match &args.command {
        Command::Apply(apply_args) => apply(apply_args.clone(), &args),
        Command::Reduce(reduce_args) => reduce(reduce_args.clone(), &args),
    }
}

/// Substitute synonyms in a document.
fn apply(args: ApplyArgs, cli_args: &SynomorphArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        eprintln!("Dictionary: {}", args.dictionary.display());
    }

    let analyzer: Arc<dyn MorphAnalyzer> = load_analyzer(args.morphology.as_deref())?.into();
    let parser = DictionaryParser::new(args.default_probability);
    let entries = parser.read(open_input_file(&args.dictionary)?)?;
    if cli_args.verbosity() > 1 {
        eprintln!("Loaded {} dictionary entries", entries.len());
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut engine = SubstitutionEngine::new(entries, analyzer, rng);

    let text = read_input(args.input.as_deref())?;
    let tokens = CharClassTokenizer::new().tokenize(&text);

    let mut writer = open_output(args.output.as_deref())?;
    for token in engine.apply(tokens) {
        writer.write_all(token.text.as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}

/// Reduce a dictionary to the entries relevant to a document.
fn reduce(args: ReduceArgs, cli_args: &SynomorphArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        eprintln!("Dictionary: {}", args.dictionary.display());
    }

    let analyzer: Arc<dyn MorphAnalyzer> = load_analyzer(args.morphology.as_deref())?.into();
    let parser = DictionaryParser::new(1.0);
    let entries = parser.read(open_input_file(&args.dictionary)?)?;

    let text = read_input(args.input.as_deref())?;
    let reducer = DictionaryReducer::new(analyzer);
    let reduced = reducer.reduce(&text, entries);
    if cli_args.verbosity() > 1 {
        eprintln!("Kept {} entries", reduced.len());
    }

    let mut writer = open_output(args.output.as_deref())?;
    write_dictionary(&mut writer, &reduced)?;
    writer.flush()?;

    Ok(())
}

/// Open a file for buffered reading.
fn open_input_file(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Read the whole document from a file or stdin.
fn read_input(path: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    match path {
        Some(path) => {
            open_input_file(path)?.read_to_string(&mut text)?;
        }
        None => {
            io::stdin().lock().read_to_string(&mut text)?;
        }
    }
    Ok(text)
}

/// Open the output destination, a file or stdout.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout().lock())),
    }
}
