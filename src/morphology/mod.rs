//! Morphological analysis interface.
//!
//! The substitution pipeline treats the morphological analyzer as an opaque
//! capability behind the [`MorphAnalyzer`] trait: given a surface word it
//! returns candidate readings, and given a base form it enumerates the
//! inflected forms of that lexeme. The analyzer is injected into every
//! component that needs it; there is no ambient global instance.
//!
//! Two implementations ship with the crate:
//!
//! - [`IdentityAnalyzer`] - every word is its own lexeme; keeps the pipeline
//!   total when no real analyzer is wired in
//! - [`TableAnalyzer`] - a lexicon-backed analyzer loaded from JSON, usable
//!   both offline and as a deterministic test double

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod identity;
pub mod table;

// Re-export the bundled analyzers for convenient access
pub use identity::IdentityAnalyzer;
pub use table::TableAnalyzer;

/// Coarse part-of-speech category of a word form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Numeral,
    Preposition,
    Pronoun,
    Conjunction,
    Particle,
    Interjection,
}

impl PartOfSpeech {
    /// Whether this category is a function word excluded from the
    /// relevant-word set during dictionary reduction.
    pub fn is_function_word(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Preposition
                | PartOfSpeech::Pronoun
                | PartOfSpeech::Conjunction
                | PartOfSpeech::Particle
        )
    }
}

/// A grammatical feature tag (case, number, gender, tense, ...) as reported
/// by the analyzer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grammeme(String);

impl Grammeme {
    /// Create a new grammeme from a tag string.
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Grammeme(tag.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Grammeme {
    fn from(tag: &str) -> Self {
        Grammeme::new(tag)
    }
}

impl fmt::Display for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of grammatical feature tags.
pub type GrammemeSet = AHashSet<Grammeme>;

/// One candidate reading of a surface word form.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// The surface form this reading describes
    pub word: String,

    /// The base (dictionary) form of the lexeme
    pub normal_form: String,

    /// Coarse grammatical category, when the analyzer reports one
    pub part_of_speech: Option<PartOfSpeech>,

    /// Grammatical feature tags of this form
    pub grammemes: GrammemeSet,
}

impl Analysis {
    /// Create a new analysis with no part of speech and no grammemes.
    pub fn new<S: Into<String>, N: Into<String>>(word: S, normal_form: N) -> Self {
        Analysis {
            word: word.into(),
            normal_form: normal_form.into(),
            part_of_speech: None,
            grammemes: GrammemeSet::new(),
        }
    }

    /// Set the part of speech.
    pub fn with_part_of_speech(mut self, pos: PartOfSpeech) -> Self {
        self.part_of_speech = Some(pos);
        self
    }

    /// Set the grammeme set from tag strings.
    pub fn with_grammemes<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grammemes = tags.into_iter().map(Grammeme::new).collect();
        self
    }

    /// Number of grammemes this reading shares with another.
    pub fn agreement(&self, other: &Analysis) -> usize {
        self.grammemes.intersection(&other.grammemes).count()
    }
}

/// Trait for morphological analyzers consumed by the pipeline.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so a single analyzer instance can be
/// shared across components behind an `Arc`.
pub trait MorphAnalyzer: Send + Sync {
    /// Analyze a surface word, returning its candidate readings.
    ///
    /// An empty vector means the analyzer cannot parse the word; callers
    /// treat that as "pass the word through unchanged", never as an error.
    fn analyze(&self, word: &str) -> Vec<Analysis>;

    /// Enumerate all surface forms of the lexeme with the given base form,
    /// each with its grammeme set.
    ///
    /// An empty vector means the lexeme is unknown to the analyzer.
    fn inflections(&self, normal_form: &str) -> Vec<Analysis>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Load the analyzer configured by an optional lexicon path.
///
/// A path selects a [`TableAnalyzer`]; no path selects the
/// [`IdentityAnalyzer`].
pub fn load_analyzer(lexicon: Option<&std::path::Path>) -> Result<Box<dyn MorphAnalyzer>> {
    match lexicon {
        Some(path) => Ok(Box::new(TableAnalyzer::load_from_file(path)?)),
        None => Ok(Box::new(IdentityAnalyzer::new())),
    }
}
