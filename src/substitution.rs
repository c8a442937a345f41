//! Probabilistic, agreement-aware synonym substitution.
//!
//! [`SubstitutionEngine`] consumes a token stream and rewrites selected word
//! tokens with synonyms drawn from a dictionary, inflected to agree with the
//! original word's grammatical features. Non-word tokens, words the analyzer
//! cannot parse, and words without a dictionary entry pass through
//! unchanged, so the concatenated output reproduces the input verbatim
//! except for the substituted words.
//!
//! Randomness is injected: the engine is generic over [`rand::Rng`], and a
//! seeded generator makes every substitution decision reproducible.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use synomorph::analysis::tokenizer::CharClassTokenizer;
//! use synomorph::dictionary::DictionaryParser;
//! use synomorph::morphology::IdentityAnalyzer;
//! use synomorph::substitution::SubstitutionEngine;
//!
//! let parser = DictionaryParser::new(1.0);
//! let entries = vec![parser.parse_line("big|large").unwrap()];
//!
//! let mut engine = SubstitutionEngine::new(
//!     entries,
//!     Arc::new(IdentityAnalyzer::new()),
//!     StdRng::seed_from_u64(42),
//! );
//!
//! let tokens = CharClassTokenizer::new().tokenize("a big deal");
//! let output: String = engine.apply(tokens).map(|t| t.text).collect();
//!
//! assert_eq!(output, "a large deal");
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::analysis::token::{Token, TokenKind};
use crate::dictionary::entry::DictionaryEntry;
use crate::morphology::{Analysis, MorphAnalyzer};

/// Token-stream rewriter backed by a synonym dictionary and a morphological
/// analyzer.
///
/// The lookup map is keyed by canonical form; when several entries share a
/// canonical form, the last one loaded wins.
pub struct SubstitutionEngine<R: Rng> {
    replacements: AHashMap<String, DictionaryEntry>,
    analyzer: Arc<dyn MorphAnalyzer>,
    rng: R,
}

impl<R: Rng> SubstitutionEngine<R> {
    /// Create an engine from dictionary entries, an analyzer, and a random
    /// generator.
    pub fn new<I>(entries: I, analyzer: Arc<dyn MorphAnalyzer>, rng: R) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut replacements = AHashMap::new();
        for entry in entries {
            replacements.insert(entry.canonical().to_string(), entry);
        }

        SubstitutionEngine {
            replacements,
            analyzer,
            rng,
        }
    }

    /// Number of entries in the lookup map.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Check whether the lookup map is empty.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Rewrite a token stream, one output token per input token.
    pub fn apply<'a, I>(&'a mut self, tokens: I) -> impl Iterator<Item = Token> + 'a
    where
        I: IntoIterator<Item = Token>,
        I::IntoIter: 'a,
    {
        tokens.into_iter().map(move |token| self.substitute(token))
    }

    /// Decide the fate of a single token.
    fn substitute(&mut self, token: Token) -> Token {
        if token.kind != TokenKind::Word {
            return token;
        }

        let analyses = self.analyzer.analyze(&token.text);
        let Some(primary) = analyses.into_iter().next() else {
            return token;
        };

        let Some(entry) = self.replacements.get(&primary.normal_form) else {
            return token;
        };

        // Bernoulli gate: substitute only when the draw lands below the
        // entry's probability.
        if self.rng.random::<f64>() >= entry.probability {
            return token;
        }

        let Some(synonym) = entry.alternatives().choose(&mut self.rng) else {
            return token;
        };

        let mut replacement = self.agreeing_form(synonym, &primary);
        if is_title_case(&token.text) {
            replacement = capitalize(&replacement);
        }

        Token::word(replacement)
    }

    /// Pick the inflected form of `synonym` that best agrees with the
    /// original reading.
    ///
    /// The winner is the form whose grammeme set has the largest
    /// intersection with the original's, first maximal form wins ties, and
    /// the lexeme's base form stands in when nothing overlaps. A synonym
    /// the analyzer has no lexeme for is used as written.
    fn agreeing_form(&self, synonym: &str, original: &Analysis) -> String {
        let lexeme = self.analyzer.inflections(synonym);
        let Some(base) = lexeme.first() else {
            return synonym.to_string();
        };

        let mut best = base;
        let mut best_agreement = 0;
        for form in &lexeme {
            let agreement = form.agreement(original);
            if agreement > best_agreement {
                best_agreement = agreement;
                best = form;
            }
        }

        best.word.clone()
    }
}

/// Whether a word is title-cased: uppercase starts each cased run, with no
/// uppercase following a cased character.
fn is_title_case(word: &str) -> bool {
    let mut has_cased = false;
    let mut prev_cased = false;

    for c in word.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            has_cased = true;
            prev_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
        } else {
            prev_cased = false;
        }
    }

    has_cased
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
