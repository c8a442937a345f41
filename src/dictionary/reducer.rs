//! Document-scoped dictionary reduction.
//!
//! [`DictionaryReducer`] derives, from a full synonym dictionary and one
//! reference document, the subset of entries that can actually apply to
//! that document. The source dictionary is never mutated; the reducer
//! produces new entries with the synonym list filtered down to the
//! candidates that agree with the canonical form's part of speech.

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;
use regex::Regex;

use crate::analysis::tokenizer::CharClassTokenizer;
use crate::dictionary::entry::DictionaryEntry;
use crate::morphology::MorphAnalyzer;

/// Gate for reference-text tokens admitted to the relevant-word set:
/// word characters only, no digits.
static CONTENT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w--\d]*$").expect("Content word pattern should be valid"));

/// Reduces a synonym dictionary to the entries relevant to one document.
pub struct DictionaryReducer {
    tokenizer: CharClassTokenizer,
    analyzer: Arc<dyn MorphAnalyzer>,
}

impl DictionaryReducer {
    /// Create a reducer backed by the given analyzer.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        DictionaryReducer {
            tokenizer: CharClassTokenizer::new(),
            analyzer,
        }
    }

    /// Reduce `entries` to those whose canonical form occurs in
    /// `reference_text` as a content word.
    ///
    /// Each relevant word is consumed by at most one entry, so no two
    /// emitted entries share a canonical form and a later entry keyed on an
    /// already-consumed word is skipped. The synonym list of an emitted
    /// entry keeps only the alternatives sharing the canonical form's part
    /// of speech; entries left without alternatives are dropped. Processing
    /// stops once every relevant word has been consumed.
    pub fn reduce<I>(&self, reference_text: &str, entries: I) -> Vec<DictionaryEntry>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut words = self.relevant_words(reference_text);
        let mut reduced = Vec::new();

        for entry in entries {
            if words.is_empty() {
                break;
            }

            let canonical = entry.canonical().to_string();
            if !words.remove(&canonical) {
                continue;
            }

            let survivors: Vec<String> = entry
                .alternatives()
                .iter()
                .filter(|synonym| *synonym != &canonical && self.same_pos(synonym, &canonical))
                .cloned()
                .collect();
            if survivors.is_empty() {
                continue;
            }

            let mut synonyms = Vec::with_capacity(survivors.len() + 1);
            synonyms.push(canonical);
            synonyms.extend(survivors);
            reduced.push(DictionaryEntry::new(synonyms, entry.probability));
        }

        reduced
    }

    /// Collect the normalized forms of every content word in the text.
    ///
    /// Tokens that carry digits or word symbols, tokens the analyzer cannot
    /// parse, and function words (prepositions, pronouns, conjunctions,
    /// particles) are all excluded.
    fn relevant_words(&self, reference_text: &str) -> AHashSet<String> {
        let mut words = AHashSet::new();

        for token in self.tokenizer.tokenize(reference_text) {
            if !token.is_word() || !CONTENT_WORD.is_match(&token.text) {
                continue;
            }
            let analyses = self.analyzer.analyze(&token.text);
            let Some(primary) = analyses.first() else {
                continue;
            };
            if primary
                .part_of_speech
                .is_some_and(|pos| pos.is_function_word())
            {
                continue;
            }
            words.insert(primary.normal_form.clone());
        }

        words
    }

    /// Whether two words share a part of speech, judged by their primary
    /// analyses. Unanalyzable words never agree.
    fn same_pos(&self, left: &str, right: &str) -> bool {
        let left = self.analyzer.analyze(left);
        let right = self.analyzer.analyze(right);
        match (left.first(), right.first()) {
            (Some(a), Some(b)) => a.part_of_speech == b.part_of_speech,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::table::{FormRecord, LexemeRecord, TableAnalyzer};
    use crate::morphology::{Grammeme, PartOfSpeech};

    fn lexeme(normal_form: &str, pos: PartOfSpeech, words: &[&str]) -> LexemeRecord {
        LexemeRecord {
            normal_form: normal_form.to_string(),
            part_of_speech: Some(pos),
            forms: words
                .iter()
                .map(|word| FormRecord {
                    word: word.to_string(),
                    grammemes: vec![Grammeme::from("sing")],
                })
                .collect(),
        }
    }

    fn entry(synonyms: &[&str], probability: f64) -> DictionaryEntry {
        DictionaryEntry::new(synonyms.iter().map(|s| s.to_string()).collect(), probability)
    }

    fn test_analyzer() -> Arc<dyn MorphAnalyzer> {
        Arc::new(TableAnalyzer::from_records([
            lexeme("дом", PartOfSpeech::Noun, &["дом", "дома", "дому"]),
            lexeme("здание", PartOfSpeech::Noun, &["здание", "здания"]),
            lexeme("жилище", PartOfSpeech::Noun, &["жилище"]),
            lexeme("быстро", PartOfSpeech::Adverb, &["быстро"]),
            lexeme("скоро", PartOfSpeech::Adverb, &["скоро"]),
            lexeme("в", PartOfSpeech::Preposition, &["в"]),
            lexeme("он", PartOfSpeech::Pronoun, &["он"]),
        ]))
    }

    #[test]
    fn test_reduce_keeps_applicable_entries() {
        let reducer = DictionaryReducer::new(test_analyzer());
        let reduced = reducer.reduce(
            "дома было быстро",
            vec![
                entry(&["дом", "здание", "жилище"], 0.5),
                entry(&["скоро", "быстро"], 1.0),
            ],
        );

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].canonical(), "дом");
        assert_eq!(reduced[0].alternatives(), ["здание", "жилище"]);
        assert_eq!(reduced[0].probability, 0.5);
    }

    #[test]
    fn test_reduce_matches_normalized_forms() {
        let reducer = DictionaryReducer::new(test_analyzer());
        // "дому" normalizes to "дом", which keys the entry.
        let reduced = reducer.reduce("дому", vec![entry(&["дом", "здание"], 1.0)]);

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].canonical(), "дом");
    }

    #[test]
    fn test_reduce_consumes_each_word_once() {
        let reducer = DictionaryReducer::new(test_analyzer());
        let reduced = reducer.reduce(
            "дом и снова дом",
            vec![
                entry(&["дом", "здание"], 1.0),
                entry(&["дом", "жилище"], 1.0),
            ],
        );

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].alternatives(), ["здание"]);
    }

    #[test]
    fn test_reduced_canonicals_are_unique() {
        let reducer = DictionaryReducer::new(test_analyzer());
        let reduced = reducer.reduce(
            "дом быстро здание",
            vec![
                entry(&["дом", "здание"], 1.0),
                entry(&["быстро", "скоро"], 1.0),
                entry(&["дом", "жилище"], 1.0),
            ],
        );

        let mut canonicals: Vec<&str> = reduced.iter().map(|e| e.canonical()).collect();
        canonicals.sort();
        canonicals.dedup();
        assert_eq!(canonicals.len(), reduced.len());
    }

    #[test]
    fn test_pos_mismatched_synonyms_are_filtered() {
        let reducer = DictionaryReducer::new(test_analyzer());
        // "быстро" is an adverb; the noun "здание" cannot stand in for it.
        let reduced = reducer.reduce("быстро", vec![entry(&["быстро", "здание", "скоро"], 1.0)]);

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].alternatives(), ["скоро"]);
    }

    #[test]
    fn test_entry_without_surviving_synonyms_is_dropped() {
        let reducer = DictionaryReducer::new(test_analyzer());
        let reduced = reducer.reduce("быстро", vec![entry(&["быстро", "здание"], 1.0)]);

        assert!(reduced.is_empty());
    }

    #[test]
    fn test_canonical_duplicate_in_synonyms_is_not_reemitted() {
        let reducer = DictionaryReducer::new(test_analyzer());
        let reduced = reducer.reduce("дом", vec![entry(&["дом", "дом", "здание"], 1.0)]);

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].alternatives(), ["здание"]);
    }

    #[test]
    fn test_function_words_are_not_relevant() {
        let reducer = DictionaryReducer::new(test_analyzer());
        let reduced = reducer.reduce("в дом", vec![entry(&["в", "он"], 1.0)]);

        assert!(reduced.is_empty());
    }

    #[test]
    fn test_tokens_with_digits_are_not_relevant() {
        let analyzer: Arc<dyn MorphAnalyzer> = Arc::new(TableAnalyzer::from_records([lexeme(
            "дом7",
            PartOfSpeech::Noun,
            &["дом7"],
        )]));
        let reducer = DictionaryReducer::new(analyzer);
        let reduced = reducer.reduce("дом7", vec![entry(&["дом7", "здание7"], 1.0)]);

        assert!(reduced.is_empty());
    }

    #[test]
    fn test_unknown_words_are_not_relevant() {
        let reducer = DictionaryReducer::new(test_analyzer());
        let reduced = reducer.reduce("абракадабра", vec![entry(&["абракадабра", "дом"], 1.0)]);

        assert!(reduced.is_empty());
    }
}
