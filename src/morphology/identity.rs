//! Identity analyzer that treats every word as its own lexeme.

use crate::morphology::{Analysis, MorphAnalyzer};

/// An analyzer with no linguistic knowledge.
///
/// Every word parses to a single reading whose normal form is the
/// lowercased word, with no part of speech and no grammemes; every lexeme
/// has exactly one surface form, its base form. Substitution driven by this
/// analyzer always falls back to a synonym's base form.
#[derive(Clone, Debug, Default)]
pub struct IdentityAnalyzer;

impl IdentityAnalyzer {
    /// Create a new identity analyzer.
    pub fn new() -> Self {
        IdentityAnalyzer
    }
}

impl MorphAnalyzer for IdentityAnalyzer {
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        if word.is_empty() {
            return Vec::new();
        }
        vec![Analysis::new(word, word.to_lowercase())]
    }

    fn inflections(&self, normal_form: &str) -> Vec<Analysis> {
        if normal_form.is_empty() {
            return Vec::new();
        }
        vec![Analysis::new(normal_form, normal_form.to_lowercase())]
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_analyze() {
        let analyzer = IdentityAnalyzer::new();
        let analyses = analyzer.analyze("Слово");

        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].word, "Слово");
        assert_eq!(analyses[0].normal_form, "слово");
        assert!(analyses[0].part_of_speech.is_none());
        assert!(analyses[0].grammemes.is_empty());
    }

    #[test]
    fn test_identity_inflections() {
        let analyzer = IdentityAnalyzer::new();
        let forms = analyzer.inflections("word");

        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].word, "word");
    }

    #[test]
    fn test_identity_empty_word() {
        let analyzer = IdentityAnalyzer::new();

        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.inflections("").is_empty());
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(IdentityAnalyzer::new().name(), "identity");
    }
}
