//! Lexicon-backed analyzer loaded from a JSON file.
//!
//! The lexicon file is an array of lexeme records, each listing the base
//! form, an optional part of speech, and the surface forms with their
//! grammeme tags:
//!
//! ```json
//! [
//!   {
//!     "normal_form": "быстрый",
//!     "part_of_speech": "adjective",
//!     "forms": [
//!       { "word": "быстрый", "grammemes": ["masc", "sing", "nomn"] },
//!       { "word": "быстрая", "grammemes": ["femn", "sing", "nomn"] }
//!     ]
//!   }
//! ]
//! ```

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynomorphError};
use crate::morphology::{Analysis, Grammeme, MorphAnalyzer, PartOfSpeech};

/// One lexeme in the lexicon file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LexemeRecord {
    /// Base (dictionary) form of the lexeme
    pub normal_form: String,

    /// Coarse grammatical category of the lexeme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,

    /// Surface forms with their grammeme tags
    pub forms: Vec<FormRecord>,
}

/// One surface form of a lexeme.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormRecord {
    /// The surface form text
    pub word: String,

    /// Grammeme tags of this form
    #[serde(default)]
    pub grammemes: Vec<Grammeme>,
}

/// An analyzer backed by an in-memory lexicon table.
///
/// Lookups are case-insensitive. A surface form listed under several
/// lexemes yields several readings, in lexicon order, and the first one is
/// the primary reading.
#[derive(Clone, Debug, Default)]
pub struct TableAnalyzer {
    /// surface form -> candidate readings
    by_surface: AHashMap<String, Vec<Analysis>>,
    /// normal form -> all surface forms of the lexeme
    by_lexeme: AHashMap<String, Vec<Analysis>>,
}

impl TableAnalyzer {
    /// Create a new empty analyzer.
    pub fn new() -> Self {
        TableAnalyzer::default()
    }

    /// Build an analyzer from lexeme records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LexemeRecord>,
    {
        let mut analyzer = TableAnalyzer::new();
        for record in records {
            analyzer.insert(record);
        }
        analyzer
    }

    /// Load a lexicon from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SynomorphError::morphology(format!(
                "Failed to read lexicon file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let records: Vec<LexemeRecord> = serde_json::from_str(&content).map_err(|e| {
            SynomorphError::morphology(format!(
                "Failed to parse lexicon JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_records(records))
    }

    /// Add one lexeme to the table.
    pub fn insert(&mut self, record: LexemeRecord) {
        let normal_key = record.normal_form.to_lowercase();
        let mut lexeme_forms = Vec::with_capacity(record.forms.len());

        for form in &record.forms {
            let mut analysis = Analysis::new(form.word.to_lowercase(), normal_key.clone());
            analysis.part_of_speech = record.part_of_speech;
            analysis.grammemes = form.grammemes.iter().cloned().collect();

            self.by_surface
                .entry(form.word.to_lowercase())
                .or_default()
                .push(analysis.clone());
            lexeme_forms.push(analysis);
        }

        self.by_lexeme.insert(normal_key, lexeme_forms);
    }

    /// Number of lexemes in the table.
    pub fn len(&self) -> usize {
        self.by_lexeme.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_lexeme.is_empty()
    }
}

impl MorphAnalyzer for TableAnalyzer {
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        self.by_surface
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn inflections(&self, normal_form: &str) -> Vec<Analysis> {
        self.by_lexeme
            .get(&normal_form.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        normal_form: &str,
        pos: Option<PartOfSpeech>,
        forms: &[(&str, &[&str])],
    ) -> LexemeRecord {
        LexemeRecord {
            normal_form: normal_form.to_string(),
            part_of_speech: pos,
            forms: forms
                .iter()
                .map(|(word, grammemes)| FormRecord {
                    word: word.to_string(),
                    grammemes: grammemes.iter().map(|g| Grammeme::from(*g)).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_analyze_known_form() {
        let analyzer = TableAnalyzer::from_records([record(
            "дом",
            Some(PartOfSpeech::Noun),
            &[("дом", &["sing", "nomn"]), ("дома", &["sing", "gent"])],
        )]);

        let analyses = analyzer.analyze("дома");
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].normal_form, "дом");
        assert_eq!(analyses[0].part_of_speech, Some(PartOfSpeech::Noun));
        assert!(analyses[0].grammemes.contains(&Grammeme::from("gent")));
    }

    #[test]
    fn test_analyze_is_case_insensitive() {
        let analyzer = TableAnalyzer::from_records([record(
            "word",
            Some(PartOfSpeech::Noun),
            &[("word", &["sing"])],
        )]);

        assert_eq!(analyzer.analyze("Word").len(), 1);
        assert_eq!(analyzer.analyze("WORD").len(), 1);
    }

    #[test]
    fn test_analyze_unknown_word() {
        let analyzer = TableAnalyzer::new();
        assert!(analyzer.analyze("missing").is_empty());
    }

    #[test]
    fn test_inflections_preserve_lexicon_order() {
        let analyzer = TableAnalyzer::from_records([record(
            "быстрый",
            Some(PartOfSpeech::Adjective),
            &[
                ("быстрый", &["masc", "sing", "nomn"]),
                ("быстрая", &["femn", "sing", "nomn"]),
                ("быстрые", &["plur", "nomn"]),
            ],
        )]);

        let forms = analyzer.inflections("быстрый");
        let words: Vec<&str> = forms.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, ["быстрый", "быстрая", "быстрые"]);
    }

    #[test]
    fn test_ambiguous_surface_form() {
        let analyzer = TableAnalyzer::from_records([
            record("печь", Some(PartOfSpeech::Noun), &[("печь", &["sing", "nomn"])]),
            record("печь", Some(PartOfSpeech::Verb), &[("печь", &["infn"])]),
        ]);

        // Both readings survive; the first inserted one is the primary.
        let analyses = analyzer.analyze("печь");
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].part_of_speech, Some(PartOfSpeech::Noun));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"normal_form": "fast", "part_of_speech": "adjective",
                 "forms": [{{"word": "fast", "grammemes": ["posit"]}},
                           {{"word": "faster", "grammemes": ["compr"]}}]}}]"#
        )
        .unwrap();

        let analyzer = TableAnalyzer::load_from_file(file.path()).unwrap();
        assert_eq!(analyzer.len(), 1);
        assert_eq!(analyzer.analyze("faster")[0].normal_form, "fast");
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = TableAnalyzer::load_from_file("/nonexistent/lexicon.json");
        assert!(result.is_err());
    }
}
