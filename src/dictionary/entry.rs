//! Synonym dictionary entries and the line format parser.
//!
//! A dictionary is a plain text file with one entry per line:
//!
//! ```text
//! syn1|syn2|...|synN[;probability]
//! ```
//!
//! The first synonym is the canonical form and acts as the entry's lookup
//! key. The probability, when present, is a decimal number in `[0, 1]`;
//! when absent or unparsable a caller-supplied default applies. Lines that
//! contain digits or characters other than word characters, pipes, and
//! escape markers are silently skipped.
//!
//! # Examples
//!
//! ```
//! use synomorph::dictionary::DictionaryParser;
//!
//! let parser = DictionaryParser::new(1.0);
//! let entry = parser.parse_line("большой|огромный|крупный;0.5").unwrap();
//!
//! assert_eq!(entry.canonical(), "большой");
//! assert_eq!(entry.alternatives(), ["огромный", "крупный"]);
//! assert_eq!(entry.probability, 0.5);
//! ```

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Validity gate for the synonym side of a line: word characters, pipes,
/// and escape markers only, with no digits anywhere.
static VALID_SYNONYMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[\w--\d]|\||\\)*$").expect("Synonym line pattern should be valid"));

/// One synonym group with its substitution probability.
///
/// Entries are immutable after parsing; the reducer builds new entries
/// rather than mutating loaded ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Synonyms, canonical form first
    pub synonyms: Vec<String>,

    /// Probability that a matching word is substituted, in `[0, 1]`
    pub probability: f64,
}

impl DictionaryEntry {
    /// Create a new entry. The probability is clamped to `[0, 1]`.
    pub fn new(synonyms: Vec<String>, probability: f64) -> Self {
        DictionaryEntry {
            synonyms,
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// The canonical (query) form of this entry.
    pub fn canonical(&self) -> &str {
        self.synonyms.first().map(String::as_str).unwrap_or("")
    }

    /// The substitution candidates, everything after the canonical form.
    pub fn alternatives(&self) -> &[String] {
        self.synonyms.get(1..).unwrap_or(&[])
    }
}

/// Parser for the pipe-separated dictionary line format.
#[derive(Clone, Debug)]
pub struct DictionaryParser {
    default_probability: f64,
}

impl DictionaryParser {
    /// Create a parser with the given default probability, applied when a
    /// line carries no probability field or an unparsable one.
    pub fn new(default_probability: f64) -> Self {
        DictionaryParser {
            default_probability,
        }
    }

    /// Parse a single dictionary line.
    ///
    /// Returns `None` for lines that fail the validity gate or whose
    /// canonical form would be empty.
    pub fn parse_line(&self, line: &str) -> Option<DictionaryEntry> {
        let mut fields = line.trim().split(';');
        let synonyms_part = fields.next().unwrap_or("");

        if !VALID_SYNONYMS.is_match(synonyms_part) {
            return None;
        }

        let synonyms: Vec<String> = synonyms_part
            .trim()
            .split('|')
            .map(String::from)
            .collect();
        if synonyms.first().is_none_or(|canonical| canonical.is_empty()) {
            return None;
        }

        // Only the first field after the synonyms is consulted.
        let probability = fields
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .unwrap_or(self.default_probability);

        Some(DictionaryEntry::new(synonyms, probability))
    }

    /// Read a whole dictionary, skipping invalid lines.
    ///
    /// Only I/O failures are errors; malformed lines are dropped silently.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<Vec<DictionaryEntry>> {
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(entry) = self.parse_line(&line) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

/// Write entries in the dictionary line format, one entry per line.
pub fn write_dictionary<W: Write>(writer: &mut W, entries: &[DictionaryEntry]) -> Result<()> {
    for entry in entries {
        writeln!(writer, "{};{}", entry.synonyms.join("|"), entry.probability)?;
    }
    Ok(())
}
