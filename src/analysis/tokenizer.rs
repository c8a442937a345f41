//! Character-class tokenizer implementation.
//!
//! [`CharClassTokenizer`] is a run-length segmenter driven by an explicit
//! finite-state machine. Word and delimiter runs are maximal; punctuation is
//! always emitted as isolated single-character tokens, even when the same
//! mark repeats; unrecognized characters are dropped without disturbing an
//! in-progress run.
//!
//! # Examples
//!
//! ```
//! use synomorph::analysis::token::TokenKind;
//! use synomorph::analysis::tokenizer::CharClassTokenizer;
//!
//! let tokenizer = CharClassTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").collect();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["Hello", ",", " ", "world"]);
//! assert_eq!(tokens[1].kind, TokenKind::Punctuation);
//! ```

use crate::analysis::char_class::{self, CharClass};
use crate::analysis::token::{Token, TokenKind, TokenStream};

/// The states of the segmentation machine.
///
/// `Start` is the initial state and the only state with nothing buffered;
/// every other state owns the run currently being accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    InWord,
    InDelimiter,
    InPunctuation,
}

impl State {
    /// The kind of token this state emits when its run closes.
    fn kind(self) -> Option<TokenKind> {
        match self {
            State::Start => None,
            State::InWord => Some(TokenKind::Word),
            State::InDelimiter => Some(TokenKind::Delimiter),
            State::InPunctuation => Some(TokenKind::Punctuation),
        }
    }
}

/// The outcome of feeding one character to the state machine.
#[derive(Debug)]
struct Transition {
    next: State,
    buffer: String,
    force_emit: bool,
}

/// Classify a character at a run boundary.
///
/// Returns `None` for unrecognized characters, which leave the current state
/// and buffer untouched.
fn boundary(c: char) -> Option<Transition> {
    match CharClass::of(c) {
        CharClass::Punctuation => Some(Transition {
            next: State::InPunctuation,
            buffer: c.to_string(),
            force_emit: true,
        }),
        CharClass::Alphabetic => Some(Transition {
            next: State::InWord,
            buffer: c.to_string(),
            force_emit: false,
        }),
        CharClass::Whitespace => Some(Transition {
            next: State::InDelimiter,
            buffer: c.to_string(),
            force_emit: false,
        }),
        CharClass::Unrecognized => None,
    }
}

/// The pure transition function of the machine.
///
/// In-run states test their own continuation predicate first; anything else
/// falls through to the boundary classification. The word state tests the
/// alphabetic predicate before the boundary chain, which is what lets a
/// hyphen extend a word run while a lone hyphen is punctuation.
fn transition(state: State, buffer: &str, c: char) -> Option<Transition> {
    match state {
        State::InWord if char_class::is_alphabetic(c) => Some(Transition {
            next: State::InWord,
            buffer: format!("{buffer}{c}"),
            force_emit: false,
        }),
        State::InDelimiter if char_class::is_whitespace(c) => Some(Transition {
            next: State::InDelimiter,
            buffer: format!("{buffer}{c}"),
            force_emit: false,
        }),
        // Punctuation never accumulates: every further mark restarts the
        // buffer and forces the previous one out.
        State::InPunctuation if char_class::is_punctuation(c) => Some(Transition {
            next: State::InPunctuation,
            buffer: c.to_string(),
            force_emit: true,
        }),
        _ => boundary(c),
    }
}

/// A tokenizer that segments text by character class.
///
/// Produces a lazy, one-pass token stream whose concatenated text reproduces
/// the recognized portion of the input verbatim.
#[derive(Clone, Debug, Default)]
pub struct CharClassTokenizer;

impl CharClassTokenizer {
    /// Create a new character-class tokenizer.
    pub fn new() -> Self {
        CharClassTokenizer
    }

    /// Tokenize a character sequence into a streaming token iterator.
    pub fn iter<I>(&self, chars: I) -> TokenIter<I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        TokenIter::new(chars.into_iter())
    }

    /// Tokenize the given text into a stream of tokens.
    pub fn tokenize(&self, text: &str) -> TokenStream {
        let chars: Vec<char> = text.chars().collect();
        Box::new(self.iter(chars))
    }
}

/// Streaming token iterator over a character source.
///
/// One-pass and non-restartable; the source is consumed as tokens are
/// pulled, and whatever is buffered at end of input is flushed as the final
/// token.
#[derive(Debug)]
pub struct TokenIter<I> {
    chars: I,
    state: State,
    buffer: String,
    finished: bool,
}

impl<I> TokenIter<I>
where
    I: Iterator<Item = char>,
{
    fn new(chars: I) -> Self {
        TokenIter {
            chars,
            state: State::Start,
            buffer: String::new(),
            finished: false,
        }
    }

    /// Close the current run and return its token, committing the new
    /// state and buffer.
    fn emit(&mut self, next: State, buffer: String) -> Option<Token> {
        let token = self
            .state
            .kind()
            .map(|kind| Token::new(kind, std::mem::take(&mut self.buffer)));
        self.state = next;
        self.buffer = buffer;
        token
    }
}

impl<I> Iterator for TokenIter<I>
where
    I: Iterator<Item = char>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        loop {
            let Some(c) = self.chars.next() else {
                // End of input: flush whatever run is still open.
                self.finished = true;
                return self.emit(State::Start, String::new());
            };

            let Some(step) = transition(self.state, &self.buffer, c) else {
                // Unrecognized character: silently dropped.
                continue;
            };

            if step.next != self.state || step.force_emit {
                // A token closes using the buffer as it stood before this
                // character; `Start` has nothing to emit, so keep scanning.
                match self.emit(step.next, step.buffer) {
                    Some(token) => return Some(token),
                    None => continue,
                }
            } else {
                self.state = step.next;
                self.buffer = step.buffer;
            }
        }
    }
}
