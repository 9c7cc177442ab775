// Chunk: docs/chunks/rule_engine - Tokenizer contract

//! The contract every language tokenizer implements.

use crate::registry::Language;
use crate::token::{ScanMode, Token};

/// A lexical scanner for one language.
///
/// Tokenizers never fail: text no rule recognizes is skipped without a
/// token. They hold no document state, so tokenizing the same text twice
/// yields the same tokens.
pub trait Tokenizer {
    /// The language this tokenizer scans.
    fn language(&self) -> Language;

    /// Scans one line, appending its tokens to `tokens`.
    ///
    /// `line_number` is 1-based and `line` excludes its `'\n'`. `mode` is the
    /// state carried in from the previous line and is updated to the state
    /// carried out of this one.
    fn scan_line(&self, line_number: usize, line: &str, mode: &mut ScanMode, tokens: &mut Vec<Token>);

    /// Tokenizes a whole document.
    ///
    /// The text is split on `'\n'` and scanned line by line, starting in
    /// [`ScanMode::Normal`].
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut mode = ScanMode::default();
        for (idx, line) in text.split('\n').enumerate() {
            self.scan_line(idx + 1, line, &mut mode, &mut tokens);
        }
        tokens
    }
}
