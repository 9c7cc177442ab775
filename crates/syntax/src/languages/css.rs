// Chunk: docs/chunks/language_tokenizers - CSS rule table

//! CSS tokenizer.
//!
//! Lines are scanned independently; a `/* ... */` comment must open and close
//! on the same line to be recognized.

use crate::registry::Language;
use crate::rules::{LineEmitter, RuleTable};
use crate::token::{ScanMode, Token, TokenType};
use crate::tokenizer::Tokenizer;

/// Scans CSS source.
#[derive(Debug, Clone)]
pub struct CssTokenizer {
    rules: RuleTable,
}

impl CssTokenizer {
    pub fn new() -> Self {
        let rules = RuleTable::builtin(&[
            (r"/\*[\s\S]*?\*/", TokenType::Comment),
            // A selector together with its opening brace.
            (r"[a-zA-Z0-9_.#:,>+~*\[\]-]+\s*\{", TokenType::Tag),
            (r"[a-zA-Z-]+\s*:", TokenType::Property),
            (r":\s*[^;]+;", TokenType::Value),
            (r"#[0-9a-fA-F]{3,6}", TokenType::Number),
            (
                r"\b\d+\.?\d*(%|px|em|rem|vh|vw|pt|pc|in|cm|mm|ex|ch|vmin|vmax)?\b",
                TokenType::Number,
            ),
            (r"!important", TokenType::Keyword),
            (r"@media\b", TokenType::Keyword),
            (r"@[a-zA-Z-]+", TokenType::Keyword),
            (r"[{};:,]", TokenType::Operator),
        ]);
        Self { rules }
    }
}

impl Default for CssTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for CssTokenizer {
    fn language(&self) -> Language {
        Language::Css
    }

    fn scan_line(&self, line_number: usize, line: &str, _mode: &mut ScanMode, tokens: &mut Vec<Token>) {
        let mut out = LineEmitter::new(line_number, line, tokens);
        self.rules.cursor(line).scan(0, line.len(), &mut out);
    }
}
