// Chunk: docs/chunks/language_tokenizers - Python rule table

//! Python tokenizer.
//!
//! Lines are scanned independently: a triple-quoted string or any other
//! construct left open at the end of a line is not carried into the next one.

use super::{NUMBER, OPERATOR, QUOTED_STRING};
use crate::registry::Language;
use crate::rules::{LineEmitter, RuleTable};
use crate::token::{ScanMode, Token, TokenType};
use crate::tokenizer::Tokenizer;

const KEYWORDS: &str = r"\b(and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";

/// Scans Python source.
#[derive(Debug, Clone)]
pub struct PythonTokenizer {
    rules: RuleTable,
}

impl PythonTokenizer {
    pub fn new() -> Self {
        // Strings and comments come before keywords so their contents are
        // never classified as keywords.
        let rules = RuleTable::builtin(&[
            (r#"""".*?"""|'''.*?'''"#, TokenType::String),
            (QUOTED_STRING, TokenType::String),
            (r"#.*", TokenType::Comment),
            (KEYWORDS, TokenType::Keyword),
            (r"@\w+", TokenType::Decorator),
            (NUMBER, TokenType::Number),
            (r"def\s+[a-zA-Z_][a-zA-Z0-9_]*", TokenType::Function),
            (r"class\s+[a-zA-Z_][a-zA-Z0-9_]*", TokenType::Class),
            (r"[a-zA-Z_][a-zA-Z0-9_]*\s*\(", TokenType::Function),
            (OPERATOR, TokenType::Operator),
        ]);
        Self { rules }
    }
}

impl Default for PythonTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for PythonTokenizer {
    fn language(&self) -> Language {
        Language::Python
    }

    fn scan_line(&self, line_number: usize, line: &str, _mode: &mut ScanMode, tokens: &mut Vec<Token>) {
        let mut out = LineEmitter::new(line_number, line, tokens);
        self.rules.cursor(line).scan(0, line.len(), &mut out);
    }
}
