// Chunk: docs/chunks/language_tokenizers - JavaScript rule table and template-literal modes

//! JavaScript tokenizer.
//!
//! This is the one scanner whose state carries across lines: a template
//! literal (and any `${ ... }` interpolation inside it) may stay open from one
//! line to the next.
//!
//! - `Normal`: a backtick emits a one-character `string` token and enters
//!   `TemplateString`; anything else goes through the rule table.
//! - `TemplateString`: text up to the closing backtick or the next `${`
//!   (whichever comes first) is one `string` token. A backtick returns to
//!   `Normal`; `${` is emitted as a two-character `operator` and enters
//!   `Interpolation`. Without either, the rest of the line is a `string`.
//! - `Interpolation`: the rule table (minus the template rules) runs up to
//!   the first `}` on the line, which is emitted as an `operator` and returns
//!   to `TemplateString`. Without a `}`, the rest of the line is scanned and
//!   the mode stays.

use super::{NUMBER, OPERATOR, QUOTED_STRING};
use crate::registry::Language;
use crate::rules::{LineEmitter, RuleCursor, RuleTable};
use crate::token::{ScanMode, Token, TokenType};
use crate::tokenizer::Tokenizer;

const KEYWORDS: &str = r"\b(break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|function|if|import|in|instanceof|new|return|super|switch|this|throw|try|typeof|var|void|while|with|yield|let|static|enum|await|implements|package|protected|interface|private|public)\b";

const BLOCK_COMMENT: &str = r"/\*[\s\S]*?\*/";
const LINE_COMMENT: &str = r"//.*";
const INTERPOLATION_OPEN: &str = r"\$\{";
const INTERPOLATION_CLOSE: &str = r"\}";

/// Rules shared by normal and interpolation scanning, after the comments
/// and template rules.
const BODY: &[(&str, TokenType)] = &[
    (QUOTED_STRING, TokenType::String),
    (KEYWORDS, TokenType::Keyword),
    (NUMBER, TokenType::Number),
    (r"function\s+[a-zA-Z_][a-zA-Z0-9_]*", TokenType::Function),
    (r"[a-zA-Z_][a-zA-Z0-9_]*\s*=\s*function", TokenType::Function),
    (r"[a-zA-Z_][a-zA-Z0-9_]*\s*\([^)]*\)\s*=>", TokenType::Function),
    (r"class\s+[a-zA-Z_][a-zA-Z0-9_]*", TokenType::Class),
    (r"[a-zA-Z_][a-zA-Z0-9_]*\s*\(", TokenType::Function),
    (OPERATOR, TokenType::Operator),
];

/// Scans JavaScript source.
#[derive(Debug, Clone)]
pub struct JavaScriptTokenizer {
    /// Table used in `Normal` mode.
    normal: RuleTable,
    /// Table used inside `${ ... }`: the same rules without `${` and `}`.
    interpolation: RuleTable,
}

impl JavaScriptTokenizer {
    pub fn new() -> Self {
        let mut normal = vec![
            (BLOCK_COMMENT, TokenType::Comment),
            (LINE_COMMENT, TokenType::Comment),
            (INTERPOLATION_OPEN, TokenType::Operator),
            (INTERPOLATION_CLOSE, TokenType::Operator),
        ];
        normal.extend_from_slice(BODY);

        let mut interpolation = vec![
            (BLOCK_COMMENT, TokenType::Comment),
            (LINE_COMMENT, TokenType::Comment),
        ];
        interpolation.extend_from_slice(BODY);

        Self {
            normal: RuleTable::builtin(&normal),
            interpolation: RuleTable::builtin(&interpolation),
        }
    }

    /// Scans template-literal text starting at `pos`. Returns the new
    /// position.
    fn scan_template(&self, line: &str, pos: usize, mode: &mut ScanMode, out: &mut LineEmitter<'_>) -> usize {
        let rest = &line[pos..];
        let backtick = rest.find('`').map(|i| pos + i);
        let interp = rest.find("${").map(|i| pos + i);

        match (backtick, interp) {
            (Some(close), interp) if interp.map_or(true, |open| close < open) => {
                if pos < close {
                    out.emit(TokenType::String, pos, close);
                }
                out.emit(TokenType::String, close, close + 1);
                *mode = ScanMode::Normal;
                close + 1
            }
            (_, Some(open)) => {
                if pos < open {
                    out.emit(TokenType::String, pos, open);
                }
                out.emit(TokenType::Operator, open, open + 2);
                *mode = ScanMode::Interpolation;
                open + 2
            }
            _ => {
                out.emit(TokenType::String, pos, line.len());
                line.len()
            }
        }
    }

    /// Scans interpolation content starting at `pos`. Returns the new
    /// position.
    fn scan_interpolation(&self, line: &str, pos: usize, mode: &mut ScanMode, out: &mut LineEmitter<'_>) -> usize {
        match line[pos..].find('}').map(|i| pos + i) {
            Some(close) => {
                // Truncate the haystack so no rule can match across the `}`.
                self.interpolation.cursor(&line[..close]).scan(pos, close, out);
                out.emit(TokenType::Operator, close, close + 1);
                *mode = ScanMode::TemplateString;
                close + 1
            }
            None => {
                self.interpolation.cursor(line).scan(pos, line.len(), out);
                line.len()
            }
        }
    }

    /// Handles one step in `Normal` mode. Returns the new position.
    fn step_normal(&self, cursor: &mut RuleCursor<'_>, pos: usize, mode: &mut ScanMode, out: &mut LineEmitter<'_>) -> usize {
        let line = cursor.haystack();
        if line[pos..].starts_with('`') {
            out.emit(TokenType::String, pos, pos + 1);
            *mode = ScanMode::TemplateString;
            return pos + 1;
        }
        match cursor.match_at(pos) {
            Some((token_type, end)) => {
                out.emit(token_type, pos, end);
                end
            }
            None => crate::rules::next_boundary(line, pos),
        }
    }
}

impl Default for JavaScriptTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JavaScriptTokenizer {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn scan_line(&self, line_number: usize, line: &str, mode: &mut ScanMode, tokens: &mut Vec<Token>) {
        let mut out = LineEmitter::new(line_number, line, tokens);
        let mut cursor = self.normal.cursor(line);
        let mut pos = 0;
        while pos < line.len() {
            pos = match *mode {
                ScanMode::TemplateString => self.scan_template(line, pos, mode, &mut out),
                ScanMode::Interpolation => self.scan_interpolation(line, pos, mode, &mut out),
                ScanMode::Normal | ScanMode::Tag => self.step_normal(&mut cursor, pos, mode, &mut out),
            };
        }
    }
}
