// Chunk: docs/chunks/language_tokenizers - HTML tag-context scanning

//! HTML tokenizer.
//!
//! Tracks whether the scan is inside a tag (`ScanMode::Tag`), and carries
//! that across lines. Text content between tags is never tokenized. A
//! `<!--` comment is found by looking ahead for `-->` on the same line; an
//! unterminated comment covers the rest of its line only, and the next line
//! is scanned normally.

use super::QUOTED_STRING;
use crate::registry::Language;
use crate::rules::{next_boundary, LineEmitter, RuleTable};
use crate::token::{ScanMode, Token, TokenType};
use crate::tokenizer::Tokenizer;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Scans HTML source.
#[derive(Debug, Clone)]
pub struct HtmlTokenizer {
    /// Rules applied inside a tag.
    rules: RuleTable,
}

impl HtmlTokenizer {
    pub fn new() -> Self {
        let rules = RuleTable::builtin(&[
            (r"<!DOCTYPE[^>]*>", TokenType::Tag),
            (r"<[a-zA-Z][a-zA-Z0-9_:-]*", TokenType::Tag),
            (r"</[a-zA-Z][a-zA-Z0-9_:-]*", TokenType::Tag),
            (r">", TokenType::Tag),
            (r"/>", TokenType::Tag),
            // Attribute names come before strings so `name=` is not lost.
            (r"\s[a-zA-Z][a-zA-Z0-9_:-]*\s*=", TokenType::Attribute),
            (QUOTED_STRING, TokenType::String),
        ]);
        Self { rules }
    }
}

impl Default for HtmlTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for HtmlTokenizer {
    fn language(&self) -> Language {
        Language::Html
    }

    fn scan_line(&self, line_number: usize, line: &str, mode: &mut ScanMode, tokens: &mut Vec<Token>) {
        let mut out = LineEmitter::new(line_number, line, tokens);
        let mut cursor = self.rules.cursor(line);
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];

            if rest.starts_with(COMMENT_OPEN) {
                let end = rest
                    .find(COMMENT_CLOSE)
                    .map_or(line.len(), |i| pos + i + COMMENT_CLOSE.len());
                out.emit(TokenType::Comment, pos, end);
                pos = end;
                continue;
            }

            if rest.starts_with('<') {
                *mode = ScanMode::Tag;
            } else if rest.starts_with('>') {
                out.emit(TokenType::Tag, pos, pos + 1);
                *mode = ScanMode::Normal;
                pos += 1;
                continue;
            }

            if *mode == ScanMode::Tag {
                pos = match cursor.match_at(pos) {
                    Some((token_type, end)) => {
                        out.emit(token_type, pos, end);
                        end
                    }
                    None => next_boundary(line, pos),
                };
            } else {
                pos = rest.find('<').map_or(line.len(), |i| pos + i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::test_support::{rows, texts};
    use crate::token::TokenType::*;

    fn tok() -> HtmlTokenizer {
        HtmlTokenizer::new()
    }

    fn t(token_type: TokenType, text: &str) -> (TokenType, std::string::String) {
        (token_type, text.to_string())
    }

    #[test]
    fn test_element_with_attribute() {
        assert_eq!(
            texts(&tok(), r#"<a href="/x">link</a>"#),
            vec![
                t(Tag, "<a"),
                t(Attribute, " href="),
                t(String, r#""/x""#),
                t(Tag, ">"),
                t(Tag, "</a"),
                t(Tag, ">"),
            ]
        );
    }

    #[test]
    fn test_text_content_is_not_tokenized() {
        assert_eq!(
            texts(&tok(), "<p>if \"quoted\" = 1</p>"),
            vec![t(Tag, "<p"), t(Tag, ">"), t(Tag, "</p"), t(Tag, ">")]
        );
    }

    #[test]
    fn test_doctype() {
        assert_eq!(
            texts(&tok(), "<!DOCTYPE html>"),
            vec![t(Tag, "<!DOCTYPE html>")]
        );
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(
            texts(&tok(), "<br/>"),
            vec![t(Tag, "<br"), t(Tag, "/>")]
        );
    }

    #[test]
    fn test_comment_on_one_line() {
        assert_eq!(
            rows(&tok(), "<!-- note --><b>"),
            vec![(Comment, 1, 0, 13), (Tag, 1, 13, 15), (Tag, 1, 15, 16)]
        );
    }

    #[test]
    fn test_unterminated_comment_covers_line_only() {
        // The comment state is not carried: the second line's `<i>` is a tag.
        assert_eq!(
            texts(&tok(), "<!-- open\n<i>x -->"),
            vec![t(Comment, "<!-- open"), t(Tag, "<i"), t(Tag, ">")]
        );
    }

    #[test]
    fn test_tag_mode_carries_across_lines() {
        assert_eq!(
            texts(&tok(), "<input\n  type=\"text\"\n  disabled>"),
            vec![
                t(Tag, "<input"),
                t(Attribute, " type="),
                t(String, "\"text\""),
                t(Tag, ">"),
            ]
        );
    }

    #[test]
    fn test_comment_lookahead_starts_at_opener() {
        assert_eq!(texts(&tok(), "<!-->x"), vec![t(Comment, "<!-->")]);
    }

    #[test]
    fn test_close_at_cursor_is_a_tag_token() {
        assert_eq!(texts(&tok(), "> b"), vec![t(Tag, ">")]);
        // Outside a tag the scan jumps straight to the next `<`, so a `>`
        // in the middle of text content is never looked at.
        assert!(tok().tokenize("a > b").is_empty());
    }

    #[test]
    fn test_empty_lines() {
        assert!(tok().tokenize("\n\n").is_empty());
    }
}
