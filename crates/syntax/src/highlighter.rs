// Chunk: docs/chunks/syntax_highlighting - Token-to-tag highlighting pass

//! Syntax highlighter that turns tokens into style tags.
//!
//! A highlight pass is a full replace: every style tag except the selection
//! is cleared, the whole document is re-tokenized, and one tag is applied per
//! token. For `function` tokens the last `(` in the token additionally gets
//! the `operator` tag, which draws on top because `operator` is configured
//! after `function`.

use tint_buffer::{Style, TagLayer, SELECTION_TAG};
use tracing::debug;

use crate::registry::LanguageRegistry;
use crate::theme::SyntaxTheme;
use crate::token::{Position, Token, TokenType};

/// One tag application: `tag` over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleInstruction {
    pub tag: TokenType,
    pub start: Position,
    pub end: Position,
}

impl StyleInstruction {
    fn from_token(token: &Token) -> Self {
        Self {
            tag: token.token_type,
            start: token.start,
            end: token.end,
        }
    }
}

/// Applies token styles to a [`TagLayer`].
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlighter {
    registry: LanguageRegistry,
    theme: SyntaxTheme,
}

impl SyntaxHighlighter {
    pub fn new(theme: SyntaxTheme) -> Self {
        Self {
            registry: LanguageRegistry::new(),
            theme,
        }
    }

    pub fn theme(&self) -> &SyntaxTheme {
        &self.theme
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Returns the style to render a tag with. `None` for tags this
    /// highlighter does not own, such as the selection.
    pub fn style_for_tag(&self, name: &str) -> Option<Style> {
        self.theme.style_for_tag(name)
    }

    /// Computes the tag applications for `text` without touching any layer.
    ///
    /// Returns `None` when `language_id` names no supported language.
    pub fn instructions(&self, text: &str, language_id: &str) -> Option<Vec<StyleInstruction>> {
        let Some(tokenizer) = self.registry.lookup(language_id) else {
            debug!(language = language_id, "no tokenizer for language, leaving text unstyled");
            return None;
        };

        let tokens = tokenizer.tokenize(text);
        let lines: Vec<&str> = text.split('\n').collect();
        let mut out = Vec::with_capacity(tokens.len());
        for token in &tokens {
            out.push(StyleInstruction::from_token(token));
            if token.token_type == TokenType::Function {
                if let Some(paren) = last_paren(&lines, token) {
                    out.push(paren);
                }
            }
        }

        debug!(
            language = language_id,
            tokens = tokens.len(),
            tags = out.len(),
            "highlight pass"
        );
        Some(out)
    }

    /// Replaces every style tag on `layer` with a fresh highlight of its text.
    ///
    /// The selection tag is left alone. An unknown language leaves the text
    /// with no style tags at all.
    pub fn highlight(&self, layer: &mut dyn TagLayer, language_id: &str) {
        let instructions = self.instructions(layer.text(), language_id);

        for token_type in TokenType::ALL {
            layer.configure_tag(token_type.name());
        }
        for name in layer.tag_names() {
            if name != SELECTION_TAG {
                layer.remove_tag(&name);
            }
        }

        for instruction in instructions.into_iter().flatten() {
            layer.add_tag(instruction.tag.name(), instruction.start, instruction.end);
        }
    }
}

/// Locates the last `(` inside a function token and returns an operator
/// instruction covering just that character.
fn last_paren(lines: &[&str], token: &Token) -> Option<StyleInstruction> {
    let line = lines.get(token.start.line.checked_sub(1)?)?;
    let chars: Vec<char> = line.chars().skip(token.start.col).take(token.len()).collect();
    let offset = chars.iter().rposition(|&c| c == '(')?;
    let col = token.start.col + offset;
    Some(StyleInstruction {
        tag: TokenType::Operator,
        start: Position::new(token.start.line, col),
        end: Position::new(token.start.line, col + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_buffer::TaggedText;

    fn highlighter() -> SyntaxHighlighter {
        SyntaxHighlighter::new(SyntaxTheme::classic())
    }

    fn pos(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    // =========================================================================
    // Instructions
    // =========================================================================

    #[test]
    fn test_unknown_language_has_no_instructions() {
        assert!(highlighter().instructions("puts 1", "ruby").is_none());
    }

    #[test]
    fn test_function_gets_paren_operator() {
        let instructions = highlighter().instructions("foo(1)", "python").unwrap();
        assert_eq!(
            instructions[..2],
            [
                StyleInstruction {
                    tag: TokenType::Function,
                    start: pos(1, 0),
                    end: pos(1, 4),
                },
                StyleInstruction {
                    tag: TokenType::Operator,
                    start: pos(1, 3),
                    end: pos(1, 4),
                },
            ]
        );
    }

    #[test]
    fn test_function_without_paren_is_not_augmented() {
        // `name = function` carries no parenthesis.
        let instructions = highlighter().instructions("x = function", "javascript").unwrap();
        assert_eq!(
            instructions,
            vec![StyleInstruction {
                tag: TokenType::Function,
                start: pos(1, 0),
                end: pos(1, 12),
            }]
        );
    }

    #[test]
    fn test_paren_column_counts_chars() {
        let instructions = highlighter().instructions("x = \"é\"; f(", "python").unwrap();
        let last = instructions.last().unwrap();
        assert_eq!(last.tag, TokenType::Operator);
        assert_eq!(last.start, pos(1, 10));
    }

    // =========================================================================
    // Tag layer
    // =========================================================================

    #[test]
    fn test_highlight_applies_tags() {
        let mut doc = TaggedText::new("def foo():\n    return 1\n");
        highlighter().highlight(&mut doc, "python");

        assert_eq!(doc.ranges("keyword"), vec![(pos(1, 0), pos(1, 3)), (pos(2, 4), pos(2, 10))]);
        assert_eq!(doc.ranges("function"), vec![(pos(1, 4), pos(1, 8))]);
        assert_eq!(doc.ranges("number"), vec![(pos(2, 11), pos(2, 12))]);
        assert_eq!(doc.tags_at(pos(1, 7)), vec!["function", "operator"]);
    }

    #[test]
    fn test_operator_draws_over_function() {
        let mut doc = TaggedText::new("foo(");
        let hl = highlighter();
        hl.highlight(&mut doc, "python");

        let line = doc.styled_line(1, |name| hl.style_for_tag(name));
        let operator = hl.theme().style_for(TokenType::Operator);
        let function = hl.theme().style_for(TokenType::Function);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].text, "foo");
        assert_eq!(line.spans[0].style, function);
        assert_eq!(line.spans[1].text, "(");
        assert_eq!(line.spans[1].style, operator);
    }

    #[test]
    fn test_unknown_language_clears_existing_tags() {
        let mut doc = TaggedText::new("def f(): pass");
        let hl = highlighter();
        hl.highlight(&mut doc, "python");
        assert!(!doc.ranges("keyword").is_empty());

        hl.highlight(&mut doc, "ruby");
        for token_type in TokenType::ALL {
            assert!(doc.ranges(token_type.name()).is_empty());
        }
    }

    #[test]
    fn test_selection_survives_highlight() {
        let mut doc = TaggedText::new("import os");
        doc.set_selection(pos(1, 2), pos(1, 5));
        highlighter().highlight(&mut doc, "python");
        assert_eq!(doc.selection(), Some((pos(1, 2), pos(1, 5))));
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let mut doc = TaggedText::new("const f = (a) => `${a}`;");
        let hl = highlighter();
        hl.highlight(&mut doc, "javascript");
        let first: Vec<_> = TokenType::ALL.iter().map(|t| doc.ranges(t.name())).collect();
        hl.highlight(&mut doc, "javascript");
        let second: Vec<_> = TokenType::ALL.iter().map(|t| doc.ranges(t.name())).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_language_switch_replaces_tags() {
        let mut doc = TaggedText::new("a { color: red; }");
        let hl = highlighter();
        hl.highlight(&mut doc, "css");
        assert_eq!(doc.ranges("tag"), vec![(pos(1, 0), pos(1, 3))]);

        hl.highlight(&mut doc, "html");
        assert!(doc.ranges("tag").is_empty());
        assert!(doc.ranges("property").is_empty());
    }
}
