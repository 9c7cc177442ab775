// Chunk: docs/chunks/token_model - Token, token type and scanner mode

//! The token model shared by every tokenizer and the highlighter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use tint_buffer::Position;

/// The closed set of lexical categories a token can be classified into.
///
/// Each category has a fixed presentation style owned by the theme, not by
/// the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Keyword,
    String,
    Comment,
    Number,
    Function,
    Class,
    Operator,
    Decorator,
    Tag,
    Attribute,
    Property,
    Value,
}

impl TokenType {
    /// Every token type, in tag-configuration order.
    ///
    /// `Operator` comes after `Function` so an operator tag layered over a
    /// function tag draws on top.
    pub const ALL: [TokenType; 12] = [
        TokenType::Keyword,
        TokenType::String,
        TokenType::Comment,
        TokenType::Number,
        TokenType::Function,
        TokenType::Class,
        TokenType::Operator,
        TokenType::Decorator,
        TokenType::Tag,
        TokenType::Attribute,
        TokenType::Property,
        TokenType::Value,
    ];

    /// The lowercase tag name for this type.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Comment => "comment",
            TokenType::Number => "number",
            TokenType::Function => "function",
            TokenType::Class => "class",
            TokenType::Operator => "operator",
            TokenType::Decorator => "decorator",
            TokenType::Tag => "tag",
            TokenType::Attribute => "attribute",
            TokenType::Property => "property",
            TokenType::Value => "value",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tag name is not one of the twelve token types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token type `{0}`")]
pub struct UnknownTokenType(pub String);

impl FromStr for TokenType {
    type Err = UnknownTokenType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTokenType(s.to_string()))
    }
}

/// A classified span of source text.
///
/// `start` and `end` are on the same line; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub token_type: TokenType,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(token_type: TokenType, start: Position, end: Position) -> Self {
        Self {
            token_type,
            start,
            end,
        }
    }

    /// Builds a token on `line` covering columns `[start_col, end_col)`.
    pub fn on_line(token_type: TokenType, line: usize, start_col: usize, end_col: usize) -> Self {
        Self::new(
            token_type,
            Position::new(line, start_col),
            Position::new(line, end_col),
        )
    }

    /// Width in columns (0 for a token that spans lines).
    pub fn len(&self) -> usize {
        if self.start.line == self.end.line {
            self.end.col.saturating_sub(self.start.col)
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Scanner-local state carried from one line to the next within a single
/// `tokenize` call.
///
/// Python and CSS never leave `Normal`. JavaScript moves between `Normal`,
/// `TemplateString` and `Interpolation`; HTML uses `Tag` for "inside a tag"
/// and `Normal` for text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanMode {
    #[default]
    Normal,
    /// Inside a backtick template literal.
    TemplateString,
    /// Inside a `${ ... }` interpolation of a template literal.
    Interpolation,
    /// Between `<` and `>` of an HTML tag.
    Tag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip_through_from_str() {
        for token_type in TokenType::ALL {
            assert_eq!(token_type.name().parse::<TokenType>(), Ok(token_type));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "identifier".parse::<TokenType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token type `identifier`");
    }

    #[test]
    fn test_operator_configured_after_function() {
        let function = TokenType::ALL.iter().position(|t| *t == TokenType::Function);
        let operator = TokenType::ALL.iter().position(|t| *t == TokenType::Operator);
        assert!(function < operator);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TokenType::Decorator).unwrap();
        assert_eq!(json, "\"decorator\"");
        let parsed: TokenType = serde_json::from_str("\"value\"").unwrap();
        assert_eq!(parsed, TokenType::Value);
    }

    #[test]
    fn test_token_len() {
        let token = Token::on_line(TokenType::Keyword, 3, 4, 10);
        assert_eq!(token.len(), 6);
        assert!(!token.is_empty());
        assert!(Token::on_line(TokenType::Keyword, 3, 4, 4).is_empty());
    }

    #[test]
    fn test_default_mode_is_normal() {
        assert_eq!(ScanMode::default(), ScanMode::Normal);
    }
}
