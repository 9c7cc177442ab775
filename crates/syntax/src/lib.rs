// Chunk: docs/chunks/syntax_highlighting - Lexical syntax highlighting

//! tint-syntax: regex rule-table tokenizers and the highlighter that maps
//! their tokens to style tags.
//!
//! # Overview
//!
//! - [`Tokenizer`]: splits a document into classified [`Token`]s. One
//!   implementation exists per [`Language`]; none of them ever fails.
//!
//! - [`LanguageRegistry`]: resolves a language identifier (`python`,
//!   `javascript`, `html`, `css`) to its tokenizer.
//!
//! - [`SyntaxHighlighter`]: clears and re-applies style tags on a
//!   [`TagLayer`] from a full tokenize of its text.
//!
//! - [`SyntaxTheme`]: maps each [`TokenType`] to a [`Style`](tint_buffer::Style),
//!   optionally overridden from a JSON file.
//!
//! - [`TokenCache`]: re-lexes only the lines an edit affected.
//!
//! # Example
//!
//! ```
//! use tint_buffer::{Position, TaggedText};
//! use tint_syntax::{SyntaxHighlighter, SyntaxTheme};
//!
//! let mut doc = TaggedText::new("def foo():\n    return 1\n");
//! let highlighter = SyntaxHighlighter::new(SyntaxTheme::classic());
//! highlighter.highlight(&mut doc, "python");
//!
//! assert_eq!(doc.tags_at(Position::new(1, 0)), vec!["keyword"]);
//! assert_eq!(doc.tags_at(Position::new(1, 7)), vec!["function", "operator"]);
//! ```

mod highlighter;
mod incremental;
mod languages;
mod registry;
mod rules;
mod theme;
mod token;
mod tokenizer;

pub use highlighter::{StyleInstruction, SyntaxHighlighter};
pub use incremental::{Relex, TokenCache};
pub use languages::{CssTokenizer, HtmlTokenizer, JavaScriptTokenizer, PythonTokenizer};
pub use registry::{Language, LanguageRegistry, UnknownLanguage};
pub use rules::{ColumnMap, LineEmitter, RuleCursor, RuleTable};
pub use theme::{default_config_path, StyleConfig, SyntaxTheme, ThemeConfig, ThemeError};
pub use tint_buffer::TagLayer;
pub use token::{Position, ScanMode, Token, TokenType, UnknownTokenType};
pub use tokenizer::Tokenizer;
