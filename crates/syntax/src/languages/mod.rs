// Chunk: docs/chunks/language_tokenizers - Per-language rule tables and mode machines

//! The four built-in tokenizers.

mod css;
mod html;
mod javascript;
mod python;

pub use css::CssTokenizer;
pub use html::HtmlTokenizer;
pub use javascript::JavaScriptTokenizer;
pub use python::PythonTokenizer;

/// Single and double quoted strings with backslash escapes.
pub(crate) const QUOTED_STRING: &str =
    r#""[^"\\]*(?:\\.[^"\\]*)*"|'[^'\\]*(?:\\.[^'\\]*)*'"#;

/// Decimal integers and decimals on word boundaries.
pub(crate) const NUMBER: &str = r"\b\d+\.\d+\b|\b\d+\b";

/// Single-character operators and brackets shared by Python and JavaScript.
pub(crate) const OPERATOR: &str = r"[-+*/%=<>!&|^~:,.;()\[\]{}]";
