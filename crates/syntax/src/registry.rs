// Chunk: docs/chunks/language_registry - Closed language set and tokenizer lookup

//! Language registry mapping language identifiers to tokenizers.
//!
//! The set of languages is closed: [`Language`] enumerates them, and
//! [`LanguageRegistry`] owns one tokenizer per language, built once.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::languages::{CssTokenizer, HtmlTokenizer, JavaScriptTokenizer, PythonTokenizer};
use crate::tokenizer::Tokenizer;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Html,
    Css,
}

/// Error returned when a language identifier is not one of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no tokenizer for language `{0}`")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::JavaScript,
        Language::Html,
        Language::Css,
    ];

    /// The canonical identifier (`python`, `javascript`, `html`, `css`).
    pub fn id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Html => "html",
            Language::Css => "css",
        }
    }

    /// Maps a file extension to a language.
    ///
    /// The extension can be with or without a leading dot (e.g., ".py" or "py").
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        match ext.to_ascii_lowercase().as_str() {
            "py" | "pyw" => Some(Language::Python),
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "html" | "htm" => Some(Language::Html),
            "css" => Some(Language::Css),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Parses one of the canonical identifiers. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.id() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Registry owning one tokenizer per supported language.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    python: PythonTokenizer,
    javascript: JavaScriptTokenizer,
    html: HtmlTokenizer,
    css: CssTokenizer,
}

impl LanguageRegistry {
    /// Creates the registry, compiling every language's rule table once.
    pub fn new() -> Self {
        Self {
            python: PythonTokenizer::new(),
            javascript: JavaScriptTokenizer::new(),
            html: HtmlTokenizer::new(),
            css: CssTokenizer::new(),
        }
    }

    /// Returns the tokenizer for a language.
    pub fn tokenizer(&self, language: Language) -> &dyn Tokenizer {
        match language {
            Language::Python => &self.python,
            Language::JavaScript => &self.javascript,
            Language::Html => &self.html,
            Language::Css => &self.css,
        }
    }

    /// Returns the tokenizer for a language identifier.
    ///
    /// Returns `None` for an unknown identifier; callers treat that as "no
    /// highlighting available", not as an error.
    pub fn lookup(&self, id: &str) -> Option<&dyn Tokenizer> {
        id.parse::<Language>().ok().map(|lang| self.tokenizer(lang))
    }

    /// Returns the tokenizer for a file extension.
    pub fn tokenizer_for_extension(&self, ext: &str) -> Option<&dyn Tokenizer> {
        Language::from_extension(ext).map(|lang| self.tokenizer(lang))
    }

    /// Returns an iterator over the supported languages.
    pub fn languages(&self) -> impl Iterator<Item = Language> {
        Language::ALL.into_iter()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
