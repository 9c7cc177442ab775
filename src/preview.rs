// Chunk: docs/chunks/preview_cli - Render a highlighted file for the terminal
//! File preview.
//!
//! Glue between the command line and the highlighter: picks the language
//! for a file, loads the theme, and renders either colored text or a token
//! listing.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tint_buffer::TaggedText;
use tint_syntax::{default_config_path, Language, SyntaxHighlighter, SyntaxTheme, ThemeError};
use tracing::{debug, warn};

use crate::ansi::line_to_ansi;

/// Errors from previewing a file.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Reads a source file.
pub fn read_source(path: &Path) -> Result<String, PreviewError> {
    fs::read_to_string(path).map_err(|source| PreviewError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Picks the language id to highlight `path` with.
///
/// An explicit id wins, even one no tokenizer exists for. Otherwise the
/// file extension decides.
pub fn language_for(path: &Path, explicit: Option<&str>) -> Option<String> {
    if let Some(id) = explicit {
        return Some(id.to_string());
    }
    let ext = path.extension()?.to_str()?;
    let language = Language::from_extension(ext);
    debug!(path = %path.display(), ?language, "detected language");
    language.map(|lang| lang.id().to_string())
}

/// Loads the theme.
///
/// An explicit path must load. Without one, the default config file is used
/// when present; a missing or broken default file falls back to the classic
/// theme.
pub fn load_theme(explicit: Option<&Path>) -> Result<SyntaxTheme, PreviewError> {
    if let Some(path) = explicit {
        return Ok(SyntaxTheme::load(path)?);
    }
    let Some(path) = default_config_path().filter(|p| p.exists()) else {
        return Ok(SyntaxTheme::classic());
    };
    match SyntaxTheme::load(&path) {
        Ok(theme) => Ok(theme),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring theme file");
            Ok(SyntaxTheme::classic())
        }
    }
}

/// Renders `text` with ANSI colors, one output line per source line.
///
/// Without a language (or with one no tokenizer exists for) the text comes
/// back unchanged.
pub fn render(highlighter: &SyntaxHighlighter, text: &str, language_id: Option<&str>) -> String {
    let mut doc = TaggedText::new(text);
    if let Some(id) = language_id {
        highlighter.highlight(&mut doc, id);
    }
    doc.styled_lines(|name| highlighter.style_for_tag(name))
        .iter()
        .map(line_to_ansi)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists tokens as `line:col-line:col type` rows.
pub fn render_tokens(highlighter: &SyntaxHighlighter, text: &str, language_id: Option<&str>) -> String {
    let Some(tokenizer) = language_id.and_then(|id| highlighter.registry().lookup(id)) else {
        return String::new();
    };
    tokenizer
        .tokenize(text)
        .iter()
        .map(|t| format!("{}-{} {}\n", t.start, t.end, t.token_type))
        .collect()
}
