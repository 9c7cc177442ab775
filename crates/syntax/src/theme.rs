// Chunk: docs/chunks/theme_config - Token styles and JSON theme overrides

//! Syntax theme mapping token types to styles.
//!
//! [`SyntaxTheme::classic`] is the built-in table. A JSON theme file can
//! overlay individual entries:
//!
//! ```json
//! { "styles": { "keyword": { "fg": "#ff0000", "bold": true, "italic": false } } }
//! ```
//!
//! `bg` (a color) and `underline` (a flag) are accepted as well. Every field
//! is optional; anything a file leaves out keeps its classic style.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tint_buffer::{Color, Style};

use crate::token::TokenType;

/// Directory name under the platform config dir.
const APP_NAME: &str = "tint";

/// Theme file name inside [`APP_NAME`].
const THEME_FILENAME: &str = "theme.json";

/// Errors from loading or applying a theme configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color `{value}` for `{token_type}`")]
    InvalidColor { token_type: TokenType, value: String },
}

/// Foreground colors of the classic theme.
mod classic {
    use tint_buffer::Color;

    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::Rgb { r, g, b }
    }

    pub const KEYWORD: Color = rgb(0x9d, 0x00, 0xff);
    pub const STRING: Color = rgb(0x00, 0xcc, 0x66);
    pub const COMMENT: Color = rgb(0x00, 0xa5, 0xa5);
    pub const NUMBER: Color = rgb(0xff, 0x66, 0x00);
    pub const FUNCTION: Color = rgb(0x41, 0x69, 0xe1);
    pub const CLASS: Color = rgb(0xdc, 0x14, 0x3c);
    pub const OPERATOR: Color = rgb(0xff, 0x14, 0x93);
    pub const DECORATOR: Color = rgb(0xff, 0x8c, 0x00);
    pub const TAG: Color = rgb(0x1e, 0x90, 0xff);
    pub const ATTRIBUTE: Color = rgb(0xff, 0x7f, 0x50);
    pub const PROPERTY: Color = rgb(0xff, 0x00, 0xff);
    pub const VALUE: Color = rgb(0x32, 0xcd, 0x32);
}

// =============================================================================
// SyntaxTheme
// =============================================================================

/// An immutable mapping from token type to presentation style.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTheme {
    styles: HashMap<TokenType, Style>,
}

impl SyntaxTheme {
    /// The built-in theme.
    ///
    /// Keywords and class names are bold, comments are italic, and every
    /// type has its own foreground color.
    pub fn classic() -> Self {
        let styles = TokenType::ALL
            .into_iter()
            .map(|token_type| (token_type, classic_style(token_type)))
            .collect();
        Self { styles }
    }

    /// Builds a theme by overlaying `config` on the classic table.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut theme = Self::classic();
        for (&token_type, entry) in &config.styles {
            let style = theme.styles.entry(token_type).or_default();
            if let Some(fg) = &entry.fg {
                style.fg = parse_color(token_type, fg)?;
            }
            if let Some(bg) = &entry.bg {
                style.bg = parse_color(token_type, bg)?;
            }
            if let Some(bold) = entry.bold {
                style.bold = bold;
            }
            if let Some(italic) = entry.italic {
                style.italic = italic;
            }
            if let Some(underline) = entry.underline {
                style.underline = underline;
            }
        }
        Ok(theme)
    }

    /// Reads and applies a JSON theme file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ThemeConfig = serde_json::from_str(&contents)?;
        Self::from_config(&config)
    }

    /// Returns the style for a token type.
    pub fn style_for(&self, token_type: TokenType) -> Style {
        self.styles.get(&token_type).copied().unwrap_or_default()
    }

    /// Returns the style for a tag name, if the name is a token type.
    pub fn style_for_tag(&self, name: &str) -> Option<Style> {
        name.parse::<TokenType>().ok().map(|t| self.style_for(t))
    }
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        Self::classic()
    }
}

fn parse_color(token_type: TokenType, value: &str) -> Result<Color, ThemeError> {
    Color::from_hex(value).ok_or_else(|| ThemeError::InvalidColor {
        token_type,
        value: value.to_string(),
    })
}

fn classic_style(token_type: TokenType) -> Style {
    let fg = match token_type {
        TokenType::Keyword => classic::KEYWORD,
        TokenType::String => classic::STRING,
        TokenType::Comment => classic::COMMENT,
        TokenType::Number => classic::NUMBER,
        TokenType::Function => classic::FUNCTION,
        TokenType::Class => classic::CLASS,
        TokenType::Operator => classic::OPERATOR,
        TokenType::Decorator => classic::DECORATOR,
        TokenType::Tag => classic::TAG,
        TokenType::Attribute => classic::ATTRIBUTE,
        TokenType::Property => classic::PROPERTY,
        TokenType::Value => classic::VALUE,
    };
    Style {
        fg,
        bold: matches!(token_type, TokenType::Keyword | TokenType::Class),
        italic: token_type == TokenType::Comment,
        ..Style::default()
    }
}

// =============================================================================
// Theme Configuration
// =============================================================================

/// On-disk theme overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub styles: BTreeMap<TokenType, StyleConfig>,
}

/// Overrides for a single token type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Foreground color as `#rgb` or `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    /// Background color, same formats as `fg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

/// Returns the default theme file path.
///
/// This is `<config dir>/tint/theme.json`, e.g. `~/.config/tint/theme.json`
/// on Linux. Returns `None` if the platform has no config directory. The
/// file itself may not exist.
pub fn default_config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_NAME).join(THEME_FILENAME))
}
