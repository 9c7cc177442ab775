// Chunk: docs/chunks/tag_layer - Style vocabulary for rendering
//!
//! Style types shared by the highlighter and the renderer.
//!
//! - [`Color`]: Renderer default or 24-bit RGB
//! - [`Style`]: Foreground/background plus bold, italic and underline
//! - [`Span`]: A run of text with uniform styling
//! - [`StyledLine`]: A sequence of spans comprising a single line

// =============================================================================
// Color Types
// =============================================================================

/// A foreground or background color.
///
/// Themes only ever produce 24-bit colors; `Default` leaves the choice to
/// the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Parses a `#rgb` or `#rrggbb` hex color (case-insensitive).
    ///
    /// Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut it = digits.chars().map(|c| {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    v * 16 + v
                });
                Some(Color::Rgb {
                    r: it.next()?,
                    g: it.next()?,
                    b: it.next()?,
                })
            }
            6 => Some(Color::Rgb {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            _ => None,
        }
    }
}

// =============================================================================
// Style
// =============================================================================

/// Text styling attributes.
///
/// The default style is unstyled text: default colors, no attributes.
///
/// # Example
///
/// ```
/// use tint_buffer::{Style, Color};
///
/// let style = Style {
///     fg: Color::Rgb { r: 255, g: 0, b: 0 },
///     bold: true,
///     ..Style::default()
/// };
/// assert!(!style.is_plain());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Single underline.
    pub underline: bool,
}

impl Style {
    /// Creates a style with only a foreground color.
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    /// Returns true if this style carries no attributes at all.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

// =============================================================================
// Span and StyledLine
// =============================================================================

/// A contiguous run of text with uniform styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// The text content of this span.
    pub text: String,
    /// The style applied to this text.
    pub style: Style,
}

impl Span {
    /// Creates a new span with the given text and style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an unstyled span (default style).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }
}

/// A line as the renderer sees it: a sequence of styled spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    /// The spans comprising this line.
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// Creates a new styled line from spans, merging adjacent spans that
    /// share a style.
    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans: merge_spans(spans),
        }
    }

    /// Creates a line with a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    /// Creates an empty line.
    pub fn empty() -> Self {
        Self { spans: vec![] }
    }

    /// Returns true if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the total character count across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// Returns the line's text with styling stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Merges adjacent spans that have the same style.
fn merge_spans(spans: Vec<Span>) -> Vec<Span> {
    let mut result: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if span.text.is_empty() {
            continue;
        }
        if let Some(last) = result.last_mut() {
            if last.style == span.style {
                last.text.push_str(&span.text);
                continue;
            }
        }
        result.push(span);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Color parsing ====================

    #[test]
    fn test_from_hex_long_form() {
        assert_eq!(
            Color::from_hex("#9D00FF"),
            Some(Color::Rgb {
                r: 0x9d,
                g: 0x00,
                b: 0xff
            })
        );
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(
            Color::from_hex("#fa0"),
            Some(Color::Rgb {
                r: 0xff,
                g: 0xaa,
                b: 0x00
            })
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("9D00FF"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#ggg"), None);
        assert_eq!(Color::from_hex("#"), None);
    }

    // ==================== Spans ====================

    #[test]
    fn test_new_merges_same_style() {
        let style = Style::default();
        let line = StyledLine::new(vec![
            Span::new("hello", style),
            Span::new(" ", style),
            Span::new("world", style),
        ]);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].text, "hello world");
    }

    #[test]
    fn test_new_preserves_different_styles() {
        let bold = Style {
            bold: true,
            ..Style::default()
        };
        let line = StyledLine::new(vec![Span::new("hello", bold), Span::plain("world")]);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.text(), "helloworld");
    }

    #[test]
    fn test_new_drops_empty_spans() {
        let line = StyledLine::new(vec![Span::plain(""), Span::plain("x")]);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.char_count(), 1);
    }

    #[test]
    fn test_plain_style() {
        assert!(Style::default().is_plain());
        assert!(!Style::fg(Color::Rgb { r: 0, g: 0, b: 0 }).is_plain());
    }
}
