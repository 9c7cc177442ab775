// Chunk: docs/chunks/preview_cli - Style to ANSI escape conversion
//! StyledLine to ANSI conversion.
//!
//! Converts Style/Span/StyledLine into SGR escape sequences for a truecolor
//! terminal.

use tint_buffer::{Color, Span, Style, StyledLine};

const RESET: &str = "\x1b[0m";

/// Appends the SGR parameters selecting `color` as foreground or background.
fn push_color(params: &mut Vec<String>, color: Color, background: bool) {
    if let Color::Rgb { r, g, b } = color {
        let target = if background { 48 } else { 38 };
        params.push(format!("{};2;{};{};{}", target, r, g, b));
    }
}

/// Returns the SGR sequence that switches to `style`, or an empty string for
/// the plain style.
pub fn style_to_sgr(style: &Style) -> String {
    let mut params = Vec::new();
    if style.bold {
        params.push("1".to_string());
    }
    if style.italic {
        params.push("3".to_string());
    }
    if style.underline {
        params.push("4".to_string());
    }
    push_color(&mut params, style.fg, false);
    push_color(&mut params, style.bg, true);

    if params.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", params.join(";"))
    }
}

fn span_to_ansi(span: &Span, out: &mut String) {
    let sgr = style_to_sgr(&span.style);
    if sgr.is_empty() {
        out.push_str(&span.text);
    } else {
        out.push_str(&sgr);
        out.push_str(&span.text);
        out.push_str(RESET);
    }
}

/// Renders a styled line as text with embedded escape sequences. Each styled
/// span is followed by a reset; plain spans are written as-is.
pub fn line_to_ansi(line: &StyledLine) -> String {
    let mut out = String::new();
    for span in &line.spans {
        span_to_ansi(span, &mut out);
    }
    out
}
