// Chunk: docs/chunks/tag_layer - Positions, styles and the style-tag layer

//! tint-buffer: text positions, styles and style-tag layout for tint.
//!
//! This crate holds the value types the highlighter and the renderer
//! exchange, plus the style-tag layer a host text widget exposes.
//!
//! # Overview
//!
//! - [`Position`]: a (1-based line, 0-based character column) pair.
//! - [`Style`], [`Color`], [`Span`], [`StyledLine`]: the rendering vocabulary.
//! - [`TagLayer`]: the interface of a document that accepts named style tags
//!   over text spans, with [`TaggedText`] as an in-memory implementation.
//!
//! # Example
//!
//! ```
//! use tint_buffer::{Color, Position, Style, TagLayer, TaggedText};
//!
//! let mut doc = TaggedText::new("def f():");
//! doc.add_tag("keyword", Position::new(1, 0), Position::new(1, 3));
//!
//! let bold = Style { bold: true, ..Style::default() };
//! let line = doc.styled_line(1, |tag| (tag == "keyword").then_some(bold));
//! assert_eq!(line.spans[0].text, "def");
//! assert!(line.spans[0].style.bold);
//! ```

mod line_index;
mod style;
mod tagged_text;
mod types;

pub use line_index::LineIndex;
pub use style::{Color, Span, Style, StyledLine};
pub use tagged_text::{TagLayer, TaggedText, SELECTION_TAG};
pub use types::Position;
