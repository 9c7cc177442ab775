// Chunk: docs/chunks/preview_cli - Library surface of the preview binary
//!
//! tint: syntax highlighting preview.
//!
//! The highlighting itself lives in `tint-syntax`; this crate renders its
//! output for a terminal.

pub mod ansi;
pub mod preview;

pub use preview::PreviewError;
