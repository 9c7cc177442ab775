// Chunk: docs/chunks/tag_layer - Style-tag layout over a text snapshot

//! The style-tag layer.
//!
//! A host text widget exposes named tags that can be attached to character
//! spans; each tag carries a presentation style, and a character covered by
//! several tags is drawn with the highest-priority one. [`TagLayer`] is the
//! interface the highlighter drives, and [`TaggedText`] is an in-memory
//! implementation that can render its layout to [`StyledLine`]s.
//!
//! Tag priority follows configuration order: a tag configured later draws on
//! top of every tag configured before it.

use std::ops::Range;

use crate::line_index::LineIndex;
use crate::style::{Span, Style, StyledLine};
use crate::types::Position;

/// Name of the selection tag. The selection is owned by the host, so
/// whole-document re-tagging must leave it in place.
pub const SELECTION_TAG: &str = "sel";

/// A document that accepts style tags over `[start, end)` spans.
pub trait TagLayer {
    /// Returns the current text snapshot.
    fn text(&self) -> &str;

    /// Returns the names of every configured tag, in priority order
    /// (lowest first).
    fn tag_names(&self) -> Vec<String>;

    /// Registers a tag if it is not known yet. A newly registered tag gets
    /// the highest priority; re-configuring an existing tag is a no-op.
    fn configure_tag(&mut self, name: &str);

    /// Removes every span of the named tag. The tag keeps its priority.
    fn remove_tag(&mut self, name: &str);

    /// Attaches the named tag to `[start, end)`, configuring it first if
    /// needed. Positions clamp to the text; empty spans are ignored.
    fn add_tag(&mut self, name: &str, start: Position, end: Position);
}

#[derive(Debug, Clone)]
struct Tag {
    name: String,
    /// Character-offset ranges, in insertion order.
    ranges: Vec<Range<usize>>,
}

/// An in-memory text snapshot with a style-tag layout.
///
/// # Example
///
/// ```
/// use tint_buffer::{Position, TagLayer, TaggedText};
///
/// let mut doc = TaggedText::new("let x = 1;");
/// doc.add_tag("keyword", Position::new(1, 0), Position::new(1, 3));
/// assert_eq!(doc.tags_at(Position::new(1, 1)), vec!["keyword"]);
/// assert!(doc.tags_at(Position::new(1, 4)).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaggedText {
    text: String,
    index: LineIndex,
    /// Tags in priority order (lowest first).
    tags: Vec<Tag>,
}

impl TaggedText {
    /// Creates a tagged document with no tags.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let index = LineIndex::from_text(&text);
        Self {
            text,
            index,
            tags: Vec::new(),
        }
    }

    /// Replaces the text. Every tag span, the selection included, is dropped;
    /// tag priorities are kept.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.index.rebuild(&self.text);
        for tag in &mut self.tags {
            tag.ranges.clear();
        }
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    /// Selects `[start, end)`, replacing any previous selection.
    pub fn set_selection(&mut self, start: Position, end: Position) {
        self.remove_tag(SELECTION_TAG);
        self.add_tag(SELECTION_TAG, start, end);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.remove_tag(SELECTION_TAG);
    }

    /// Returns the selected span, if any.
    pub fn selection(&self) -> Option<(Position, Position)> {
        self.ranges(SELECTION_TAG).into_iter().next()
    }

    /// Returns the spans of the named tag as position pairs.
    pub fn ranges(&self, name: &str) -> Vec<(Position, Position)> {
        self.find(name)
            .map(|tag| {
                tag.ranges
                    .iter()
                    .map(|r| (self.index.position_of(r.start), self.index.position_of(r.end)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the names of the tags covering `position`, lowest priority
    /// first.
    pub fn tags_at(&self, position: Position) -> Vec<&str> {
        let offset = self.index.offset_of(position);
        self.tags
            .iter()
            .filter(|tag| tag.ranges.iter().any(|r| r.contains(&offset)))
            .map(|tag| tag.name.as_str())
            .collect()
    }

    /// Renders one 1-based line.
    ///
    /// Each character takes the style of its highest-priority tag for which
    /// `resolve` returns a style; characters with no styled tag stay plain.
    /// Returns an empty line when `line` is out of bounds.
    pub fn styled_line<F>(&self, line: usize, resolve: F) -> StyledLine
    where
        F: Fn(&str) -> Option<Style>,
    {
        let (start, end) = match (self.index.line_start(line), self.index.line_end(line)) {
            (Some(start), Some(end)) => (start, end),
            _ => return StyledLine::empty(),
        };
        let styles = self.paint(start..end, &resolve);
        let text = self.text.split('\n').nth(line - 1).unwrap_or_default();
        build_line(text, &styles)
    }

    /// Renders every line of the document.
    pub fn styled_lines<F>(&self, resolve: F) -> Vec<StyledLine>
    where
        F: Fn(&str) -> Option<Style>,
    {
        let styles = self.paint(0..self.index.total_len(), &resolve);
        let mut offset = 0;
        self.text
            .split('\n')
            .map(|text| {
                let len = text.chars().count();
                let line = build_line(text, &styles[offset..offset + len]);
                offset += len + 1;
                line
            })
            .collect()
    }

    fn find(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    /// Resolves the style of every character in `window`, painting tags
    /// from lowest to highest priority so later tags win.
    fn paint<F>(&self, window: Range<usize>, resolve: &F) -> Vec<Style>
    where
        F: Fn(&str) -> Option<Style>,
    {
        let mut styles = vec![Style::default(); window.end - window.start];
        for tag in &self.tags {
            let Some(style) = resolve(&tag.name) else {
                continue;
            };
            for range in &tag.ranges {
                let from = range.start.max(window.start);
                let to = range.end.min(window.end);
                for slot in from..to.max(from) {
                    styles[slot - window.start] = style;
                }
            }
        }
        styles
    }
}

impl TagLayer for TaggedText {
    fn text(&self) -> &str {
        &self.text
    }

    fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.name.clone()).collect()
    }

    fn configure_tag(&mut self, name: &str) {
        if self.find(name).is_none() {
            self.tags.push(Tag {
                name: name.to_string(),
                ranges: Vec::new(),
            });
        }
    }

    fn remove_tag(&mut self, name: &str) {
        if let Some(tag) = self.tags.iter_mut().find(|tag| tag.name == name) {
            tag.ranges.clear();
        }
    }

    fn add_tag(&mut self, name: &str, start: Position, end: Position) {
        let from = self.index.offset_of(start);
        let to = self.index.offset_of(end);
        if from >= to {
            return;
        }
        self.configure_tag(name);
        if let Some(tag) = self.tags.iter_mut().find(|tag| tag.name == name) {
            tag.ranges.push(from..to);
        }
    }
}

/// Zips a line's characters with their resolved styles into spans.
fn build_line(text: &str, styles: &[Style]) -> StyledLine {
    if text.is_empty() {
        return StyledLine::empty();
    }
    let spans = text
        .chars()
        .zip(styles.iter())
        .map(|(ch, style)| Span::new(ch.to_string(), *style))
        .collect();
    StyledLine::new(spans)
}
