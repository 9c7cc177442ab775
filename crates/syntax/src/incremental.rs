// Chunk: docs/chunks/incremental_relex - Line cache for re-lexing only changed lines

//! Incremental re-lexing.
//!
//! [`TokenCache`] remembers, for every line of the last text it saw, the
//! line's text, the scan mode it was entered and left with, and its tokens.
//! On the next update only the lines from the first change onward are
//! rescanned, and rescanning stops as soon as it reaches an unchanged line
//! that is entered in the same mode it was cached with. The tokens are always
//! identical to a full `tokenize` of the new text.

use tracing::trace;

use crate::registry::Language;
use crate::token::{ScanMode, Token};
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone)]
struct CachedLine {
    text: String,
    entry: ScanMode,
    exit: ScanMode,
    tokens: Vec<Token>,
}

/// What an update had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relex {
    /// The 1-based line after the unchanged prefix. Rescanning, if any,
    /// starts here.
    pub first_line: usize,
    /// Number of lines scanned by the update.
    pub rescanned: usize,
}

/// Per-line token cache for one document.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    language: Option<Language>,
    lines: Vec<CachedLine>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the cache up to date with `text`.
    ///
    /// A tokenizer for a different language than the previous update
    /// invalidates everything.
    pub fn update(&mut self, tokenizer: &dyn Tokenizer, text: &str) -> Relex {
        if self.language != Some(tokenizer.language()) {
            self.clear();
            self.language = Some(tokenizer.language());
        }

        let new_lines: Vec<&str> = text.split('\n').collect();
        let old_len = self.lines.len();
        let new_len = new_lines.len();
        let shortest = old_len.min(new_len);

        let prefix = self
            .lines
            .iter()
            .zip(&new_lines)
            .take_while(|(cached, line)| cached.text == **line)
            .count();
        let suffix = self.lines[prefix..]
            .iter()
            .rev()
            .zip(new_lines[prefix..].iter().rev())
            .take(shortest - prefix)
            .take_while(|(cached, line)| cached.text == **line)
            .count();

        let mut old_tail = self.lines.split_off(prefix);
        let mut mode = self.lines.last().map_or(ScanMode::Normal, |line| line.exit);
        let mut rescanned = 0;

        for (idx, line) in new_lines.iter().enumerate().skip(prefix) {
            // Index into the old tail of the cached line this one would reuse.
            if idx + suffix >= new_len {
                let old_idx = idx + old_len - new_len - prefix;
                if old_tail[old_idx].entry == mode {
                    trace!(
                        from_line = idx + 1,
                        reused = new_len - idx,
                        "token cache reused unchanged suffix"
                    );
                    let reused = old_tail.split_off(old_idx);
                    self.lines.extend(reused.into_iter().enumerate().map(|(offset, mut cached)| {
                        renumber(&mut cached.tokens, idx + offset + 1);
                        cached
                    }));
                    break;
                }
            }

            let entry = mode;
            let mut tokens = Vec::new();
            tokenizer.scan_line(idx + 1, line, &mut mode, &mut tokens);
            self.lines.push(CachedLine {
                text: (*line).to_string(),
                entry,
                exit: mode,
                tokens,
            });
            rescanned += 1;
        }

        trace!(
            language = %tokenizer.language(),
            first_line = prefix + 1,
            rescanned,
            "token cache updated"
        );
        Relex {
            first_line: prefix + 1,
            rescanned,
        }
    }

    /// Returns every cached token in document order.
    pub fn tokens(&self) -> Vec<Token> {
        self.lines.iter().flat_map(|line| line.tokens.iter().copied()).collect()
    }

    /// Returns the number of cached lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Drops every cached line.
    pub fn clear(&mut self) {
        self.language = None;
        self.lines.clear();
    }
}

fn renumber(tokens: &mut [Token], line: usize) {
    for token in tokens {
        token.start.line = line;
        token.end.line = line;
    }
}
