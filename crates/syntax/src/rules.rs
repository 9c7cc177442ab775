// Chunk: docs/chunks/rule_engine - First-match-wins rule tables

//! Ordered rule tables and the cursor that scans a line with them.
//!
//! A rule table is an ordered list of `(pattern, TokenType)` pairs. At any
//! scan position the first rule whose match starts exactly at that position
//! wins, regardless of whether a later rule would match a longer span.
//!
//! Matching uses `Regex::find_at`, so look-around assertions such as `\b` see
//! the characters before the scan position. The cursor remembers, per rule,
//! where that rule next matches; as long as the scan position has not moved
//! past a remembered match, the rule does not need to be searched again.

use regex::Regex;

use crate::token::{Token, TokenType};

/// A single compiled rule.
#[derive(Debug, Clone)]
struct Rule {
    regex: Regex,
    token_type: TokenType,
}

/// An ordered, compiled list of rules. Order encodes precedence.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compiles a rule table from `(pattern, TokenType)` pairs.
    pub fn compile(rules: &[(&str, TokenType)]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|(pattern, token_type)| {
                Ok(Rule {
                    regex: Regex::new(pattern)?,
                    token_type: *token_type,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// Compiles one of the built-in tables.
    ///
    /// The built-in patterns are constants, so a failure here is a
    /// programming error rather than an input error.
    pub(crate) fn builtin(rules: &[(&str, TokenType)]) -> Self {
        Self::compile(rules).expect("built-in rule table must compile")
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Starts scanning `haystack` with this table.
    pub fn cursor<'a>(&'a self, haystack: &'a str) -> RuleCursor<'a> {
        RuleCursor {
            table: self,
            haystack,
            slots: vec![Slot::Unsearched; self.rules.len()],
            last_pos: 0,
        }
    }
}

/// What a cursor knows about one rule's next match.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Unsearched,
    /// The rule has no match at or after the position it was searched from.
    Exhausted,
    /// The leftmost match at or after the position it was searched from.
    At { start: usize, end: usize },
}

/// Scans one haystack with a rule table.
///
/// Positions passed to [`RuleCursor::match_at`] are byte offsets on char
/// boundaries and are expected to be non-decreasing; moving backwards drops
/// the cached search results.
#[derive(Debug)]
pub struct RuleCursor<'a> {
    table: &'a RuleTable,
    haystack: &'a str,
    slots: Vec<Slot>,
    last_pos: usize,
}

impl<'a> RuleCursor<'a> {
    /// Returns the text being scanned.
    pub fn haystack(&self) -> &'a str {
        self.haystack
    }

    /// Returns the type and end offset of the first rule matching exactly at
    /// `pos`, or `None` if no rule does. Zero-length matches never count.
    pub fn match_at(&mut self, pos: usize) -> Option<(TokenType, usize)> {
        if pos < self.last_pos {
            self.slots.fill(Slot::Unsearched);
        }
        self.last_pos = pos;

        for (rule, slot) in self.table.rules.iter().zip(self.slots.iter_mut()) {
            let stale = match *slot {
                Slot::Unsearched => true,
                Slot::Exhausted => false,
                Slot::At { start, .. } => start < pos,
            };
            if stale {
                *slot = match rule.regex.find_at(self.haystack, pos) {
                    Some(m) => Slot::At {
                        start: m.start(),
                        end: m.end(),
                    },
                    None => Slot::Exhausted,
                };
            }
            if let Slot::At { start, end } = *slot {
                if start == pos && end > pos {
                    return Some((rule.token_type, end));
                }
            }
        }
        None
    }

    /// Runs first-match-wins scanning over `[from, to)`, emitting one token
    /// per match and silently skipping one character where nothing matches.
    pub fn scan(&mut self, from: usize, to: usize, out: &mut LineEmitter<'_>) {
        let to = to.min(self.haystack.len());
        let mut pos = from;
        while pos < to {
            match self.match_at(pos) {
                Some((token_type, end)) => {
                    out.emit(token_type, pos, end);
                    pos = end;
                }
                None => pos = next_boundary(self.haystack, pos),
            }
        }
    }
}

/// Returns the byte offset of the char boundary after `pos`.
pub(crate) fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |ch| pos + ch.len_utf8())
}

/// Converts byte offsets within one line into character columns.
///
/// Lookups are cheapest when offsets are requested in non-decreasing order,
/// which is how tokens are emitted.
#[derive(Debug, Clone)]
pub struct ColumnMap<'a> {
    line: &'a str,
    byte: usize,
    col: usize,
}

impl<'a> ColumnMap<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            byte: 0,
            col: 0,
        }
    }

    /// Returns the character column of byte offset `byte`.
    pub fn column(&mut self, byte: usize) -> usize {
        let byte = byte.min(self.line.len());
        if byte < self.byte {
            self.byte = 0;
            self.col = 0;
        }
        self.col += self.line[self.byte..byte].chars().count();
        self.byte = byte;
        self.col
    }
}

/// Appends tokens for one line, translating byte offsets to columns.
#[derive(Debug)]
pub struct LineEmitter<'a> {
    line_number: usize,
    columns: ColumnMap<'a>,
    tokens: &'a mut Vec<Token>,
}

impl<'a> LineEmitter<'a> {
    pub fn new(line_number: usize, line: &'a str, tokens: &'a mut Vec<Token>) -> Self {
        Self {
            line_number,
            columns: ColumnMap::new(line),
            tokens,
        }
    }

    /// Emits a token spanning bytes `[start, end)` of the line.
    pub fn emit(&mut self, token_type: TokenType, start: usize, end: usize) {
        let start_col = self.columns.column(start);
        let end_col = self.columns.column(end);
        self.tokens
            .push(Token::on_line(token_type, self.line_number, start_col, end_col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::compile(&[
            (r"\b(if|in)\b", TokenType::Keyword),
            (r"[a-z]+\(", TokenType::Function),
            (r"\d+", TokenType::Number),
            (r"[=;(]", TokenType::Operator),
        ])
        .unwrap()
    }

    fn scan_all(line: &str) -> Vec<Token> {
        let table = table();
        let mut tokens = Vec::new();
        let mut cursor = table.cursor(line);
        let mut out = LineEmitter::new(1, line, &mut tokens);
        cursor.scan(0, line.len(), &mut out);
        tokens
    }

    // ==================== Precedence ====================

    #[test]
    fn test_first_match_wins_over_longest() {
        // "in(" is matched by both the keyword and the call rule; the keyword
        // rule is earlier, so only "in" is consumed.
        let tokens = scan_all("in(");
        assert_eq!(
            tokens,
            vec![
                Token::on_line(TokenType::Keyword, 1, 0, 2),
                Token::on_line(TokenType::Operator, 1, 2, 3),
            ]
        );
    }

    #[test]
    fn test_word_boundary_sees_preceding_text() {
        // The "if" inside "xif" is not at a word boundary.
        let tokens = scan_all("xif 1");
        assert_eq!(tokens, vec![Token::on_line(TokenType::Number, 1, 4, 5)]);
    }

    #[test]
    fn test_unmatched_characters_are_skipped() {
        let tokens = scan_all("  ; ");
        assert_eq!(tokens, vec![Token::on_line(TokenType::Operator, 1, 2, 3)]);
    }

    #[test]
    fn test_cached_match_reused_after_skip() {
        let table = table();
        let mut cursor = table.cursor("ab 42");
        assert_eq!(cursor.match_at(0), None);
        assert_eq!(cursor.match_at(1), None);
        assert_eq!(cursor.match_at(3), Some((TokenType::Number, 5)));
    }

    #[test]
    fn test_moving_backwards_resets_cache() {
        let table = table();
        let mut cursor = table.cursor("12 34");
        assert_eq!(cursor.match_at(3), Some((TokenType::Number, 5)));
        assert_eq!(cursor.match_at(0), Some((TokenType::Number, 2)));
    }

    #[test]
    fn test_zero_length_match_never_counts() {
        let table = RuleTable::compile(&[(r"x*", TokenType::Value)]).unwrap();
        let mut cursor = table.cursor("ab");
        assert_eq!(cursor.match_at(0), None);
    }

    #[test]
    fn test_compile_reports_bad_pattern() {
        assert!(RuleTable::compile(&[("(", TokenType::Value)]).is_err());
    }

    // ==================== Columns ====================

    #[test]
    fn test_columns_count_characters() {
        let line = "é = 42";
        let tokens = scan_all(line);
        assert_eq!(
            tokens,
            vec![
                Token::on_line(TokenType::Operator, 1, 2, 3),
                Token::on_line(TokenType::Number, 1, 4, 6),
            ]
        );
    }

    #[test]
    fn test_column_map_backwards_lookup() {
        let mut map = ColumnMap::new("añb");
        assert_eq!(map.column(4), 3);
        assert_eq!(map.column(1), 1);
        assert_eq!(map.column(3), 2);
    }

    #[test]
    fn test_next_boundary() {
        assert_eq!(next_boundary("añb", 1), 3);
        assert_eq!(next_boundary("a", 0), 1);
    }
}
