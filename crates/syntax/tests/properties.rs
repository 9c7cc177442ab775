// Chunk: docs/chunks/rule_engine - Property tests for tokenizer invariants
//!
//! Invariants that hold for every language over arbitrary input text.

use std::sync::OnceLock;

use proptest::prelude::*;
use proptest::string::string_regex;
use tint_syntax::{Language, LanguageRegistry, Token, TokenCache};

/// Source-like text: identifiers, digits, quotes, brackets, template and
/// tag punctuation, a few non-ASCII characters, and newlines.
fn source_text() -> impl Strategy<Value = String> {
    string_regex(r#"[a-z0-9 \n\t"'`$#@{}()<>=;:!/*.,_é€-]{0,120}"#).unwrap()
}

/// Compiled once for the whole suite.
fn registry() -> &'static LanguageRegistry {
    static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LanguageRegistry::new)
}

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

/// Rebuilds each line from its tokens and the gaps between them.
fn reconstruct(text: &str, tokens: &[Token]) -> Vec<String> {
    let lines: Vec<Vec<char>> = text.split('\n').map(|l| l.chars().collect()).collect();
    let mut out: Vec<String> = vec![String::new(); lines.len()];
    let mut cursor = vec![0usize; lines.len()];
    for token in tokens {
        let idx = token.start.line - 1;
        let chars = &lines[idx];
        out[idx].extend(&chars[cursor[idx]..token.start.col]);
        out[idx].extend(&chars[token.start.col..token.end.col]);
        cursor[idx] = token.end.col;
    }
    for (idx, chars) in lines.iter().enumerate() {
        out[idx].extend(&chars[cursor[idx]..]);
    }
    out
}

proptest! {
    #[test]
    fn prop_tokens_ordered_and_disjoint(lang in language(), text in source_text()) {
        let registry = registry();
        let tokens = registry.tokenizer(lang).tokenize(&text);

        for token in &tokens {
            prop_assert_eq!(token.start.line, token.end.line);
            prop_assert!(token.start < token.end, "empty token {:?}", token);
        }
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn prop_tokens_stay_within_lines(lang in language(), text in source_text()) {
        let registry = registry();
        let tokens = registry.tokenizer(lang).tokenize(&text);
        let lines: Vec<&str> = text.split('\n').collect();

        for token in &tokens {
            prop_assert!(token.start.line >= 1 && token.start.line <= lines.len());
            prop_assert!(token.end.col <= lines[token.start.line - 1].chars().count());
        }
        let expected: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        prop_assert_eq!(reconstruct(&text, &tokens), expected);
    }

    #[test]
    fn prop_tokenize_is_deterministic(lang in language(), text in source_text()) {
        let registry = registry();
        let tokenizer = registry.tokenizer(lang);
        prop_assert_eq!(tokenizer.tokenize(&text), tokenizer.tokenize(&text));
    }

    #[test]
    fn prop_cache_matches_full_tokenize(
        lang in language(),
        before in source_text(),
        insert in source_text(),
        at in 0usize..200,
        remove in 0usize..20,
    ) {
        let registry = registry();
        let tokenizer = registry.tokenizer(lang);

        // Replace `remove` chars at char index `at` with `insert`.
        let chars: Vec<char> = before.chars().collect();
        let start = at.min(chars.len());
        let end = (start + remove).min(chars.len());
        let mut after: String = chars[..start].iter().collect();
        after.push_str(&insert);
        after.extend(&chars[end..]);

        let mut cache = TokenCache::new();
        cache.update(tokenizer, &before);
        prop_assert_eq!(cache.tokens(), tokenizer.tokenize(&before));
        cache.update(tokenizer, &after);
        prop_assert_eq!(cache.tokens(), tokenizer.tokenize(&after));
    }
}
