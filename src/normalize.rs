//! Canonical lowercase form of message text for lexicon and pattern matching.
//!
//! Normalization drops URLs, `@mentions` and `#tags`, folds typographic quotes
//! to ASCII, collapses whitespace and lowercases. It is lossy on purpose: the
//! intensity modifier reads capitalization and punctuation from the original
//! text, which callers keep.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid url regex"));
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("valid mention regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("valid tag regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize message text. Never fails; may return an empty string.
pub fn normalize_text(text: &str) -> String {
    let stripped = URL.replace_all(text, " ");
    let stripped = MENTION.replace_all(&stripped, " ");
    let stripped = TAG.replace_all(&stripped, " ");

    let folded: String = stripped.chars().map(fold_quote).collect();

    WHITESPACE
        .replace_all(&folded, " ")
        .trim()
        .to_lowercase()
}

fn fold_quote(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
        '\u{201C}' | '\u{201D}' => '"',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize_text("  I am   SO\tTired \n of this  "),
            "i am so tired of this"
        );
    }

    #[test]
    fn strips_urls_mentions_and_tags() {
        assert_eq!(
            normalize_text("@sam look https://example.com/a?b=c now #angry www.foo.org"),
            "look now"
        );
    }

    #[test]
    fn folds_curly_apostrophes() {
        assert_eq!(normalize_text("I can\u{2019}t wait"), "i can't wait");
        assert_eq!(normalize_text("\u{201C}fine\u{201D}"), "\"fine\"");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("#tag @user"), "");
    }
}
