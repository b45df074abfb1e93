//! Text normalization for comparison.
//!
//! Canonicalizes raw guesses and answers before any scoring, so that
//! "The Dark Knight!" and "the dark knight" compare equal.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on the normalized length, in chars. Keeps the edit-distance
/// matrix small even when a caller feeds pathological input; human-typed
/// titles never get near it.
pub const MAX_NORMALIZED_CHARS: usize = 512;

/// Typographic quotes are deleted outright, not replaced with ASCII quotes,
/// so "don’t" and "dont" normalize identically.
const SMART_QUOTES: [char; 4] = ['\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Non-greedy, single-level parenthetical groups: "Mr. Bean (1997)".
/// Nested or unbalanced parens are not treated specially; leftover paren
/// characters fall to the word-character filter below.
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Canonicalize a string for comparison.
///
/// Lowercases, trims, deletes smart quotes, strips well-formed `(...)`
/// groups, drops every character that is not alphanumeric, `_`, or
/// whitespace, and collapses whitespace runs to single spaces. Idempotent:
/// `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let unquoted: String = lowered
        .trim()
        .chars()
        .filter(|c| !SMART_QUOTES.contains(c))
        .collect();
    let stripped = PARENTHETICAL.replace_all(&unquoted, "");
    let cleaned: String = stripped
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(collapsed, MAX_NORMALIZED_CHARS)
}

/// Truncate to at most `max` chars on a char boundary, then drop any
/// trailing whitespace the cut exposed. Keeps `normalize` idempotent.
fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
        let end = s.trim_end().len();
        s.truncate(end);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_case() {
        assert_eq!(normalize("The Dark Knight!"), "the dark knight");
        assert_eq!(normalize("  Sholay. "), "sholay");
    }

    #[test]
    fn test_parentheticals() {
        assert_eq!(normalize("Mr. Bean (1997)"), "mr bean");
        assert_eq!(normalize("Dune (Part Two) (2024)"), "dune");
    }

    #[test]
    fn test_smart_quotes_deleted() {
        // U+2019 is deleted, not replaced, so the word closes up
        assert_eq!(normalize("Ocean\u{2019}s Eleven"), "oceans eleven");
        assert_eq!(normalize("\u{201C}Jaws\u{201D}"), "jaws");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("dil \t to\n  pagal hai"), "dil to pagal hai");
    }

    #[test]
    fn test_unbalanced_and_nested_parens() {
        // Unbalanced: nothing to strip, paren falls to the char filter
        assert_eq!(normalize("abc (def"), "abc def");
        // Nested: only the first well-formed span goes, residue survives
        assert_eq!(normalize("a (b (c) d) e"), "a d e");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "The Dark Knight!",
            "Mr. Bean (1997)",
            "  Dilwale   Dulhania Le Jayenge  ",
            "don\u{2019}t (stop) me now",
            "",
            "zoolander 2",
        ];
        for s in inputs {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_long_input_bounded() {
        let long = "na ".repeat(4000);
        let n = normalize(&long);
        assert!(n.chars().count() <= MAX_NORMALIZED_CHARS);
        assert_eq!(normalize(&n), n);
        assert!(!n.ends_with(' '));
    }
}
