//! Tokenization with stop-word filtering.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::normalize::normalize;

/// Function words ignored by token-set comparison: English articles and
/// prepositions plus transliterated Hindi fillers. Initialized once,
/// read-only afterwards, safe to share across threads.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "of", "in", "on", "at", "to", "and", "or", "is",
        "it", "ka", "ki", "ke", "se", "ko", "hai", "hain", "ek", "aur",
    ]
    .into_iter()
    .collect()
});

/// Split a string into its set of normalized content words.
///
/// Duplicates collapse and stop words are dropped, so "The Lord of the
/// Rings" yields `{lord, rings}`.
pub fn token_set(s: &str) -> HashSet<String> {
    normalize(s)
        .split(' ')
        .filter(|w| !w.is_empty() && !STOP_WORDS.contains(w))
        .map(str::to_owned)
        .collect()
}

/// True if `word` is one of the filler words dropped from token sets.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_english_stop_words_dropped() {
        assert_eq!(
            token_set("The Lord of the Rings"),
            set(&["lord", "rings"])
        );
    }

    #[test]
    fn test_hindi_stop_words_dropped() {
        assert_eq!(
            token_set("Dil Se Hai Ek Kahani"),
            set(&["dil", "kahani"])
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(token_set("new york new york"), set(&["new", "york"]));
    }

    #[test]
    fn test_empty_and_stop_only() {
        assert!(token_set("").is_empty());
        assert!(token_set("the of and").is_empty());
    }

    #[test]
    fn test_stop_word_table() {
        for w in ["the", "an", "ka", "hain", "aur"] {
            assert!(is_stop_word(w), "{} should be a stop word", w);
        }
        for w in ["lord", "rings", "dil", "khan", ""] {
            assert!(!is_stop_word(w), "{} should not be a stop word", w);
        }
    }
}
