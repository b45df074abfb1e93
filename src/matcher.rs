//! Match decision policy - folds the similarity signals into one verdict.
//!
//! The precedence is fixed: empty check, exact match, containment
//! short-circuit, then best-of with ties preferring Dice over Levenshtein
//! over Containment. Reordering any step changes the observable `method`
//! and, for thresholds that fall between two scorer results, the verdict.

use std::fmt;

use serde::Serialize;

use crate::normalize::normalize;
use crate::score::{containment, dice, levenshtein_similarity};

/// Default minimum score (inclusive) for declaring a match.
pub const DEFAULT_THRESHOLD: f64 = 0.65;

/// Which signal produced the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Normalized strings are identical.
    Exact,
    /// One normalized string contains the other.
    Containment,
    /// Token-set Dice coefficient won.
    Dice,
    /// Edit-distance similarity won.
    Levenshtein,
    /// Guess or answer normalized to nothing; never a match.
    Empty,
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMethod::Exact => write!(f, "exact"),
            MatchMethod::Containment => write!(f, "containment"),
            MatchMethod::Dice => write!(f, "dice"),
            MatchMethod::Levenshtein => write!(f, "levenshtein"),
            MatchMethod::Empty => write!(f, "empty"),
        }
    }
}

/// Per-call options; nothing here is persisted or shared between calls.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Minimum score (inclusive) required to declare a match.
    pub threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Outcome of one guess/answer evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub score: f64,
    pub method: MatchMethod,
    /// The original, un-normalized guess, kept for display and audit.
    pub transcript: String,
}

impl MatchResult {
    fn new(matched: bool, score: f64, method: MatchMethod, guess: &str) -> Self {
        Self {
            matched,
            score,
            method,
            transcript: guess.to_string(),
        }
    }
}

/// Decide whether `guess` refers to the same title as `answer`.
///
/// Total over its input domain: degenerate inputs come back as a regular
/// [`MatchMethod::Empty`] result, never an error.
pub fn match_guess(guess: &str, answer: &str, options: MatchOptions) -> MatchResult {
    let threshold = options.threshold;
    let ng = normalize(guess);
    let na = normalize(answer);

    if ng.is_empty() || na.is_empty() {
        return MatchResult::new(false, 0.0, MatchMethod::Empty, guess);
    }

    if ng == na {
        return MatchResult::new(true, 1.0, MatchMethod::Exact, guess);
    }

    // Containment short-circuits: once it clears the threshold it is never
    // compared against the other scorers, even if one would score higher.
    let cont = containment(guess, answer);
    if cont >= threshold {
        return MatchResult::new(true, cont, MatchMethod::Containment, guess);
    }

    let dice_score = dice(guess, answer);
    let lev_score = levenshtein_similarity(guess, answer);
    let best = cont.max(dice_score).max(lev_score);

    // Equal-value ties prefer Dice over Levenshtein over Containment.
    let method = if best == dice_score {
        MatchMethod::Dice
    } else if best == lev_score {
        MatchMethod::Levenshtein
    } else {
        MatchMethod::Containment
    };

    MatchResult::new(best >= threshold, best, method, guess)
}
