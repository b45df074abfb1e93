//! Approximate answer matching for a guessing game.
//!
//! Judges whether a free-form guess (typed, or transcribed from speech)
//! refers to the same title as a known answer string, tolerating
//! mis-transcriptions, partial phrases, missing articles, and punctuation
//! noise. The decision is deterministic and cheap enough for a real-time
//! game loop: normalize both strings once, run three independent scorers
//! (containment, token-set Dice, edit-distance similarity), and fold them
//! into a single verdict with a fixed precedence.
//!
//! ```
//! use guessmatch::{match_guess, MatchMethod, MatchOptions};
//!
//! let result = match_guess("Dark Knight", "The Dark Knight Rises", MatchOptions::default());
//! assert!(result.matched);
//! assert_eq!(result.method, MatchMethod::Containment);
//! ```

pub mod matcher;
pub mod normalize;
pub mod score;
pub mod tokens;

pub use matcher::{DEFAULT_THRESHOLD, MatchMethod, MatchOptions, MatchResult, match_guess};
pub use normalize::normalize;
pub use tokens::token_set;
