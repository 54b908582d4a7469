//! Error type shared by the scorer, the candidate space and the agent

use super::{Code, Score};
use thiserror::Error;

/// Failures surfaced by the core
///
/// All variants describe broken invariants or malformed values handed to the
/// core. None of them is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    /// A code does not have the configured length
    #[error("code length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A symbol index lies outside the configured palette
    #[error("symbol {symbol} is outside the palette of {palette_size} colors")]
    UnknownSymbol { symbol: u8, palette_size: usize },

    /// A color name is not part of the palette
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// A score that no pair of codes of this length can produce
    #[error("score {score} is impossible for codes of length {length}")]
    InvalidScore { score: Score, length: usize },

    /// Every candidate was eliminated, so the observation history is inconsistent
    #[error("candidate space exhausted after guess {guess} scored {score}")]
    CandidateSpaceExhausted { guess: Code, score: Score },

    /// The game configuration cannot be played
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
