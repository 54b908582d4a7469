//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! picks from the remaining candidates, so each guess could still be the secret.

use crate::core::{Code, Score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A policy for choosing the next guess among the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns a member of `candidates`, or `None` if it is empty.
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Worst-case partition minimization (default)
    Minimax(MinimaxStrategy),
    /// First remaining candidate in enumeration order
    First(FirstCandidateStrategy),
    /// Uniform random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "first-candidate" => Self::First(FirstCandidateStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}

/// Deterministic strategy
///
/// Always guesses the first remaining candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Minimax strategy
///
/// Selects the candidate whose worst-case score partition is smallest.
/// Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        if candidates.len() <= 2 {
            return candidates.first();
        }

        candidates
            .par_iter()
            .enumerate()
            .map(|(i, guess)| (max_partition(guess, candidates), i))
            .min()
            .map(|(_, i)| &candidates[i])
    }
}

/// Largest number of candidates sharing one score against `guess`
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::strategy::max_partition;
///
/// let candidates = vec![Code::from_indices(&[0, 0]), Code::from_indices(&[1, 1])];
/// assert_eq!(max_partition(&candidates[0], &candidates), 1);
/// ```
#[must_use]
pub fn max_partition(guess: &Code, candidates: &[Code]) -> usize {
    let mut counts: FxHashMap<Score, usize> = FxHashMap::default();

    for candidate in candidates {
        if let Ok(score) = Score::between(candidate, guess) {
            *counts.entry(score).or_insert(0) += 1;
        }
    }

    counts.values().max().copied().unwrap_or(0)
}
