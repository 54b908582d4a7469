//! Candidate space: every secret still consistent with the observed scores

use crate::core::{Code, GameConfig, MastermindError, Palette, Score, Symbol};
use rayon::prelude::*;
use tracing::{debug, error};

/// One scored guess, recorded in the order it was played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guess: Code,
    pub score: Score,
}

/// The set of codes not yet ruled out as the secret
///
/// Starts with all P^L codes and only ever shrinks. A candidate survives an
/// observation iff it would have produced the same score against that guess.
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    palette: Palette,
    length: usize,
    candidates: Vec<Code>,
    history: Vec<Observation>,
}

impl CandidateSpace {
    /// Enumerate every code over `palette` with `length` positions
    ///
    /// Codes are listed in lexicographic order of palette indices.
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidConfig` if the space is empty or too large.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Palette;
    /// use mastermind_solver::solver::CandidateSpace;
    ///
    /// let space = CandidateSpace::new(Palette::default(), 4).unwrap();
    /// assert_eq!(space.len(), 625);
    /// ```
    pub fn new(palette: Palette, length: usize) -> Result<Self, MastermindError> {
        GameConfig::new(palette.clone(), length, 1).validate()?;

        let candidates = enumerate(&palette, length);
        debug!(
            colors = palette.len(),
            length,
            candidates = candidates.len(),
            "candidate space initialized"
        );

        Ok(Self {
            palette,
            length,
            candidates,
            history: Vec::new(),
        })
    }

    /// Candidate space for a game configuration
    ///
    /// # Errors
    /// Same as [`CandidateSpace::new`].
    pub fn from_config(config: &GameConfig) -> Result<Self, MastermindError> {
        Self::new(config.palette.clone(), config.length)
    }

    /// Eliminate every candidate that would not have scored `observed` against `guess`
    ///
    /// The current set is scanned read-only and replaced by the survivors in one step.
    ///
    /// # Errors
    /// - `LengthMismatch` / `UnknownSymbol` if `guess` does not fit the space
    /// - `InvalidScore` if `observed` exceeds the code length
    /// - `CandidateSpaceExhausted` if no candidate survives
    pub fn observe(&mut self, guess: &Code, observed: Score) -> Result<(), MastermindError> {
        guess.validate(&self.palette, self.length)?;
        if !observed.is_possible(self.length) {
            return Err(MastermindError::InvalidScore {
                score: observed,
                length: self.length,
            });
        }

        let before = self.candidates.len();
        let survivors: Vec<Code> = self
            .candidates
            .par_iter()
            .filter(|&candidate| {
                // Every candidate has the space's length, same as the validated guess
                Score::between(candidate, guess).is_ok_and(|score| score == observed)
            })
            .cloned()
            .collect();

        self.candidates = survivors;
        self.history.push(Observation {
            guess: guess.clone(),
            score: observed,
        });

        debug!(
            turn = self.history.len(),
            %guess,
            score = %observed,
            before,
            after = self.candidates.len(),
            "pruned candidate space"
        );

        if self.candidates.is_empty() {
            error!(
                %guess,
                score = %observed,
                "no candidate is consistent with the observed scores"
            );
            return Err(MastermindError::CandidateSpaceExhausted {
                guess: guess.clone(),
                score: observed,
            });
        }

        Ok(())
    }

    /// Surviving candidates, in enumeration order
    #[must_use]
    pub fn remaining(&self) -> &[Code] {
        &self.candidates
    }

    /// True once pruning has removed every candidate
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.candidates.contains(code)
    }

    /// Observations applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Restore the full space and forget all observations
    pub fn reset(&mut self) {
        self.candidates = enumerate(&self.palette, self.length);
        self.history.clear();
    }
}

/// All P^L codes by mixed-radix counting over palette indices
fn enumerate(palette: &Palette, length: usize) -> Vec<Code> {
    let base = palette.len();
    let total = base.pow(length as u32);

    (0..total)
        .map(|mut n| {
            let mut symbols = vec![Symbol::new(0); length];
            for slot in symbols.iter_mut().rev() {
                *slot = Symbol::new((n % base) as u8);
                n /= base;
            }
            Code::new(symbols)
        })
        .collect()
}
