//! Exact/partial feedback scoring
//!
//! A score has two counts:
//! - `exact`: positions where guess and secret hold the same symbol (red pegs)
//! - `partial`: remaining symbols shared by both codes at different positions (white pegs)
//!
//! Each symbol instance is consumed at most once on either side, so duplicates
//! are counted by multiset intersection of the non-exact residuals.

use super::{Code, GameConfig, MAX_LENGTH, MastermindError, Palette};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    pub exact: u8,
    pub partial: u8,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The winning score for codes of `length` symbols
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        let exact = if length > MAX_LENGTH { u8::MAX } else { length as u8 };
        Self::new(exact, 0)
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Whether some pair of codes of `length` symbols can produce this score
    #[inline]
    #[must_use]
    pub const fn is_possible(self, length: usize) -> bool {
        self.exact as usize + self.partial as usize <= length
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count exact matches, collecting the secret's symbols at the other positions
    /// 2. For each non-exact guess symbol, consume one matching secret symbol if any remain
    ///
    /// # Errors
    /// Returns `MastermindError::LengthMismatch` if the codes differ in length
    /// or are longer than `MAX_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Score};
    ///
    /// // blue blue green yellow vs blue green green pink
    /// let secret = Code::from_indices(&[0, 0, 2, 3]);
    /// let guess = Code::from_indices(&[0, 2, 2, 1]);
    /// assert_eq!(Score::between(&secret, &guess).unwrap(), Score::new(2, 0));
    /// ```
    pub fn between(secret: &Code, guess: &Code) -> Result<Self, MastermindError> {
        if secret.len() != guess.len() {
            return Err(MastermindError::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }
        if secret.len() > MAX_LENGTH {
            return Err(MastermindError::LengthMismatch {
                expected: MAX_LENGTH,
                actual: secret.len(),
            });
        }

        let mut exact = 0u8;
        let mut secret_available: FxHashMap<u8, u8> = FxHashMap::default();
        let mut guess_residual = Vec::with_capacity(guess.len());

        // First pass: exact matches, everything else goes to the residuals
        for (&s, &g) in secret.symbols().iter().zip(guess.symbols()) {
            if s == g {
                exact += 1;
            } else {
                *secret_available.entry(s.index()).or_insert(0) += 1;
                guess_residual.push(g);
            }
        }

        // Second pass: consume one secret instance per matching guess instance
        let mut partial = 0u8;
        for symbol in guess_residual {
            if let Some(count) = secret_available.get_mut(&symbol.index())
                && *count > 0
            {
                *count -= 1;
                partial += 1;
            }
        }

        Ok(Self { exact, partial })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.partial)
    }
}

/// Scorer bound to a game configuration
///
/// Validates both codes against the configured length and palette before
/// scoring, so foreign codes fail fast instead of producing a bogus score.
#[derive(Debug, Clone)]
pub struct Scorer {
    palette: Palette,
    length: usize,
}

impl Scorer {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            palette: config.palette.clone(),
            length: config.length,
        }
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Grade `guess` against `secret`
    ///
    /// # Errors
    /// Returns `LengthMismatch` or `UnknownSymbol` if either code does not fit
    /// the configuration.
    pub fn score(&self, secret: &Code, guess: &Code) -> Result<Score, MastermindError> {
        secret.validate(&self.palette, self.length)?;
        guess.validate(&self.palette, self.length)?;
        Score::between(secret, guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // blue=0 pink=1 green=2 yellow=3 orange=4
    fn code(indices: &[u8]) -> Code {
        Code::from_indices(indices)
    }

    #[test]
    fn self_score_is_solved() {
        let secret = code(&[0, 1, 2, 3]);
        let score = Score::between(&secret, &secret).unwrap();
        assert_eq!(score, Score::new(4, 0));
        assert!(score.is_solved(4));
    }

    #[test]
    fn no_overlap() {
        // blue pink green yellow vs orange orange orange orange
        let score = Score::between(&code(&[0, 1, 2, 3]), &code(&[4, 4, 4, 4])).unwrap();
        assert_eq!(score, Score::new(0, 0));
    }

    #[test]
    fn duplicate_in_guess_claims_single_secret_instance() {
        // secret: blue blue green yellow, guess: blue green green pink
        // Position 0 and 2 are exact; the guess's first green has no green left to claim.
        let score = Score::between(&code(&[0, 0, 2, 3]), &code(&[0, 2, 2, 1])).unwrap();
        assert_eq!(score, Score::new(2, 0));
    }

    #[test]
    fn exact_match_discounts_partial() {
        // secret: blue blue green yellow, guess: blue green pink green
        // blue exact; one green partial, the second green finds nothing left
        let score = Score::between(&code(&[0, 0, 2, 3]), &code(&[0, 2, 1, 2])).unwrap();
        assert_eq!(score, Score::new(1, 1));
    }

    #[test]
    fn all_partial_permutation() {
        let score = Score::between(&code(&[0, 1, 2, 3]), &code(&[3, 2, 1, 0])).unwrap();
        assert_eq!(score, Score::new(0, 4));
    }

    #[test]
    fn repeated_guess_symbol_against_single_secret_symbol() {
        // secret has one pink, guess has four
        let score = Score::between(&code(&[1, 0, 0, 0]), &code(&[2, 1, 1, 1])).unwrap();
        assert_eq!(score, Score::new(0, 1));
    }

    #[test]
    fn length_mismatch_is_error() {
        assert_eq!(
            Score::between(&code(&[0, 1, 2, 3]), &code(&[0, 1, 2])),
            Err(MastermindError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn overlong_codes_are_rejected() {
        let long = Code::from_indices(&[0; 300]);
        assert_eq!(
            Score::between(&long, &long),
            Err(MastermindError::LengthMismatch {
                expected: MAX_LENGTH,
                actual: 300
            })
        );

        let longest = Code::from_indices(&[0; MAX_LENGTH]);
        let score = Score::between(&longest, &longest).unwrap();
        assert_eq!(score, Score::solved(MAX_LENGTH));
        assert!(score.is_solved(MAX_LENGTH));
    }

    #[test]
    fn scorer_rejects_overlong_config() {
        let config = GameConfig::new(Palette::from_names(["red"]).unwrap(), 300, 12);
        let code = Code::from_indices(&[0; 300]);
        assert!(config.validate().is_err());
        assert!(matches!(
            Scorer::new(&config).score(&code, &code),
            Err(MastermindError::LengthMismatch { actual: 300, .. })
        ));
    }

    #[test]
    fn scorer_rejects_unknown_symbol() {
        let scorer = Scorer::new(&GameConfig::default());
        assert_eq!(
            scorer.score(&code(&[0, 1, 2, 3]), &code(&[0, 1, 2, 7])),
            Err(MastermindError::UnknownSymbol {
                symbol: 7,
                palette_size: 5
            })
        );
    }

    #[test]
    fn scorer_rejects_wrong_length_secret() {
        let scorer = Scorer::new(&GameConfig::default());
        assert!(matches!(
            scorer.score(&code(&[0, 1, 2, 3, 4]), &code(&[0, 1, 2, 3, 4])),
            Err(MastermindError::LengthMismatch { expected: 4, .. })
        ));
    }

    #[test]
    fn possible_scores() {
        assert!(Score::new(4, 0).is_possible(4));
        assert!(Score::new(2, 2).is_possible(4));
        assert!(!Score::new(3, 2).is_possible(4));
    }

    #[test]
    fn display_format() {
        assert_eq!(Score::new(1, 2).to_string(), "(1, 2)");
    }

    fn arb_code() -> impl Strategy<Value = Code> {
        prop::collection::vec(0u8..5, 4).prop_map(|v| Code::from_indices(&v))
    }

    proptest! {
        #[test]
        fn score_is_symmetric(a in arb_code(), b in arb_code()) {
            let ab = Score::between(&a, &b).unwrap();
            let ba = Score::between(&b, &a).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn score_is_bounded(a in arb_code(), b in arb_code()) {
            let score = Score::between(&a, &b).unwrap();
            prop_assert!(score.exact <= 4);
            prop_assert!(score.partial <= 4);
            prop_assert!(score.is_possible(4));
        }

        #[test]
        fn score_against_self_is_solved(a in arb_code()) {
            prop_assert_eq!(Score::between(&a, &a).unwrap(), Score::solved(4));
        }
    }
}
