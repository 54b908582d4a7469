//! Code solving command
//!
//! The computer breaks a known secret and returns the solution path.

use crate::core::{Code, GameConfig, MastermindError, Score, Scorer};
use crate::solver::{CandidateSpace, InferenceAgent, Strategy};
use tracing::info;

/// Result of solving a code
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Let the agent break `secret` within the configured turn ceiling
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The secret does not fit the configured length or palette
/// - The candidate space is exhausted (a scoring invariant was broken)
pub fn solve_code<S: Strategy>(
    config: &GameConfig,
    strategy: S,
    secret: &Code,
) -> Result<SolveResult, MastermindError> {
    config.validate()?;
    let scorer = Scorer::new(config);
    let mut space = CandidateSpace::from_config(config)?;
    let mut agent = InferenceAgent::new(&mut space, strategy);
    let mut steps = Vec::new();

    for _ in 0..config.max_turns {
        let candidates_before = agent.candidates().len();
        let guess = agent.next_guess()?;
        let score = scorer.score(secret, &guess)?;
        agent.record_result(&guess, score)?;

        steps.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after: agent.candidates().len(),
        });

        if score.is_solved(config.length) {
            info!(%secret, turns = steps.len(), "code broken");
            return Ok(SolveResult {
                success: true,
                secret: secret.clone(),
                steps,
            });
        }
    }

    info!(%secret, turns = steps.len(), "ran out of turns");
    Ok(SolveResult {
        success: false,
        secret: secret.clone(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::solver::{FirstCandidateStrategy, MinimaxStrategy, RandomStrategy};

    #[test]
    fn solve_code_succeeds() {
        let config = GameConfig::default();
        let secret = Code::from_indices(&[0, 0, 2, 3]);

        let result = solve_code(&config, MinimaxStrategy, &secret).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().guess, secret);
        assert!(result.turns() <= config.max_turns);
    }

    #[test]
    fn solve_records_history() {
        let config = GameConfig::default();
        let secret = Code::from_indices(&[4, 1, 1, 2]);

        let result = solve_code(&config, RandomStrategy, &secret).unwrap();

        assert_eq!(result.steps[0].guess, Code::from_indices(&[0, 0, 1, 1]));
        assert_eq!(result.steps[0].candidates_before, 625);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn opening_guess_secret_takes_one_turn() {
        let config = GameConfig::default();
        let secret = Code::from_indices(&[0, 0, 1, 1]);

        let result = solve_code(&config, FirstCandidateStrategy, &secret).unwrap();

        assert!(result.success);
        assert_eq!(result.turns(), 1);
        assert_eq!(result.steps[0].candidates_after, 1);
    }

    #[test]
    fn solve_with_max_turns_limit() {
        let config = GameConfig::new(Palette::default(), 4, 1);
        let secret = Code::from_indices(&[4, 4, 4, 4]);

        let result = solve_code(&config, FirstCandidateStrategy, &secret).unwrap();

        assert!(!result.success);
        assert_eq!(result.turns(), 1);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = GameConfig::default();

        assert!(matches!(
            solve_code(&config, MinimaxStrategy, &Code::from_indices(&[0, 1, 2])),
            Err(MastermindError::LengthMismatch { .. })
        ));
        assert!(matches!(
            solve_code(&config, MinimaxStrategy, &Code::from_indices(&[0, 1, 2, 5])),
            Err(MastermindError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn solve_larger_configuration() {
        let config = GameConfig::new(Palette::with_size(6).unwrap(), 4, 10);
        let secret = Code::from_indices(&[5, 4, 3, 5]);

        let result = solve_code(&config, MinimaxStrategy, &secret).unwrap();
        assert!(result.success);
    }
}
