//! Automated codebreaker
//!
//! Answers two questions for the game loop: "what do I guess next" and
//! "update yourself given this result". Turn counting and win/loss detection
//! stay with the caller.

use super::space::CandidateSpace;
use super::strategy::Strategy;
use crate::core::{Code, MastermindError, Score, Symbol};
use tracing::{debug, warn};

/// Progress of the agent through one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// No guess produced yet
    NotStarted,
    /// A guess is out and its score has not been recorded
    AwaitingFeedback,
    /// The last score was recorded and the next guess can be computed
    Ready,
    /// A guess scored all exact matches
    Solved,
}

/// Codebreaker driving a candidate space with a selection strategy
pub struct InferenceAgent<'a, S: Strategy> {
    space: &'a mut CandidateSpace,
    strategy: S,
    state: AgentState,
}

impl<'a, S: Strategy> InferenceAgent<'a, S> {
    pub fn new(space: &'a mut CandidateSpace, strategy: S) -> Self {
        Self {
            space,
            strategy,
            state: AgentState::NotStarted,
        }
    }

    #[must_use]
    pub const fn state(&self) -> AgentState {
        self.state
    }

    /// The candidate space this agent prunes
    #[must_use]
    pub fn space(&self) -> &CandidateSpace {
        &*self.space
    }

    /// Codes still consistent with every recorded score
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        self.space.remaining()
    }

    /// Fixed first probe derived from the palette
    ///
    /// The first palette color fills the first half of the positions and the
    /// second color fills the rest (`blue blue pink pink` in the reference game).
    /// With a single-color palette every position gets that color.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Palette};
    /// use mastermind_solver::solver::{CandidateSpace, InferenceAgent, MinimaxStrategy};
    ///
    /// let mut space = CandidateSpace::new(Palette::default(), 4).unwrap();
    /// let agent = InferenceAgent::new(&mut space, MinimaxStrategy);
    /// assert_eq!(agent.opening_guess(), Code::from_indices(&[0, 0, 1, 1]));
    /// ```
    #[must_use]
    pub fn opening_guess(&self) -> Code {
        let length = self.space.length();
        let first = Symbol::new(0);
        let second = if self.space.palette().len() > 1 {
            Symbol::new(1)
        } else {
            first
        };

        Code::new(
            (0..length)
                .map(|i| if i < length / 2 { first } else { second })
                .collect(),
        )
    }

    /// Next code to submit
    ///
    /// Before any score has been recorded this is the opening guess; afterwards
    /// it is the strategy's pick among the remaining candidates.
    ///
    /// # Errors
    /// Returns `MastermindError::CandidateSpaceExhausted` if no candidate remains.
    pub fn next_guess(&mut self) -> Result<Code, MastermindError> {
        let guess = if self.space.history().is_empty() {
            self.opening_guess()
        } else {
            let Some(code) = self.strategy.select_guess(self.space.remaining()) else {
                warn!("asked for a guess with no candidates remaining");
                return Err(self.exhausted());
            };
            code.clone()
        };

        debug!(%guess, candidates = self.space.len(), "next guess");
        self.state = AgentState::AwaitingFeedback;
        Ok(guess)
    }

    fn exhausted(&self) -> MastermindError {
        match self.space.history().last() {
            Some(last) => MastermindError::CandidateSpaceExhausted {
                guess: last.guess.clone(),
                score: last.score,
            },
            None => MastermindError::InvalidConfig("candidate space is empty".to_string()),
        }
    }

    /// Feed back the score `guess` received
    ///
    /// # Errors
    /// Propagates every error of [`CandidateSpace::observe`]; in particular
    /// `CandidateSpaceExhausted` when the recorded scores contradict each other.
    pub fn record_result(&mut self, guess: &Code, score: Score) -> Result<(), MastermindError> {
        self.space.observe(guess, score)?;

        self.state = if score.is_solved(self.space.length()) {
            AgentState::Solved
        } else {
            AgentState::Ready
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Palette};
    use crate::solver::strategy::{FirstCandidateStrategy, MinimaxStrategy, RandomStrategy};

    /// Play a full game, asserting the secret survives every prune
    fn play<S: Strategy>(secret: &Code, strategy: S, max_turns: usize) -> Option<usize> {
        let mut space = CandidateSpace::new(Palette::default(), 4).unwrap();
        let mut agent = InferenceAgent::new(&mut space, strategy);

        for turn in 1..=max_turns {
            let guess = agent.next_guess().unwrap();
            assert!(agent.candidates().contains(&guess));

            let before = agent.candidates().len();
            let score = Score::between(secret, &guess).unwrap();
            agent.record_result(&guess, score).unwrap();

            assert!(agent.candidates().contains(secret));
            assert!(agent.candidates().len() <= before);

            if score.is_solved(4) {
                assert_eq!(&guess, secret);
                assert_eq!(agent.state(), AgentState::Solved);
                return Some(turn);
            }
        }
        None
    }

    #[test]
    fn state_transitions() {
        let mut space = CandidateSpace::new(Palette::default(), 4).unwrap();
        let mut agent = InferenceAgent::new(&mut space, FirstCandidateStrategy);
        assert_eq!(agent.state(), AgentState::NotStarted);

        let guess = agent.next_guess().unwrap();
        assert_eq!(agent.state(), AgentState::AwaitingFeedback);

        agent.record_result(&guess, Score::new(1, 1)).unwrap();
        assert_eq!(agent.state(), AgentState::Ready);

        let guess = agent.next_guess().unwrap();
        agent.record_result(&guess, Score::solved(4)).unwrap();
        assert_eq!(agent.state(), AgentState::Solved);
    }

    #[test]
    fn first_guess_is_opening_guess() {
        let mut space = CandidateSpace::new(Palette::default(), 4).unwrap();
        let mut agent = InferenceAgent::new(&mut space, RandomStrategy);
        assert_eq!(agent.next_guess().unwrap(), Code::from_indices(&[0, 0, 1, 1]));
    }

    #[test]
    fn opening_guess_follows_config() {
        let mut space = CandidateSpace::new(Palette::with_size(6).unwrap(), 5).unwrap();
        let agent = InferenceAgent::new(&mut space, FirstCandidateStrategy);
        assert_eq!(agent.opening_guess(), Code::from_indices(&[0, 0, 1, 1, 1]));

        let mut space =
            CandidateSpace::new(Palette::from_names(["black"]).unwrap(), 3).unwrap();
        let agent = InferenceAgent::new(&mut space, FirstCandidateStrategy);
        assert_eq!(agent.opening_guess(), Code::from_indices(&[0, 0, 0]));
    }

    #[test]
    fn next_guess_is_consistent_candidate() {
        let secret = Code::from_indices(&[3, 1, 4, 1]);
        let mut space = CandidateSpace::new(Palette::default(), 4).unwrap();
        let mut agent = InferenceAgent::new(&mut space, RandomStrategy);

        let opening = agent.next_guess().unwrap();
        let score = Score::between(&secret, &opening).unwrap();
        agent.record_result(&opening, score).unwrap();

        let next = agent.next_guess().unwrap();
        assert_eq!(Score::between(&next, &opening).unwrap(), score);
    }

    #[test]
    fn contradictory_feedback_is_reported() {
        let mut space = CandidateSpace::new(Palette::default(), 4).unwrap();
        let mut agent = InferenceAgent::new(&mut space, FirstCandidateStrategy);

        let guess = agent.next_guess().unwrap();
        agent.record_result(&guess, Score::new(4, 0)).unwrap();
        let result = agent.record_result(&guess, Score::new(2, 0));

        assert!(matches!(
            result,
            Err(MastermindError::CandidateSpaceExhausted { .. })
        ));
        assert!(agent.space().is_exhausted());
        assert!(matches!(
            agent.next_guess(),
            Err(MastermindError::CandidateSpaceExhausted { .. })
        ));
    }

    #[test]
    fn solves_reference_example() {
        let secret = Code::from_indices(&[0, 0, 2, 3]);
        assert!(play(&secret, RandomStrategy, 12).is_some());
    }

    #[test]
    fn first_candidate_solves_every_secret() {
        let config = GameConfig::default();
        let secrets = CandidateSpace::from_config(&config).unwrap();

        for secret in secrets.remaining() {
            let turns = play(secret, FirstCandidateStrategy, config.max_turns);
            assert!(turns.is_some(), "failed to solve {secret}");
        }
    }

    #[test]
    fn minimax_solves_every_secret() {
        let config = GameConfig::default();
        let secrets = CandidateSpace::from_config(&config).unwrap();

        let worst = secrets
            .remaining()
            .iter()
            .map(|secret| play(secret, MinimaxStrategy, config.max_turns))
            .map(|turns| turns.unwrap_or(usize::MAX))
            .max()
            .unwrap();
        assert!(worst <= config.max_turns);
    }

    #[test]
    fn random_solves_every_secret() {
        let config = GameConfig::default();
        let secrets = CandidateSpace::from_config(&config).unwrap();

        for secret in secrets.remaining() {
            assert!(play(secret, RandomStrategy, config.max_turns).is_some());
        }
    }
}
