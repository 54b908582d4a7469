//! Mastermind codebreaking
//!
//! The candidate space, guess selection strategies and the automated agent
//! that ties them together.

mod agent;
mod space;
pub mod strategy;

pub use agent::{AgentState, InferenceAgent};
pub use space::{CandidateSpace, Observation};
pub use strategy::{
    FirstCandidateStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
};
