//! Mastermind Solver
//!
//! Exact/partial scoring for Mastermind codes and an automated codebreaker that
//! prunes the candidate space after every score until one code remains.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameConfig, Scorer};
//! use mastermind_solver::solver::{CandidateSpace, InferenceAgent, MinimaxStrategy};
//!
//! let config = GameConfig::default();
//! let scorer = Scorer::new(&config);
//! let secret = Code::from_indices(&[3, 1, 4, 1]);
//!
//! let mut space = CandidateSpace::from_config(&config).unwrap();
//! let mut agent = InferenceAgent::new(&mut space, MinimaxStrategy);
//!
//! for _ in 0..config.max_turns {
//!     let guess = agent.next_guess().unwrap();
//!     let score = scorer.score(&secret, &guess).unwrap();
//!     agent.record_result(&guess, score).unwrap();
//!     if score.is_solved(config.length) {
//!         break;
//!     }
//! }
//! assert_eq!(agent.candidates(), &[secret]);
//! ```

// Core domain types
pub mod core;

// Candidate elimination and guess selection
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
