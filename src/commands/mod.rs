//! Command implementations

pub mod play;
pub mod solve;
pub mod test_all;

pub use play::{GameOutcome, PlayerRole, play_game, run_play};
pub use solve::{GuessStep, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
