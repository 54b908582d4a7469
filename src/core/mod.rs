//! Core domain types for Mastermind
//!
//! Palettes, codes, scores and the game configuration. Everything here is
//! pure data plus the scoring function; no I/O.

mod code;
mod config;
mod error;
mod palette;
mod score;

pub use code::Code;
pub use config::{DEFAULT_LENGTH, DEFAULT_MAX_TURNS, GameConfig, MAX_CANDIDATES, MAX_LENGTH};
pub use error::MastermindError;
pub use palette::{BUILTIN_COLORS, DEFAULT_PALETTE_SIZE, Palette, Symbol};
pub use score::{Score, Scorer};
