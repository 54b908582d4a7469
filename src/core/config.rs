//! Game configuration
//!
//! Palette size, code length and turn ceiling are inputs, never literals
//! baked into the scorer or the solver.

use super::{MastermindError, Palette};

/// Code length of the reference game
pub const DEFAULT_LENGTH: usize = 4;

/// Turn ceiling of the reference game
pub const DEFAULT_MAX_TURNS: usize = 12;

/// Longest code a score can describe
pub const MAX_LENGTH: usize = u8::MAX as usize;

/// Largest candidate space (P^L) the solver will enumerate
pub const MAX_CANDIDATES: usize = 1_000_000;

/// Parameters of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub palette: Palette,
    pub length: usize,
    pub max_turns: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(palette: Palette, length: usize, max_turns: usize) -> Self {
        Self {
            palette,
            length,
            max_turns,
        }
    }

    /// Number of possible secrets (P^L), or `None` on overflow
    #[must_use]
    pub fn space_size(&self) -> Option<usize> {
        let exponent = u32::try_from(self.length).ok()?;
        self.palette.len().checked_pow(exponent)
    }

    /// Reject configurations that cannot be played
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidConfig` for an empty palette, a zero
    /// length or turn ceiling, a length above `MAX_LENGTH`, or a candidate space
    /// above `MAX_CANDIDATES`.
    pub fn validate(&self) -> Result<(), MastermindError> {
        if self.palette.is_empty() {
            return Err(MastermindError::InvalidConfig(
                "palette must contain at least one color".to_string(),
            ));
        }
        if self.length == 0 {
            return Err(MastermindError::InvalidConfig(
                "code length must be at least 1".to_string(),
            ));
        }
        if self.length > MAX_LENGTH {
            return Err(MastermindError::InvalidConfig(format!(
                "code length {} exceeds {MAX_LENGTH}",
                self.length
            )));
        }
        if self.max_turns == 0 {
            return Err(MastermindError::InvalidConfig(
                "max turns must be at least 1".to_string(),
            ));
        }

        match self.space_size() {
            Some(size) if size <= MAX_CANDIDATES => Ok(()),
            _ => Err(MastermindError::InvalidConfig(format!(
                "{} colors over {} positions exceeds {MAX_CANDIDATES} candidates",
                self.palette.len(),
                self.length
            ))),
        }
    }
}

impl Default for GameConfig {
    /// Five colors, four positions, twelve turns
    fn default() -> Self {
        Self::new(Palette::default(), DEFAULT_LENGTH, DEFAULT_MAX_TURNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_game() {
        let config = GameConfig::default();
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.length, 4);
        assert_eq!(config.max_turns, 12);
        assert_eq!(config.space_size(), Some(625));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn space_size_follows_palette_and_length() {
        let config = GameConfig::new(Palette::with_size(6).unwrap(), 5, 10);
        assert_eq!(config.space_size(), Some(7776));
    }

    #[test]
    fn rejects_zero_length_and_turns() {
        let mut config = GameConfig::default();
        config.length = 0;
        assert!(matches!(
            config.validate(),
            Err(MastermindError::InvalidConfig(_))
        ));

        let mut config = GameConfig::default();
        config.max_turns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_space() {
        let config = GameConfig::new(Palette::with_size(8).unwrap(), 9, 12);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_overlong_code() {
        // One color keeps the space at a single code however long it gets
        let palette = Palette::from_names(["red"]).unwrap();
        assert_eq!(GameConfig::new(palette.clone(), 300, 12).space_size(), Some(1));
        assert!(matches!(
            GameConfig::new(palette.clone(), 300, 12).validate(),
            Err(MastermindError::InvalidConfig(_))
        ));
        assert!(GameConfig::new(palette, MAX_LENGTH, 12).validate().is_ok());
    }
}
