//! Fixed-length color sequences
//!
//! A Code is what the codemaker hides and what the codebreaker guesses.

use super::{MastermindError, Palette, Symbol};
use rand::Rng;
use std::fmt;

/// An ordered sequence of symbols, repetition allowed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    symbols: Vec<Symbol>,
}

impl Code {
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Build a code from raw palette indices
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::from_indices(&[0, 0, 1, 1]);
    /// assert_eq!(code.len(), 4);
    /// ```
    #[must_use]
    pub fn from_indices(indices: &[u8]) -> Self {
        Self::new(indices.iter().map(|&i| Symbol::new(i)).collect())
    }

    /// Draw a code uniformly at random, one independent symbol per position
    #[must_use]
    pub fn random<R: Rng + ?Sized>(palette: &Palette, length: usize, rng: &mut R) -> Self {
        let size = palette.len() as u8;
        Self::new(
            (0..length)
                .map(|_| Symbol::new(rng.random_range(0..size)))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check this code against a configured length and palette
    ///
    /// # Errors
    /// Returns `LengthMismatch` or `UnknownSymbol` on the first violation.
    pub fn validate(&self, palette: &Palette, length: usize) -> Result<(), MastermindError> {
        if self.symbols.len() != length {
            return Err(MastermindError::LengthMismatch {
                expected: length,
                actual: self.symbols.len(),
            });
        }

        match self.symbols.iter().find(|&&s| !palette.contains(s)) {
            Some(symbol) => Err(MastermindError::UnknownSymbol {
                symbol: symbol.index(),
                palette_size: palette.len(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, "]")
    }
}
