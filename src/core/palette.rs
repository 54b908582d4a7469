//! Color palette and symbol representation
//!
//! A Symbol is an index into a Palette. Names only matter at the edges
//! (parsing human input and rendering the board).

use super::{Code, MastermindError};
use std::fmt;

/// Built-in color names, in the order `Palette::with_size` takes them
pub const BUILTIN_COLORS: [&str; 8] = [
    "blue", "pink", "green", "yellow", "orange", "purple", "cyan", "brown",
];

/// Number of colors in the reference game
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// One color of a palette, stored as its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Position of this symbol in its palette
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of distinct color names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Build a palette from custom color names
    ///
    /// Names are lowercased. Duplicates, empty names and palettes larger than
    /// 255 colors are rejected.
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidConfig` when the list is not usable.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Palette;
    ///
    /// let palette = Palette::from_names(["Red", "Green"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert!(Palette::from_names(["red", "red"]).is_err());
    /// ```
    pub fn from_names<I, S>(names: I) -> Result<Self, MastermindError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Vec::new();
        for name in names {
            let name = name.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(MastermindError::InvalidConfig(
                    "color names must not be empty".to_string(),
                ));
            }
            if palette.contains(&name) {
                return Err(MastermindError::InvalidConfig(format!(
                    "color '{name}' listed twice"
                )));
            }
            palette.push(name);
        }

        if palette.is_empty() {
            return Err(MastermindError::InvalidConfig(
                "palette must contain at least one color".to_string(),
            ));
        }
        if palette.len() > usize::from(u8::MAX) {
            return Err(MastermindError::InvalidConfig(format!(
                "palette of {} colors exceeds the limit of {}",
                palette.len(),
                u8::MAX
            )));
        }

        Ok(Self { names: palette })
    }

    /// First `size` colors of the built-in list
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidConfig` if `size` is zero or larger than
    /// the built-in list.
    pub fn with_size(size: usize) -> Result<Self, MastermindError> {
        if size == 0 || size > BUILTIN_COLORS.len() {
            return Err(MastermindError::InvalidConfig(format!(
                "palette size must be between 1 and {}, got {size}",
                BUILTIN_COLORS.len()
            )));
        }
        Self::from_names(&BUILTIN_COLORS[..size])
    }

    /// Number of colors (P)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All symbols in palette order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.names.len()).map(|i| Symbol::new(i as u8))
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        usize::from(symbol.index()) < self.names.len()
    }

    /// Color name of a symbol, or `"?"` for a symbol from another palette
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> &str {
        self.names
            .get(usize::from(symbol.index()))
            .map_or("?", String::as_str)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a color by name (case-insensitive)
    ///
    /// # Errors
    /// Returns `MastermindError::UnknownColor` if no color has that name.
    pub fn symbol(&self, name: &str) -> Result<Symbol, MastermindError> {
        let wanted = name.trim().to_lowercase();
        self.names
            .iter()
            .position(|n| *n == wanted)
            .map(|i| Symbol::new(i as u8))
            .ok_or(MastermindError::UnknownColor(wanted))
    }

    /// Parse whitespace-separated color names into a code of `length` symbols
    ///
    /// # Errors
    /// Returns `UnknownColor` for a name outside the palette and
    /// `LengthMismatch` if the number of names differs from `length`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Palette;
    ///
    /// let palette = Palette::default();
    /// let code = palette.parse_code("Blue blue green pink", 4).unwrap();
    /// assert_eq!(palette.render(&code), "blue blue green pink");
    /// ```
    pub fn parse_code(&self, input: &str, length: usize) -> Result<Code, MastermindError> {
        let symbols = input
            .split_whitespace()
            .map(|name| self.symbol(name))
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.len() != length {
            return Err(MastermindError::LengthMismatch {
                expected: length,
                actual: symbols.len(),
            });
        }

        Ok(Code::new(symbols))
    }

    /// Render a code as space-separated color names
    #[must_use]
    pub fn render(&self, code: &Code) -> String {
        code.symbols()
            .iter()
            .map(|&s| self.name(s))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Palette {
    /// The five colors of the reference game
    fn default() -> Self {
        Self {
            names: BUILTIN_COLORS[..DEFAULT_PALETTE_SIZE]
                .iter()
                .map(|&n| n.to_string())
                .collect(),
        }
    }
}
