//! Mastermind code representation
//!
//! A Code is a fixed sequence of color pegs. It is used both for secrets and guesses.

use super::EngineError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// A peg color, an index in `0..colors`
pub type Color = u8;

/// An immutable sequence of color pegs
///
/// Ordering is lexicographic by color index with position 0 most significant,
/// which is the order the candidate set is kept in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Box<[Color]>);

impl Code {
    /// Create a code from raw pegs
    ///
    /// No range checking happens here; `Engine::code` validates against a
    /// configuration.
    #[must_use]
    pub fn new(pegs: impl Into<Box<[Color]>>) -> Self {
        Self(pegs.into())
    }

    /// The pegs, position 0 first
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.0
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the color at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn peg_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Count of each color in the code
    ///
    /// Used for white-peg scoring with duplicate colors.
    #[inline]
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in self.0.iter() {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Color>> for Code {
    fn from(pegs: Vec<Color>) -> Self {
        Self(pegs.into_boxed_slice())
    }
}

impl From<&[Color]> for Code {
    fn from(pegs: &[Color]) -> Self {
        Self(pegs.into())
    }
}

impl<const N: usize> From<[Color; N]> for Code {
    fn from(pegs: [Color; N]) -> Self {
        Self(pegs.into())
    }
}

impl fmt::Display for Code {
    /// Single-digit colors print packed ("0123"); wider colors are space separated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let packed = self.0.iter().all(|&c| c < 10);
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 && !packed {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = EngineError;

    /// Parse "0123", "0 1 2 3" or "0,1,2,3"
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let packed: Code = "0123".parse().unwrap();
    /// let spaced: Code = "0, 1, 2, 3".parse().unwrap();
    /// assert_eq!(packed, spaced);
    /// assert_eq!(packed.pegs(), &[0, 1, 2, 3]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidCode(s.to_string()));
        }

        let separated = trimmed.contains(|c: char| c == ',' || c.is_whitespace());
        let pegs: Option<Vec<Color>> = if separated {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| token.parse::<Color>().ok())
                .collect()
        } else {
            trimmed
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as Color))
                .collect()
        };

        pegs.map(Self::from)
            .ok_or_else(|| EngineError::InvalidCode(s.to_string()))
    }
}
