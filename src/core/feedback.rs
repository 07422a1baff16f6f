//! Mastermind feedback calculation and representation
//!
//! Feedback is a pair of peg counts:
//! - black: pegs with the right color in the right position
//! - white: further pegs with a right color in the wrong position
//!
//! Duplicate colors are matched one-to-one, so a color is never credited more
//! often than it appears in either code.

use super::{Code, EngineError};
use std::fmt;
use std::str::FromStr;

/// Black/white peg counts for a guess scored against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    black: usize,
    white: usize,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// Feedback of a fully solved code of the given length
    #[inline]
    #[must_use]
    pub const fn perfect(code_length: usize) -> Self {
        Self::new(code_length, 0)
    }

    /// Exact position matches
    #[inline]
    #[must_use]
    pub const fn black(self) -> usize {
        self.black
    }

    /// Color-only matches
    #[inline]
    #[must_use]
    pub const fn white(self) -> usize {
        self.white
    }

    /// Check whether every one of `code_length` pegs matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, code_length: usize) -> bool {
        self.black == code_length && self.white == 0
    }

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches (black) and remove them from the
    ///    target's available color pool
    /// 2. Second pass: every remaining guess peg claims one available target peg
    ///    of the same color (white)
    ///
    /// Only counts are observable, so the result does not depend on which of
    /// several duplicate pegs gets claimed. Scoring is symmetric in its arguments.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess = Code::from([1, 0, 2, 1]);
    /// let secret = Code::from([0, 1, 1, 2]);
    ///
    /// // Every color present, none in place; color 1 credited exactly twice
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    /// assert_eq!(feedback, Feedback::new(0, 4));
    /// ```
    pub fn calculate(guess: &Code, target: &Code) -> Result<Self, EngineError> {
        if guess.len() != target.len() {
            return Err(EngineError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        let mut black = 0;
        let mut exact = vec![false; guess.len()];
        let mut target_available = target.color_counts();

        // First pass: exact position matches
        for (i, (g, t)) in guess.pegs().iter().zip(target.pegs()).enumerate() {
            if g == t {
                black += 1;
                exact[i] = true;
                if let Some(count) = target_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: color matches from what is left of the pool
        let mut white = 0;
        for (color, _) in guess.pegs().iter().zip(&exact).filter(|(_, hit)| !**hit) {
            if let Some(count) = target_available.get_mut(color)
                && *count > 0
            {
                white += 1;
                *count -= 1;
            }
        }

        Ok(Self { black, white })
    }

    /// Render as peg characters: one 'B' per black, one 'W' per white, '-' for the rest
    #[must_use]
    pub fn to_pegs(self, code_length: usize) -> String {
        let empty = code_length.saturating_sub(self.black + self.white);
        format!(
            "{}{}{}",
            "B".repeat(self.black),
            "W".repeat(self.white),
            "-".repeat(empty)
        )
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}W", self.black, self.white)
    }
}

impl FromStr for Feedback {
    type Err = EngineError;

    /// Parse "2 1", "2,1" or a peg string such as "BBW-"
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let counts: Feedback = "2 1".parse().unwrap();
    /// let pegs: Feedback = "BBW-".parse().unwrap();
    /// assert_eq!(counts, pegs);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidFeedback(s.to_string());
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let numbers: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();
        if numbers.len() == 2 && numbers.iter().all(|n| n.chars().all(|c| c.is_ascii_digit())) {
            let black = numbers[0].parse().map_err(|_| invalid())?;
            let white = numbers[1].parse().map_err(|_| invalid())?;
            return Ok(Self::new(black, white));
        }

        let mut black = 0;
        let mut white = 0;
        for ch in trimmed.chars() {
            match ch {
                'B' | 'b' => black += 1,
                'W' | 'w' => white += 1,
                '-' | '_' | '.' => {}
                _ => return Err(invalid()),
            }
        }

        Ok(Self::new(black, white))
    }
}
