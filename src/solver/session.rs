//! Elimination session
//!
//! One game's sorted candidate set plus the number of rounds applied to it.

use super::space;
use super::strategy::{GreedyStrategy, Strategy};
use crate::core::{Code, EngineConfig, EngineError, Feedback};

/// Candidate set and round depth for a single game
///
/// Created from [`super::Engine::session`]. Each [`Session::advance`] replaces
/// the candidate list wholesale; the list is kept sorted ascending and never
/// grows. A session is owned by exactly one game and is not shared.
#[derive(Debug, Clone)]
pub struct Session {
    config: EngineConfig,
    candidates: Vec<Code>,
    depth: usize,
}

impl Session {
    pub(crate) fn new(config: EngineConfig) -> Self {
        Self {
            config,
            candidates: space::generate_all(&config),
            depth: 0,
        }
    }

    /// Restore the full code space at depth 0
    pub fn reset(&mut self) {
        self.candidates = space::generate_all(&self.config);
        self.depth = 0;
    }

    /// Narrow the candidates to those that would have produced `feedback` for `guess`
    ///
    /// A candidate survives only if scoring `guess` against it gives exactly
    /// `feedback`. Survivors are sorted and the depth increases by one. Feedback
    /// that no candidate can produce leaves an empty set; that is not an error
    /// here, it shows up as [`Session::greedy_guess`] returning `None`.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if `guess` has the wrong length. The
    /// session is left untouched in that case.
    pub fn advance(&mut self, guess: &Code, feedback: Feedback) -> Result<(), EngineError> {
        let expected = self.config.code_length();
        if guess.len() != expected {
            return Err(EngineError::LengthMismatch {
                expected,
                actual: guess.len(),
            });
        }

        let before = self.candidates.len();
        let mut survivors: Vec<Code> = self
            .candidates
            .drain(..)
            .filter(|candidate| {
                matches!(Feedback::calculate(guess, candidate), Ok(result) if result == feedback)
            })
            .collect();
        survivors.sort_unstable();

        self.candidates = survivors;
        self.depth += 1;

        log::debug!(
            "round {}: guess {guess} scored {feedback}, {before} -> {} candidates",
            self.depth,
            self.candidates.len()
        );
        if self.candidates.is_empty() {
            log::warn!("no candidates remain after round {}", self.depth);
        }

        Ok(())
    }

    /// Rounds applied since the last reset
    #[inline]
    #[must_use]
    pub const fn current_depth(&self) -> usize {
        self.depth
    }

    /// Number of codes still consistent with every observation
    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// The remaining candidates in ascending order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// The board configuration this session enumerates
    #[inline]
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Lexicographically first remaining candidate, or `None` if none remain
    #[must_use]
    pub fn greedy_guess(&self) -> Option<&Code> {
        GreedyStrategy.select_guess(&self.candidates)
    }
}
