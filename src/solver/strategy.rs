//! Guess selection strategies
//!
//! Defines the Strategy trait and the greedy implementation the engine uses.

use super::session::Session;
use crate::core::Code;

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from the sorted candidate list
    ///
    /// Returns `None` if the list is empty.
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Greedy selection: the lexicographically first remaining candidate
///
/// Deterministic and non-adaptive. It makes no attempt to maximize information
/// gain; every proposal is consistent with all feedback seen so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Greedy next guess for a session, or `None` when the engine cannot continue
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::{Engine, greedy_guess};
///
/// let session = Engine::default().session();
/// assert_eq!(greedy_guess(&session), Some(&Code::from([0, 0, 0, 0])));
/// ```
#[must_use]
pub fn greedy_guess(session: &Session) -> Option<&Code> {
    session.greedy_guess()
}
