//! Main Mastermind engine interface

use super::session::Session;
use super::space;
use crate::core::{Code, EngineConfig, EngineError, Feedback};

/// Candidate-elimination engine for one board configuration
///
/// Holds the immutable code length and color count. Every game gets its own
/// [`Session`] from [`Engine::session`]; the engine itself carries no game state.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback};
/// use mastermind_solver::solver::Engine;
///
/// let engine = Engine::default();
/// let secret = Code::from([0, 1, 2, 3]);
/// let guess = Code::from([0, 0, 1, 1]);
///
/// let mut session = engine.session();
/// let feedback = engine.evaluate(&guess, &secret).unwrap();
/// session.advance(&guess, feedback).unwrap();
///
/// assert_eq!(session.current_depth(), 1);
/// assert!(session.candidates().contains(&secret));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given code length (L) and color count (K)
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfiguration` if either dimension is unusable.
    pub fn new(code_length: usize, colors: usize) -> Result<Self, EngineError> {
        EngineConfig::new(code_length, colors).map(Self::with_config)
    }

    /// Create an engine from an already validated configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The board configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Number of pegs per code
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.config.code_length()
    }

    /// Number of available colors
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.config.colors()
    }

    /// Enumerate the full code space in ascending order
    #[must_use]
    pub fn generate_all(&self) -> Vec<Code> {
        space::generate_all(&self.config)
    }

    /// Score a guess against a target
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if either code does not have the
    /// configured length.
    pub fn evaluate(&self, guess: &Code, target: &Code) -> Result<Feedback, EngineError> {
        self.check_length(guess)?;
        self.check_length(target)?;
        Feedback::calculate(guess, target)
    }

    /// Build a code, checking length and color range against the configuration
    ///
    /// # Errors
    /// Returns `LengthMismatch` or `ColorOutOfRange`.
    pub fn code(&self, pegs: impl Into<Code>) -> Result<Code, EngineError> {
        let code = pegs.into();
        self.check_length(&code)?;

        if let Some(&color) = code
            .pegs()
            .iter()
            .find(|&&color| usize::from(color) >= self.colors())
        {
            return Err(EngineError::ColorOutOfRange {
                color,
                colors: self.colors(),
            });
        }

        Ok(code)
    }

    /// Parse a code from text and validate it
    ///
    /// # Errors
    /// Returns `InvalidCode` for unparsable text, otherwise as [`Engine::code`].
    pub fn parse_code(&self, text: &str) -> Result<Code, EngineError> {
        self.code(text.parse::<Code>()?)
    }

    /// Start a fresh session over the full code space
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.config)
    }

    pub(crate) fn check_length(&self, code: &Code) -> Result<(), EngineError> {
        let expected = self.config.code_length();
        if code.len() == expected {
            Ok(())
        } else {
            Err(EngineError::LengthMismatch {
                expected,
                actual: code.len(),
            })
        }
    }
}
