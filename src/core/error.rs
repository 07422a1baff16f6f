//! Engine error type

use std::fmt;

/// Errors reported by the engine to its immediate caller
///
/// None of these are recovered internally: each one is a contract violation
/// by the caller (bad configuration, wrong code length, bad input text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Code length or color count is unusable
    InvalidConfiguration { code_length: usize, colors: usize },
    /// A code does not have the configured length
    LengthMismatch { expected: usize, actual: usize },
    /// A code holds a color outside `0..colors`
    ColorOutOfRange { color: u8, colors: usize },
    /// Text could not be parsed as a code
    InvalidCode(String),
    /// Text could not be parsed as feedback
    InvalidFeedback(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                code_length,
                colors,
            } => write!(
                f,
                "Invalid configuration: code length {code_length}, {colors} colors"
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Code must have exactly {expected} pegs, got {actual}")
            }
            Self::ColorOutOfRange { color, colors } => {
                write!(f, "Color {color} is out of range (0..{colors})")
            }
            Self::InvalidCode(text) => write!(f, "Invalid code: {text}"),
            Self::InvalidFeedback(text) => write!(f, "Invalid feedback: {text}"),
        }
    }
}

impl std::error::Error for EngineError {}
