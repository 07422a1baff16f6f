//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: codes, feedback and the
//! engine configuration. All types here are pure and free of I/O.

mod code;
mod config;
mod error;
mod feedback;

pub use code::{Code, Color};
pub use config::{EngineConfig, MAX_SPACE_SIZE};
pub use error::EngineError;
pub use feedback::Feedback;
