//! Mastermind Solver
//!
//! A Mastermind code breaker built on candidate elimination: enumerate every
//! possible secret, discard the ones inconsistent with each round's feedback,
//! and propose the lexicographically first survivor.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//! use mastermind_solver::solver::Engine;
//!
//! let engine = Engine::new(4, 6).unwrap();
//! let secret = Code::from([0, 1, 1, 2]);
//!
//! let mut session = engine.session();
//! while let Some(guess) = session.greedy_guess().cloned() {
//!     let feedback = engine.evaluate(&guess, &secret).unwrap();
//!     if feedback == Feedback::perfect(4) {
//!         break;
//!     }
//!     session.advance(&guess, feedback).unwrap();
//! }
//! assert_eq!(session.greedy_guess(), Some(&secret));
//! ```

// Core domain types
pub mod core;

// Candidate elimination engine
pub mod solver;

// Game orchestration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
