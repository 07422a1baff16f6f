//! Candidate-elimination solver
//!
//! Enumerates the code space, prunes it with observed feedback, and proposes
//! the next guess greedily.

mod engine;
mod session;
mod space;
pub mod strategy;

pub use engine::Engine;
pub use session::Session;
pub use space::generate_all;
pub use strategy::{GreedyStrategy, Strategy, greedy_guess};
