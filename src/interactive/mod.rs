//! Interactive TUI
//!
//! Cooperative board: the human and the greedy bot alternate guesses against
//! one hidden code, pruning a shared candidate set.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
