//! Game orchestration
//!
//! Callers of the engine: secret generation, turn order and the round limit.

mod secret;
mod state;

pub use secret::random_secret;
pub use state::{Game, GameError, GameStatus, Player, Turn, TurnOrder};
