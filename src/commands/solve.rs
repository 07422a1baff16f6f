//! Code solving command
//!
//! Lets the bot crack a specific secret and returns the solution path.

use crate::core::Code;
use crate::game::{Game, GameError, GameStatus, Turn, TurnOrder};
use crate::solver::Engine;
use anyhow::{Context, Result};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_rounds: Game::DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub turns: Vec<Turn>,
    pub secret: Code,
    pub code_length: usize,
}

/// Solve a specific secret with greedy bot play
///
/// # Errors
///
/// Returns an error if:
/// - The secret cannot be parsed or does not fit the engine configuration
/// - The round limit is zero
pub fn solve_code(config: &SolveConfig, engine: &Engine) -> Result<SolveResult> {
    let secret = engine
        .parse_code(&config.secret)
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    let mut game = Game::new(*engine, secret, TurnOrder::BotOnly, config.max_rounds)?;

    // Running out of candidates is reported as a failed solve, not an error
    match game.play_bot_turns() {
        Ok(_) | Err(GameError::NoMove) => {}
        Err(err) => return Err(err.into()),
    }

    Ok(SolveResult {
        success: matches!(game.status(), GameStatus::Won { .. }),
        turns: game.history().to_vec(),
        secret: game.secret().clone(),
        code_length: engine.code_length(),
    })
}
