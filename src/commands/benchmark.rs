//! Benchmark command
//!
//! Tests solver performance across many secrets.

use crate::core::Code;
use crate::game::{Game, GameStatus, TurnOrder, random_secret};
use crate::solver::Engine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Draw `count` secrets from a generator seeded with `seed`
#[must_use]
pub fn seeded_secrets(engine: &Engine, count: usize, seed: u64) -> Vec<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_secret(engine, &mut rng)).collect()
}

/// Let the bot play one game; returns the winning round count
///
/// `None` means the round limit ran out or the engine had no move.
#[must_use]
pub fn rounds_to_solve(engine: &Engine, secret: &Code, max_rounds: usize) -> Option<usize> {
    let mut game = Game::new(*engine, secret.clone(), TurnOrder::BotOnly, max_rounds).ok()?;
    match game.play_bot_turns() {
        Ok(GameStatus::Won { rounds, .. }) => Some(rounds),
        _ => None,
    }
}

/// Run the bot against every secret in `secrets`
///
/// Unsolved secrets count towards `total_codes` but not towards the guess
/// statistics.
pub fn run_benchmark(engine: &Engine, secrets: &[Code], max_rounds: usize) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let Some(guesses) = rounds_to_solve(engine, secret, max_rounds) else {
            log::info!("failed to solve {secret} within {max_rounds} rounds");
            continue;
        };

        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    BenchmarkResult {
        total_codes,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
