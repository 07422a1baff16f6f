//! Mastermind Solver - CLI
//!
//! Mastermind code breaker with TUI and CLI modes using candidate elimination
//! and a greedy (first consistent code) guess policy.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        seeded_secrets, solve_code,
    },
    core::EngineConfig,
    game::Game,
    output::{print_benchmark_result, print_solve_result},
    solver::Engine,
};
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind solver using candidate elimination and greedy selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs per code
    #[arg(short, long, global = true, default_value_t = EngineConfig::DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Number of peg colors
    #[arg(short, long, global = true, default_value_t = EngineConfig::DEFAULT_COLORS)]
    colors: usize,

    /// Maximum number of rounds per game
    #[arg(short = 'r', long, global = true, default_value_t = Game::DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI board: you and the bot take turns (default)
    Play {
        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simple CLI assistant for a game on a real board
    Simple,

    /// Let the bot crack a specific code
    Solve {
        /// The secret code, e.g. 0123 or "0 1 2 3"
        code: String,

        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the bot on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the secret generator
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Test the bot on every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let engine = Engine::new(cli.length, cli.colors).context("Unsupported board")?;
    log::debug!(
        "engine: {} pegs, {} colors, {} codes",
        engine.code_length(),
        engine.colors(),
        engine.config().space_size()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(engine, cli.max_rounds, seed),
        Commands::Simple => run_simple(engine, cli.max_rounds, io::stdin().lock(), io::stdout()),
        Commands::Solve { code, verbose } => {
            run_solve_command(&engine, &code, verbose, cli.max_rounds)
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&engine, count, seed, cli.max_rounds);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&engine, limit, cli.max_rounds);
            Ok(())
        }
    }
}

fn run_solve_command(engine: &Engine, code: &str, verbose: bool, max_rounds: usize) -> Result<()> {
    let mut config = SolveConfig::new(code.to_string());
    config.max_rounds = max_rounds;

    let result = solve_code(&config, engine)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(engine: &Engine, count: usize, seed: u64, max_rounds: usize) {
    println!("Running benchmark on {count} random codes (seed {seed})...");

    let secrets = seeded_secrets(engine, count, seed);
    let result = run_benchmark(engine, &secrets, max_rounds);
    print_benchmark_result(&result);
}

fn run_test_all_command(engine: &Engine, limit: Option<usize>, max_rounds: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nBoard: {} pegs, {} colors, {} possible codes",
        engine.code_length(),
        engine.colors(),
        engine.config().space_size()
    );
    println!("Round limit: {max_rounds}\n");

    let stats = run_test_all(engine, limit, max_rounds);
    print_test_all_statistics(&stats);
}

fn run_play_command(engine: Engine, max_rounds: usize, seed: Option<u64>) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let app = App::new(engine, max_rounds, seed)?;
    run_tui(app)
}
