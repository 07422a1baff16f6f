//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the bot against every code in the space and generates statistics.
//! Games are independent, each with its own session, so they run in parallel.

use super::benchmark::rounds_to_solve;
use crate::core::Code;
use crate::output::formatters::create_progress_bar;
use crate::solver::Engine;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub rounds: Option<usize>,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_codes: Vec<(Code, usize)>,
    pub unsolved_codes: Vec<Code>,
}

/// Run the bot on every secret in the space (or the first `limit` of them)
///
/// # Panics
///
/// Panics if the hard-coded progress bar template is malformed.
pub fn run_test_all(engine: &Engine, limit: Option<usize>, max_rounds: usize) -> TestAllStatistics {
    let mut secrets = engine.generate_all();
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }

    println!("🎯 Testing {} codes...", secrets.len());
    log::info!(
        "test-all over {} codes, {max_rounds} round limit",
        secrets.len()
    );

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<CodeTestResult> = secrets
        .into_par_iter()
        .map(|secret| {
            let rounds = rounds_to_solve(engine, &secret, max_rounds);
            pb.inc(1);
            CodeTestResult { secret, rounds }
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(results, start.elapsed())
}

fn summarize(results: Vec<CodeTestResult>, total_time: Duration) -> TestAllStatistics {
    let total_codes = results.len();
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved_rounds: Vec<(Code, usize)> = Vec::new();
    let mut unsolved_codes = Vec::new();

    for result in results {
        match result.rounds {
            Some(rounds) => {
                *guess_distribution.entry(rounds).or_insert(0) += 1;
                solved_rounds.push((result.secret, rounds));
            }
            None => unsolved_codes.push(result.secret),
        }
    }

    let solved = solved_rounds.len();
    let total_guesses: usize = solved_rounds.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    let max_guesses = solved_rounds.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let min_guesses = solved_rounds.iter().map(|(_, n)| *n).min().unwrap_or(0);

    // Hardest first; ties keep code order
    solved_rounds.sort_by(|(a, n), (b, m)| m.cmp(n).then_with(|| a.cmp(b)));
    solved_rounds.truncate(10);

    TestAllStatistics {
        total_codes,
        solved,
        failed: unsolved_codes.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_codes: solved_rounds,
        unsolved_codes,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:2} guesses: {} {count:5} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.to_string().yellow(), guesses);
        }
    }

    if !stats.unsolved_codes.is_empty() {
        println!("\n❌ {}", "Unsolved Codes".red().bold());
        for code in stats.unsolved_codes.iter().take(10) {
            println!("  {}", code.to_string().red());
        }
    }
}
