//! Display functions for command results

use super::formatters::{code_to_pegs, create_progress_bar, feedback_to_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nRound {:2}: {}  {}  {}",
            i + 1,
            code_to_pegs(&turn.guess),
            feedback_to_pegs(turn.feedback, result.code_length),
            turn.feedback.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            if turn.candidates_after > 0 {
                println!(
                    "  Eliminated: {:.1}%",
                    (1.0 - turn.candidates_after as f64 / turn.candidates_before as f64) * 100.0
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
