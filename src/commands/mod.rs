//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, rounds_to_solve, run_benchmark, seeded_secrets};
pub use simple::{Assistant, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
