//! Benchmark CLI for the kernel variants.
//!
//! Usage:
//!   ols-bench                  # Verify and benchmark every kernel
//!   ols-bench --list           # List kernels and their variants
//!   ols-bench simple_ols       # Only one kernel
//!   ols-bench --verify         # Verification only

use clap::Parser;
use ols_kernels::registry::{build_registry, AlgorithmRunner};
use ols_kernels::utils::runner::{export_csv, run_all_algorithms_randomized, verify_all, BenchConfig};
use ols_kernels::utils::timer::{PinStrategy, TimingConfig};
use ols_kernels::tui;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "ols-bench", version, about = "Verify and benchmark the dot product and simple OLS kernels")]
struct Cli {
    /// Kernel to run (omit for all)
    algorithm: Option<String>,

    /// List kernels and exit
    #[arg(short, long)]
    list: bool,

    /// Only verify variants against the reference
    #[arg(long)]
    verify: bool,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_values_t = [64, 256, 1024, 4096, 16384])]
    sizes: Vec<usize>,

    /// Measured runs per variant
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Warmup runs per variant
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Seed for inputs and scheduling (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// When to pin the measuring thread to a core
    #[arg(long, value_enum, default_value_t = PinStrategy::PerExecution)]
    pin: PinStrategy,

    /// Write per-variant averages to a CSV file
    #[arg(long)]
    csv: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init();

    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return ExitCode::SUCCESS;
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                log::error!("algorithm '{}' not found, available: {:?}", name, registry.list_names());
                return ExitCode::FAILURE;
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let failures = verify_all(&algorithms);
    if !failures.is_empty() {
        for (name, err) in &failures {
            eprintln!("verification failed for {}: {}", name, err);
        }
        return ExitCode::FAILURE;
    }
    if cli.verify {
        println!("All variants verified for: {}", algorithms.iter().map(|a| a.name()).collect::<Vec<_>>().join(", "));
        return ExitCode::SUCCESS;
    }

    if cli.sizes.is_empty() || cli.runs == 0 {
        log::error!("--sizes must be non-empty and --runs positive");
        return ExitCode::FAILURE;
    }

    let config = BenchConfig {
        sizes: cli.sizes,
        timing: TimingConfig {
            runs_per_variant: cli.runs,
            warmup_iterations: cli.warmup,
            pin_strategy: cli.pin,
            shuffle_seed: None,
        },
        seed: cli.seed,
    };

    tui::print_header();
    let grouped = run_all_algorithms_randomized(&algorithms, &config);

    if let Some(path) = &cli.csv {
        match export_csv(path, &grouped.raw_data) {
            Ok(()) => log::info!("raw data exported to {}", path),
            Err(e) => log::warn!("failed to export CSV to {}: {}", path, e),
        }
    }

    tui::print_grouped_results(&algorithms, &config.sizes, &grouped.results);
    println!("Note: Speedup is relative to the 'original' variant.");

    ExitCode::SUCCESS
}
