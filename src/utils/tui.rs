//! Terminal output for the benchmark CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::is_c_variant;
use terminal_size::{terminal_size, Width};

fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Order: original (0), Rust (1), C (2), SIMD (3)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == "original" {
        (0, String::new())
    } else if name.contains("sse") || name.contains("avx") || name.contains("neon") {
        (3, name)
    } else if is_c_variant(&name) {
        (2, name)
    } else {
        (1, name)
    }
}

/// Reference first, then grouped by implementation language
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " OLS Kernels Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!("  {:<14} [{}] - {}", algo.name(), algo.category(), algo.description());
        println!("  {:<14} variants: {}", "", algo.available_variants().join(", "));
    }
}

pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants:  {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
    println!();
}

/// Relative difference of a result sample against the reference's
fn relative_error(result: Option<f64>, baseline: Option<f64>) -> f64 {
    match (result, baseline) {
        (Some(res), Some(base)) => {
            let diff = (res - base).abs();
            if base.abs() > 1e-12 {
                diff / base.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Results for one input size; the first row is the speedup baseline.
pub fn print_results_table(results: &[BenchmarkResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    println!("  Size: {} ({} runs)", size, baseline.runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_units > 0.0 {
            baseline.avg_units / result.avg_units
        } else {
            0.0
        };

        let cv = if result.avg_units > 0.0 {
            result.std_dev.as_nanos() as f64 / result.avg_units
        } else {
            0.0
        };

        let display_name = match (is_c_variant(&result.name), crate::utils::C_COMPILER_NAME) {
            (true, Some(c)) => format!("{} ({})", result.name, c),
            _ => result.name.clone(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error(result.result_sample, baseline.result_sample),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print grouped results as produced by
/// [`run_all_algorithms_randomized`](crate::utils::runner::run_all_algorithms_randomized).
pub fn print_grouped_results(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    results: &[Vec<Vec<BenchmarkResult>>],
) {
    for (algo, per_size) in algorithms.iter().zip(results) {
        print_algo_info_box(*algo);

        for (&size, variants) in sizes.iter().zip(per_size) {
            let mut sorted = variants.clone();
            sort_variants(&mut sorted);
            print_results_table(&sorted, size);
        }
    }
}
