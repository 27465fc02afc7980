//! Benchmark orchestration and CSV export.

use std::io::Write;
use std::path::Path;

use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::{fresh_seed, shuffle, unit_name};
use crate::utils::timer::{measure_variants, TimingConfig, Variant};

/// Everything a benchmark run needs besides the algorithms themselves.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Input vector lengths
    pub sizes: Vec<usize>,
    pub timing: TimingConfig,
    /// Seed for the generated inputs and the scheduling order; random when `None`
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![64, 256, 1024, 4096, 16384],
            timing: TimingConfig::default(),
            seed: None,
        }
    }
}

/// One CSV row
#[derive(Clone, Debug, PartialEq)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_units: u64,
    pub result_sample: Option<f64>,
}

/// Results indexed `[algorithm][size]`, in the order they were requested.
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every variant of one algorithm at one input size.
pub fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    size: usize,
    seed: u64,
    timing: &TimingConfig,
) -> Vec<BenchmarkResult> {
    let variants: Vec<Variant> = algo
        .get_variant_closures(size, seed)
        .into_iter()
        .map(Variant::from)
        .collect();

    let results = measure_variants(variants, timing);
    for r in &results {
        log::debug!(
            "{} size={} {}: avg {:.1} {} over {} runs",
            algo.name(),
            size,
            r.name,
            r.avg_units,
            unit_name(),
            r.runs
        );
    }
    results
}

/// Run all (algorithm, size) pairs in a shuffled order so that thermal and
/// frequency drift does not favour whichever algorithm runs first.
pub fn run_all_algorithms_randomized(algorithms: &[&dyn AlgorithmRunner], config: &BenchConfig) -> GroupedResults {
    let seed = config.seed.unwrap_or_else(fresh_seed);
    log::info!(
        "benchmarking {} algorithm(s) at {} size(s), seed {}",
        algorithms.len(),
        config.sizes.len(),
        seed
    );

    let mut pairs: Vec<(usize, usize)> = (0..algorithms.len())
        .flat_map(|a| (0..config.sizes.len()).map(move |s| (a, s)))
        .collect();
    shuffle(&mut pairs, seed);

    let mut results: Vec<Vec<Vec<BenchmarkResult>>> =
        vec![vec![Vec::new(); config.sizes.len()]; algorithms.len()];

    for (algo_idx, size_idx) in pairs {
        let algo = algorithms[algo_idx];
        let size = config.sizes[size_idx];
        log::info!("running {} at size {}", algo.name(), size);

        let mut timing = config.timing.clone();
        timing.shuffle_seed = config.timing.shuffle_seed.or(Some(seed ^ size as u64));
        results[algo_idx][size_idx] = run_algorithm(algo, size, seed, &timing);
    }

    let raw_data = algorithms
        .iter()
        .zip(&results)
        .flat_map(|(algo, per_size)| {
            config.sizes.iter().zip(per_size).flat_map(move |(&size, variants)| {
                variants.iter().map(move |r| RawTimingData {
                    algo_name: algo.name().to_string(),
                    variant_name: r.name.clone(),
                    input_size: size,
                    avg_units: r.avg_units as u64,
                    result_sample: r.result_sample,
                })
            })
        })
        .collect();

    GroupedResults { results, raw_data }
}

/// Whether the algorithm lists no C variant, i.e. the crate was built without a C compiler.
pub fn lacks_c_variant(algo: &dyn AlgorithmRunner) -> bool {
    !algo.available_variants().iter().any(|v| crate::utils::is_c_variant(v))
}

/// Verify every algorithm, returning the failures as `(name, message)`.
pub fn verify_all(algorithms: &[&dyn AlgorithmRunner]) -> Vec<(&'static str, String)> {
    for algo in algorithms.iter().filter(|a| lacks_c_variant(**a)) {
        log::warn!("{}: no C compiler found at build time, C variants skipped", algo.name());
    }

    algorithms
        .iter()
        .filter_map(|algo| match algo.verify() {
            Ok(()) => {
                log::info!("{}: all {} variants verified", algo.name(), algo.available_variants().len());
                None
            }
            Err(e) => {
                log::error!("{}: {}", algo.name(), e);
                Some((algo.name(), e))
            }
        })
        .collect()
}

pub fn write_csv<W: Write>(mut out: W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(out, "algorithm,variant,compiler,input_size,avg_{},result", unit_name())?;

    for entry in data {
        let compiler = if crate::utils::is_c_variant(&entry.variant_name) {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_units,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    out.flush()
}

pub fn export_csv(path: impl AsRef<Path>, data: &[RawTimingData]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;
    use crate::utils::timer::PinStrategy;

    fn row(variant: &str, result: Option<f64>) -> RawTimingData {
        RawTimingData {
            algo_name: "dot_product".to_string(),
            variant_name: variant.to_string(),
            input_size: 64,
            avg_units: 120,
            result_sample: result,
        }
    }

    #[test]
    fn test_write_csv_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[row("original", Some(1.5)), row("scalar_opt", None)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("algorithm,variant,compiler,input_size,avg_"));
        assert_eq!(lines[1], "dot_product,original,,64,120,1.5");
        assert_eq!(lines[2], "dot_product,scalar_opt,,64,120,");
    }

    #[test]
    fn test_write_csv_marks_c_variants() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[row("c-original", Some(2.0))]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let compiler = crate::utils::C_COMPILER_NAME.unwrap_or("Unknown");
        assert!(text.contains(&format!("dot_product,c-original,{},64,120,2", compiler)));
    }

    #[test]
    fn test_export_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timings.csv");
        export_csv(&path, &[row("original", Some(3.0))]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_run_all_groups_by_algorithm_and_size() {
        let registry = build_registry();
        let algos: Vec<&dyn AlgorithmRunner> = registry.all().iter().map(|a| a.as_ref()).collect();
        let config = BenchConfig {
            sizes: vec![8, 33],
            timing: TimingConfig {
                runs_per_variant: 3,
                warmup_iterations: 1,
                pin_strategy: PinStrategy::Global,
                shuffle_seed: None,
            },
            seed: Some(7),
        };

        let grouped = run_all_algorithms_randomized(&algos, &config);
        assert_eq!(grouped.results.len(), algos.len());
        for (algo, per_size) in algos.iter().zip(&grouped.results) {
            assert_eq!(per_size.len(), 2);
            for variants in per_size {
                let names: Vec<_> = variants.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, algo.available_variants());
            }
        }

        let expected_rows: usize = algos.iter().map(|a| a.available_variants().len() * 2).sum();
        assert_eq!(grouped.raw_data.len(), expected_rows);
    }

    #[test]
    fn test_lacks_c_variant_follows_build() {
        use crate::math::dot_product::DotProductRunner;
        use crate::math::simple_ols::SimpleOlsRunner;

        assert_eq!(lacks_c_variant(&DotProductRunner), !crate::math::dot_product::code::C_IMPL_AVAILABLE);
        assert_eq!(lacks_c_variant(&SimpleOlsRunner), !crate::math::simple_ols::code::C_IMPL_AVAILABLE);
    }

    #[test]
    fn test_verify_all_passes() {
        let registry = build_registry();
        let algos: Vec<&dyn AlgorithmRunner> = registry.all().iter().map(|a| a.as_ref()).collect();
        assert!(verify_all(&algos).is_empty());
    }
}
