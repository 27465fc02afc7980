//! Randomized multi-variant measurement.
//!
//! Every variant is warmed up, then (variant, sample) tasks are shuffled so
//! that no variant systematically benefits from running first or last. Raw
//! samples are reduced to summary statistics per variant.

use std::hint::black_box;
use std::time::Duration;

use super::bench::{fresh_seed, shuffle, to_units, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// When the measuring thread is pinned to a core
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PinStrategy {
    /// Pin once for the whole measurement
    Global,
    /// Pin around each individual execution
    #[default]
    PerExecution,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Samples collected per variant
    pub runs_per_variant: usize,
    /// Unmeasured executions per variant before sampling starts
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Seed for the task shuffle; random when `None`
    pub shuffle_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            shuffle_seed: None,
        }
    }
}

/// A variant ready to be measured.
///
/// `run` performs one timed execution and returns the measurement along with
/// an optional result value used to compare variants.
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Summary statistics of one variant. Durations carry raw units
/// (cycles or nanoseconds) in their nanosecond field.
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    /// Unrounded average in units
    pub avg_units: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples the statistics were computed from
    pub runs: usize,
    /// Result value of the last execution, if the kernel produces one
    pub result_sample: Option<f64>,
}

pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    shuffle(&mut tasks, config.shuffle_seed.unwrap_or_else(fresh_seed));

    let mut measurements: Vec<Vec<Measurement>> =
        (0..variants.len()).map(|_| Vec::with_capacity(samples)).collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for idx in tasks {
        let variant = &mut variants[idx];
        let _exec_pin = (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();
        measurements[idx].push(elapsed);
        result_samples[idx] = result;
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result)| summarize(variant.name, variant.description, &times, result))
        .collect()
}

fn summarize(
    name: &str,
    description: &str,
    measurements: &[Measurement],
    result_sample: Option<f64>,
) -> VariantResult {
    let mut units: Vec<u64> = measurements.iter().map(|m| to_units(*m)).collect();
    units.sort_unstable();

    let (min, max, median) = match (units.first(), units.last()) {
        (Some(&min), Some(&max)) => (min, max, units[units.len() / 2]),
        _ => (0, 0, 0),
    };

    let avg = if units.is_empty() {
        0.0
    } else {
        units.iter().sum::<u64>() as f64 / units.len() as f64
    };

    let variance = units
        .iter()
        .map(|&u| {
            let diff = u as f64 - avg;
            diff * diff
        })
        .sum::<f64>()
        / units.len().saturating_sub(1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg as u64),
        avg_units: avg,
        median_time: Duration::from_nanos(median),
        min_time: Duration::from_nanos(min),
        max_time: Duration::from_nanos(max),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        runs: units.len(),
        result_sample: if units.is_empty() { None } else { result_sample },
    }
}
