//! Measurement, pinning and reporting support for the kernel benchmarks.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

pub use bench::{elapsed, fresh_seed, now, shuffle, Measurement, SeededRng};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{BenchConfig, RawTimingData};
pub use timer::{measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// One implementation of a kernel, generic over its function signature.
pub struct VariantInfo<F> {
    /// Unique identifier (e.g. "original", "x86_64-sse2", "c-original")
    pub name: &'static str,
    pub description: &'static str,
    pub function: F,
}

/// Whether a variant name denotes one of the C kernels.
pub fn is_c_variant(name: &str) -> bool {
    name.starts_with("c-") || name.starts_with("c_")
}
