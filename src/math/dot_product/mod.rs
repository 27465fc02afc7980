//! # Dot Product
//!
//! Inner product of two equal-length vectors:
//!
//! `dot(x, y) = Σ x[i] * y[i]`
//!
//! The `original` variant fixes the numeric contract: a single
//! left-to-right pass with one `f64` accumulator starting at `0.0`. The
//! other variants reorder the summation (multiple accumulators, SIMD
//! lanes) and therefore only agree with it up to rounding.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::{self, check_lengths};
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::SeededRng;

/// Relative tolerance for non-reference variants
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// Dot product of `x` and `y` using the reference variant.
///
/// Returns [`KernelError::LengthMismatch`](crate::KernelError::LengthMismatch)
/// when the slices differ in length. Empty inputs give `0.0`.
///
/// ```
/// let d = ols_kernels::dot(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(d, 28.0);
/// ```
pub fn dot(x: &[f64], y: &[f64]) -> error::Result<f64> {
    check_lengths(x, y)?;
    Ok(dot_product_original(x, y))
}

pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Sum of products of corresponding vector elements"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        // Odd size exercises every remainder path
        let size = 1023;
        let mut rng = SeededRng::new(0x5eed_d07);
        let x = rng.vec_f64(size);
        let y = rng.vec_f64(size);

        let variants = code::available_variants();
        let reference = variants
            .iter()
            .find(|v| v.name == "original")
            .ok_or("No 'original' variant found for reference")?;

        let expected = (reference.function)(&x, &y);

        for variant in variants.iter().filter(|v| v.name != "original") {
            let result = (variant.function)(&x, &y);
            let diff = (result - expected).abs();

            if !(diff <= VERIFY_TOLERANCE * expected.abs().max(1.0)) {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {}, got {}, diff {}",
                    variant.name, expected, result, diff
                ));
            }
        }

        Ok(())
    }
}
