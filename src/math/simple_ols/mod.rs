//! # Simple OLS Regression
//!
//! Least-squares line `y = a + b*x` for a single predictor, computed in one
//! pass from four running sums:
//!
//! ```text
//! Sx = Σx   Sy = Σy   Sxx = Σx²   Sxy = Σxy
//! b  = (Sxy - Sx*Sy/n) / (Sxx - Sx*Sx/n)
//! a  = (Sy - b*Sx) / n
//! ```
//!
//! Degenerate inputs propagate IEEE-754 results instead of failing:
//!
//! - no points: `0/0`, both coefficients NaN
//! - one point: numerator and denominator of `b` are both zero, both NaN
//! - constant `x`: denominator zero, slope infinite or NaN
//!
//! Use [`OlsFit::is_finite`] to detect them.

pub mod bench;
pub mod code;
mod fit;
pub mod test;

pub use code::*;
pub use fit::OlsFit;

use crate::error::{self, check_lengths};
use crate::registry::{AlgorithmRunner, VariantClosure};

/// Relative tolerance for non-reference variants
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// Fit `y = intercept + slope * x` using the reference variant.
///
/// `x` is the independent variable, `y` the dependent one. Only a length
/// mismatch is reported as an error.
///
/// ```
/// let fit = ols_kernels::simple_ols(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
/// assert_eq!((fit.intercept, fit.slope), (1.0, 2.0));
/// ```
pub fn simple_ols(x: &[f64], y: &[f64]) -> error::Result<OlsFit> {
    check_lengths(x, y)?;
    Ok(simple_ols_original(x, y))
}

fn close(result: f64, expected: f64) -> bool {
    (result - expected).abs() <= VERIFY_TOLERANCE * expected.abs().max(1.0)
}

pub struct SimpleOlsRunner;

impl AlgorithmRunner for SimpleOlsRunner {
    fn name(&self) -> &'static str {
        "simple_ols"
    }

    fn description(&self) -> &'static str {
        "Intercept and slope of a one-predictor least-squares line"
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
        let (x, y) = bench::generate_points(1023, 0x5eed_0150);

        let variants = code::available_variants();
        let reference = variants
            .iter()
            .find(|v| v.name == "original")
            .ok_or("No 'original' variant found for reference")?;

        let expected = (reference.function)(&x, &y);

        for variant in variants.iter().filter(|v| v.name != "original") {
            let result = (variant.function)(&x, &y);

            if !close(result.intercept, expected.intercept) || !close(result.slope, expected.slope) {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {:?}, got {:?}",
                    variant.name, expected, result
                ));
            }
        }

        Ok(())
    }
}
