//! Reference simple OLS: one pass, four running sums, closed-form solve.
//!
//! No centering is applied, so for `x` with a large mean relative to its
//! spread the denominator suffers cancellation. That behaviour is part of
//! the contract the other variants are checked against.

use crate::math::simple_ols::OlsFit;

/// Least-squares fit of `y = a + b*x`.
///
/// # Panics
/// Panics if the slices have different lengths.
///
/// # Example
/// ```
/// use ols_kernels::math::simple_ols::simple_ols_original;
///
/// let fit = simple_ols_original(&[1.0, 2.0, 3.0], &[2.0, 4.0, 5.0]);
/// assert_eq!(fit.slope, 1.5);
/// assert!((fit.intercept - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn simple_ols_original(x: &[f64], y: &[f64]) -> OlsFit {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let (sx, sy, sxx, sxy) = x.iter().zip(y).fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxx, sxy), (&xi, &yi)| (sx + xi, sy + yi, sxx + xi * xi, sxy + xi * yi),
    );

    OlsFit::from_moments(x.len(), sx, sy, sxx, sxy)
}
