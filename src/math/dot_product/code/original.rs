//! Reference implementation of the dot product.
//!
//! Defines the numeric contract every other variant is verified against:
//! one left-to-right pass, accumulator starting at `0.0`, no compensation.

/// Compute `Σ x[i] * y[i]`.
///
/// # Panics
/// Panics if the slices have different lengths.
///
/// # Example
/// ```
/// use ols_kernels::math::dot_product::dot_product_original;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [2.0, 4.0, 6.0];
/// assert_eq!(dot_product_original(&x, &y), 28.0);
/// ```
pub fn dot_product_original(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    x.iter().zip(y).fold(0.0, |acc, (a, b)| acc + a * b)
}
