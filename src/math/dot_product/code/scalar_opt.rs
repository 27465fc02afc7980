//! Scalar dot product with four independent accumulators.
//!
//! Breaking the single dependency chain lets the CPU overlap the adds, at
//! the cost of a different summation order than the reference.

/// # Panics
/// Panics if the slices have different lengths.
pub fn dot_product_scalar_opt(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let mut acc = [0.0f64; 4];

    let x_chunks = x.chunks_exact(4);
    let y_chunks = y.chunks_exact(4);
    let x_tail = x_chunks.remainder();
    let y_tail = y_chunks.remainder();

    for (xc, yc) in x_chunks.zip(y_chunks) {
        acc[0] += xc[0] * yc[0];
        acc[1] += xc[1] * yc[1];
        acc[2] += xc[2] * yc[2];
        acc[3] += xc[3] * yc[3];
    }

    for (a, b) in x_tail.iter().zip(y_tail) {
        acc[0] += a * b;
    }

    (acc[0] + acc[1]) + (acc[2] + acc[3])
}
