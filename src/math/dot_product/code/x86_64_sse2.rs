//! x86_64 SSE2 dot product, two f64 lanes per instruction.
//!
//! SSE2 is part of the x86_64 baseline, so no runtime detection is needed.

use std::arch::x86_64::*;

pub fn dot_product_x86_64_sse2(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let len = x.len();
    let chunks = len / 2;

    // SAFETY: every load reads indices idx and idx + 1 with idx + 1 < len.
    let mut result = unsafe {
        let mut sum = _mm_setzero_pd();
        for i in 0..chunks {
            let idx = i * 2;
            let xv = _mm_loadu_pd(x.as_ptr().add(idx));
            let yv = _mm_loadu_pd(y.as_ptr().add(idx));
            sum = _mm_add_pd(sum, _mm_mul_pd(xv, yv));
        }
        // [lo, hi] -> lo + hi
        let hi = _mm_unpackhi_pd(sum, sum);
        _mm_cvtsd_f64(_mm_add_sd(sum, hi))
    };

    if len % 2 == 1 {
        result += x[len - 1] * y[len - 1];
    }

    result
}
