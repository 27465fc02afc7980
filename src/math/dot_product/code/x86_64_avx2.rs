//! x86_64 AVX2 dot product, four f64 lanes per instruction.
//!
//! Only compiled when the build targets AVX2 (e.g. `-C target-cpu=native`).
//! Uses FMA when that feature is enabled too, which changes rounding
//! relative to the reference.

use std::arch::x86_64::*;

pub fn dot_product_x86_64_avx2(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let len = x.len();
    let chunks = len / 4;

    // SAFETY: AVX2 is enabled at compile time for this module, and every
    // load reads indices idx..idx + 4 with idx + 3 < len.
    let mut result = unsafe {
        let mut sum = _mm256_setzero_pd();
        for i in 0..chunks {
            let idx = i * 4;
            let xv = _mm256_loadu_pd(x.as_ptr().add(idx));
            let yv = _mm256_loadu_pd(y.as_ptr().add(idx));

            #[cfg(target_feature = "fma")]
            {
                sum = _mm256_fmadd_pd(xv, yv, sum);
            }
            #[cfg(not(target_feature = "fma"))]
            {
                sum = _mm256_add_pd(sum, _mm256_mul_pd(xv, yv));
            }
        }

        // [a, b, c, d] -> [a + c, b + d] -> a + b + c + d
        let lo = _mm256_castpd256_pd128(sum);
        let hi = _mm256_extractf128_pd(sum, 1);
        let pair = _mm_add_pd(lo, hi);
        let swapped = _mm_unpackhi_pd(pair, pair);
        _mm_cvtsd_f64(_mm_add_sd(pair, swapped))
    };

    for i in chunks * 4..len {
        result += x[i] * y[i];
    }

    result
}
