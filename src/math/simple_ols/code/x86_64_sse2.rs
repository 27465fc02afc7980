//! x86_64 SSE2 simple OLS. Each moment sum lives in its own 2-lane register.

use std::arch::x86_64::*;

use crate::math::simple_ols::OlsFit;

#[inline(always)]
unsafe fn hsum(v: __m128d) -> f64 {
    _mm_cvtsd_f64(_mm_add_sd(v, _mm_unpackhi_pd(v, v)))
}

pub fn simple_ols_x86_64_sse2(x: &[f64], y: &[f64]) -> OlsFit {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let len = x.len();
    let chunks = len / 2;

    // SAFETY: SSE2 is baseline on x86_64; each load reads idx and idx + 1
    // with idx + 1 < len.
    let (mut sx, mut sy, mut sxx, mut sxy) = unsafe {
        let mut sx = _mm_setzero_pd();
        let mut sy = _mm_setzero_pd();
        let mut sxx = _mm_setzero_pd();
        let mut sxy = _mm_setzero_pd();

        for i in 0..chunks {
            let idx = i * 2;
            let xv = _mm_loadu_pd(x.as_ptr().add(idx));
            let yv = _mm_loadu_pd(y.as_ptr().add(idx));
            sx = _mm_add_pd(sx, xv);
            sy = _mm_add_pd(sy, yv);
            sxx = _mm_add_pd(sxx, _mm_mul_pd(xv, xv));
            sxy = _mm_add_pd(sxy, _mm_mul_pd(xv, yv));
        }

        (hsum(sx), hsum(sy), hsum(sxx), hsum(sxy))
    };

    if len % 2 == 1 {
        let (xl, yl) = (x[len - 1], y[len - 1]);
        sx += xl;
        sy += yl;
        sxx += xl * xl;
        sxy += xl * yl;
    }

    OlsFit::from_moments(len, sx, sy, sxx, sxy)
}
