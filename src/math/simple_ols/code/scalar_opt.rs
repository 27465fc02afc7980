//! Simple OLS with the moment sums split over two interleaved accumulator sets.

use crate::math::simple_ols::OlsFit;

#[derive(Default, Clone, Copy)]
struct Moments {
    sx: f64,
    sy: f64,
    sxx: f64,
    sxy: f64,
}

impl Moments {
    #[inline(always)]
    fn push(&mut self, x: f64, y: f64) {
        self.sx += x;
        self.sy += y;
        self.sxx += x * x;
        self.sxy += x * y;
    }
}

/// # Panics
/// Panics if the slices have different lengths.
pub fn simple_ols_scalar_opt(x: &[f64], y: &[f64]) -> OlsFit {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let mut even = Moments::default();
    let mut odd = Moments::default();

    let x_pairs = x.chunks_exact(2);
    let y_pairs = y.chunks_exact(2);
    let x_tail = x_pairs.remainder();
    let y_tail = y_pairs.remainder();

    for (xp, yp) in x_pairs.zip(y_pairs) {
        even.push(xp[0], yp[0]);
        odd.push(xp[1], yp[1]);
    }

    if let (Some(&xl), Some(&yl)) = (x_tail.first(), y_tail.first()) {
        even.push(xl, yl);
    }

    OlsFit::from_moments(
        x.len(),
        even.sx + odd.sx,
        even.sy + odd.sy,
        even.sxx + odd.sxx,
        even.sxy + odd.sxy,
    )
}
