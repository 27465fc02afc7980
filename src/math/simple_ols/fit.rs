//! Fitted line and the closed-form solve shared by the Rust variants.

/// Coefficients of the least-squares line `y = intercept + slope * x`.
///
/// Degenerate inputs are not rejected: with no points, a single point, or
/// an `x` without variance, the coefficients come out as NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlsFit {
    pub intercept: f64,
    pub slope: f64,
}

impl OlsFit {
    /// Solve from the four raw moments of `n` points.
    ///
    /// `b = (Sxy - Sx*Sy/n) / (Sxx - Sx*Sx/n)`, `a = (Sy - b*Sx) / n`
    #[inline]
    pub fn from_moments(n: usize, sx: f64, sy: f64, sxx: f64, sxy: f64) -> Self {
        let n = n as f64;
        let slope = (sxy - sx * sy / n) / (sxx - sx * sx / n);
        let intercept = (sy - slope * sx) / n;
        Self { intercept, slope }
    }

    /// Value of the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Both coefficients are finite, i.e. the fit was not degenerate.
    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.slope.is_finite()
    }
}

impl From<OlsFit> for (f64, f64) {
    fn from(fit: OlsFit) -> Self {
        (fit.intercept, fit.slope)
    }
}

/// Slot layout of the host interface: `[intercept, slope]`.
impl From<OlsFit> for [f64; 2] {
    fn from(fit: OlsFit) -> Self {
        [fit.intercept, fit.slope]
    }
}
