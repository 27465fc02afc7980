//! Tests for the simple OLS variants.

#[cfg(test)]
mod tests {
    use crate::error::KernelError;
    use crate::math::simple_ols::code::*;
    use crate::math::simple_ols::{simple_ols, OlsFit, SimpleOlsRunner};
    use crate::registry::AlgorithmRunner;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    #[case(&[0.0, 1.0, 2.0, 3.0], 1.0, 2.0)]
    #[case(&[-2.0, 0.5, 4.0], -3.0, 0.25)]
    #[case(&[10.0, 20.0], 0.0, -1.0)]
    fn test_every_variant_recovers_exact_line(#[case] x: &[f64], #[case] a: f64, #[case] b: f64) {
        let y: Vec<f64> = x.iter().map(|&xi| a + b * xi).collect();

        for v in available_variants() {
            let fit = (v.function)(x, &y);
            assert_abs_diff_eq!(fit.intercept, a, epsilon = EPSILON);
            assert_abs_diff_eq!(fit.slope, b, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_hand_computed_moments() {
        // Sx=6, Sy=11, Sxx=14, Sxy=25, n=3 -> b = 3/2, a = 2/3
        for v in available_variants() {
            let fit = (v.function)(&[1.0, 2.0, 3.0], &[2.0, 4.0, 5.0]);
            assert_abs_diff_eq!(fit.slope, 1.5, epsilon = EPSILON);
            assert_abs_diff_eq!(fit.intercept, 2.0 / 3.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_constant_x_slope_not_finite() {
        for v in available_variants() {
            let fit = (v.function)(&[5.0, 5.0, 5.0], &[1.0, 2.0, 7.0]);
            assert!(!fit.slope.is_finite(), "{}: slope {}", v.name, fit.slope);
            assert!(!fit.is_finite());
        }
    }

    #[test]
    fn test_single_point_is_nan() {
        for v in available_variants() {
            let fit = (v.function)(&[2.0], &[3.0]);
            assert!(fit.slope.is_nan(), "{}: slope {}", v.name, fit.slope);
            assert!(fit.intercept.is_nan(), "{}: intercept {}", v.name, fit.intercept);
        }
    }

    #[test]
    fn test_no_points_is_nan() {
        for v in available_variants() {
            let fit = (v.function)(&[], &[]);
            assert!(fit.slope.is_nan(), "{}", v.name);
            assert!(fit.intercept.is_nan(), "{}", v.name);
        }
    }

    #[test]
    fn test_large_offset_keeps_uncentered_behaviour() {
        // Points far from the origin: the raw-moment form must not be
        // replaced by a centered one, whatever precision that costs.
        let x: Vec<f64> = (0..4).map(|i| 1e9 + i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi).collect();
        let fit = simple_ols_original(&x, &y);

        let n = x.len() as f64;
        let sx: f64 = x.iter().sum();
        let sy: f64 = y.iter().sum();
        let sxx: f64 = x.iter().map(|v| v * v).sum();
        let sxy: f64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();
        let expected = (sxy - sx * sy / n) / (sxx - sx * sx / n);

        if expected.is_nan() {
            assert!(fit.slope.is_nan());
        } else {
            assert_eq!(fit.slope.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_simple_ols_checked() {
        let fit = simple_ols(&[1.0, 2.0, 3.0], &[2.0, 4.0, 5.0]).unwrap();
        assert_eq!(fit.slope, 1.5);
        assert_eq!(
            simple_ols(&[1.0, 2.0, 3.0], &[2.0, 4.0]),
            Err(KernelError::LengthMismatch { x: 3, y: 2 })
        );
    }

    #[test]
    fn test_simple_ols_degenerate_is_not_an_error() {
        let fit = simple_ols(&[5.0, 5.0, 5.0], &[1.0, 1.0, 1.0]).unwrap();
        assert!(!fit.is_finite());
    }

    #[rstest]
    #[case(2)]
    #[case(17)]
    #[case(1000)]
    fn test_every_variant_matches_reference(#[case] len: usize) {
        let mut rng = StdRng::seed_from_u64(0x015 + len as u64);
        let x: Vec<f64> = (0..len).map(|_| rng.random_range(-50.0..50.0)).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|&xi| 3.0 - 0.5 * xi + rng.random_range(-1.0..1.0))
            .collect();
        let expected: OlsFit = simple_ols_original(&x, &y);

        for v in available_variants() {
            let fit = (v.function)(&x, &y);
            assert_relative_eq!(fit.intercept, expected.intercept, epsilon = EPSILON, max_relative = 1e-9);
            assert_relative_eq!(fit.slope, expected.slope, epsilon = EPSILON, max_relative = 1e-9);
        }
    }

    #[test]
    #[should_panic(expected = "Vectors must have the same length")]
    fn test_original_panics_on_mismatch() {
        simple_ols_original(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_runner_verify() {
        SimpleOlsRunner.verify().expect("simple OLS variants should agree");
    }
}
