//! Tests for the dot product variants.

#[cfg(test)]
mod tests {
    use crate::error::KernelError;
    use crate::math::dot_product::code::*;
    use crate::math::dot_product::{dot, DotProductRunner};
    use crate::registry::AlgorithmRunner;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-100.0..100.0)).collect()
    }

    #[test]
    fn test_original_hand_computed() {
        // 1*2 + 2*4 + 3*6
        assert_eq!(dot_product_original(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 28.0);
    }

    #[test]
    fn test_original_empty_is_positive_zero() {
        let r = dot_product_original(&[], &[]);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_original_single_element() {
        assert_eq!(dot_product_original(&[3.0], &[-4.5]), -13.5);
    }

    #[test]
    fn test_original_sequential_order() {
        // Left to right: (1e16 + 1) + -1e16 loses the 1; pairwise would not.
        let x = [1e16, 1.0, -1e16, 1.0];
        let y = [1.0; 4];
        assert_eq!(dot_product_original(&x, &y), 1.0);
    }

    #[test]
    #[should_panic(expected = "Vectors must have the same length")]
    fn test_original_panics_on_mismatch() {
        dot_product_original(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_dot_rejects_mismatch() {
        assert_eq!(
            dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(KernelError::LengthMismatch { x: 2, y: 3 })
        );
    }

    #[test]
    fn test_dot_empty() {
        assert_eq!(dot(&[], &[]), Ok(0.0));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(4)]
    #[case(7)]
    #[case(64)]
    #[case(1001)]
    fn test_every_variant_commutes(#[case] len: usize) {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let x = random_vec(&mut rng, len);
        let y = random_vec(&mut rng, len);

        for v in available_variants() {
            // Each lane multiplies x[i] * y[i] in the same position, so
            // swapping arguments is bit-exact for every variant.
            assert_eq!((v.function)(&x, &y), (v.function)(&y, &x), "{}", v.name);
        }
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(256)]
    fn test_every_variant_zero_vector(#[case] len: usize) {
        let mut rng = StdRng::seed_from_u64(99);
        let x = random_vec(&mut rng, len);
        let zeros = vec![0.0; len];

        for v in available_variants() {
            assert_eq!((v.function)(&zeros, &x), 0.0, "{}", v.name);
        }
    }

    #[rstest]
    #[case(2)]
    #[case(9)]
    #[case(1023)]
    fn test_every_variant_matches_reference(#[case] len: usize) {
        let mut rng = StdRng::seed_from_u64(0xd07 + len as u64);
        let x = random_vec(&mut rng, len);
        let y = random_vec(&mut rng, len);
        let expected = dot_product_original(&x, &y);

        for v in available_variants() {
            assert_relative_eq!((v.function)(&x, &y), expected, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_every_variant_small_exact() {
        for v in available_variants() {
            assert_eq!((v.function)(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 28.0, "{}", v.name);
            assert_eq!((v.function)(&[3.0], &[4.0]), 12.0, "{}", v.name);
        }
    }

    #[test]
    fn test_runner_verify() {
        DotProductRunner.verify().expect("dot product variants should agree");
    }

    #[test]
    fn test_c_variant_listed_when_compiled() {
        let listed = available_variants().iter().any(|v| v.name == "c-original");
        assert_eq!(listed, C_IMPL_AVAILABLE);
    }
}
