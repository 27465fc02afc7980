//! Benchmark closures for the simple OLS variants.

use std::hint::black_box;
use std::sync::Arc;

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;

/// Noisy points around `y = 0.5 + 2x`, so the slope is a meaningful result sample.
pub fn generate_points(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = SeededRng::new(seed);
    let x = rng.vec_f64(size);
    let y = x.iter().map(|&xi| 0.5 + 2.0 * xi + 0.1 * rng.next_f64_range()).collect();
    (x, y)
}

pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let (x, y) = generate_points(size, seed);
    let x = Arc::new(x);
    let y = Arc::new(y);

    available_variants()
        .into_iter()
        .map(|v| {
            let x = Arc::clone(&x);
            let y = Arc::clone(&y);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, fit) = crate::measure!(func(black_box(x.as_slice()), black_box(y.as_slice())));
                    (elapsed, Some(black_box(fit).slope))
                }),
            }
        })
        .collect()
}
