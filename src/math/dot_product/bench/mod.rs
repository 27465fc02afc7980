//! Benchmark closures for the dot product variants.

use std::hint::black_box;
use std::sync::Arc;

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;

/// One closure per variant, all sharing the same seeded inputs.
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let mut rng = SeededRng::new(seed);
    let x: Arc<Vec<f64>> = Arc::new(rng.vec_f64(size));
    let y: Arc<Vec<f64>> = Arc::new(rng.vec_f64(size));

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
                    let (elapsed, result) = crate::measure!(func(black_box(x.as_slice()), black_box(y.as_slice())));
                    (elapsed, Some(black_box(result)))
                }),
            }
        })
        .collect()
}
