//! Simple OLS implementation variants.

pub mod c_impl;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

pub use c_impl::{simple_ols_c_original, C_IMPL_AVAILABLE};
pub use original::simple_ols_original;
pub use scalar_opt::simple_ols_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::simple_ols_x86_64_sse2;

use super::OlsFit;
use crate::utils::VariantInfo;

/// `(x, y) -> fit`, independent variable first
pub type SimpleOlsFn = fn(&[f64], &[f64]) -> OlsFit;

/// Variants usable on this build, reference first
pub fn available_variants() -> Vec<VariantInfo<SimpleOlsFn>> {
    let mut variants: Vec<VariantInfo<SimpleOlsFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Single-pass moment sums (reference)",
            function: simple_ols_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Moment sums over two interleaved accumulator sets",
            function: simple_ols_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 SSE2, one 2-lane register per moment",
        function: simple_ols_x86_64_sse2,
    });

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C single-pass reference",
            function: simple_ols_c_original,
        });
    }

    variants
}
