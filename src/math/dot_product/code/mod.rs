//! Dot product implementation variants.

pub mod c_impl;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86_64_avx2;

pub use c_impl::{dot_product_c_original, C_IMPL_AVAILABLE};
pub use original::dot_product_original;
pub use scalar_opt::dot_product_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_product_x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use x86_64_avx2::dot_product_x86_64_avx2;

use crate::utils::VariantInfo;

pub type DotProductFn = fn(&[f64], &[f64]) -> f64;

/// Variants usable on this build, reference first
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Sequential reference (single accumulator)",
            function: dot_product_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Scalar with four independent accumulators",
            function: dot_product_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 SSE2, 2 x f64 lanes",
        function: dot_product_x86_64_sse2,
    });

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    variants.push(VariantInfo {
        name: "x86_64-avx2",
        description: "x86_64 AVX2, 4 x f64 lanes",
        function: dot_product_x86_64_avx2,
    });

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C sequential reference",
            function: dot_product_c_original,
        });
    }

    variants
}
