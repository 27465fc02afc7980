//! # OLS Kernels
//!
//! Two single-pass numeric kernels meant to be called from a host numeric
//! environment: the dot product of two vectors and the simple
//! (one-predictor) ordinary-least-squares line.
//!
//! - [`dot`] and [`simple_ols`] are the checked Rust entry points.
//! - [`ffi`] exports the same kernels over the C ABI (`ols_dot`, `ols_simple`).
//! - Each kernel ships several implementation variants that the
//!   [`registry`] verifies against the reference and the `ols-bench`
//!   binary measures.

pub mod error;
pub mod ffi;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::{KernelError, Result};
pub use math::dot_product::dot;
pub use math::simple_ols::{simple_ols, OlsFit};
pub use utils::tui;

pub mod prelude {
    pub use crate::error::{KernelError, Result};
    pub use crate::math::dot_product::{dot, DotProductRunner};
    pub use crate::math::simple_ols::{simple_ols, OlsFit, SimpleOlsRunner};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

