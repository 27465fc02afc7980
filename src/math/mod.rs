//! Numeric kernels.

pub mod dot_product;
pub mod simple_ols;
