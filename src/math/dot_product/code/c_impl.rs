//! FFI binding for the C dot product kernel.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_double, size_t};

    extern "C" {
        pub fn ols_kernels_dot_product_c(x: *const c_double, y: *const c_double, len: size_t) -> c_double;
    }
}

#[cfg(c_implementation_active)]
pub fn dot_product_c_original(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");
    // SAFETY: both pointers are valid for x.len() reads; the kernel reads
    // nothing when len is 0.
    unsafe { ffi::ols_kernels_dot_product_c(x.as_ptr(), y.as_ptr(), x.len()) }
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn dot_product_c_original(_x: &[f64], _y: &[f64]) -> f64 {
    panic!("C implementation not compiled (requires GCC, Clang or MSVC)")
}
