//! FFI binding for the C simple OLS kernel.

use crate::math::simple_ols::OlsFit;

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_double, size_t};

    extern "C" {
        pub fn ols_kernels_simple_ols_c(
            x: *const c_double,
            y: *const c_double,
            len: size_t,
            out: *mut c_double,
        );
    }
}

#[cfg(c_implementation_active)]
pub fn simple_ols_c_original(x: &[f64], y: &[f64]) -> OlsFit {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");
    let mut ab = [0.0f64; 2];
    // SAFETY: inputs are valid for x.len() reads and `ab` for two writes.
    unsafe { ffi::ols_kernels_simple_ols_c(x.as_ptr(), y.as_ptr(), x.len(), ab.as_mut_ptr()) };
    OlsFit {
        intercept: ab[0],
        slope: ab[1],
    }
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn simple_ols_c_original(_x: &[f64], _y: &[f64]) -> OlsFit {
    panic!("C implementation not compiled (requires GCC, Clang or MSVC)")
}
