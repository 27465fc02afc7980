//! C ABI entry points for host environments.
//!
//! The signatures mirror what a numeric host expects from a shared
//! library: an element count followed by raw `double` buffers, dependent
//! variable first. Lengths are the caller's responsibility and are not
//! validated; nothing here panics across the boundary.

use libc::{c_double, size_t};

use crate::math::dot_product::dot_product_original;
use crate::math::simple_ols::simple_ols_original;

/// Borrow `n` doubles from `ptr`. A null pointer is only accepted when `n == 0`.
///
/// # Safety
/// When `n > 0` and `ptr` is non-null, `ptr` must be aligned and valid for `n` reads.
unsafe fn borrow<'a>(ptr: *const c_double, n: size_t) -> Option<&'a [f64]> {
    if n == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts(ptr, n))
    }
}

/// Dot product of the first `n` elements of `y` and `x`.
///
/// # Safety
/// `y` and `x` must each be valid for `n` reads. Both may be null when `n` is 0;
/// a null input with `n > 0` yields NaN.
#[no_mangle]
pub unsafe extern "C" fn ols_dot(n: size_t, y: *const c_double, x: *const c_double) -> c_double {
    match (borrow(y, n), borrow(x, n)) {
        (Some(y), Some(x)) => dot_product_original(x, y),
        _ => c_double::NAN,
    }
}

/// Simple regression `y = a + b*x` over `n` points, storing `ab[0] = a` and `ab[1] = b`.
///
/// # Safety
/// `y` and `x` must each be valid for `n` reads and `ab` for two writes.
/// A null `ab` makes the call a no-op; a null input with `n > 0` writes NaN.
#[no_mangle]
pub unsafe extern "C" fn ols_simple(n: size_t, y: *const c_double, x: *const c_double, ab: *mut c_double) {
    if ab.is_null() {
        return;
    }
    let [a, b] = match (borrow(y, n), borrow(x, n)) {
        (Some(y), Some(x)) => <[f64; 2]>::from(simple_ols_original(x, y)),
        _ => [c_double::NAN; 2],
    };
    ab.write(a);
    ab.add(1).write(b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_ols_dot_through_raw_pointers() {
        let y = [2.0, 4.0, 6.0];
        let x = [1.0, 2.0, 3.0];
        let r = unsafe { ols_dot(3, y.as_ptr(), x.as_ptr()) };
        assert_eq!(r, 28.0);
    }

    #[test]
    fn test_ols_dot_uses_only_n_elements() {
        let y = [1.0, 1.0, 100.0];
        let x = [2.0, 3.0, 100.0];
        assert_eq!(unsafe { ols_dot(2, y.as_ptr(), x.as_ptr()) }, 5.0);
    }

    #[test]
    fn test_ols_dot_empty_accepts_null() {
        assert_eq!(unsafe { ols_dot(0, ptr::null(), ptr::null()) }, 0.0);
    }

    #[test]
    fn test_ols_dot_null_with_length_is_nan() {
        let x = [1.0];
        assert!(unsafe { ols_dot(1, ptr::null(), x.as_ptr()) }.is_nan());
    }

    #[test]
    fn test_ols_dot_both_null_with_length_is_nan() {
        assert!(unsafe { ols_dot(3, ptr::null(), ptr::null()) }.is_nan());
    }

    #[test]
    fn test_ols_simple_null_input_with_length_writes_nan() {
        let y = [1.0, 2.0, 3.0];
        let mut ab = [0.0; 2];
        unsafe { ols_simple(3, y.as_ptr(), ptr::null(), ab.as_mut_ptr()) };
        assert!(ab[0].is_nan() && ab[1].is_nan());

        let mut ab = [0.0; 2];
        unsafe { ols_simple(3, ptr::null(), ptr::null(), ab.as_mut_ptr()) };
        assert!(ab[0].is_nan() && ab[1].is_nan());
    }

    #[test]
    fn test_ols_simple_slot_order() {
        // y first, x second: y = [2, 4, 5] on x = [1, 2, 3]
        let y = [2.0, 4.0, 5.0];
        let x = [1.0, 2.0, 3.0];
        let mut ab = [0.0; 2];
        unsafe { ols_simple(3, y.as_ptr(), x.as_ptr(), ab.as_mut_ptr()) };
        assert!((ab[0] - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(ab[1], 1.5);
    }

    #[test]
    fn test_ols_simple_empty_writes_nan() {
        let mut ab = [0.0; 2];
        unsafe { ols_simple(0, ptr::null(), ptr::null(), ab.as_mut_ptr()) };
        assert!(ab[0].is_nan() && ab[1].is_nan());
    }

    #[test]
    fn test_ols_simple_null_output_is_noop() {
        let y = [1.0, 2.0];
        let x = [1.0, 2.0];
        unsafe { ols_simple(2, y.as_ptr(), x.as_ptr(), ptr::null_mut()) };
    }
}
