//! Errors reported by the checked kernel entry points.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KernelError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The two input vectors do not have the same number of elements.
    #[error("length mismatch: x has {x} elements, y has {y}")]
    LengthMismatch { x: usize, y: usize },
}

/// Reject inputs whose lengths differ.
pub(crate) fn check_lengths(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(KernelError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    Ok(())
}
