//! This module provides a set of shared, low-level utility functions used
//! throughout the tambak-rle core.
//!
//! Its responsibilities are limited to bit-width arithmetic and overflow-checked
//! shape arithmetic, so the kernels never have to repeat those checks.

use crate::error::TambakError;

/// The smallest bit width that still lets a run make progress (`maxRun = 1`).
pub const MIN_BITS: u32 = 1;
/// The widest length field supported. Run lengths are stored as `u32`.
pub const MAX_BITS: u32 = 32;

/// Returns `2^bits - 1`, the longest run a length field of `bits` bits can hold.
pub fn max_run_for_bits(bits: u32) -> Result<u32, TambakError> {
    if !(MIN_BITS..=MAX_BITS).contains(&bits) {
        return Err(TambakError::InvalidConfig(format!(
            "bit width must be in [{}, {}], got {}",
            MIN_BITS, MAX_BITS, bits
        )));
    }
    // Computed in u64 so that bits == 32 does not overflow the shift.
    let max_run = (1u64 << bits) - 1;
    u32::try_from(max_run).map_err(|_| {
        TambakError::InvalidConfig(format!("maximum run {} does not fit in u32", max_run))
    })
}

/// Multiplies out a list of dimensions, failing instead of wrapping on overflow.
/// An empty list describes a scalar and yields 1.
pub fn checked_num_elements(dims: &[usize]) -> Result<usize, TambakError> {
    dims.iter().try_fold(1usize, |acc, &dim| {
        acc.checked_mul(dim).ok_or_else(|| {
            TambakError::InvalidInput(format!("shape {:?} overflows usize", dims))
        })
    })
}
