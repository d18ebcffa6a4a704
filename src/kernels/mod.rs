//! This module collects the pure, stateless pixel kernels.
//!
//! Kernels work on flat slices and know nothing about shapes, configs or
//! containers; the `bridge` layer supplies those. They are exposed publicly so
//! callers (and the benchmarks) can drive them directly.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Preprocessing: Binarization
pub mod threshold;

/// Sparsity Exploitation: bit-width bounded RLE
pub mod rle;
