// In: src/error.rs

//! This module defines the single, unified error type for the entire tambak-rle library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every failure in this crate is a local, deterministic validation failure. None of
//! them are transient, so none of them are worth retrying.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TambakError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to the codec's contracts)
    // =========================================================================
    /// Degenerate or empty data where an operation is undefined.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A codec setting (bit width, chunk length, container version) is out of range.
    #[error("Invalid codec configuration: {0}")]
    InvalidConfig(String),

    /// The number of values on hand disagrees with the number the shape describes.
    #[error("Shape mismatch: shape describes {expected} values, but got {actual}")]
    ShapeMismatch { expected: u64, actual: u64 },

    /// An externally supplied run is longer than the bit width allows.
    #[error("Run length {length} exceeds the maximum of {max_run} for this bit width")]
    RunLengthOverflow { length: u32, max_run: u32 },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, raised while reading or writing an `EncodedImage`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error from `ndarray` while reshaping a flat buffer.
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Crate-wide result alias.
pub type Result<T, E = TambakError> = std::result::Result<T, E>;
