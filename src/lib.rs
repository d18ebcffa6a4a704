//! This file is the root of the `tambak_rle` Rust crate.
//!
//! `tambak_rle` is a run-length codec for pixel buffers. Encoding turns a flat
//! buffer into `(run_length, value)` pairs whose length field is `bits` wide;
//! decoding rebuilds a buffer of a given shape from those pairs. An optional
//! binarization step (fixed threshold or Otsu) can run in front of the encoder.
//!
//! ```
//! use tambak_rle::{bridge, CodecConfig, PixelBuffer, Shape};
//!
//! # fn main() -> tambak_rle::Result<()> {
//! let image = PixelBuffer::new(vec![5u8, 5, 5, 2, 2, 9], vec![2usize, 3])?;
//! let runs = bridge::encode(&image, &CodecConfig::new(8))?;
//! assert_eq!(runs.to_pairs(), vec![(3, 5), (2, 2), (1, 9)]);
//!
//! let decoded = bridge::decode(&runs, &Shape::new(vec![2usize, 3]))?;
//! assert_eq!(decoded, image);
//! # Ok(())
//! # }
//! ```
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`bridge`, `kernels`, etc.).
//! 2.  Re-exporting the handful of types most callers need.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod chunk_pipeline;
pub mod config;
pub mod kernels;
pub mod types;

mod error;
mod traits;
mod utils;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::{CodecConfig, ThresholdMode};
pub use error::{Result, TambakError};
pub use traits::Pixel;
pub use types::{PixelBuffer, Run, RunSequence, Shape};
pub use utils::{max_run_for_bits, MAX_BITS, MIN_BITS};
