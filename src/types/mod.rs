//! This module defines the core, strongly-typed data representations exchanged
//! between the codec and its callers.
//!
//! `PixelBuffer` and `Shape` describe the uncompressed side; `Run` and
//! `RunSequence` describe the compressed side. All of them are plain value
//! objects: built fresh on each call and never shared mutably.

pub mod pixel_buffer;
pub mod run;

// Re-export the main types for easier access.
pub use pixel_buffer::{PixelBuffer, Shape};
pub use run::{Run, RunSequence};
