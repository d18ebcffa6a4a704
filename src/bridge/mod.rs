// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of the tambak-rle library. It speaks in
// `PixelBuffer`s, `Shape`s and `CodecConfig`s, and hands flat slices down to the
// pure kernels.
//
// Data Flow (Encoding):
//
//   1. [Stateless API (encode / encode_parallel)] -> Receives `&PixelBuffer<T>` + `&CodecConfig`
//         |
//         `-> a. Validates the config, binarizes the whole buffer if requested
//         |
//         `-> b. Calls `kernels::rle` (or `chunk_pipeline` for the parallel path)
//
//   2. [Format (EncodedImage)]                    -> Optionally packages bits + shape + runs
//
// Data Flow (Decoding):
//
//   1. [Stateless API (decode / decode_to_array)] -> Receives `&RunSequence<T>` + `&Shape`
//         |
//         `-> Calls `kernels::rle::decode` with `product(shape)` and rebuilds the buffer
//
// ====================================================================================
pub mod format;
pub mod stateless_api;

// --- Low-Level Stateless API ---
pub use stateless_api::{binarize, decode, decode_to_array, encode, encode_image, encode_parallel};

// --- Format Constants and Structs ---
pub use format::{EncodedImage, FORMAT_VERSION};

#[cfg(test)]
mod tests;
