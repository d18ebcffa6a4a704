// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Chunk Pipeline
// ====================================================================================
//
// The chunk pipeline encodes one flat buffer as several independent chunks and
// stitches the per-chunk run lists back into the single sequence the sequential
// encoder would have produced.
//
//   1. [Orchestrator (encode_chunks)]  -> splits the buffer into `chunk_len` slices
//         |
//         `-> runs `kernels::rle::encode_runs` on every slice (rayon pool when the
//             `parallel` feature is on, in order otherwise)
//
//   2. [Stitch (absorb_run)]           -> appends each chunk's runs to the output,
//                                         merging a run into its predecessor when a
//                                         stretch of equal pixels crossed a chunk
//                                         edge, never exceeding `max_run`
//
// Binarization is NOT done here. The bridge binarizes the whole buffer first so
// that every chunk is cut against the same threshold.
// ====================================================================================
pub mod orchestrator;
pub(crate) mod stitch;

pub use orchestrator::encode_chunks;
