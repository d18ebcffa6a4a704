// In: src/chunk_pipeline/orchestrator.rs

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::stitch;
use crate::error::TambakError;
use crate::kernels::rle;
use crate::traits::Pixel;
use crate::types::{Run, RunSequence};
use crate::utils;

//==================================================================================
// 1. Public Orchestration API
//==================================================================================

/// Encodes `values` in chunks of `chunk_len` pixels and stitches the result.
///
/// The output is identical to `kernels::rle::encode(values, bits, None)`; only the
/// work is split. Fails with `InvalidConfig` on a bad bit width or a zero
/// `chunk_len`.
pub fn encode_chunks<T: Pixel>(
    values: &[T],
    bits: u32,
    chunk_len: usize,
) -> Result<RunSequence<T>, TambakError> {
    let max_run = utils::max_run_for_bits(bits)?;
    if chunk_len == 0 {
        return Err(TambakError::InvalidConfig(
            "chunk_len must be at least 1".to_string(),
        ));
    }

    let per_chunk = encode_each_chunk(values, max_run, chunk_len);
    let num_chunks = per_chunk.len();
    let runs = stitch::stitch_chunks(per_chunk, max_run);

    log::debug!(
        "chunk_pipeline: {} pixels in {} chunks of <= {} -> {} runs (bits = {})",
        values.len(),
        num_chunks,
        chunk_len,
        runs.len(),
        bits
    );
    Ok(RunSequence::from_runs(runs))
}

//==================================================================================
// 2. Private Helpers
//==================================================================================

#[cfg(feature = "parallel")]
fn encode_each_chunk<T: Pixel>(values: &[T], max_run: u32, chunk_len: usize) -> Vec<Vec<Run<T>>> {
    values
        .par_chunks(chunk_len)
        .map(|chunk| encode_one_chunk(chunk, max_run))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn encode_each_chunk<T: Pixel>(values: &[T], max_run: u32, chunk_len: usize) -> Vec<Vec<Run<T>>> {
    values
        .chunks(chunk_len)
        .map(|chunk| encode_one_chunk(chunk, max_run))
        .collect()
}

fn encode_one_chunk<T: Pixel>(chunk: &[T], max_run: u32) -> Vec<Run<T>> {
    let mut runs = Vec::new();
    rle::encode_runs(chunk, max_run, &mut runs);
    runs
}
