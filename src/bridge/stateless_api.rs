// In: src/bridge/stateless_api.rs

use std::borrow::Cow;

use ndarray::ArrayD;

use crate::bridge::format::EncodedImage;
use crate::chunk_pipeline;
use crate::config::{CodecConfig, ThresholdMode};
use crate::error::TambakError;
use crate::kernels::{rle, threshold};
use crate::traits::Pixel;
use crate::types::{PixelBuffer, RunSequence, Shape};

/// Maps every pixel of `buffer` to 0 or 1. The shape is kept.
///
/// Fails with `InvalidInput` if the buffer is empty.
pub fn binarize<T: Pixel>(
    buffer: &PixelBuffer<T>,
    mode: ThresholdMode,
) -> Result<PixelBuffer<T>, TambakError> {
    let values = threshold::binarize(buffer.values(), mode)?;
    PixelBuffer::new(values, buffer.shape().clone())
}

/// Encodes `buffer` into runs no longer than `2^config.bits - 1`.
///
/// With `config.binary` set the pixels are binarized first, with
/// `config.threshold` (default `Fixed(127)`). That encoding is lossy: decoding it
/// returns the binarized buffer, never the original one.
///
/// Fails with `InvalidConfig` if `config` does not validate.
pub fn encode<T: Pixel>(
    buffer: &PixelBuffer<T>,
    config: &CodecConfig,
) -> Result<RunSequence<T>, TambakError> {
    config.validate()?;

    let runs = rle::encode(buffer.values(), config.bits, config.effective_threshold())?;
    log::debug!(
        "encode: shape {} ({} pixels) -> {} runs, bits = {}, binarize = {:?}",
        buffer.shape(),
        buffer.len(),
        runs.len(),
        config.bits,
        config.effective_threshold()
    );
    Ok(runs)
}

/// Same output as [`encode`], computed over `config.chunk_len`-sized chunks.
///
/// Binarization (including the Otsu threshold search) runs once over the whole
/// buffer before chunking, so every chunk is cut against the same threshold.
pub fn encode_parallel<T: Pixel>(
    buffer: &PixelBuffer<T>,
    config: &CodecConfig,
) -> Result<RunSequence<T>, TambakError> {
    config.validate()?;

    let pixels: Cow<'_, [T]> = match config.effective_threshold() {
        Some(mode) if !buffer.is_empty() => {
            Cow::Owned(threshold::binarize(buffer.values(), mode)?)
        }
        _ => Cow::Borrowed(buffer.values()),
    };

    chunk_pipeline::encode_chunks(&pixels, config.bits, config.chunk_len)
}

/// Encodes `buffer` and packages the runs with the bit width and shape needed to
/// decode them later.
pub fn encode_image<T: Pixel>(
    buffer: &PixelBuffer<T>,
    config: &CodecConfig,
) -> Result<EncodedImage<T>, TambakError> {
    let runs = encode(buffer, config)?;
    Ok(EncodedImage::new(config.bits, buffer.shape().clone(), runs))
}

/// Rebuilds a buffer of `shape` from `runs`.
///
/// Fails with `ShapeMismatch` if the run lengths do not add up to `product(shape)`.
/// Nothing is truncated or padded.
pub fn decode<T: Pixel>(
    runs: &RunSequence<T>,
    shape: &Shape,
) -> Result<PixelBuffer<T>, TambakError> {
    let num_values = shape.num_elements()?;
    let values = rle::decode(runs.runs(), num_values)?;
    log::debug!(
        "decode: {} runs -> shape {} ({} pixels)",
        runs.len(),
        shape,
        values.len()
    );
    PixelBuffer::new(values, shape.clone())
}

/// [`decode`], then reshape into an N-dimensional `ndarray` array.
pub fn decode_to_array<T: Pixel>(
    runs: &RunSequence<T>,
    shape: &Shape,
) -> Result<ArrayD<T>, TambakError> {
    decode(runs, shape)?.into_array()
}
