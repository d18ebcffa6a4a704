//! This module contains the pure, stateless, and performant kernels for performing
//! bit-width bounded Run-Length Encoding (RLE) and decoding of pixel data.
//!
//! The output is an ordered sequence of `(run_length, value)` pairs. The run length
//! field is `bits` wide, so no run is ever longer than `2^bits - 1`. A longer stretch
//! of identical pixels is split into several runs of the same value; that overflow
//! split is the only case where two neighbouring runs share a value. This module is
//! PURE RUST, panic-free, and does no I/O.

use std::borrow::Cow;

use super::threshold;
use crate::config::ThresholdMode;
use crate::error::TambakError;
use crate::traits::Pixel;
use crate::types::{Run, RunSequence};
use crate::utils;

//==================================================================================
// 1. Core Logic
//==================================================================================

/// Single linear pass over `input_slice`, appending runs capped at `max_run` to `output`.
///
/// `max_run` must be at least 1.
pub(crate) fn encode_runs<T: Pixel>(input_slice: &[T], max_run: u32, output: &mut Vec<Run<T>>) {
    let mut current: Option<(T, u32)> = None;

    for &pixel in input_slice {
        current = match current {
            None => Some((pixel, 1)),
            Some((value, count)) if value == pixel && count < max_run => Some((value, count + 1)),
            // Either the value changed or the run is full. Both close the run.
            Some((value, count)) => {
                output.push(Run::new(count, value));
                Some((pixel, 1))
            }
        };
    }

    if let Some((value, count)) = current {
        output.push(Run::new(count, value));
    }
}

//==================================================================================
// 2. Public API (Generic, Performant, Decoupled)
//==================================================================================

/// Encodes `input_slice` into runs no longer than `2^bits - 1`.
///
/// If `binarize` is set, every pixel is first mapped to 0/1 with that threshold
/// mode. That makes the encoding lossy: decoding returns the binarized pixels, not
/// the input. An empty slice encodes to an empty sequence in either case.
///
/// Fails with `InvalidConfig` if `bits` is outside `[1, 32]`.
pub fn encode<T: Pixel>(
    input_slice: &[T],
    bits: u32,
    binarize: Option<ThresholdMode>,
) -> Result<RunSequence<T>, TambakError> {
    let max_run = utils::max_run_for_bits(bits)?;

    let pixels: Cow<'_, [T]> = match binarize {
        Some(mode) if !input_slice.is_empty() => {
            Cow::Owned(threshold::binarize(input_slice, mode)?)
        }
        _ => Cow::Borrowed(input_slice),
    };

    let mut runs = Vec::new();
    encode_runs(&pixels, max_run, &mut runs);

    log_metric!(
        "event"="rle_encode",
        "bits"=bits,
        "pixels"=input_slice.len(),
        "runs"=runs.len()
    );
    Ok(RunSequence::from_runs(runs))
}

/// Expands `runs` into a flat buffer of exactly `num_values` pixels.
///
/// Fails with `ShapeMismatch` if the run lengths do not add up to `num_values`, and
/// with `InvalidInput` on a zero-length run. Both checks run before the output is
/// allocated, so the decoder never truncates or pads.
pub fn decode<T: Pixel>(runs: &[Run<T>], num_values: usize) -> Result<Vec<T>, TambakError> {
    let mut total: u64 = 0;
    for (idx, run) in runs.iter().enumerate() {
        if run.length == 0 {
            return Err(TambakError::InvalidInput(format!(
                "run {} has zero length",
                idx
            )));
        }
        total += u64::from(run.length);
    }

    if total != num_values as u64 {
        return Err(TambakError::ShapeMismatch {
            expected: num_values as u64,
            actual: total,
        });
    }

    let mut output_buf = Vec::with_capacity(num_values);
    for run in runs {
        output_buf.resize(output_buf.len() + run.length as usize, run.value);
    }

    log_metric!("event"="rle_decode", "runs"=runs.len(), "pixels"=output_buf.len());
    Ok(output_buf)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs<T: Pixel>(seq: &RunSequence<T>) -> Vec<(u32, T)> {
        seq.to_pairs()
    }

    #[test]
    fn test_rle_encode_basic_scenario() {
        let original: Vec<u8> = vec![5, 5, 5, 2, 2, 9];
        let encoded = encode(&original, 8, None).unwrap();
        assert_eq!(pairs(&encoded), vec![(3, 5), (2, 2), (1, 9)]);

        let decoded = decode(encoded.runs(), original.len()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_rle_overflow_splits_same_value() {
        let original: Vec<u8> = vec![7; 300];
        let encoded = encode(&original, 8, None).unwrap();
        assert_eq!(pairs(&encoded), vec![(255, 7), (45, 7)]);

        let decoded = decode(encoded.runs(), 300).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_rle_overflow_exactly_at_max_run() {
        let original: Vec<u8> = vec![3; 510];
        let encoded = encode(&original, 8, None).unwrap();
        assert_eq!(pairs(&encoded), vec![(255, 3), (255, 3)]);
    }

    #[test]
    fn test_rle_one_bit_emits_one_run_per_pixel() {
        let original: Vec<i32> = vec![4, 4, 4, -1];
        let encoded = encode(&original, 1, None).unwrap();
        assert_eq!(pairs(&encoded), vec![(1, 4), (1, 4), (1, 4), (1, -1)]);
        assert_eq!(decode(encoded.runs(), 4).unwrap(), original);
    }

    #[test]
    fn test_rle_roundtrip_i32() {
        let original: Vec<i32> = vec![5, 5, 5, 5, 8, 8, 8, 2, 9, 9, 9, 9, 9];
        let encoded = encode(&original, 2, None).unwrap();
        assert!(encoded.iter().all(|r| r.length >= 1 && r.length <= 3));
        assert_eq!(encoded.total_length(), original.len() as u64);

        let decoded = decode(encoded.runs(), original.len()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_rle_long_run_u16_with_32_bits() {
        let original: Vec<u16> = vec![42; 100_000];
        let encoded = encode(&original, 32, None).unwrap();
        assert_eq!(pairs(&encoded), vec![(100_000, 42)]);
    }

    #[test]
    fn test_empty_slice_roundtrip() {
        let original: Vec<i64> = vec![];
        let encoded = encode(&original, 8, None).unwrap();
        assert!(encoded.is_empty());

        let decoded = decode(encoded.runs(), 0).unwrap();
        assert!(decoded.is_empty());

        let encoded = encode(&original, 8, Some(ThresholdMode::Auto)).unwrap();
        assert!(encoded.is_empty());
    }

    #[test]
    fn test_single_pixel() {
        let encoded = encode(&[17u8], 8, None).unwrap();
        assert_eq!(pairs(&encoded), vec![(1, 17)]);
    }

    #[test]
    fn test_invalid_bit_widths() {
        let data: Vec<u8> = vec![1, 2, 3];
        assert!(matches!(encode(&data, 0, None), Err(TambakError::InvalidConfig(_))));
        assert!(matches!(encode(&data, 33, None), Err(TambakError::InvalidConfig(_))));
    }

    #[test]
    fn test_binary_encode_with_default_threshold() {
        let original: Vec<u8> = vec![0, 10, 126, 127, 200, 255, 3];
        let encoded = encode(&original, 8, Some(ThresholdMode::default())).unwrap();
        assert_eq!(pairs(&encoded), vec![(3, 0), (3, 1), (1, 0)]);

        // Lossy: decoding yields the binarized pixels.
        let decoded = decode(encoded.runs(), original.len()).unwrap();
        assert_eq!(decoded, vec![0, 0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn test_binary_encode_with_auto_threshold() {
        let original: Vec<u8> = vec![10, 200, 50, 5];
        let encoded = encode(&original, 8, Some(ThresholdMode::Auto)).unwrap();
        assert_eq!(pairs(&encoded), vec![(1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_binary_encode_auto_on_black_frame() {
        let original: Vec<u8> = vec![0; 16];
        let encoded = encode(&original, 8, Some(ThresholdMode::Auto)).unwrap();
        assert_eq!(pairs(&encoded), vec![(16, 0)]);

        let white: Vec<u8> = vec![255; 16];
        let encoded = encode(&white, 8, Some(ThresholdMode::Auto)).unwrap();
        assert_eq!(pairs(&encoded), vec![(16, 1)]);
    }

    #[test]
    fn test_decode_length_mismatch_error() {
        let runs = vec![Run::new(3u32, 1u8), Run::new(2, 0)];
        match decode(&runs, 6) {
            Err(TambakError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(decode(&runs, 4).is_err());
        assert_eq!(decode(&runs, 5).unwrap(), vec![1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_decode_rejects_zero_length_run() {
        let runs = vec![Run::new(0u32, 1u8), Run::new(2, 0)];
        assert!(matches!(decode(&runs, 2), Err(TambakError::InvalidInput(_))));
    }
}
