//! This module contains the pure, stateless kernels for binarizing pixel data.
//!
//! This is the optional preprocessing stage in front of the RLE kernel. A single
//! global threshold splits the pixels into two classes: pixels strictly below the
//! threshold become 0, every other pixel becomes 1. The threshold is either fixed
//! by the caller or picked by Otsu's method. This module is PURE RUST and panic-free.

use std::collections::BTreeMap;

use crate::config::ThresholdMode;
use crate::error::TambakError;
use crate::traits::Pixel;

//==================================================================================
// 1. Threshold Selection
//==================================================================================

/// Picks a threshold with Otsu's method.
///
/// The histogram is built over the distinct values actually present, so the
/// kernel works for any integer pixel type. The split maximizing the
/// between-class variance wins; ties keep the lowest split. The returned value
/// is the smallest pixel value of the upper class. If the buffer holds a single
/// distinct value there is nothing to split and the threshold is 1, so only
/// positive pixels land in the upper class (a uniform black frame stays 0).
pub fn otsu_threshold<T: Pixel>(values: &[T]) -> Result<T, TambakError> {
    if values.is_empty() {
        return Err(TambakError::InvalidInput(
            "cannot compute an Otsu threshold over an empty buffer".to_string(),
        ));
    }

    let mut histogram: BTreeMap<T, u64> = BTreeMap::new();
    for &v in values {
        *histogram.entry(v).or_insert(0) += 1;
    }
    let levels: Vec<(T, f64, f64)> = histogram
        .into_iter()
        .map(|(level, count)| (level, level.to_f64().unwrap_or(0.0), count as f64))
        .collect();

    if levels.len() == 1 {
        return Ok(T::one());
    }

    let total = values.len() as f64;
    let sum_total: f64 = levels.iter().map(|&(_, x, n)| x * n).sum();

    let mut best_threshold = levels[0].0;
    let mut best_var = -1.0f64;
    let mut weight_low = 0.0f64;
    let mut sum_low = 0.0f64;

    // Split between levels[i] and levels[i + 1].
    for pair in levels.windows(2) {
        let (_, x, n) = pair[0];
        weight_low += n;
        sum_low += x * n;
        let weight_high = total - weight_low;

        let mean_low = sum_low / weight_low;
        let mean_high = (sum_total - sum_low) / weight_high;
        let var_between = weight_low * weight_high * (mean_low - mean_high).powi(2);

        if var_between > best_var {
            best_var = var_between;
            best_threshold = pair[1].0;
        }
    }

    log_metric!(
        "event"="otsu_threshold",
        "levels"=levels.len(),
        "threshold"=format!("{:?}", best_threshold)
    );
    Ok(best_threshold)
}

/// Returns the effective threshold for `mode`, widened to `i128` so it can be
/// compared against any pixel type.
pub fn resolve_threshold<T: Pixel>(values: &[T], mode: ThresholdMode) -> Result<i128, TambakError> {
    match mode {
        ThresholdMode::Fixed { threshold } => Ok(i128::from(threshold)),
        ThresholdMode::Auto => {
            let threshold = otsu_threshold(values)?;
            threshold.to_i128().ok_or_else(|| {
                TambakError::InvalidInput(format!(
                    "threshold {:?} cannot be widened to i128",
                    threshold
                ))
            })
        }
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Maps every pixel to 0 or 1 against `mode`'s threshold.
///
/// Fails with `InvalidInput` on an empty slice.
pub fn binarize<T: Pixel>(values: &[T], mode: ThresholdMode) -> Result<Vec<T>, TambakError> {
    if values.is_empty() {
        return Err(TambakError::InvalidInput(
            "cannot binarize an empty buffer".to_string(),
        ));
    }
    let threshold = resolve_threshold(values, mode)?;
    Ok(apply_threshold(values, threshold))
}

/// Applies a resolved threshold: `v < threshold` becomes 0, anything else 1.
///
/// A threshold below the pixel type's range makes everything 1; one above the
/// range makes everything 0.
pub fn apply_threshold<T: Pixel>(values: &[T], threshold: i128) -> Vec<T> {
    values
        .iter()
        .map(|&v| match v.to_i128() {
            Some(x) if x < threshold => T::zero(),
            _ => T::one(),
        })
        .collect()
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
