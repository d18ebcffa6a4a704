// In: src/config.rs

//! The single source of truth for all codec configuration.
//!
//! `CodecConfig` is created once at the application boundary (from a JSON document,
//! or built in code) and then passed by reference into every encode call. It carries
//! the bit width of the run-length field and the optional binarization step that is
//! part of the encode contract.

use serde::{Deserialize, Serialize};

use crate::error::TambakError;
use crate::utils;

//==================================================================================
// 0. Constants
//==================================================================================
/// The bit width used when none is configured (`maxRun = 255`).
pub const DEFAULT_BITS: u32 = 8;
/// The threshold used by binary encoding when no threshold mode is given.
pub const DEFAULT_THRESHOLD: i64 = 127;
/// The number of pixels each worker encodes in `encode_parallel`.
pub const DEFAULT_CHUNK_LEN: usize = 64 * 1024;

//==================================================================================
// I. Threshold Selection
//==================================================================================

/// How the binarization threshold is chosen.
///
/// In both modes a pixel strictly below the threshold maps to 0 and every other
/// pixel maps to 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ThresholdMode {
    /// A caller-chosen global threshold.
    Fixed { threshold: i64 },

    /// Otsu's method over the histogram of the buffer being encoded.
    Auto,
}

impl ThresholdMode {
    pub fn fixed(threshold: i64) -> Self {
        ThresholdMode::Fixed { threshold }
    }
}

impl Default for ThresholdMode {
    fn default() -> Self {
        ThresholdMode::fixed(DEFAULT_THRESHOLD)
    }
}

//==================================================================================
// II. The Unified CodecConfig
//==================================================================================

/// Settings for a single encode call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// Width of the run-length field. Runs are capped at `2^bits - 1`.
    #[serde(default = "default_bits")]
    pub bits: u32,

    /// If true, pixels are mapped to {0, 1} before encoding. This is lossy:
    /// decoding yields the binarized buffer, not the original.
    #[serde(default)]
    pub binary: bool,

    /// Threshold selection for binary encoding. `None` means `Fixed(127)`.
    /// Ignored when `binary` is false.
    #[serde(default)]
    pub threshold: Option<ThresholdMode>,

    /// Chunk size for `encode_parallel`. Ignored by the sequential encoder.
    #[serde(default = "default_chunk_len")]
    pub chunk_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_BITS,
            binary: false,
            threshold: None,
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }
}

impl CodecConfig {
    /// A lossless configuration with the given bit width.
    pub fn new(bits: u32) -> Self {
        Self {
            bits,
            ..Self::default()
        }
    }

    /// Turns on binarization with the given threshold mode.
    pub fn with_binarization(mut self, mode: ThresholdMode) -> Self {
        self.binary = true;
        self.threshold = Some(mode);
        self
    }

    pub fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len;
        self
    }

    /// The longest run this configuration allows, or `InvalidConfig` if `bits`
    /// is outside `[1, 32]`.
    pub fn max_run(&self) -> Result<u32, TambakError> {
        utils::max_run_for_bits(self.bits)
    }

    /// The threshold mode encode will apply, or `None` for lossless encoding.
    pub fn effective_threshold(&self) -> Option<ThresholdMode> {
        if self.binary {
            Some(self.threshold.unwrap_or_default())
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), TambakError> {
        self.max_run()?;
        if self.chunk_len == 0 {
            return Err(TambakError::InvalidConfig(
                "chunk_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, TambakError> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Helper for `serde` to provide a default for `bits`.
fn default_bits() -> u32 {
    DEFAULT_BITS
}

/// Helper for `serde` to provide a default for `chunk_len`.
fn default_chunk_len() -> usize {
    DEFAULT_CHUNK_LEN
}
