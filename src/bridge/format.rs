// In: src/bridge/format.rs

//! Defines the self-describing container for an encoded pixel buffer.
//!
//! Decoding needs the bit width and the target shape in addition to the runs, so
//! the three travel together. Runs are written as plain `[length, value]` pairs;
//! there is no further packing or entropy coding.

use serde::{Deserialize, Serialize};

use crate::bridge::stateless_api;
use crate::error::TambakError;
use crate::traits::Pixel;
use crate::types::{PixelBuffer, RunSequence, Shape};

/// The current version of the container format.
pub const FORMAT_VERSION: u16 = 1;

/// Runs plus everything needed to decode them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(bound(deserialize = "T: Pixel"))]
pub struct EncodedImage<T> {
    pub version: u16,
    /// Bit width the runs were produced with.
    pub bits: u32,
    /// Shape of the buffer the runs decode to.
    pub shape: Shape,
    pub runs: RunSequence<T>,
}

impl<T: Pixel> EncodedImage<T> {
    pub fn new(bits: u32, shape: Shape, runs: RunSequence<T>) -> Self {
        Self {
            version: FORMAT_VERSION,
            bits,
            shape,
            runs,
        }
    }

    /// Checks the version, the bit width and every run length against `bits`.
    pub fn validate(&self) -> Result<(), TambakError> {
        if self.version != FORMAT_VERSION {
            return Err(TambakError::InvalidConfig(format!(
                "unsupported container version {} (expected {})",
                self.version, FORMAT_VERSION
            )));
        }
        self.runs.validate(self.bits)
    }

    /// Validates the container, then decodes it to a buffer of `self.shape`.
    pub fn decode(&self) -> Result<PixelBuffer<T>, TambakError> {
        self.validate()?;
        stateless_api::decode(&self.runs, &self.shape)
    }

    pub fn to_json(&self) -> Result<String, TambakError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, TambakError> {
        Ok(serde_json::from_str(json)?)
    }
}
