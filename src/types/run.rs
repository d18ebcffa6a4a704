//! This module defines the compressed side of the codec: a single `Run` and the
//! ordered `RunSequence` that encode produces and decode consumes.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::TambakError;
use crate::traits::Pixel;
use crate::utils;

//==================================================================================
// 1. Run
//==================================================================================

/// `length` consecutive copies of `value`.
///
/// Runs produced by the encoder always satisfy `1 <= length <= 2^bits - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run<T> {
    pub length: u32,
    pub value: T,
}

impl<T> Run<T> {
    pub fn new(length: u32, value: T) -> Self {
        Self { length, value }
    }
}

// On the wire a run is the pair `[length, value]`.
impl<T: Serialize> Serialize for Run<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.length, &self.value).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Run<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (length, value) = <(u32, T)>::deserialize(deserializer)?;
        Ok(Run { length, value })
    }
}

//==================================================================================
// 2. RunSequence
//==================================================================================

/// An ordered list of runs. Order is decode order.
///
/// Two neighbouring runs carry the same value only when the first one hit the
/// maximum run length; otherwise they would have been a single run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct RunSequence<T> {
    runs: Vec<Run<T>>,
}

impl<T: Pixel> RunSequence<T> {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Wraps runs without checking them. Use `validate` on sequences that come
    /// from outside the encoder.
    pub fn from_runs(runs: Vec<Run<T>>) -> Self {
        Self { runs }
    }

    /// Builds a sequence from `(length, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, T)>,
    {
        Self {
            runs: pairs
                .into_iter()
                .map(|(length, value)| Run::new(length, value))
                .collect(),
        }
    }

    /// The `(length, value)` pairs, in order.
    pub fn to_pairs(&self) -> Vec<(u32, T)> {
        self.runs.iter().map(|r| (r.length, r.value)).collect()
    }

    pub fn runs(&self) -> &[Run<T>] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<Run<T>> {
        self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Run<T>> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Sum of all run lengths, i.e. the length of the buffer this sequence decodes to.
    pub fn total_length(&self) -> u64 {
        self.runs.iter().map(|r| u64::from(r.length)).sum()
    }

    /// Checks that every run satisfies `1 <= length <= 2^bits - 1`.
    ///
    /// Maximality is not checked: a sequence that splits a run early still
    /// decodes to the right buffer.
    pub fn validate(&self, bits: u32) -> Result<(), TambakError> {
        let max_run = utils::max_run_for_bits(bits)?;
        for (idx, run) in self.runs.iter().enumerate() {
            if run.length == 0 {
                return Err(TambakError::InvalidInput(format!(
                    "run {} has zero length",
                    idx
                )));
            }
            if run.length > max_run {
                return Err(TambakError::RunLengthOverflow {
                    length: run.length,
                    max_run,
                });
            }
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a RunSequence<T> {
    type Item = &'a Run<T>;
    type IntoIter = std::slice::Iter<'a, Run<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl<T> IntoIterator for RunSequence<T> {
    type Item = Run<T>;
    type IntoIter = std::vec::IntoIter<Run<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}
