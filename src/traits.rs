//! This module defines shared traits used across different kernels.

use num_traits::PrimInt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A pixel value the codec can operate on: any primitive integer.
///
/// The serde bounds let runs of any pixel type travel inside an `EncodedImage`,
/// and `Send + Sync` lets the chunk pipeline hand slices to worker threads.
pub trait Pixel: PrimInt + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {}

// Implement the trait for all supported primitive integer types.
macro_rules! impl_pixel {
    ($($T:ty),+ $(,)?) => {
        $(impl Pixel for $T {})+
    };
}

impl_pixel!(u8, u16, u32, u64, i8, i16, i32, i64);
