//! This module defines the uncompressed side of the codec: a flat buffer of
//! pixel values and the shape that tells the caller how to view it.

use ndarray::{Array, ArrayD, Dimension, IxDyn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TambakError;
use crate::traits::Pixel;
use crate::utils;

//==================================================================================
// 1. Shape
//==================================================================================

/// Ordered dimension sizes, outermost first (row-major).
///
/// Zero-sized dimensions are allowed and describe an empty buffer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Shape(dims.into())
    }

    /// A one-dimensional shape of `len` elements.
    pub fn flat(len: usize) -> Self {
        Shape(vec![len])
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// The product of all dimensions. Fails with `InvalidInput` on overflow.
    pub fn num_elements(&self) -> Result<usize, TambakError> {
        utils::checked_num_elements(&self.0)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape(dims.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

//==================================================================================
// 2. PixelBuffer
//==================================================================================

/// A flat, row-major sequence of pixel values together with its shape.
///
/// Multi-channel images are stored with their channels interleaved in the same
/// flat sequence, exactly as the caller flattened them. The constructor enforces
/// `product(shape) == values.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<T> {
    values: Vec<T>,
    shape: Shape,
}

impl<T: Pixel> PixelBuffer<T> {
    /// Pairs `values` with `shape`, failing with `ShapeMismatch` if the element
    /// counts disagree.
    pub fn new(values: Vec<T>, shape: impl Into<Shape>) -> Result<Self, TambakError> {
        let shape = shape.into();
        let expected = shape.num_elements()?;
        if expected != values.len() {
            return Err(TambakError::ShapeMismatch {
                expected: expected as u64,
                actual: values.len() as u64,
            });
        }
        Ok(Self { values, shape })
    }

    /// A one-dimensional buffer over `values`.
    pub fn from_flat(values: Vec<T>) -> Self {
        let shape = Shape::flat(values.len());
        Self { values, shape }
    }

    /// Flattens an `ndarray` array in logical (row-major) order, whatever its
    /// memory layout.
    pub fn from_array<D: Dimension>(array: Array<T, D>) -> Self {
        let shape = Shape::new(array.shape().to_vec());
        let values = array.iter().copied().collect();
        Self { values, shape }
    }

    /// Reshapes the buffer into an N-dimensional `ndarray` array.
    pub fn into_array(self) -> Result<ArrayD<T>, TambakError> {
        let array = ArrayD::from_shape_vec(IxDyn(self.shape.dims()), self.values)?;
        Ok(array)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Splits the buffer into its flat values and shape.
    pub fn into_parts(self) -> (Vec<T>, Shape) {
        (self.values, self.shape)
    }
}
