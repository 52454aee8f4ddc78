// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors and dimension utilities.

use std::fmt;

/// Describes the dimensionality of a declared tensor.
///
/// Shapes are immutable once created and provide the compatibility checks
/// graph validation needs: matmul inner-dimension agreement and right-aligned
/// broadcasting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use graph_ir::Shape;
    /// let s = Shape::new(vec![1, 4]);
    /// assert_eq!(s.rank(), 2);
    /// assert_eq!(s.num_elements(), 4);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Creates a scalar shape (rank 0).
    pub fn scalar() -> Self {
        Self { dims: vec![] }
    }

    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// Creates a 2-D shape (matrix).
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    ///
    /// For a scalar shape (rank 0), returns 1.
    pub fn num_elements(&self) -> usize {
        if self.dims.is_empty() {
            1
        } else {
            self.dims.iter().product()
        }
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the size of a specific dimension, or `None` if out of bounds.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.get(index).copied()
    }

    /// Computes the memory footprint in bytes for a given [`crate::ElementType`].
    pub fn size_bytes(&self, dtype: super::ElementType) -> usize {
        self.num_elements() * dtype.size_bytes()
    }

    /// Returns `true` if two shapes are broadcast-compatible.
    ///
    /// Shapes are compatible when, aligning dimensions from the right,
    /// each pair is either equal or one of them is 1.
    pub fn is_broadcast_compatible(&self, other: &Shape) -> bool {
        let a = &self.dims;
        let b = &other.dims;
        let mut ai = a.len();
        let mut bi = b.len();
        while ai > 0 && bi > 0 {
            ai -= 1;
            bi -= 1;
            if a[ai] != b[bi] && a[ai] != 1 && b[bi] != 1 {
                return false;
            }
        }
        true
    }

    /// Computes the broadcast result shape, or `None` if incompatible.
    ///
    /// The result has the rank of the longer operand; each dimension is the
    /// larger of the right-aligned pair.
    pub fn broadcast_with(&self, other: &Shape) -> Option<Shape> {
        if !self.is_broadcast_compatible(other) {
            return None;
        }
        let rank = self.dims.len().max(other.dims.len());
        let mut dims = vec![0usize; rank];
        for i in 0..rank {
            let a = (i < self.dims.len())
                .then(|| self.dims[self.dims.len() - 1 - i])
                .unwrap_or(1);
            let b = (i < other.dims.len())
                .then(|| other.dims[other.dims.len() - 1 - i])
                .unwrap_or(1);
            dims[rank - 1 - i] = a.max(b);
        }
        Some(Shape::new(dims))
    }

    /// Returns `true` if the shapes are compatible for a matrix multiply:
    /// `self` is `[M, K]` and `other` is `[K, N]`.
    pub fn is_matmul_compatible(&self, other: &Shape) -> bool {
        if self.rank() != 2 || other.rank() != 2 {
            return false;
        }
        self.dims[1] == other.dims[0]
    }

    /// Computes the matmul result shape `[M, N]`, or `None` if incompatible.
    pub fn matmul_with(&self, other: &Shape) -> Option<Shape> {
        if !self.is_matmul_compatible(other) {
            return None;
        }
        Some(Shape::matrix(self.dims[0], other.dims[1]))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

/// Convenience: `Shape::from(vec![1, 4])`.
impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

/// Convenience: `Shape::from(&[1, 4][..])`.
impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}
