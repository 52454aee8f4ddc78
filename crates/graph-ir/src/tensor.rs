// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Named tensor slot declarations.

use crate::{ElementType, Shape};

/// Declares a named tensor slot in a graph: its element type and shape.
///
/// A `TensorDecl` carries no data — fixtures declare *slots* that the
/// downstream evaluation engine fills in at run time. Declarations are
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TensorDecl {
    /// Tensor name, unique within the graph (e.g., `"query_tensor"`).
    pub name: String,
    /// Element type of the tensor.
    pub dtype: ElementType,
    /// Shape of the tensor.
    pub shape: Shape,
}

impl TensorDecl {
    /// Creates a new tensor declaration.
    pub fn new(name: impl Into<String>, dtype: ElementType, shape: Shape) -> Self {
        Self {
            name: name.into(),
            dtype,
            shape,
        }
    }

    /// Returns the memory footprint of one instance of this tensor in bytes.
    pub fn size_bytes(&self) -> usize {
        self.shape.size_bytes(self.dtype)
    }
}

impl std::fmt::Display for TensorDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}{}", self.name, self.dtype, self.shape)
    }
}
