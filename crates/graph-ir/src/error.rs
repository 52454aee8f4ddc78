// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for graph construction and validation.

/// Errors that can occur when validating a graph declaration.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A tensor name is declared or produced more than once.
    #[error("duplicate tensor name: {name}")]
    DuplicateTensor { name: String },

    /// A node references an input name that no graph input or earlier node
    /// output provides.
    #[error("node '{node}' references undeclared input '{name}'")]
    UndeclaredInput { node: String, name: String },

    /// A node definition is invalid (e.g., wrong arity, incompatible shapes
    /// or element types).
    #[error("invalid node '{node}': {detail}")]
    InvalidNode { node: String, detail: String },

    /// The graph as a whole is malformed (empty, or a declared output is
    /// never produced or disagrees with what the nodes produce).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}
