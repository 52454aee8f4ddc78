// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Model container: a versioned wrapper around one validated graph.

use crate::graph::{GraphDef, Validated};

/// A versioned, named container wrapping exactly one graph for interchange.
///
/// The operator-set version pins which operator semantics apply when the
/// downstream engine evaluates the graph; the producer string identifies
/// which generator wrote the artifact.
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Operator-set version the graph's operators are pinned to.
    pub opset_version: i64,
    /// Free-text producer identifier (e.g., `"int_types.py"`).
    pub producer: String,
    /// The single computation graph.
    pub graph: GraphDef<Validated>,
}

impl ModelDef {
    /// Creates a model wrapping a validated graph.
    ///
    /// Only validated graphs can be wrapped, so a `ModelDef` is serializable
    /// by construction.
    pub fn new(graph: GraphDef<Validated>, opset_version: i64, producer: impl Into<String>) -> Self {
        Self {
            opset_version,
            producer: producer.into(),
            graph,
        }
    }

    /// Returns a summary string describing the model.
    pub fn summary(&self) -> String {
        format!(
            "Model (opset {}, producer '{}'): {}",
            self.opset_version,
            self.producer,
            self.graph.summary(),
        )
    }
}

impl std::fmt::Display for ModelDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ModelDef (opset {}, producer '{}')", self.opset_version, self.producer)?;
        write!(f, "{}", self.graph)
    }
}
