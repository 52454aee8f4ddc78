// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operation node definitions.
//!
//! Each [`NodeDef`] describes one computation step: its operator kind and
//! the tensor names it consumes and produces. Nodes hold no tensor data and
//! no explicit edges — topology is implied by shared names.

/// The kind of computation a node performs.
///
/// The vocabulary is intentionally small: these are the operators the
/// generated fixtures exercise in the downstream evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    /// Matrix multiplication: `[M, K] · [K, N] → [M, N]`.
    MatMul,
    /// Element-wise addition with right-aligned broadcasting.
    Add,
}

impl OpKind {
    /// Returns the ONNX `op_type` string for this operator.
    pub fn onnx_op_type(self) -> &'static str {
        match self {
            OpKind::MatMul => "MatMul",
            OpKind::Add => "Add",
        }
    }

    /// Parses an ONNX `op_type` string back into an `OpKind`.
    pub fn from_onnx_op_type(s: &str) -> Option<Self> {
        match s {
            "MatMul" => Some(OpKind::MatMul),
            "Add" => Some(OpKind::Add),
            _ => None,
        }
    }

    /// Number of input operands this operator expects.
    pub fn arity(self) -> usize {
        match self {
            OpKind::MatMul | OpKind::Add => 2,
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.onnx_op_type())
    }
}

/// Definition of a single operation node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeDef {
    /// Unique node name (e.g., `"matmul_node"`).
    pub name: String,
    /// The operator this node applies.
    pub op: OpKind,
    /// Ordered input tensor names, resolved by string matching against graph
    /// inputs and earlier nodes' outputs.
    pub inputs: Vec<String>,
    /// Ordered output tensor names this node produces.
    pub outputs: Vec<String>,
}

impl NodeDef {
    /// Creates a new node definition.
    pub fn new<I, O>(name: impl Into<String>, op: OpKind, inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            name: name.into(),
            op,
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a concise summary string for display.
    pub fn summary(&self) -> String {
        format!(
            "{} {}({}) -> {}",
            self.name,
            self.op,
            self.inputs.join(", "),
            self.outputs.join(", "),
        )
    }
}
