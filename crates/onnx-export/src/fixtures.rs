// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Concrete fixture definitions.
//!
//! Each fixture module declares one model and offers two entry points:
//! `build()` returning the validated [`ModelDef`], and `build_and_write(path)`
//! performing the single file write. Names, shapes, and dtypes are part of
//! the contract with the downstream evaluation engine and must stay stable.

use graph_ir::ModelDef;

/// The integer-typed scoring fixture.
///
/// A two-node graph — `MatMul` followed by `Add` — over 32-bit signed
/// integer tensors:
///
/// ```text
/// query_tensor [1,4] ──┐
///                      ├─ MatMul ── matmul [1,1] ──┐
/// attribute_tensor [4,1]                           ├─ Add ── output [1,1]
/// bias_tensor [1,1] ───────────────────────────────┘
/// ```
///
/// The downstream engine resolves the three inputs by name, executes the two
/// nodes, and checks that `output` is a `[1,1]` INT32 tensor. With
/// `query = [[1,2,3,4]]`, `attribute = [[1],[1],[1],[1]]`, `bias = [[5]]`
/// it expects `matmul = [[10]]` and `output = [[15]]`.
pub mod int_types {
    use super::ModelDef;
    use crate::ExportError;
    use graph_ir::{ElementType, GraphDef, GraphError, NodeDef, OpKind, Shape, TensorDecl};
    use std::path::Path;

    /// Filename the downstream engine loads the fixture from.
    pub const FILE_NAME: &str = "int_types.onnx";

    /// Operator-set version the fixture's operators are pinned to.
    pub const OPSET_VERSION: i64 = 12;

    /// Producer identifier carried in the model header.
    pub const PRODUCER: &str = "int_types.py";

    /// Builds the validated model declaration.
    ///
    /// # Errors
    /// Returns [`GraphError`] if the declaration fails validation; with the
    /// fixed declarations below this can only happen if they are edited
    /// inconsistently.
    pub fn build() -> Result<ModelDef, GraphError> {
        let graph = GraphDef::new(
            "int_types_scoring",
            vec![
                TensorDecl::new("query_tensor", ElementType::I32, Shape::matrix(1, 4)),
                TensorDecl::new("attribute_tensor", ElementType::I32, Shape::matrix(4, 1)),
                TensorDecl::new("bias_tensor", ElementType::I32, Shape::matrix(1, 1)),
            ],
            vec![
                NodeDef::new(
                    "matmul_node",
                    OpKind::MatMul,
                    ["query_tensor", "attribute_tensor"],
                    ["matmul"],
                ),
                NodeDef::new("add_node", OpKind::Add, ["matmul", "bias_tensor"], ["output"]),
            ],
            vec![TensorDecl::new(
                "output",
                ElementType::I32,
                Shape::matrix(1, 1),
            )],
        )
        .validate()?;

        Ok(ModelDef::new(graph, OPSET_VERSION, PRODUCER))
    }

    /// Builds the fixture and writes it to `path`.
    ///
    /// # Errors
    /// Returns [`ExportError::Graph`] on a construction error and
    /// [`ExportError::Write`] if the destination is not writable.
    pub fn build_and_write(path: &Path) -> Result<(), ExportError> {
        let model = build()?;
        crate::write(&model, path)
    }
}
