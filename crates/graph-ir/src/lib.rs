// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # graph-ir
//!
//! A lightweight in-memory description of small numeric computation graphs,
//! built to be lowered into ONNX test fixtures.
//!
//! Rather than constructing protobuf messages by hand at every call site,
//! this crate defines a minimal declaration layer that captures what a
//! fixture needs:
//!
//! - [`ElementType`] — the element type of a tensor.
//! - [`Shape`] — ordered dimension sizes with matmul/broadcast checks.
//! - [`TensorDecl`] — a named, typed, shaped tensor slot.
//! - [`OpKind`] / [`NodeDef`] — a single operation consuming and producing
//!   tensors by name.
//! - [`GraphDef`] — the full computation as an ordered node list, with a
//!   **type-state pattern** (`Draft` → `Validated`).
//! - [`ModelDef`] — a versioned container wrapping exactly one validated
//!   graph.
//!
//! Graph topology is implied by shared tensor names; there are no explicit
//! edge objects. Execution order is declaration order, and [`GraphDef::validate`]
//! proves that order is single-pass resolvable before a graph can be
//! serialized.
//!
//! # Example
//! ```
//! use graph_ir::{ElementType, GraphDef, NodeDef, OpKind, Shape, TensorDecl};
//!
//! let graph = GraphDef::new(
//!     "doubler",
//!     vec![
//!         TensorDecl::new("x", ElementType::I32, Shape::matrix(1, 1)),
//!         TensorDecl::new("y", ElementType::I32, Shape::matrix(1, 1)),
//!     ],
//!     vec![NodeDef::new("add0", OpKind::Add, ["x", "y"], ["sum"])],
//!     vec![TensorDecl::new("sum", ElementType::I32, Shape::matrix(1, 1))],
//! );
//! let validated = graph.validate().unwrap();
//! assert_eq!(validated.num_nodes(), 1);
//! ```

mod dtype;
mod error;
pub mod graph;
mod model;
mod node;
mod shape;
mod tensor;

pub use dtype::ElementType;
pub use error::GraphError;
pub use graph::GraphDef;
pub use model::ModelDef;
pub use node::{NodeDef, OpKind};
pub use shape::Shape;
pub use tensor::TensorDecl;
